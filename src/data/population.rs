/// One row of language usage statistics: the literate population (in
/// thousands) writing `language` in `script` within `region`.
#[derive(Clone, Copy, Debug)]
pub struct Population {
    pub language: &'static str,
    pub script: &'static str,
    pub region: &'static str,
    pub literate: u32,
}

/// Explicit likely-subtag result for a partial tag, applied on top of the
/// population aggregate.
#[derive(Clone, Copy, Debug)]
pub struct LikelyOverride {
    pub from: &'static str,
    pub to: &'static str,
}

/// ---------------------------------------------------------------------------
///    Macro – one row per (language, script, region) triple
/// ---------------------------------------------------------------------------
macro_rules! define_population {
    ($( $lang:literal $script:literal $region:literal => $literate:literal ),* $(,)?) => {
        pub static POPULATION: &[Population] = &[
            $( Population { language: $lang, script: $script, region: $region, literate: $literate } ),*
        ];
    };
}

macro_rules! define_overrides {
    ($( $from:literal => $to:literal ),* $(,)?) => {
        pub static OVERRIDES: &[LikelyOverride] = &[
            $( LikelyOverride { from: $from, to: $to } ),*
        ];
    };
}

// ---------------------------------------------------------------------------
//    Usage statistics, thousands of literate speakers
//    Rows are grouped by language; order inside a group only matters for ties.
// ---------------------------------------------------------------------------
define_population! {
    "en" "Latn" "US" => 295_000,
    "en" "Latn" "IN" => 125_000,
    "en" "Latn" "GB" => 63_000,
    "en" "Latn" "CA" => 28_000,
    "en" "Latn" "AU" => 20_000,
    "en" "Latn" "IE" => 4_500,
    "en" "Latn" "NZ" => 4_000,
    "en" "Latn" "PR" => 1_200,
    "en" "Latn" "GU" => 150,
    "en" "Latn" "VI" => 100,
    "en" "Latn" "AS" => 50,
    "en" "Latn" "001" => 1,

    "es" "Latn" "MX" => 120_000,
    "es" "Latn" "CO" => 48_000,
    "es" "Latn" "ES" => 46_000,
    "es" "Latn" "AR" => 42_000,
    "es" "Latn" "US" => 40_000,
    "es" "Latn" "PE" => 30_000,
    "es" "Latn" "VE" => 28_000,
    "es" "Latn" "CL" => 18_000,
    "es" "Latn" "CU" => 11_000,
    "es" "Latn" "PR" => 3_000,

    "pt" "Latn" "BR" => 180_000,
    "pt" "Latn" "PT" => 10_000,
    "pt" "Latn" "AO" => 8_000,

    "fr" "Latn" "FR" => 62_000,
    "fr" "Latn" "CA" => 7_000,
    "fr" "Latn" "BE" => 4_500,
    "fr" "Latn" "CH" => 1_800,
    "fr" "Latn" "CD" => 1_500,

    "de" "Latn" "DE" => 80_000,
    "de" "Latn" "AT" => 8_500,
    "de" "Latn" "CH" => 5_000,
    "gsw" "Latn" "CH" => 4_500,
    "lb" "Latn" "LU" => 400,

    "it" "Latn" "IT" => 58_000,
    "it" "Latn" "CH" => 600,
    "nl" "Latn" "NL" => 17_000,
    "nl" "Latn" "BE" => 6_500,
    "ca" "Latn" "ES" => 8_000,
    "ca" "Latn" "AD" => 70,
    "ast" "Latn" "ES" => 100,
    "gl" "Latn" "ES" => 2_500,
    "cy" "Latn" "GB" => 600,
    "ga" "Latn" "IE" => 1_800,

    "nb" "Latn" "NO" => 4_500,
    "no" "Latn" "NO" => 4_000,
    "nn" "Latn" "NO" => 600,
    "da" "Latn" "DK" => 5_500,
    "sv" "Latn" "SE" => 10_000,
    "sv" "Latn" "FI" => 300,
    "fi" "Latn" "FI" => 5_500,
    "is" "Latn" "IS" => 350,
    "et" "Latn" "EE" => 1_100,
    "lv" "Latn" "LV" => 1_800,
    "lt" "Latn" "LT" => 2_800,

    "pl" "Latn" "PL" => 38_000,
    "cs" "Latn" "CZ" => 10_500,
    "sk" "Latn" "SK" => 5_400,
    "hu" "Latn" "HU" => 9_700,
    "ro" "Latn" "RO" => 19_000,
    "bg" "Cyrl" "BG" => 6_900,
    "ru" "Cyrl" "RU" => 140_000,
    "ru" "Cyrl" "BY" => 6_000,
    "ru" "Cyrl" "KZ" => 9_000,
    "uk" "Cyrl" "UA" => 30_000,
    "be" "Cyrl" "BY" => 2_500,
    "kk" "Cyrl" "KZ" => 11_000,

    "sr" "Cyrl" "RS" => 5_000,
    "sr" "Latn" "RS" => 3_000,
    "sr" "Latn" "ME" => 400,
    "hr" "Latn" "HR" => 4_000,
    "bs" "Latn" "BA" => 2_000,
    "sl" "Latn" "SI" => 2_000,
    "el" "Grek" "GR" => 10_500,
    "tr" "Latn" "TR" => 75_000,
    "az" "Arab" "IR" => 15_000,
    "az" "Latn" "AZ" => 9_000,
    "ka" "Geor" "GE" => 3_700,
    "hy" "Armn" "AM" => 2_900,

    "he" "Hebr" "IL" => 6_000,
    "yi" "Hebr" "US" => 200,
    "ar" "Arab" "EG" => 70_000,
    "ar" "Arab" "SA" => 25_000,
    "ar" "Arab" "DZ" => 20_000,
    "ar" "Arab" "MA" => 18_000,
    "ar" "Arab" "IQ" => 17_000,
    "ar" "Arab" "TN" => 8_000,
    "ar" "Arab" "LY" => 4_500,
    "fa" "Arab" "IR" => 60_000,
    "ur" "Arab" "PK" => 100_000,
    "pa" "Arab" "PK" => 80_000,
    "pa" "Guru" "IN" => 30_000,
    "uz" "Latn" "UZ" => 25_000,
    "uz" "Arab" "AF" => 2_000,

    "hi" "Deva" "IN" => 400_000,
    "bn" "Beng" "BD" => 120_000,
    "bn" "Beng" "IN" => 80_000,
    "ta" "Taml" "IN" => 60_000,
    "ta" "Taml" "LK" => 3_000,

    "zh" "Hans" "CN" => 1_100_000,
    "zh" "Hant" "TW" => 22_000,
    "zh" "Hant" "HK" => 6_000,
    "zh" "Hans" "SG" => 1_500,
    "zh" "Hant" "MO" => 500,
    "ja" "Jpan" "JP" => 125_000,
    "ko" "Kore" "KR" => 50_000,
    "ko" "Kore" "KP" => 24_000,
    "mn" "Cyrl" "MN" => 2_800,
    "vi" "Latn" "VN" => 90_000,
    "th" "Thai" "TH" => 60_000,
    "km" "Khmr" "KH" => 12_000,
    "my" "Mymr" "MM" => 40_000,
    "id" "Latn" "ID" => 230_000,
    "ms" "Latn" "MY" => 25_000,
    "ms" "Latn" "SG" => 500,
    "fil" "Latn" "PH" => 70_000,

    "sw" "Latn" "TZ" => 40_000,
    "sw" "Latn" "KE" => 30_000,
    "am" "Ethi" "ET" => 30_000,
    "ha" "Latn" "NG" => 40_000,
    "yo" "Latn" "NG" => 30_000,
    "af" "Latn" "ZA" => 6_500,
    "zu" "Latn" "ZA" => 11_000,
}

// ---------------------------------------------------------------------------
//    Overrides – results that usage statistics alone do not produce
//    (a language's reference region is not always its most populous one)
// ---------------------------------------------------------------------------
define_overrides! {
    "und" => "en_Latn_US",
    "und_Arab" => "ar_Arab_EG",
    "und_419" => "es_Latn_419",
    "und_001" => "en_Latn_001",
    "es" => "es_Latn_ES",
    "es_Latn" => "es_Latn_ES",
    "az" => "az_Latn_AZ",
    "pa" => "pa_Guru_IN",
    "ta" => "ta_Taml_IN",
}
