use phf::{Map, phf_map};

/// UN M.49 containment: region → the macro regions that directly contain it.
///
/// A region may have more than one parent (`013` Central America sits in both
/// `003` North America and `419` Latin America). `001` has no entry.
pub static REGION_PARENTS: Map<&'static str, &'static [&'static str]> = phf_map! {
    // continents
    "002" => &["001"], "009" => &["001"], "019" => &["001"], "142" => &["001"], "150" => &["001"],

    // Americas
    "003" => &["019"], "419" => &["019"],
    "005" => &["419"], "013" => &["003", "419"], "029" => &["003", "419"], "021" => &["003"],
    "US" => &["021"], "CA" => &["021"], "BM" => &["021"], "GL" => &["021"], "PM" => &["021"],
    "MX" => &["013"], "GT" => &["013"], "BZ" => &["013"], "HN" => &["013"], "SV" => &["013"],
    "NI" => &["013"], "CR" => &["013"], "PA" => &["013"],
    "PR" => &["029"], "CU" => &["029"], "DO" => &["029"], "HT" => &["029"], "JM" => &["029"],
    "TT" => &["029"], "BS" => &["029"], "BB" => &["029"], "VI" => &["029"], "AW" => &["029"],
    "CW" => &["029"],
    "AR" => &["005"], "BO" => &["005"], "BR" => &["005"], "CL" => &["005"], "CO" => &["005"],
    "EC" => &["005"], "PY" => &["005"], "PE" => &["005"], "UY" => &["005"], "VE" => &["005"],
    "GY" => &["005"], "SR" => &["005"],

    // Africa
    "015" => &["002"], "011" => &["002"], "014" => &["002"], "017" => &["002"], "018" => &["002"],
    "DZ" => &["015"], "EG" => &["015"], "LY" => &["015"], "MA" => &["015"], "SD" => &["015"],
    "TN" => &["015"], "EH" => &["015"],
    "NG" => &["011"], "GH" => &["011"], "SN" => &["011"], "CI" => &["011"], "ML" => &["011"],
    "MR" => &["011"],
    "KE" => &["014"], "TZ" => &["014"], "UG" => &["014"], "ET" => &["014"], "RW" => &["014"],
    "CD" => &["017"], "CM" => &["017"], "AO" => &["017"],
    "ZA" => &["018"], "NA" => &["018"], "BW" => &["018"],

    // Asia
    "030" => &["142"], "034" => &["142"], "035" => &["142"], "143" => &["142"], "145" => &["142"],
    "CN" => &["030"], "TW" => &["030"], "HK" => &["030"], "MO" => &["030"], "JP" => &["030"],
    "KR" => &["030"], "KP" => &["030"], "MN" => &["030"],
    "ID" => &["035"], "MY" => &["035"], "PH" => &["035"], "SG" => &["035"], "TH" => &["035"],
    "VN" => &["035"], "MM" => &["035"], "TL" => &["035"], "KH" => &["035"],
    "IN" => &["034"], "PK" => &["034"], "BD" => &["034"], "IR" => &["034"], "AF" => &["034"],
    "LK" => &["034"], "NP" => &["034"],
    "IL" => &["145"], "SA" => &["145"], "TR" => &["145"], "AE" => &["145"], "IQ" => &["145"],
    "JO" => &["145"], "LB" => &["145"], "SY" => &["145"], "YE" => &["145"], "AZ" => &["145"],
    "GE" => &["145"], "AM" => &["145"],
    "UZ" => &["143"], "KZ" => &["143"],

    // Europe
    "039" => &["150"], "151" => &["150"], "154" => &["150"], "155" => &["150"],
    "GB" => &["154"], "IE" => &["154"], "NO" => &["154"], "SE" => &["154"], "DK" => &["154"],
    "FI" => &["154"], "IS" => &["154"], "EE" => &["154"], "LV" => &["154"], "LT" => &["154"],
    "DE" => &["155"], "FR" => &["155"], "NL" => &["155"], "BE" => &["155"], "AT" => &["155"],
    "CH" => &["155"], "LU" => &["155"],
    "ES" => &["039"], "PT" => &["039"], "IT" => &["039"], "GR" => &["039"], "HR" => &["039"],
    "BA" => &["039"], "RS" => &["039"], "ME" => &["039"], "SI" => &["039"], "MT" => &["039"],
    "VA" => &["039"], "AD" => &["039"],
    "RU" => &["151"], "UA" => &["151"], "PL" => &["151"], "CZ" => &["151"], "SK" => &["151"],
    "HU" => &["151"], "RO" => &["151"], "BG" => &["151"], "BY" => &["151"],

    // Oceania
    "053" => &["009"], "057" => &["009"], "061" => &["009"],
    "AU" => &["053"], "NZ" => &["053"],
    "GU" => &["057"], "MH" => &["057"], "MP" => &["057"], "UM" => &["057"],
    "AS" => &["061"],
};
