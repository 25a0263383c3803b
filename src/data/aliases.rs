use phf::{Map, phf_map};

/// Deprecated language codes and their replacements.
pub static LANGUAGE_ALIASES: Map<&'static str, &'static str> = phf_map! {
    "iw" => "he",
    "in" => "id",
    "ji" => "yi",
    "jw" => "jv",
    "mo" => "ro",
    "tl" => "fil",
    "aju" => "jrb",
};

/// Deprecated or reserved region codes and their replacements.
pub static REGION_ALIASES: Map<&'static str, &'static str> = phf_map! {
    "UK" => "GB",
    "DD" => "DE",
    "FX" => "FR",
    "BU" => "MM",
    "TP" => "TL",
    "YD" => "YE",
    "ZR" => "CD",
    "YU" => "RS",
    "CS" => "RS",
};
