use crate::{
    locale::LocaleId,
    subtags::{Language, Region, Script},
};
use std::fmt;

/// A fully expanded Language-Script-Region triple.
///
/// Script and region are always present; `Zzzz` / `ZZ` stand in when no
/// likely-subtag data was available.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lsr {
    pub language: Language,
    pub script: Script,
    pub region: Region,
}

impl Lsr {
    pub const fn new(language: Language, script: Script, region: Region) -> Self {
        Self {
            language,
            script,
            region,
        }
    }

    /// True when some field had to fall back to a sentinel.
    pub fn is_partial(&self) -> bool {
        self.language.is_unknown() || self.script.is_unknown() || self.region.is_unknown()
    }
}

impl From<Lsr> for LocaleId {
    fn from(lsr: Lsr) -> Self {
        LocaleId::new(lsr.language, Some(lsr.script), Some(lsr.region))
    }
}

impl fmt::Display for Lsr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.language, self.script, self.region)
    }
}

impl fmt::Debug for Lsr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lsr({self})")
    }
}
