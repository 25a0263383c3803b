//! Locale distance and best-match negotiation.
//!
//! ```
//! use localematch::{LocaleMatcher, LocaleId, PriorityList};
//!
//! let matcher = LocaleMatcher::new();
//! let desired: LocaleId = "und-UK".parse().unwrap();
//! let supported = PriorityList::from_tags(&["fr", "en-GB", "en"]).unwrap();
//! assert_eq!(matcher.best_match(&desired, &supported).unwrap().to_string(), "en-GB");
//! ```

pub mod data;
pub mod distance;
pub mod error;
pub mod likely;
pub mod locale;
pub mod lsr;
pub mod matcher;
pub mod region;
pub mod subtags;

#[cfg(test)]
pub(crate) mod testing;

pub use distance::{DistanceTable, DistanceTableBuilder, LocaleDistance, NO_MATCH, TableError};
pub use error::Error;
pub use likely::{LikelySubtags, LikelySubtagsBuilder};
pub use locale::{LocaleId, ParseError};
pub use lsr::Lsr;
pub use matcher::{LocaleMatcher, MatchError, MatchResult, MatcherBuilder, PriorityList};
pub use subtags::{Language, Region, Script, Variant};

/// Distance between two tags using the built-in data.
pub fn distance(desired: &str, supported: &str) -> Result<u16, Error> {
    let desired: LocaleId = desired.parse()?;
    let supported: LocaleId = supported.parse()?;
    Ok(LocaleMatcher::new().distance(&desired, &supported))
}

/// Best supported tag for `desired` using the built-in data.
pub fn best_match(desired: &str, supported: &[&str]) -> Result<LocaleId, Error> {
    Ok(LocaleMatcher::new().best_match_str(desired, supported)?)
}
