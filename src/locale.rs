//! `LocaleId` and the tag parser.
//!
//! Accepts BCP-47 (`zh-Hant-TW`) and CLDR (`zh_Hant_TW`) forms; both parse to
//! the same canonical identifier. Extensions and private-use sequences are
//! rejected.

use crate::subtags::{Language, Region, Script, Variant};
use memchr::memchr2_iter;
use smallvec::SmallVec;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty locale tag")]
    Empty,
    #[error("invalid subtag `{subtag}` in locale tag `{tag}`")]
    InvalidSubtag { tag: String, subtag: String },
    #[error("unexpected subtag `{subtag}` in locale tag `{tag}`")]
    Unexpected { tag: String, subtag: String },
}

impl ParseError {
    fn invalid(tag: &str, subtag: &str) -> Self {
        Self::InvalidSubtag {
            tag: tag.to_owned(),
            subtag: subtag.to_owned(),
        }
    }

    fn unexpected(tag: &str, subtag: &str) -> Self {
        Self::Unexpected {
            tag: tag.to_owned(),
            subtag: subtag.to_owned(),
        }
    }
}

pub type Variants = SmallVec<[Variant; 2]>;

/// A parsed language identifier: language, optional script and region, and a
/// sorted, deduplicated set of variants.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LocaleId {
    pub language: Language,
    pub script: Option<Script>,
    pub region: Option<Region>,
    variants: Variants,
}

impl LocaleId {
    /// `und`.
    pub fn und() -> Self {
        Self::new(Language::UNKNOWN, None, None)
    }

    pub fn new(language: Language, script: Option<Script>, region: Option<Region>) -> Self {
        Self {
            language,
            script,
            region,
            variants: Variants::new(),
        }
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn with_variants(mut self, variants: impl IntoIterator<Item = Variant>) -> Self {
        self.variants.extend(variants);
        self.variants.sort_unstable();
        self.variants.dedup();
        self
    }

    /// Underscore-delimited CLDR form, e.g. `zh_Hant_TW`.
    pub fn to_cldr_string(&self) -> String {
        self.joined('_')
    }

    fn joined(&self, sep: char) -> String {
        let mut out = String::with_capacity(16);
        out.push_str(self.language.as_str());
        for part in self
            .script
            .iter()
            .map(Script::as_str)
            .chain(self.region.iter().map(Region::as_str))
            .chain(self.variants.iter().map(Variant::as_str))
        {
            out.push(sep);
            out.push_str(part);
        }
        out
    }
}

/// Splits on both `-` and `_`, yielding empty pieces for doubled separators.
fn split_subtags(tag: &str) -> impl Iterator<Item = &str> {
    let bytes = tag.as_bytes();
    let mut start = 0;
    memchr2_iter(b'-', b'_', bytes)
        .chain(std::iter::once(bytes.len()))
        .map(move |end| {
            let piece = &tag[start..end];
            start = end + 1;
            piece
        })
}

impl FromStr for LocaleId {
    type Err = ParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }
        let mut parts = split_subtags(trimmed);

        let first = parts.next().unwrap_or_default();
        let language = if first.eq_ignore_ascii_case("root") {
            Language::UNKNOWN
        } else {
            Language::parse(first).ok_or_else(|| ParseError::invalid(tag, first))?
        };

        let mut id = Self::new(language, None, None);
        // 1 = after language, 2 = after script, 3 = after region / in variants
        let mut position = 1;
        for part in parts {
            if part.is_empty() {
                return Err(ParseError::invalid(tag, part));
            }
            if position == 1
                && let Some(script) = Script::parse(part)
            {
                id.script = Some(script);
                position = 2;
                continue;
            }
            if position <= 2
                && let Some(region) = Region::parse(part)
            {
                id.region = Some(region);
                position = 3;
                continue;
            }
            match Variant::parse(part) {
                Some(variant) => {
                    id.variants.push(variant);
                    position = 3;
                }
                None if part.len() == 1 => return Err(ParseError::unexpected(tag, part)),
                None => return Err(ParseError::invalid(tag, part)),
            }
        }
        id.variants.sort_unstable();
        id.variants.dedup();
        Ok(id)
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.joined('-'))
    }
}

impl fmt::Debug for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocaleId({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(tag: &str) -> LocaleId {
        tag.parse().unwrap()
    }

    #[test]
    fn separators_are_equivalent() {
        assert_eq!(id("zh_TW"), id("zh-TW"));
        assert_eq!(id("zh_Hant-TW"), id("ZH-hant_tw"));
        assert_eq!(id("zh_TW").to_string(), "zh-TW");
        assert_eq!(id("zh-Hant-TW").to_cldr_string(), "zh_Hant_TW");
    }

    #[test]
    fn full_tag() {
        let l = id("sl-Latn-IT-rozaj-1994-rozaj");
        assert_eq!(l.language.as_str(), "sl");
        assert_eq!(l.script.unwrap().as_str(), "Latn");
        assert_eq!(l.region.unwrap().as_str(), "IT");
        assert_eq!(l.variants().len(), 2);
        assert_eq!(l.to_string(), "sl-Latn-IT-1994-rozaj");
    }

    #[test]
    fn macro_region_and_root() {
        assert_eq!(id("es-419").region.unwrap().as_str(), "419");
        assert_eq!(id("root"), LocaleId::und());
        assert_eq!(id(" en ").to_string(), "en");
    }

    #[test]
    fn errors_name_the_tag() {
        assert_eq!("".parse::<LocaleId>(), Err(ParseError::Empty));
        assert_eq!(
            "en--US".parse::<LocaleId>(),
            Err(ParseError::invalid("en--US", ""))
        );
        let err = "e1-US".parse::<LocaleId>().unwrap_err();
        assert_eq!(err.to_string(), "invalid subtag `e1` in locale tag `e1-US`");
        assert!(matches!(
            "en-u-nu-latn".parse::<LocaleId>(),
            Err(ParseError::Unexpected { .. })
        ));
        assert!(matches!(
            "en-US-Latn".parse::<LocaleId>(),
            Err(ParseError::InvalidSubtag { .. })
        ));
    }
}
