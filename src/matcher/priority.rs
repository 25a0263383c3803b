use crate::locale::{LocaleId, ParseError};
use std::{ops::Index, str::FromStr};

/// An ordered list of locales; earlier entries are preferred.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriorityList {
    locales: Vec<LocaleId>,
}

impl PriorityList {
    pub fn new(locales: Vec<LocaleId>) -> Self {
        Self { locales }
    }

    /// Parse every tag; the first malformed tag fails the whole list.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Result<Self, ParseError> {
        tags.iter()
            .map(|t| t.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Parse an Accept-Language style list, e.g. `de-AT;q=0.9, de, en;q=0.5`.
    ///
    /// Entry order is kept and weights are only checked for well-formedness;
    /// `q=0` entries and the `*` wildcard are dropped. The weight name is
    /// case-insensitive, a bare weight (`de-AT;0.9`) is accepted, and other
    /// parameters are ignored.
    pub fn parse_accept_language(header: &str) -> Result<Self, ParseError> {
        let mut locales = Vec::new();
        for entry in header.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let mut parts = entry.split(';').map(str::trim);
            let tag = parts.next().unwrap_or_default();
            let mut weight = 1.0f32;
            for param in parts.filter(|p| !p.is_empty()) {
                let raw = match param.split_once('=') {
                    Some((name, value)) if name.trim().eq_ignore_ascii_case("q") => value.trim(),
                    Some(_) => continue,
                    None => param,
                };
                weight = raw
                    .parse::<f32>()
                    .ok()
                    .filter(|w| (0.0..=1.0).contains(w))
                    .ok_or_else(|| ParseError::InvalidSubtag {
                        tag: entry.to_owned(),
                        subtag: param.to_owned(),
                    })?;
            }
            if tag == "*" || weight == 0.0 {
                continue;
            }
            locales.push(tag.parse()?);
        }
        Ok(Self { locales })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocaleId> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.locales.contains(locale)
    }
}

impl FromStr for PriorityList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_accept_language(s)
    }
}

impl From<Vec<LocaleId>> for PriorityList {
    fn from(locales: Vec<LocaleId>) -> Self {
        Self::new(locales)
    }
}

impl FromIterator<LocaleId> for PriorityList {
    fn from_iter<T: IntoIterator<Item = LocaleId>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for PriorityList {
    type Output = LocaleId;

    fn index(&self, index: usize) -> &LocaleId {
        &self.locales[index]
    }
}

impl<'a> IntoIterator for &'a PriorityList {
    type Item = &'a LocaleId;
    type IntoIter = std::slice::Iter<'a, LocaleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.locales.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_language_keeps_order_and_drops_zero_weights() {
        let list: PriorityList = "de-AT;q=0.9, de_DE;q=0.8 ,fr;q=0, *;q=0.1, en".parse().unwrap();
        let tags: Vec<String> = list.iter().map(ToString::to_string).collect();
        assert_eq!(tags, ["de-AT", "de-DE", "en"]);
    }

    #[test]
    fn weight_parameters() {
        let list: PriorityList = "en;Q=0.5, fr ; q = 0.3, de;level=1;q=0.2, it;q=0;level=2, pt;0.9"
            .parse()
            .unwrap();
        let tags: Vec<String> = list.iter().map(ToString::to_string).collect();
        assert_eq!(tags, ["en", "fr", "de", "pt"]);
    }

    #[test]
    fn malformed_entries_fail() {
        assert!(PriorityList::parse_accept_language("en;q=abc").is_err());
        assert!(PriorityList::parse_accept_language("en;q=1.5").is_err());
        assert!(PriorityList::parse_accept_language("en, e1").is_err());
        assert!(PriorityList::parse_accept_language("").unwrap().is_empty());
    }

    #[test]
    fn from_tags_is_strict() {
        let list = PriorityList::from_tags(&["fr", "en-GB", "en"]).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].to_string(), "en-GB");
        assert!(PriorityList::from_tags(&["fr", "en--GB"]).is_err());
    }
}
