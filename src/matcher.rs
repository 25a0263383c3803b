//! Best-match selection over a supported-locale list.

pub mod priority;

pub use priority::PriorityList;

use crate::{
    distance::{DistanceTable, LocaleDistance, NO_MATCH},
    likely::LikelySubtags,
    locale::{LocaleId, ParseError},
    lsr::Lsr,
};
use smallvec::SmallVec;
use std::sync::Arc;
use thiserror::Error;

/// Added to a candidate's distance for each desired locale ahead of the one
/// that matched it.
pub const DEFAULT_DEMOTION: u16 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("no supported locales to match against")]
    NoSupported,
    #[error("no desired locales")]
    NoDesired,
}

/// Outcome of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The chosen locale, exactly as it appears in the supported list (or
    /// the configured default).
    pub supported: LocaleId,
    /// Position in the supported list; `None` when a default outside the
    /// list was returned.
    pub supported_index: Option<usize>,
    /// Position in the desired list of the locale that produced the match.
    pub desired_index: usize,
    /// Distance of the match, [`NO_MATCH`] when the default was used.
    pub distance: u16,
}

impl MatchResult {
    pub fn is_default(&self) -> bool {
        self.distance == NO_MATCH
    }
}

pub struct LocaleMatcher {
    likely: Arc<LikelySubtags>,
    distance: LocaleDistance,
    default: Option<LocaleId>,
    demotion: u16,
    supported: Option<Candidates>,
}

/// A supported list together with its expanded forms.
struct Candidates {
    locales: PriorityList,
    expanded: SmallVec<[Lsr; 8]>,
}

impl Default for LocaleMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleMatcher {
    /// A matcher over the built-in likely-subtag and distance data.
    pub fn new() -> Self {
        MatcherBuilder::default().build()
    }

    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::default()
    }

    pub fn expand(&self, locale: &LocaleId) -> Lsr {
        self.likely.expand_locale(locale)
    }

    pub fn likely_subtags(&self) -> &LikelySubtags {
        &self.likely
    }

    pub fn locale_distance(&self) -> &LocaleDistance {
        &self.distance
    }

    /// Distance from `desired` to `supported` after expanding both.
    pub fn distance(&self, desired: &LocaleId, supported: &LocaleId) -> u16 {
        self.distance
            .distance(&self.expand(desired), &self.expand(supported))
    }

    pub fn best_match(
        &self,
        desired: &LocaleId,
        supported: &PriorityList,
    ) -> Result<LocaleId, MatchError> {
        self.best_match_result(desired, supported)
            .map(|r| r.supported)
    }

    pub fn best_match_result(
        &self,
        desired: &LocaleId,
        supported: &PriorityList,
    ) -> Result<MatchResult, MatchError> {
        let expanded = self.expand_all(supported)?;
        Ok(self.match_one(desired, supported, &expanded))
    }

    /// Match a list of desired locales. Each desired locale after the first
    /// adds the demotion to its distances; the lowest total wins, ties going
    /// to the earlier desired and then the earlier supported locale.
    pub fn best_match_list(
        &self,
        desired: &PriorityList,
        supported: &PriorityList,
    ) -> Result<MatchResult, MatchError> {
        let expanded = self.expand_all(supported)?;
        self.match_list(desired, supported, &expanded)
    }

    /// Parse `desired` and `supported` and match them.
    pub fn best_match_str(&self, desired: &str, supported: &[&str]) -> Result<LocaleId, MatchError> {
        let desired: LocaleId = desired.parse()?;
        let supported = PriorityList::from_tags(supported)?;
        self.best_match(&desired, &supported)
    }

    /// The supported list given to [`MatcherBuilder::supported_locales`].
    pub fn supported(&self) -> Option<&PriorityList> {
        self.supported.as_ref().map(|c| &c.locales)
    }

    /// Match against the supported list expanded at build time.
    pub fn select(&self, desired: &LocaleId) -> Result<MatchResult, MatchError> {
        let c = self.supported.as_ref().ok_or(MatchError::NoSupported)?;
        Ok(self.match_one(desired, &c.locales, &c.expanded))
    }

    pub fn select_list(&self, desired: &PriorityList) -> Result<MatchResult, MatchError> {
        let c = self.supported.as_ref().ok_or(MatchError::NoSupported)?;
        self.match_list(desired, &c.locales, &c.expanded)
    }

    fn demotion_at(&self, desired_index: usize) -> u16 {
        self.demotion
            .saturating_mul(u16::try_from(desired_index).unwrap_or(u16::MAX))
    }

    fn expand_all(&self, supported: &PriorityList) -> Result<SmallVec<[Lsr; 8]>, MatchError> {
        if supported.is_empty() {
            return Err(MatchError::NoSupported);
        }
        Ok(supported.iter().map(|s| self.expand(s)).collect())
    }

    fn match_one(&self, desired: &LocaleId, supported: &PriorityList, expanded: &[Lsr]) -> MatchResult {
        match self.scan(&self.expand(desired), expanded, 0, None) {
            Some(best) => self.result(supported, best),
            None => self.fallback(supported),
        }
    }

    fn match_list(
        &self,
        desired: &PriorityList,
        supported: &PriorityList,
        expanded: &[Lsr],
    ) -> Result<MatchResult, MatchError> {
        if desired.is_empty() {
            return Err(MatchError::NoDesired);
        }
        let mut best: Option<Best> = None;
        for (desired_index, locale) in desired.iter().enumerate() {
            let demotion = self.demotion_at(desired_index);
            if best.is_some_and(|b| demotion >= b.score) {
                break;
            }
            best = self.scan(&self.expand(locale), expanded, desired_index, best);
            if best.is_some_and(|b| b.desired_index == desired_index && b.distance == 0) {
                break;
            }
        }
        Ok(match best {
            Some(best) => self.result(supported, best),
            None => self.fallback(supported),
        })
    }

    fn scan(
        &self,
        desired: &Lsr,
        candidates: &[Lsr],
        desired_index: usize,
        mut best: Option<Best>,
    ) -> Option<Best> {
        let demotion = self.demotion_at(desired_index);
        for (supported_index, candidate) in candidates.iter().enumerate() {
            let distance = self.distance.distance(desired, candidate);
            tracing::trace!(%desired, %candidate, distance, "scored candidate");
            if distance == NO_MATCH {
                continue;
            }
            let score = distance.saturating_add(demotion);
            if best.is_none_or(|b| score < b.score) {
                best = Some(Best {
                    score,
                    distance,
                    desired_index,
                    supported_index,
                });
                if distance == 0 {
                    break;
                }
            }
        }
        best
    }

    fn result(&self, supported: &PriorityList, best: Best) -> MatchResult {
        let chosen = &supported[best.supported_index];
        tracing::debug!(%chosen, distance = best.distance, "selected best match");
        MatchResult {
            supported: chosen.clone(),
            supported_index: Some(best.supported_index),
            desired_index: best.desired_index,
            distance: best.distance,
        }
    }

    fn fallback(&self, supported: &PriorityList) -> MatchResult {
        let (locale, index) = match &self.default {
            Some(default) => (
                default.clone(),
                supported.iter().position(|s| s == default),
            ),
            None => (supported[0].clone(), Some(0)),
        };
        tracing::debug!(%locale, "no candidate within threshold, using default");
        MatchResult {
            supported: locale,
            supported_index: index,
            desired_index: 0,
            distance: NO_MATCH,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Best {
    score: u16,
    distance: u16,
    desired_index: usize,
    supported_index: usize,
}

/// Configuration for [`LocaleMatcher`].
pub struct MatcherBuilder {
    likely: Option<Arc<LikelySubtags>>,
    table: Option<Arc<DistanceTable>>,
    threshold: Option<u16>,
    default: Option<LocaleId>,
    demotion: u16,
    supported: Option<PriorityList>,
}

impl Default for MatcherBuilder {
    fn default() -> Self {
        Self {
            likely: None,
            table: None,
            threshold: None,
            default: None,
            demotion: DEFAULT_DEMOTION,
            supported: None,
        }
    }
}

impl MatcherBuilder {
    pub fn likely_subtags(mut self, likely: Arc<LikelySubtags>) -> Self {
        self.likely = Some(likely);
        self
    }

    pub fn distance_table(mut self, table: Arc<DistanceTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Distances at or above `threshold` never match.
    pub fn threshold(mut self, threshold: u16) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Returned when no supported locale is within the threshold. Without
    /// one, the first supported locale is returned.
    pub fn default_locale(mut self, locale: LocaleId) -> Self {
        self.default = Some(locale);
        self
    }

    pub fn demotion(mut self, demotion: u16) -> Self {
        self.demotion = demotion;
        self
    }

    /// Fix the supported list; its locales are expanded once in
    /// [`build`](Self::build). An empty list is ignored.
    pub fn supported_locales(mut self, supported: PriorityList) -> Self {
        self.supported = (!supported.is_empty()).then_some(supported);
        self
    }

    pub fn build(self) -> LocaleMatcher {
        let mut distance = LocaleDistance::new(self.table.unwrap_or_else(DistanceTable::global));
        if let Some(threshold) = self.threshold {
            distance = distance.with_threshold(threshold);
        }
        let likely = self.likely.unwrap_or_else(LikelySubtags::global);
        let supported = self.supported.map(|locales| Candidates {
            expanded: locales.iter().map(|l| likely.expand_locale(l)).collect(),
            locales,
        });
        LocaleMatcher {
            likely,
            distance,
            default: self.default,
            demotion: self.demotion,
            supported,
        }
    }
}
