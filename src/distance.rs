//! Directional locale distance.
//!
//! A distance is the sum of three per-level scores (language, script,
//! region), each taken from the most specific applicable rule of a frozen
//! [`DistanceTable`]. Equal subtags score 0 without a lookup. Distances are
//! not symmetric: `zh-Hant` → `zh-Hans` costs more than the reverse.

pub mod rule;
pub mod table;

pub use rule::{DistanceRule, Field, Level, Pattern, RegionField};
pub use table::{DistanceTable, DistanceTableBuilder};

use crate::lsr::Lsr;
use std::sync::Arc;
use thiserror::Error;

/// The "do not match" sentinel.
pub const NO_MATCH: u16 = 666;

/// Sums at or above this are reported as [`NO_MATCH`].
pub const DEFAULT_THRESHOLD: u16 = 40;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("distance table has no rules")]
    Empty,
    #[error("line {line}: {reason}")]
    Row { line: usize, reason: String },
    #[error("malformed rule pattern `{pattern}`")]
    Pattern { pattern: String },
    #[error("unknown region group `${name}`")]
    UnknownGroup { name: String },
    #[error("patterns `{desired}` and `{supported}` have different levels")]
    LevelMismatch { desired: String, supported: String },
    #[error("distance {value} is outside 0-100 and is not the no-match sentinel")]
    Distance { value: u16 },
}

/// The distance calculator: a table plus the no-match threshold.
#[derive(Debug, Clone)]
pub struct LocaleDistance {
    table: Arc<DistanceTable>,
    threshold: u16,
}

impl Default for LocaleDistance {
    fn default() -> Self {
        Self::new(DistanceTable::global())
    }
}

impl LocaleDistance {
    pub fn new(table: Arc<DistanceTable>) -> Self {
        Self {
            table,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn table(&self) -> &DistanceTable {
        &self.table
    }

    /// Uncapped sum of the three levels; `None` if some level that differs
    /// has no applicable rule.
    pub fn raw_distance(&self, desired: &Lsr, supported: &Lsr) -> Option<u16> {
        Level::ALL
            .into_iter()
            .try_fold(0u16, |sum, level| Some(sum + self.level_distance(level, desired, supported)?))
    }

    /// Distance from `desired` to `supported`, in `0..threshold` or
    /// [`NO_MATCH`]. Identical locales are always 0, whatever the threshold.
    pub fn distance(&self, desired: &Lsr, supported: &Lsr) -> u16 {
        let mut sum = 0u16;
        for level in Level::ALL {
            match self.level_distance(level, desired, supported) {
                Some(d) => sum = sum.saturating_add(d),
                None => return NO_MATCH,
            }
            if sum > 0 && sum >= self.threshold {
                return NO_MATCH;
            }
        }
        sum
    }

    #[inline]
    fn level_distance(&self, level: Level, desired: &Lsr, supported: &Lsr) -> Option<u16> {
        let same = match level {
            Level::Language => desired.language == supported.language,
            Level::Script => desired.script == supported.script,
            Level::Region => desired.region == supported.region,
        };
        if same {
            Some(0)
        } else {
            self.table.lookup(level, desired, supported)
        }
    }
}
