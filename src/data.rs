//! Built-in locale data.
//!
//! Everything here is `'static` and compiled in. The runtime structures in
//! [`crate::likely`], [`crate::region`] and [`crate::distance`] are built from
//! these tables exactly once.

pub mod aliases;
pub mod containment;
pub mod population;

/// Default distance table in the tabular rule format read by
/// [`crate::distance::DistanceTableBuilder::load_str`].
pub static DEFAULT_DISTANCES: &str = include_str!("data/distances.txt");
