use thiserror::Error;

use crate::{distance::TableError, locale::ParseError, matcher::MatchError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("distance table error: {0}")]
    Table(#[from] TableError),
    #[error("match error: {0}")]
    Match(#[from] MatchError),
}
