use thiserror::Error;

/// Input validation failure. Raised before any phrase is produced; a
/// call either fails validation up front or returns a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid units {0:?}: expected \"s\" or \"ms\"")]
    InvalidUnits(String),

    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),
}
