use thiserror::Error;

/// Errors reported by ranker construction and the invariant sweep.
///
/// `observe` itself is total: once a ranker is built, streaming never fails.
/// An `InvariantViolation` signals internal state corruption and is fatal
/// for the instance - callers must not retry on it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
