use thiserror::Error;

/// Errors raised while constructing a [`crate::Trace`].
///
/// All variants are fatal: a malformed trace is rejected at construction
/// time and never reaches the encoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    #[error("duplicate event id {0}")]
    DuplicateId(i64),

    #[error("address {0} is referenced but has no initial write")]
    MissingInitialWrite(u64),

    #[error("address {0} has more than one initial write")]
    DuplicateInitialWrite(u64),

    #[error("initial write {0} must have thread -1, mode sc, and value 0")]
    MalformedInitialWrite(i64),

    #[error("non-initial event {0} must have a non-negative thread id")]
    NegativeThread(i64),
}

pub type Result<T> = std::result::Result<T, TraceError>;
