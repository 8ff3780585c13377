use thiserror::Error;

/// Errors raised while a caller-supplied predicate is evaluated against a
/// [`crate::Ctx`].
///
/// Unlike the solver outcomes (`Unsat`/`Sat`/`Unknown`), these are fatal:
/// they indicate the predicate referenced something the trace does not
/// contain and abort the call, per spec.md §7.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredicateError {
    #[error("read index {0} is out of bounds")]
    ReadIndexOutOfBounds(usize),

    #[error("event id {0} does not appear in the trace")]
    UnknownEventId(i64),

    #[error("address {0} is not referenced by the trace")]
    UnknownAddr(u64),
}

pub type Result<T> = std::result::Result<T, PredicateError>;
