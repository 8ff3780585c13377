use thiserror::Error;

/// Errors that can abort a [`crate::verify`] call.
///
/// `Unsat`/`Sat`/`Unknown` are ordinary values (see [`crate::Outcome`]),
/// not errors — this type only covers the fatal cases from spec.md §7:
/// a predicate referencing something outside the trace, or the solver
/// claiming `Sat` without producing a model.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error(transparent)]
    Predicate(#[from] wmv_encode::PredicateError),

    #[error(transparent)]
    Trace(#[from] wmv_trace::TraceError),

    #[error("solver reported sat but produced no model")]
    NoModel,
}

pub type Result<T> = std::result::Result<T, SolveError>;
