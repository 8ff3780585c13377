use wmv_encode::Predicate;
use wmv_trace::{Trace, TraceBuilder};

use crate::driver::{verify, Outcome};
use crate::error::Result;
use crate::mode::Mode;

/// A built trace together with the admissible-execution search outcome
/// against a specific violation/progress pair — the `scenario` spec.md §6
/// says `analyze` returns.
#[derive(Debug)]
pub struct Scenario {
    pub trace: Trace,
    pub mode: Mode,
    pub outcome: Outcome,
}

/// Builds a trace from `builder`, then runs [`verify`] under `mode`
/// against `violation`/`progress`/`extra`.
///
/// This is sugar over `builder.build()` + `verify`: spec.md §6 names
/// `analyze(trace_builder, mode) → scenario` without listing predicate
/// arguments, but a search needs a violation and a progress predicate to
/// mean anything, so this signature folds them in rather than guessing a
/// default (see DESIGN.md).
///
/// # Errors
///
/// Returns [`crate::SolveError`] if `builder` produces a malformed trace
/// or the subsequent `verify` call fails.
pub fn analyze(builder: &TraceBuilder, mode: Mode, violation: &Predicate, progress: &Predicate, extra: Option<&Predicate>) -> Result<Scenario> {
    let trace = builder.build()?;
    let outcome = verify(&trace, mode, violation, progress, extra)?;
    Ok(Scenario {
        trace,
        mode,
        outcome,
    })
}
