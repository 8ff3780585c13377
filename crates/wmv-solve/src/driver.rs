use z3::{Config, Context, SatResult, Solver};

use wmv_encode::{encode, Predicate};
use wmv_trace::Trace;

use crate::error::{Result, SolveError};
use crate::mode::Mode;
use crate::witness::{materialize, Witness};

/// Result of one `verify` call (spec.md §4.5, §7).
///
/// `Unsat` and `Sat` are both ordinary returns; `Unknown` surfaces a
/// solver timeout, resource limit, or cancellation and is never collapsed
/// into `Unsat`.
#[derive(Debug)]
pub enum Outcome {
    Unsat,
    Sat(Witness),
    Unknown(String),
}

/// Encodes `trace` under `mode`, asserts `violation ∧ progress ∧ extra`,
/// and asks the solver whether an admissible execution exists.
///
/// Pure and idempotent with respect to `trace`: each call owns its own
/// `z3::Context` and releases it on return, including on the error path
/// (spec.md §5) — no state survives between calls.
///
/// # Errors
///
/// Returns [`SolveError`] if a predicate references an event id, read
/// index, or address outside the trace, or if the solver reports `Sat`
/// without producing a model.
#[tracing::instrument(skip_all)]
pub fn verify(trace: &Trace, mode: Mode, violation: &Predicate, progress: &Predicate, extra: Option<&Predicate>) -> Result<Outcome> {
    let cfg = Config::new();
    let z3ctx = Context::new(&cfg);

    let enc = encode(&z3ctx, trace, mode.ppo_variant(), mode.ra_enabled());

    let solver = Solver::new(&z3ctx);
    for c in &enc.constraints {
        solver.assert(c);
    }
    solver.assert(&violation(&enc.ctx)?);
    solver.assert(&progress(&enc.ctx)?);
    if let Some(extra) = extra {
        solver.assert(&extra(&enc.ctx)?);
    }

    tracing::debug!("invoking solver");
    match solver.check() {
        SatResult::Unsat => Ok(Outcome::Unsat),
        SatResult::Unknown => {
            let reason = solver.get_reason_unknown().unwrap_or_else(|| "no reason given".to_string());
            Ok(Outcome::Unknown(reason))
        }
        SatResult::Sat => {
            let model = solver.get_model().ok_or(SolveError::NoModel)?;
            let witness = materialize(trace, &enc.ctx, &model)?;
            Ok(Outcome::Sat(witness))
        }
    }
}
