//! Solver driver and witness renderer: assembles the final formula,
//! invokes the SMT solver, and materializes a witness.

mod driver;
mod error;
mod mode;
mod render;
mod scenario;
mod witness;

pub use driver::{verify, Outcome};
pub use error::{Result, SolveError};
pub use mode::Mode;
pub use render::render;
pub use scenario::{analyze, Scenario};
pub use witness::{Witness, WitnessEvent};

#[cfg(test)]
mod tests {
    use super::*;
    use wmv_encode::Ctx;
    use wmv_trace::{Mode as EventMode, TraceBuilder};
    use z3::ast::{Ast, Bool, Int};

    fn always_true() -> wmv_encode::Predicate {
        Box::new(|ctx: &Ctx<'_>| Ok(Bool::from_bool(ctx.z3(), true)))
    }

    #[test]
    fn lone_initial_read_is_sat_and_renders_one_line() {
        let trace = TraceBuilder::new()
            .init(0)
            .read(1, 0, EventMode::Sc)
            .build()
            .unwrap();

        let violation: wmv_encode::Predicate = Box::new(|ctx: &Ctx<'_>| {
            let rv = ctx.read_value(0)?;
            Ok(rv._eq(&Int::from_i64(ctx.z3(), 0)))
        });
        let progress = always_true();

        let outcome = verify(&trace, Mode::Sc, &violation, &progress, None).unwrap();
        match outcome {
            Outcome::Sat(witness) => {
                let rendered = render(&witness);
                assert_eq!(rendered.lines().count(), 2);
            }
            other => panic!("expected Sat, got {other:?}"),
        }
    }
}
