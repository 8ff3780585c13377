use z3::ast::Ast;
use z3::{Config, Context, SatResult, Solver};

use wmv_relations::PpoVariant;
use wmv_trace::{Mode, TraceBuilder};

use super::encode;

#[test]
fn a_lone_read_of_the_initial_write_is_satisfiable() {
    let trace = TraceBuilder::new()
        .init(0)
        .read(1, 0, Mode::Sc)
        .build()
        .unwrap();

    let cfg = Config::new();
    let z3ctx = Context::new(&cfg);
    let enc = encode(&z3ctx, &trace, PpoVariant::Sc, true);

    let solver = Solver::new(&z3ctx);
    for c in &enc.constraints {
        solver.assert(c);
    }
    assert_eq!(solver.check(), SatResult::Sat);

    let model = solver.get_model().unwrap();
    let read_value = enc.ctx.read_value(0).unwrap();
    let resolved = model.eval(&read_value, true).unwrap().as_i64().unwrap();
    assert_eq!(resolved, 0);
}

#[test]
fn a_read_demanding_a_nonexistent_value_is_unsatisfiable() {
    let trace = TraceBuilder::new()
        .init(0)
        .read(1, 0, Mode::Sc)
        .build()
        .unwrap();

    let cfg = Config::new();
    let z3ctx = Context::new(&cfg);
    let enc = encode(&z3ctx, &trace, PpoVariant::Sc, true);

    let solver = Solver::new(&z3ctx);
    for c in &enc.constraints {
        solver.assert(c);
    }
    let read_value = enc.ctx.read_value(0).unwrap();
    solver.assert(&read_value._eq(&z3::ast::Int::from_i64(&z3ctx, 42)));
    assert_eq!(solver.check(), SatResult::Unsat);
}
