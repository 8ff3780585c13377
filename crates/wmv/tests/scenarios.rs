//! End-to-end coverage of the built-in scenarios: each one is built,
//! solved, and checked against the outcome it documents.

use wmv::scenarios::registry;
use wmv::{verify, Outcome};

#[test]
fn every_built_in_scenario_matches_its_expectation() {
    for def in registry() {
        let inputs = (def.build)();
        let outcome = verify(&inputs.trace, inputs.mode, &inputs.violation, &inputs.progress, None)
            .unwrap_or_else(|err| panic!("{}: solver invocation failed: {err}", def.name));

        assert!(
            inputs.expectation.matches(&outcome),
            "{}: expected {}, got {outcome:?}",
            def.name,
            inputs.expectation
        );
    }
}

#[test]
fn p2_witness_shows_the_stale_read() {
    let inputs = (wmv::scenarios::lookup("p2-relaxed").unwrap().build)();
    let outcome = verify(&inputs.trace, inputs.mode, &inputs.violation, &inputs.progress, None).unwrap();
    match outcome {
        Outcome::Sat(witness) => {
            let rendered = wmv::render(&witness);
            assert_eq!(rendered.lines().count(), witness.events.len());
        }
        other => panic!("expected sat, got {other:?}"),
    }
}

#[test]
fn p5_reproduces_the_bug_p4_fixes() {
    let p4 = (wmv::scenarios::lookup("p4-minimal-ra").unwrap().build)();
    let p4_outcome = verify(&p4.trace, p4.mode, &p4.violation, &p4.progress, None).unwrap();
    assert!(matches!(p4_outcome, Outcome::Unsat));

    let p5 = (wmv::scenarios::lookup("p5-misused-ra").unwrap().build)();
    let p5_outcome = verify(&p5.trace, p5.mode, &p5.violation, &p5.progress, None).unwrap();
    assert!(matches!(p5_outcome, Outcome::Sat(_)));
}
