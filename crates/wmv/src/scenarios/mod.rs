//! Built-in demo scenarios: the two-slot ring buffer producer/consumer
//! protocol and the sc round-trip deadlock pattern.

mod addresses;
mod deadlock;
mod ring_buffer;

use wmv_encode::Predicate;
use wmv_solve::{Mode, Outcome};
use wmv_trace::Trace;

/// What a scenario is expected to report, so `wmv verify` can flag a
/// regression instead of just printing whatever the solver returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Unsat,
    Sat,
}

impl Expectation {
    #[must_use]
    pub fn matches(self, outcome: &Outcome) -> bool {
        matches!((self, outcome), (Expectation::Unsat, Outcome::Unsat) | (Expectation::Sat, Outcome::Sat(_)))
    }
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expectation::Unsat => write!(f, "unsat"),
            Expectation::Sat => write!(f, "sat"),
        }
    }
}

/// A built trace plus the predicates and expectation to check it against.
pub struct ScenarioInputs {
    pub trace: Trace,
    pub mode: Mode,
    pub violation: Predicate,
    pub progress: Predicate,
    pub expectation: Expectation,
}

/// A named, repeatable scenario constructor.
pub struct ScenarioDef {
    pub name: &'static str,
    pub description: &'static str,
    pub build: fn() -> ScenarioInputs,
}

/// All built-in scenarios, in the order `wmv list` prints them.
#[must_use]
pub fn registry() -> Vec<ScenarioDef> {
    vec![
        ScenarioDef {
            name: "p1-sc",
            description: "two-slot ring buffer, every access sc",
            build: ring_buffer::p1_all_sc,
        },
        ScenarioDef {
            name: "p2-relaxed",
            description: "two-slot ring buffer, every access relaxed (buggy)",
            build: ring_buffer::p2_all_relaxed,
        },
        ScenarioDef {
            name: "p3-over-conservative-ra",
            description: "ring buffer, producer writes rel / consumer reads acq on every access",
            build: ring_buffer::p3_over_conservative_ra,
        },
        ScenarioDef {
            name: "p4-minimal-ra",
            description: "ring buffer, rel/acq only on the tail handshake (recommended)",
            build: ring_buffer::p4_minimal_ra,
        },
        ScenarioDef {
            name: "p5-misused-ra",
            description: "ring buffer, first tail write left relaxed (buggy)",
            build: ring_buffer::p5_misused_ra,
        },
        ScenarioDef {
            name: "deadlock-sc",
            description: "sc round-trip handshake, full sc",
            build: deadlock::sc,
        },
        ScenarioDef {
            name: "deadlock-relaxed",
            description: "sc round-trip handshake, every access relaxed (racy)",
            build: deadlock::relaxed,
        },
        ScenarioDef {
            name: "deadlock-misplaced-ra",
            description: "sc round-trip handshake, rel/acq on an unrelated address",
            build: deadlock::misplaced_ra,
        },
    ]
}

/// Looks up a built-in scenario by name.
#[must_use]
pub fn lookup(name: &str) -> Option<ScenarioDef> {
    registry().into_iter().find(|s| s.name == name)
}
