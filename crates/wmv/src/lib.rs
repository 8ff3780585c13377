//! wmv - bounded, SMT-backed verifier for weak-memory event traces.
//!
//! Re-exports the sub-crate APIs the binary drives, plus the built-in
//! demo scenarios shared with the root integration tests.

pub use wmv_encode::{encode, Ctx, Encoding, Predicate};
pub use wmv_relations::{fr, po, ppo, ppo_relaxed, ppo_sc, PpoVariant};
pub use wmv_solve::{analyze, render, verify, Mode, Outcome, Scenario, Witness, WitnessEvent};
pub use wmv_trace::{build_trace, Event, Kind, Mode as EventMode, Trace, TraceBuilder};

pub mod scenarios;
