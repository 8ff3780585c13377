//! A single sc round-trip handshake used to demonstrate that full sc
//! rules out a mutual-staleness "deadlock" pattern that weaker orders
//! allow.
//!
//! Producer: `W DATA0=1, W TAIL=1, R HEAD`.
//! Consumer: `R TAIL, R DATA0, W HEAD=1, R TAIL`.
//!
//! Program order already chains `W TAIL` before the producer's `R HEAD`,
//! and `W HEAD` before the consumer's final `R TAIL`. Under full sc that
//! chain closes into a rank cycle if both final reads are also required to
//! precede the other thread's write, so both reads observing the initial
//! value 0 at once is unsatisfiable. Drop sc (or synchronize an address
//! this handshake doesn't depend on) and the cycle stops being forced.

use wmv_encode::{Ctx, Predicate};
use wmv_solve::Mode;
use wmv_trace::{Mode as EventMode, TraceBuilder};
use z3::ast::{Ast, Bool, Int};

use super::addresses::{CONSUMER, DATA0, HEAD, PRODUCER, TAIL};
use super::{Expectation, ScenarioInputs};

struct Tags {
    data_write: EventMode,
    data_read: EventMode,
    signal_write: EventMode,
    signal_read1: EventMode,
    signal_read2: EventMode,
    ack_write: EventMode,
    ack_read: EventMode,
}

fn build(tags: Tags) -> TraceBuilder {
    let mut b = TraceBuilder::new();
    b.init(DATA0);
    b.init(TAIL);
    b.init(HEAD);
    b.write(PRODUCER, DATA0, 1, tags.data_write);
    b.write(PRODUCER, TAIL, 1, tags.signal_write);
    b.read(PRODUCER, HEAD, tags.ack_read);
    b.read(CONSUMER, TAIL, tags.signal_read1);
    b.read(CONSUMER, DATA0, tags.data_read);
    b.write(CONSUMER, HEAD, 1, tags.ack_write);
    b.read(CONSUMER, TAIL, tags.signal_read2);
    b
}

/// `reads()` order: `read_head`(0), `signal_read1`(1), `data_read`(2), `read_tail`(3).
fn violation() -> Predicate {
    Box::new(|ctx: &Ctx<'_>| {
        let z = ctx.z3();
        let read_head = ctx.read_value(0)?;
        let read_tail = ctx.read_value(3)?;
        Ok(Bool::and(z, &[&read_head._eq(&Int::from_i64(z, 0)), &read_tail._eq(&Int::from_i64(z, 0))]))
    })
}

/// Requires the handshake to have actually started: the consumer's first
/// tail read must have observed the producer's signal.
fn progress() -> Predicate {
    Box::new(|ctx: &Ctx<'_>| {
        let z = ctx.z3();
        let signal_read1 = ctx.read_value(1)?;
        Ok(signal_read1._eq(&Int::from_i64(z, 1)))
    })
}

fn inputs(tags: Tags, mode: Mode, expectation: Expectation) -> ScenarioInputs {
    ScenarioInputs {
        trace: build(tags).build().expect("deadlock scenario trace is well-formed"),
        mode,
        violation: violation(),
        progress: progress(),
        expectation,
    }
}

/// Full sc: the mutual-staleness pattern is unsatisfiable.
pub fn sc() -> ScenarioInputs {
    inputs(
        Tags {
            data_write: EventMode::Sc,
            data_read: EventMode::Sc,
            signal_write: EventMode::Sc,
            signal_read1: EventMode::Sc,
            signal_read2: EventMode::Sc,
            ack_write: EventMode::Sc,
            ack_read: EventMode::Sc,
        },
        Mode::Sc,
        Expectation::Unsat,
    )
}

/// Every access relaxed: nothing orders either thread's final read
/// against the other thread's write, so the pattern becomes satisfiable.
pub fn relaxed() -> ScenarioInputs {
    inputs(
        Tags {
            data_write: EventMode::Rlx,
            data_read: EventMode::Rlx,
            signal_write: EventMode::Rlx,
            signal_read1: EventMode::Rlx,
            signal_read2: EventMode::Rlx,
            ack_write: EventMode::Rlx,
            ack_read: EventMode::Rlx,
        },
        Mode::Relaxed,
        Expectation::Sat,
    )
}

/// Release/acquire tags on the DATA0 access only: that pair synchronizes
/// with itself but contributes nothing to the TAIL/HEAD chain the
/// deadlock pattern depends on, so it remains satisfiable.
pub fn misplaced_ra() -> ScenarioInputs {
    inputs(
        Tags {
            data_write: EventMode::Rel,
            data_read: EventMode::Acq,
            signal_write: EventMode::Rlx,
            signal_read1: EventMode::Rlx,
            signal_read2: EventMode::Rlx,
            ack_write: EventMode::Rlx,
            ack_read: EventMode::Rlx,
        },
        Mode::Ra,
        Expectation::Sat,
    )
}
