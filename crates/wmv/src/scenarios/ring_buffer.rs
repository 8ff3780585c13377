//! The two-slot ring buffer producer/consumer protocol.
//!
//! Producer: `W DATA0=1, W TAIL=1, W DATA1=2, W TAIL=2`.
//! Consumer: `R TAIL, R DATA0, W HEAD=1, R TAIL, R DATA1, W HEAD=0`.
//!
//! The violation predicate is the same across all five scenarios: the
//! consumer observed a TAIL update but read a stale value out of the slot
//! that update was supposed to unblock. Only the per-event memory-order
//! tags differ between scenarios.

use wmv_encode::{Ctx, Predicate};
use wmv_solve::Mode;
use wmv_trace::{Mode as EventMode, TraceBuilder};
use z3::ast::{Ast, Bool, Int};

use super::addresses::{CONSUMER, DATA0, DATA1, HEAD, PRODUCER, TAIL};
use super::{Expectation, ScenarioInputs};

struct Tags {
    data_write: EventMode,
    data_read: EventMode,
    tail_write1: EventMode,
    tail_write2: EventMode,
    tail_read1: EventMode,
    tail_read2: EventMode,
    head: EventMode,
}

fn build(tags: Tags) -> TraceBuilder {
    let mut b = TraceBuilder::new();
    b.init(DATA0);
    b.init(DATA1);
    b.init(TAIL);
    b.init(HEAD);
    b.write(PRODUCER, DATA0, 1, tags.data_write);
    b.write(PRODUCER, TAIL, 1, tags.tail_write1);
    b.write(PRODUCER, DATA1, 2, tags.data_write);
    b.write(PRODUCER, TAIL, 2, tags.tail_write2);
    b.read(CONSUMER, TAIL, tags.tail_read1);
    b.read(CONSUMER, DATA0, tags.data_read);
    b.write(CONSUMER, HEAD, 1, tags.head);
    b.read(CONSUMER, TAIL, tags.tail_read2);
    b.read(CONSUMER, DATA1, tags.data_read);
    b.write(CONSUMER, HEAD, 0, tags.head);
    b
}

/// `reads()` order: `tail_read1`(0), `data0_read`(1), `tail_read2`(2), `data1_read`(3).
fn violation() -> Predicate {
    Box::new(|ctx: &Ctx<'_>| {
        let z = ctx.z3();
        let tail1 = ctx.read_value(0)?;
        let data0 = ctx.read_value(1)?;
        let tail2 = ctx.read_value(2)?;
        let data1 = ctx.read_value(3)?;
        let slot0_stale = Bool::and(z, &[&tail1.ge(&Int::from_i64(z, 1)), &data0._eq(&Int::from_i64(z, 1)).not()]);
        let slot1_stale = Bool::and(z, &[&tail2.ge(&Int::from_i64(z, 2)), &data1._eq(&Int::from_i64(z, 2)).not()]);
        Ok(Bool::or(z, &[&slot0_stale, &slot1_stale]))
    })
}

fn progress() -> Predicate {
    Box::new(|ctx: &Ctx<'_>| {
        let z = ctx.z3();
        let tail1 = ctx.read_value(0)?;
        let tail2 = ctx.read_value(2)?;
        Ok(Bool::and(z, &[&tail1._eq(&Int::from_i64(z, 1)), &tail2._eq(&Int::from_i64(z, 2))]))
    })
}

fn inputs(tags: Tags, mode: Mode, expectation: Expectation) -> ScenarioInputs {
    ScenarioInputs {
        trace: build(tags).build().expect("ring buffer scenario trace is well-formed"),
        mode,
        violation: violation(),
        progress: progress(),
        expectation,
    }
}

/// P1: every access is sc. No weak-memory reordering is possible; the
/// ring buffer is correct by construction.
pub fn p1_all_sc() -> ScenarioInputs {
    inputs(
        Tags {
            data_write: EventMode::Sc,
            data_read: EventMode::Sc,
            tail_write1: EventMode::Sc,
            tail_write2: EventMode::Sc,
            tail_read1: EventMode::Sc,
            tail_read2: EventMode::Sc,
            head: EventMode::Sc,
        },
        Mode::Sc,
        Expectation::Unsat,
    )
}

/// P2: every access is relaxed. Nothing orders a data write before the
/// tail write that announces it, so the consumer can see the tail update
/// without the data.
pub fn p2_all_relaxed() -> ScenarioInputs {
    inputs(
        Tags {
            data_write: EventMode::Rlx,
            data_read: EventMode::Rlx,
            tail_write1: EventMode::Rlx,
            tail_write2: EventMode::Rlx,
            tail_read1: EventMode::Rlx,
            tail_read2: EventMode::Rlx,
            head: EventMode::Rlx,
        },
        Mode::Relaxed,
        Expectation::Sat,
    )
}

/// P3: producer writes are all release, consumer reads are all acquire.
/// Strictly stronger than necessary; correct but offers no more insight
/// than P1 does.
pub fn p3_over_conservative_ra() -> ScenarioInputs {
    inputs(
        Tags {
            data_write: EventMode::Rel,
            data_read: EventMode::Acq,
            tail_write1: EventMode::Rel,
            tail_write2: EventMode::Rel,
            tail_read1: EventMode::Acq,
            tail_read2: EventMode::Acq,
            head: EventMode::Rlx,
        },
        Mode::Ra,
        Expectation::Unsat,
    )
}

/// P4: the recommended minimal annotation. Data accesses stay relaxed;
/// only the tail handshake is release/acquire, which is exactly enough to
/// order each data write before the read it unblocks.
pub fn p4_minimal_ra() -> ScenarioInputs {
    inputs(
        Tags {
            data_write: EventMode::Rlx,
            data_read: EventMode::Rlx,
            tail_write1: EventMode::Rel,
            tail_write2: EventMode::Rel,
            tail_read1: EventMode::Acq,
            tail_read2: EventMode::Acq,
            head: EventMode::Rlx,
        },
        Mode::Ra,
        Expectation::Unsat,
    )
}

/// P5: same as P4, except the first tail write was left relaxed. The
/// matching acquire read no longer synchronizes with it, so the first
/// handshake can still observe a stale data slot.
pub fn p5_misused_ra() -> ScenarioInputs {
    inputs(
        Tags {
            data_write: EventMode::Rlx,
            data_read: EventMode::Rlx,
            tail_write1: EventMode::Rlx,
            tail_write2: EventMode::Rel,
            tail_read1: EventMode::Acq,
            tail_read2: EventMode::Acq,
            head: EventMode::Rlx,
        },
        Mode::Ra,
        Expectation::Sat,
    )
}
