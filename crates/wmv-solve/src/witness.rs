use z3::Model;

use wmv_encode::Ctx;
use wmv_trace::{Kind, Mode, Trace};

use crate::error::{Result, SolveError};

/// One event in a materialized witness: the concrete rank, resolved
/// value, and (for reads) rf source that a `Sat` model assigned it.
#[derive(Clone, Debug)]
pub struct WitnessEvent {
    pub id: i64,
    pub thread: i64,
    pub kind: Kind,
    pub addr: u64,
    pub val: i64,
    pub mode: Mode,
    pub rank: i64,
    pub rf_source: Option<i64>,
}

/// A concrete execution extracted from a satisfying model, events ordered
/// by `(rank, id)` ascending per spec.md §4.6.
#[derive(Clone, Debug)]
pub struct Witness {
    pub events: Vec<WitnessEvent>,
}

/// Evaluates every event's rank, resolved value, and rf choice in `model`
/// and returns them sorted by `(rank, id)`.
pub(crate) fn materialize(trace: &Trace, ctx: &Ctx<'_>, model: &Model<'_>) -> Result<Witness> {
    let eval_int = |e: &wmv_trace::Event| -> Result<i64> {
        let rank = ctx.rank(e)?;
        model
            .eval(&rank, true)
            .and_then(|v| v.as_i64())
            .ok_or(SolveError::NoModel)
    };

    let mut events = Vec::with_capacity(trace.events().len());
    for e in trace.events() {
        let rank = eval_int(e)?;
        let val = if e.kind == Kind::Write {
            e.val
        } else {
            let index = ctx
                .reads()
                .iter()
                .position(|r| r.id == e.id)
                .expect("every read in the trace has a ctx read_value slot");
            let read_value = ctx.read_value(index)?;
            model
                .eval(&read_value, true)
                .and_then(|v| v.as_i64())
                .ok_or(SolveError::NoModel)?
        };
        let rf_source = if e.kind == Kind::Read {
            let mut source = None;
            for w in ctx.writes().iter().filter(|w| w.addr == e.addr) {
                let rf = ctx.rf(w, e)?;
                if model.eval(&rf, true).and_then(|v| v.as_bool()) == Some(true) {
                    source = Some(w.id);
                    break;
                }
            }
            source
        } else {
            None
        };

        events.push(WitnessEvent {
            id: e.id,
            thread: e.thread,
            kind: e.kind,
            addr: e.addr,
            val,
            mode: e.mode,
            rank,
            rf_source,
        });
    }

    events.sort_by_key(|e| (e.rank, e.id));
    Ok(Witness { events })
}
