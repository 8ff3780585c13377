use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Result, TraceError};
use crate::event::{Event, Kind, Mode};

/// An ordered, validated sequence of events.
///
/// Construction (`build_trace`) is the only way to obtain a `Trace`; once
/// built, every invariant in spec.md §3 that depends solely on the trace
/// shape (unique ids, one initial write per address) is guaranteed to hold.
#[derive(Clone, Debug)]
pub struct Trace {
    events: Vec<Event>,
}

/// Validates `events` and builds a [`Trace`].
///
/// # Errors
///
/// Returns [`TraceError`] on a duplicate id, a missing or malformed initial
/// write, or a thread-id well-formedness violation.
pub fn build_trace(events: Vec<Event>) -> Result<Trace> {
    let mut seen_ids = FxHashSet::default();
    for e in &events {
        if !seen_ids.insert(e.id) {
            return Err(TraceError::DuplicateId(e.id));
        }
        if e.is_initial() {
            if e.thread != -1 || e.mode != Mode::Sc || e.val != 0 || e.kind != Kind::Write {
                return Err(TraceError::MalformedInitialWrite(e.id));
            }
        } else if e.thread < 0 {
            return Err(TraceError::NegativeThread(e.id));
        }
    }

    let mut referenced_addrs = FxHashSet::default();
    let mut initial_writes: FxHashMap<u64, i64> = FxHashMap::default();
    for e in &events {
        referenced_addrs.insert(e.addr);
        if e.is_initial() {
            if let Some(_prev) = initial_writes.insert(e.addr, e.id) {
                return Err(TraceError::DuplicateInitialWrite(e.addr));
            }
        }
    }
    for addr in referenced_addrs {
        if !initial_writes.contains_key(&addr) {
            return Err(TraceError::MissingInitialWrite(addr));
        }
    }

    Ok(Trace { events })
}

impl Trace {
    /// All events, in the order they were supplied to `build_trace`.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// All read events, in trace order.
    pub fn reads(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.kind == Kind::Read)
    }

    /// All write events (including initial writes), in trace order.
    pub fn writes(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.kind == Kind::Write)
    }

    /// Writes to a specific address, in trace order.
    pub fn writes_to(&self, addr: u64) -> impl Iterator<Item = &Event> {
        self.writes().filter(move |e| e.addr == addr)
    }

    /// The initial write for `addr`, if the address is present in the trace.
    #[must_use]
    pub fn initial_write(&self, addr: u64) -> Option<&Event> {
        self.writes_to(addr).find(|e| e.is_initial())
    }

    /// Event lookup by id.
    #[must_use]
    pub fn event(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}
