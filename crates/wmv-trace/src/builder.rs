use crate::error::Result;
use crate::event::{Event, Kind, Mode};
use crate::trace::{build_trace, Trace};

/// Fluent constructor for small hand-written traces.
///
/// Ids are assigned automatically: initial writes get successive negative
/// ids starting at `-1`, program events get successive positive ids
/// starting at `1`, in call order. This mirrors how `rvr-ir`'s `IRBuilder`
/// assigns temps and block ids as statements are appended.
pub struct TraceBuilder {
    events: Vec<Event>,
    next_id: i64,
    next_init_id: i64,
}

impl TraceBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
            next_init_id: -1,
        }
    }

    /// Appends the initial write (value 0, thread -1, mode sc) for `addr`.
    pub fn init(&mut self, addr: u64) -> &mut Self {
        let id = self.next_init_id;
        self.next_init_id -= 1;
        self.events.push(Event {
            id,
            thread: -1,
            kind: Kind::Write,
            addr,
            val: 0,
            mode: Mode::Sc,
        });
        self
    }

    /// Appends a write by `thread` to `addr` with value `val` under `mode`.
    pub fn write(&mut self, thread: i64, addr: u64, val: i64, mode: Mode) -> &mut Self {
        let id = self.next_id;
        self.next_id += 1;
        self.events.push(Event {
            id,
            thread,
            kind: Kind::Write,
            addr,
            val,
            mode,
        });
        self
    }

    /// Appends a read by `thread` from `addr` under `mode`. The resolved
    /// value is symbolic and is assigned by the encoder, not here.
    pub fn read(&mut self, thread: i64, addr: u64, mode: Mode) -> &mut Self {
        let id = self.next_id;
        self.next_id += 1;
        self.events.push(Event {
            id,
            thread,
            kind: Kind::Read,
            addr,
            val: 0,
            mode,
        });
        self
    }

    /// Validates the accumulated events and builds a [`Trace`].
    ///
    /// # Errors
    ///
    /// See [`build_trace`].
    pub fn build(&self) -> Result<Trace> {
        build_trace(self.events.clone())
    }
}
