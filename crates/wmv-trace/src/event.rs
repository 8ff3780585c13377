/// Kind of atomic memory operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Kind {
    Read,
    Write,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Read => write!(f, "read"),
            Kind::Write => write!(f, "write"),
        }
    }
}

/// Memory order tag carried by every event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Mode {
    Sc,
    Rel,
    Acq,
    Rlx,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Sc => write!(f, "sc"),
            Mode::Rel => write!(f, "rel"),
            Mode::Acq => write!(f, "acq"),
            Mode::Rlx => write!(f, "rlx"),
        }
    }
}

/// A single atomic memory operation.
///
/// Events are immutable once a [`crate::Trace`] is constructed. `id`
/// negative denotes an initial write and orders before every positive id;
/// `thread` is `-1` exactly for initial writes. `val` is concrete for
/// writes; for reads it is a placeholder (the resolved value is symbolic
/// and lives in the encoder, not here).
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Event {
    pub id: i64,
    pub thread: i64,
    pub kind: Kind,
    pub addr: u64,
    pub val: i64,
    pub mode: Mode,
}

impl Event {
    /// Whether this event is an initial write (negative id, thread -1).
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.id < 0
    }
}
