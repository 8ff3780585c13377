//! Event and trace model for the weak-memory verifier.

mod builder;
mod error;
mod event;
mod trace;

pub use builder::TraceBuilder;
pub use error::{Result, TraceError};
pub use event::{Event, Kind, Mode};
pub use trace::{build_trace, Trace};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_minimal_trace() {
        let trace = TraceBuilder::new()
            .init(0)
            .write(1, 0, 1, Mode::Sc)
            .read(2, 0, Mode::Sc)
            .build()
            .unwrap();
        assert_eq!(trace.events().len(), 3);
        assert_eq!(trace.reads().count(), 1);
        assert_eq!(trace.writes().count(), 2);
    }

    #[test]
    fn rejects_duplicate_id() {
        let events = vec![
            Event {
                id: -1,
                thread: -1,
                kind: Kind::Write,
                addr: 0,
                val: 0,
                mode: Mode::Sc,
            },
            Event {
                id: 1,
                thread: 0,
                kind: Kind::Write,
                addr: 0,
                val: 1,
                mode: Mode::Sc,
            },
            Event {
                id: 1,
                thread: 1,
                kind: Kind::Read,
                addr: 0,
                val: 0,
                mode: Mode::Sc,
            },
        ];
        assert_eq!(build_trace(events), Err(TraceError::DuplicateId(1)));
    }

    #[test]
    fn rejects_missing_initial_write() {
        let events = vec![Event {
            id: 1,
            thread: 0,
            kind: Kind::Read,
            addr: 0,
            val: 0,
            mode: Mode::Sc,
        }];
        assert_eq!(
            build_trace(events),
            Err(TraceError::MissingInitialWrite(0))
        );
    }

    #[test]
    fn rejects_negative_thread_on_non_initial_event() {
        let events = vec![
            Event {
                id: -1,
                thread: -1,
                kind: Kind::Write,
                addr: 0,
                val: 0,
                mode: Mode::Sc,
            },
            Event {
                id: 1,
                thread: -1,
                kind: Kind::Read,
                addr: 0,
                val: 0,
                mode: Mode::Sc,
            },
        ];
        assert_eq!(build_trace(events), Err(TraceError::NegativeThread(1)));
    }

    #[test]
    fn initial_write_lookup() {
        let trace = TraceBuilder::new().init(0).init(1).build().unwrap();
        assert!(trace.initial_write(0).is_some());
        assert!(trace.initial_write(1).is_some());
        assert!(trace.initial_write(2).is_none());
    }
}
