use wmv_trace::Event;

/// Program order: same thread, ascending id. Static and derived — it never
/// depends on a solver choice.
#[must_use]
pub fn po(e1: &Event, e2: &Event) -> bool {
    e1.thread == e2.thread && e1.id < e2.id
}

/// Which preserved-program-order variant an axiom set should use.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PpoVariant {
    /// Full program order: every same-thread pair is preserved.
    Sc,
    /// Only pairs touching at least one SC-tagged event are preserved;
    /// same-thread non-SC pairs are left free for the solver to reorder.
    Relaxed,
}

/// `ppo_sc(e1, e2) = po(e1, e2)`.
#[must_use]
pub fn ppo_sc(e1: &Event, e2: &Event) -> bool {
    po(e1, e2)
}

/// `ppo_relaxed(e1, e2) = po(e1, e2) ∧ (mode(e1)=sc ∨ mode(e2)=sc)`.
#[must_use]
pub fn ppo_relaxed(e1: &Event, e2: &Event) -> bool {
    use wmv_trace::Mode::Sc;
    po(e1, e2) && (e1.mode == Sc || e2.mode == Sc)
}

/// Dispatches to [`ppo_sc`] or [`ppo_relaxed`] by variant.
#[must_use]
pub fn ppo(variant: PpoVariant, e1: &Event, e2: &Event) -> bool {
    match variant {
        PpoVariant::Sc => ppo_sc(e1, e2),
        PpoVariant::Relaxed => ppo_relaxed(e1, e2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wmv_trace::{Kind, Mode};

    fn ev(id: i64, thread: i64, mode: Mode) -> Event {
        Event {
            id,
            thread,
            kind: Kind::Write,
            addr: 0,
            val: 0,
            mode,
        }
    }

    #[test]
    fn po_requires_same_thread_and_order() {
        let a = ev(1, 1, Mode::Rlx);
        let b = ev(2, 1, Mode::Rlx);
        let c = ev(3, 2, Mode::Rlx);
        assert!(po(&a, &b));
        assert!(!po(&b, &a));
        assert!(!po(&a, &c));
    }

    #[test]
    fn ppo_relaxed_drops_non_sc_same_thread_pairs() {
        let a = ev(1, 1, Mode::Rlx);
        let b = ev(2, 1, Mode::Rlx);
        assert!(ppo_sc(&a, &b));
        assert!(!ppo_relaxed(&a, &b));
    }

    #[test]
    fn ppo_relaxed_keeps_pairs_touching_sc() {
        let a = ev(1, 1, Mode::Sc);
        let b = ev(2, 1, Mode::Rlx);
        assert!(ppo_relaxed(&a, &b));
    }
}
