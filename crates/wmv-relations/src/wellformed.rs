use wmv_trace::{Event, Trace};

/// Checks `well_formed_rf`: every read has exactly one rf source, and every
/// rf edge connects a read to a write of the same address and value.
///
/// `rf_source` and `read_val` describe a *concrete* candidate execution
/// (typically a materialized witness); this is a post-hoc check, not part
/// of axiom emission (the encoder enforces the same shape symbolically via
/// the one-hot row constraint in spec.md §4.3).
#[must_use]
pub fn well_formed_rf(
    trace: &Trace,
    rf_source: impl Fn(&Event) -> Option<Event>,
    read_val: impl Fn(&Event) -> i64,
) -> bool {
    trace.reads().all(|r| match rf_source(r) {
        Some(w) => w.addr == r.addr && w.val == read_val(r),
        None => false,
    })
}

/// Checks `well_formed_co`: co only ever relates same-address writes, and
/// every initial write is co-minimal for its address.
#[must_use]
pub fn well_formed_co(trace: &Trace, co: impl Fn(&Event, &Event) -> bool) -> bool {
    let writes: Vec<&Event> = trace.writes().collect();
    for &w1 in &writes {
        for &w2 in &writes {
            if w1.id == w2.id {
                continue;
            }
            if co(w1, w2) && w1.addr != w2.addr {
                return false;
            }
        }
    }
    for addr in writes.iter().map(|w| w.addr).collect::<std::collections::BTreeSet<_>>() {
        let same_addr: Vec<&Event> = writes.iter().copied().filter(|w| w.addr == addr).collect();
        for &w1 in &same_addr {
            for &w2 in &same_addr {
                if w1.id == w2.id {
                    continue;
                }
                let a_before_b = co(w1, w2);
                let b_before_a = co(w2, w1);
                if a_before_b == b_before_a {
                    return false;
                }
                if w1.is_initial() && !w2.is_initial() && !a_before_b {
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use wmv_trace::{Kind, Mode, TraceBuilder};

    #[test]
    fn well_formed_rf_accepts_matching_source() {
        let trace = TraceBuilder::new()
            .init(0)
            .write(1, 0, 7, Mode::Sc)
            .read(2, 0, Mode::Sc)
            .build()
            .unwrap();
        let w1 = trace.event(1).unwrap().clone();
        let rf_source = move |r: &Event| if r.kind == Kind::Read { Some(w1.clone()) } else { None };
        let read_val = |_: &Event| 7;
        assert!(well_formed_rf(&trace, rf_source, read_val));
    }

    #[test]
    fn well_formed_rf_rejects_value_mismatch() {
        let trace = TraceBuilder::new()
            .init(0)
            .write(1, 0, 7, Mode::Sc)
            .read(2, 0, Mode::Sc)
            .build()
            .unwrap();
        let w1 = trace.event(1).unwrap().clone();
        let rf_source = move |r: &Event| if r.kind == Kind::Read { Some(w1.clone()) } else { None };
        let read_val = |_: &Event| 9;
        assert!(!well_formed_rf(&trace, rf_source, read_val));
    }

    #[test]
    fn well_formed_co_requires_init_minimal() {
        let trace = TraceBuilder::new()
            .init(0)
            .write(1, 0, 1, Mode::Sc)
            .write(2, 0, 2, Mode::Sc)
            .build()
            .unwrap();
        let init = trace.initial_write(0).unwrap().clone();
        let co = move |a: &Event, b: &Event| {
            if a.id == init.id {
                b.id != init.id
            } else {
                a.id < b.id
            }
        };
        assert!(well_formed_co(&trace, co));
    }
}
