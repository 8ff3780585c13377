use wmv_trace::Event;

/// From-read: `fr(r, w') ⇔ ∃w. rf(w, r) ∧ co(w, w')`.
///
/// Generic over the concrete representation of `rf`/`co` so the same
/// definition backs both the post-hoc witness checks in [`crate::wellformed`]
/// (plain `bool`) and the symbolic axiom emission in `wmv-encode`
/// (`z3::ast::Bool`); this module supplies the concrete-`bool` instance.
pub fn fr(
    rf_source: impl Fn(&Event) -> Option<Event>,
    co: impl Fn(&Event, &Event) -> bool,
    r: &Event,
    w_prime: &Event,
) -> bool {
    match rf_source(r) {
        Some(w) => co(&w, w_prime),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wmv_trace::{Kind, Mode};

    fn write(id: i64, addr: u64, val: i64) -> Event {
        Event {
            id,
            thread: 1,
            kind: Kind::Write,
            addr,
            val,
            mode: Mode::Sc,
        }
    }

    fn read(id: i64, addr: u64) -> Event {
        Event {
            id,
            thread: 2,
            kind: Kind::Read,
            addr,
            val: 0,
            mode: Mode::Sc,
        }
    }

    #[test]
    fn fr_holds_through_rf_then_co() {
        let w0 = write(-1, 0, 0);
        let w1 = write(1, 0, 1);
        let r = read(2, 0);
        let rf_source = |e: &Event| if e.id == 2 { Some(w0.clone()) } else { None };
        let co = |a: &Event, b: &Event| a.id == w0.id && b.id == w1.id;
        assert!(fr(rf_source, co, &r, &w1));
    }

    #[test]
    fn fr_false_without_rf_source() {
        let w1 = write(1, 0, 1);
        let r = read(2, 0);
        let rf_source = |_: &Event| None;
        let co = |_: &Event, _: &Event| true;
        assert!(!fr(rf_source, co, &r, &w1));
    }
}
