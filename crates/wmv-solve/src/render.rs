use std::fmt::Write as _;

use wmv_trace::Kind;

use crate::witness::Witness;

/// Renders a [`Witness`] to the one-line-per-event format of spec.md §4.6:
/// id, thread, kind, addr, resolved value, mode, and — for reads — the id
/// of the rf source. Output is informational only.
#[must_use]
pub fn render(witness: &Witness) -> String {
    let mut out = String::new();
    for e in &witness.events {
        let _ = write!(
            out,
            "id={:<4} thread={:<3} {:<5} addr={:<3} val={:<4} mode={:<3}",
            e.id, e.thread, e.kind, e.addr, e.val, e.mode
        );
        if e.kind == Kind::Read {
            match e.rf_source {
                Some(src) => {
                    let _ = write!(out, " rf={src}");
                }
                None => {
                    let _ = write!(out, " rf=<none>");
                }
            }
        }
        out.push('\n');
    }
    out
}
