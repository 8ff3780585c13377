use rustc_hash::FxHashMap;
use z3::ast::{Ast, Bool, Int};
use z3::Context;

use wmv_trace::Event;

/// Result of §4.3 step 5: one `rank` integer per event, pinned so initial
/// writes can never float above program events.
pub struct RankEncoding<'z> {
    pub rank: FxHashMap<i64, Int<'z>>,
    pub constraints: Vec<Bool<'z>>,
}

/// Allocates a `rank` variable per event. Initial writes are pinned to
/// their own (negative) id; every other event is pinned to a positive
/// rank. Acyclicity edges are emitted separately in
/// [`crate::acyclicity::encode_acyclicity`].
pub fn encode_rank<'z>(z3ctx: &'z Context, events: &[&Event]) -> RankEncoding<'z> {
    let mut rank = FxHashMap::default();
    let mut constraints = Vec::new();

    for e in events {
        let var = Int::new_const(z3ctx, format!("rank_{}", e.id));
        if e.is_initial() {
            constraints.push(var._eq(&Int::from_i64(z3ctx, e.id)));
        } else {
            constraints.push(var.gt(&Int::from_i64(z3ctx, 0)));
        }
        rank.insert(e.id, var);
    }

    RankEncoding { rank, constraints }
}
