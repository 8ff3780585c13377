use rustc_hash::FxHashMap;
use z3::ast::{Ast, Bool, Int};
use z3::Context;

use wmv_trace::Event;

/// Result of §4.3 step 3: one `co_rank` integer per write, and the
/// constraints that make `co(w1, w2) := addr(w1)=addr(w2) ∧
/// co_rank[w1]<co_rank[w2]` a strict total order per address with the
/// initial write minimal.
pub struct CoEncoding<'z> {
    pub co_rank: FxHashMap<i64, Int<'z>>,
    pub constraints: Vec<Bool<'z>>,
}

/// Allocates a `co_rank` variable per write and emits distinctness plus
/// init-minimality constraints by enumerating ordered pairs of
/// same-address writes.
pub fn encode_co<'z>(z3ctx: &'z Context, writes: &[Event]) -> CoEncoding<'z> {
    let mut co_rank = FxHashMap::default();
    for w in writes {
        co_rank.insert(w.id, Int::new_const(z3ctx, format!("corank_{}", w.id)));
    }

    let mut constraints = Vec::new();
    for w1 in writes {
        for w2 in writes {
            if w1.id == w2.id || w1.addr != w2.addr {
                continue;
            }
            let r1 = &co_rank[&w1.id];
            let r2 = &co_rank[&w2.id];
            constraints.push(r1._eq(r2).not());
            if w1.is_initial() && !w2.is_initial() {
                constraints.push(r1.lt(r2));
            }
        }
    }

    CoEncoding {
        co_rank,
        constraints,
    }
}
