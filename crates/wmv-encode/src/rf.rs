use rustc_hash::FxHashMap;
use z3::ast::{Ast, Bool, Int};
use z3::Context;

use wmv_trace::Event;

/// Result of §4.3 step 2: the rf boolean matrix, the symbolic read-value
/// variables (trace order of reads), and the constraints that make both
/// well-formed.
pub struct RfEncoding<'z> {
    pub matrix: FxHashMap<(i64, i64), Bool<'z>>,
    pub read_values: Vec<Int<'z>>,
    pub constraints: Vec<Bool<'z>>,
}

/// Allocates `rf(w, r) := C[r][w]` for every read and every same-address
/// write, and emits:
///
/// - one-hot: each read has exactly one rf source (at-least-one via `or`,
///   at-most-one via pairwise `¬(Cᵢ ∧ Cⱼ)`, matching the "enumerate ordered
///   pairs, don't short-circuit" iteration style of spec.md §9);
/// - value identity: `val(r) = Σ_w C[r][w]·val(w)`, built as an ite-chain
///   sum rather than relying on a bool→int cast.
///
/// Cross-address pairs are never allocated a variable at all — `rf(w, r)`
/// for `addr(w)≠addr(r)` is definitionally `false` — which is equivalent
/// to, but cheaper than, allocating the pair and asserting it false.
pub fn encode_rf<'z>(z3ctx: &'z Context, reads: &[Event], writes: &[Event]) -> RfEncoding<'z> {
    let mut matrix = FxHashMap::default();
    let mut read_values = Vec::with_capacity(reads.len());
    let mut constraints = Vec::new();

    for r in reads {
        let read_value = Int::new_const(z3ctx, format!("readval_{}", r.id));

        let candidates: Vec<&Event> = writes.iter().filter(|w| w.addr == r.addr).collect();
        let mut row = Vec::with_capacity(candidates.len());
        for w in &candidates {
            let var = Bool::new_const(z3ctx, format!("rf_{}_{}", w.id, r.id));
            matrix.insert((r.id, w.id), var.clone());
            row.push((w, var));
        }

        // At least one source.
        let row_bools: Vec<&Bool> = row.iter().map(|(_, b)| b).collect();
        constraints.push(Bool::or(z3ctx, &row_bools));

        // At most one source.
        for i in 0..row.len() {
            for j in (i + 1)..row.len() {
                let (_, ci) = &row[i];
                let (_, cj) = &row[j];
                constraints.push(Bool::or(z3ctx, &[&ci.not(), &cj.not()]));
            }
        }

        // Value identity via an ite-sum.
        let mut sum = Int::from_i64(z3ctx, 0);
        for (w, var) in &row {
            let term = var.ite(&Int::from_i64(z3ctx, w.val), &Int::from_i64(z3ctx, 0));
            sum = Int::add(z3ctx, &[&sum, &term]);
        }
        constraints.push(sum._eq(&read_value));

        read_values.push(read_value);
    }

    RfEncoding {
        matrix,
        read_values,
        constraints,
    }
}
