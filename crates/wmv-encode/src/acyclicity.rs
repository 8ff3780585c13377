use z3::ast::{Ast, Bool};

use wmv_relations::{ppo, PpoVariant};
use wmv_trace::{Event, Kind};

use crate::ctx::Ctx;

/// Emits the §4.3 step 4 acyclicity axiom: for every ordered pair of
/// events, `R(e1, e2) ⇒ rank[e1] < rank[e2]`, where `R` is the disjunction
/// of ppo, rf, co, and fr.
///
/// `ppo` is concrete (a pure function of ids/threads/modes), so when it
/// holds the rank implication is asserted directly rather than folded into
/// an `or` with the symbolic edge — they are equivalent, the direct form
/// is just fewer nodes for the solver. `rf` is included here even though
/// `co`/`fr`/`ppo` already imply much of the same ordering, because rf
/// edges are the only ones that cross threads.
pub fn encode_acyclicity<'z>(ctx: &Ctx<'z>, ppo_variant: PpoVariant) -> Vec<Bool<'z>> {
    let z3ctx = ctx.z3();
    let mut events: Vec<&Event> = Vec::with_capacity(ctx.reads().len() + ctx.writes().len());
    events.extend(ctx.writes().iter());
    events.extend(ctx.reads().iter());

    let mut constraints = Vec::new();

    for &e1 in &events {
        for &e2 in &events {
            if e1.id == e2.id {
                continue;
            }
            let r1 = ctx.rank(e1).expect("event sourced from this ctx");
            let r2 = ctx.rank(e2).expect("event sourced from this ctx");
            let rank_lt = r1.lt(&r2);

            if ppo(ppo_variant, e1, e2) {
                constraints.push(rank_lt);
                continue;
            }

            let mut terms = Vec::new();
            if e1.kind == Kind::Write && e2.kind == Kind::Read {
                terms.push(ctx.rf_unchecked(e1, e2));
            }
            if e1.kind == Kind::Write && e2.kind == Kind::Write {
                terms.push(ctx.co_unchecked(e1, e2));
            }
            if e1.kind == Kind::Read && e2.kind == Kind::Write {
                terms.push(ctx.fr_unchecked(e1, e2));
            }
            if terms.is_empty() {
                continue;
            }
            let refs: Vec<&Bool<'z>> = terms.iter().collect();
            let edge = Bool::or(z3ctx, &refs);
            constraints.push(edge.implies(&rank_lt));
        }
    }

    constraints
}
