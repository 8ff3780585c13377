use z3::ast::{Ast, Bool};

use wmv_relations::po;
use wmv_trace::{Kind, Mode};

use crate::ctx::Ctx;

/// SC total order + SC latest-visible (spec.md §4.4).
///
/// These are keyed purely by each event's own `mode` tag and are emitted
/// regardless of the caller's ppo/release-acquire mode selection — "SC"
/// here means "this specific event is tagged sc", not "the whole trace is
/// being analyzed in SC mode".
pub fn encode_sc_axioms<'z>(ctx: &Ctx<'z>) -> Vec<Bool<'z>> {
    let z3ctx = ctx.z3();
    let mut constraints = Vec::new();

    let mut sc_events = Vec::new();
    sc_events.extend(ctx.writes().iter().filter(|e| e.mode == Mode::Sc));
    sc_events.extend(ctx.reads().iter().filter(|e| e.mode == Mode::Sc));

    // SC total order: distinct SC events never share a rank.
    for &e1 in &sc_events {
        for &e2 in &sc_events {
            if e1.id >= e2.id {
                continue;
            }
            let r1 = ctx.rank(e1).expect("event sourced from this ctx");
            let r2 = ctx.rank(e2).expect("event sourced from this ctx");
            constraints.push(r1._eq(&r2).not());
        }
    }

    // SC latest-visible: an SC read may not see a co-stale write.
    for r in ctx.reads().iter().filter(|e| e.mode == Mode::Sc) {
        let rank_r = ctx.rank(r).expect("event sourced from this ctx");
        let candidates: Vec<_> = ctx.writes().iter().filter(|w| w.addr == r.addr).collect();
        for &w in &candidates {
            let rf_wr = ctx.rf_unchecked(w, r);
            for &w_prime in &candidates {
                if w_prime.id == w.id {
                    continue;
                }
                let co_w_wprime = ctx.co_unchecked(w, w_prime);
                let rank_w_prime = ctx.rank(w_prime).expect("event sourced from this ctx");
                let stale = Bool::and(z3ctx, &[&co_w_wprime, &rank_w_prime.lt(&rank_r)]);
                constraints.push(rf_wr.implies(&stale.not()));
            }
        }
    }

    constraints
}

/// Release-acquire happens-before (spec.md §4.4). Only emitted when the
/// caller's mode enables it (`Mode::Sc` or `Mode::Ra`, not `Mode::Relaxed`
/// — see the `Mode` docs).
pub fn encode_ra_axioms<'z>(ctx: &Ctx<'z>) -> Vec<Bool<'z>> {
    let mut constraints = Vec::new();

    let releases: Vec<_> = ctx
        .writes()
        .iter()
        .filter(|w| w.kind == Kind::Write && w.mode == Mode::Rel)
        .collect();
    let acquires: Vec<_> = ctx
        .reads()
        .iter()
        .filter(|r| r.kind == Kind::Read && r.mode == Mode::Acq)
        .collect();

    for &w in &releases {
        for &r in &acquires {
            let rf_wr = ctx.rf_unchecked(w, r);
            let pre: Vec<_> = ctx
                .writes()
                .iter()
                .chain(ctx.reads().iter())
                .filter(|e| e.thread == w.thread && po(e, w))
                .collect();
            let post: Vec<_> = ctx
                .writes()
                .iter()
                .chain(ctx.reads().iter())
                .filter(|e| e.thread == r.thread && po(r, e))
                .collect();
            for &e_pre in &pre {
                let rank_pre = ctx.rank(e_pre).expect("event sourced from this ctx");
                for &e_post in &post {
                    let rank_post = ctx.rank(e_post).expect("event sourced from this ctx");
                    constraints.push(rf_wr.implies(&rank_pre.lt(&rank_post)));
                }
            }
        }
    }

    constraints
}
