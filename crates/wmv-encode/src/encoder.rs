use z3::ast::Bool;
use z3::Context;

use wmv_relations::PpoVariant;
use wmv_trace::{Event, Trace};

use crate::acyclicity::encode_acyclicity;
use crate::axioms::{encode_ra_axioms, encode_sc_axioms};
use crate::co::encode_co;
use crate::ctx::Ctx;
use crate::rank::encode_rank;
use crate::rf::encode_rf;

/// A fully emitted formula: the [`Ctx`] predicates are evaluated against,
/// plus the flat list of axiom constraints (model + mode axioms, not yet
/// conjoined with any caller-supplied violation/progress/extra predicate).
pub struct Encoding<'z> {
    pub ctx: Ctx<'z>,
    pub constraints: Vec<Bool<'z>>,
}

/// Encodes `trace` under the given ppo variant and release-acquire
/// setting: §4.3 (rf matrix, co ranks, event ranks, acyclicity) plus §4.4
/// (SC axioms always, release-acquire axioms iff `ra_enabled`).
#[tracing::instrument(skip_all, fields(events = trace.events().len()))]
pub fn encode<'z>(z3ctx: &'z Context, trace: &Trace, ppo_variant: PpoVariant, ra_enabled: bool) -> Encoding<'z> {
    let reads: Vec<_> = trace.reads().cloned().collect();
    let writes: Vec<_> = trace.writes().cloned().collect();

    let rf_enc = encode_rf(z3ctx, &reads, &writes);
    let co_enc = encode_co(z3ctx, &writes);
    let rank_events: Vec<&Event> = trace.events().iter().collect();
    let rank_enc = encode_rank(z3ctx, &rank_events);

    tracing::debug!(
        reads = reads.len(),
        writes = writes.len(),
        rf_vars = rf_enc.matrix.len(),
        "allocated symbolic variables"
    );

    let ctx = Ctx {
        z3ctx,
        reads,
        writes,
        read_value_vars: rf_enc.read_values,
        rf_matrix: rf_enc.matrix,
        co_rank: co_enc.co_rank,
        rank: rank_enc.rank,
    };

    let mut constraints = Vec::new();
    constraints.extend(rf_enc.constraints);
    constraints.extend(co_enc.constraints);
    constraints.extend(rank_enc.constraints);
    constraints.extend(encode_acyclicity(&ctx, ppo_variant));
    constraints.extend(encode_sc_axioms(&ctx));
    if ra_enabled {
        constraints.extend(encode_ra_axioms(&ctx));
    }

    tracing::debug!(constraints = constraints.len(), "emitted axioms");

    Encoding { ctx, constraints }
}
