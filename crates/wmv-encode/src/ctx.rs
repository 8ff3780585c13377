use rustc_hash::FxHashMap;
use z3::ast::{Bool, Int};
use z3::Context;

use wmv_trace::Event;

use crate::error::{PredicateError, Result};

/// The handle a violation/progress/extra predicate is evaluated against.
///
/// Exposes exactly the surface spec.md §6 describes: the symbolic
/// read-value expressions (in trace order of reads), the symbolic rf and co
/// relations as predicates, the rank function, and the list of writes.
pub struct Ctx<'z> {
    pub(crate) z3ctx: &'z Context,
    pub(crate) reads: Vec<Event>,
    pub(crate) writes: Vec<Event>,
    pub(crate) read_value_vars: Vec<Int<'z>>,
    /// Keyed by (read id, write id); only present where addr(read)=addr(write).
    pub(crate) rf_matrix: FxHashMap<(i64, i64), Bool<'z>>,
    pub(crate) co_rank: FxHashMap<i64, Int<'z>>,
    pub(crate) rank: FxHashMap<i64, Int<'z>>,
}

impl<'z> Ctx<'z> {
    /// Read events, in trace order. `read_value(i)` corresponds to `reads()[i]`.
    #[must_use]
    pub fn reads(&self) -> &[Event] {
        &self.reads
    }

    /// Write events (including initial writes), in trace order.
    #[must_use]
    pub fn writes(&self) -> &[Event] {
        &self.writes
    }

    /// The symbolic resolved value of the `index`-th read, in trace order.
    pub fn read_value(&self, index: usize) -> Result<Int<'z>> {
        self.read_value_vars
            .get(index)
            .cloned()
            .ok_or(PredicateError::ReadIndexOutOfBounds(index))
    }

    /// The symbolic `rf(w, r)` relation as a boolean expression.
    pub fn rf(&self, w: &Event, r: &Event) -> Result<Bool<'z>> {
        self.require_known(w.id)?;
        self.require_known(r.id)?;
        Ok(self
            .rf_matrix
            .get(&(r.id, w.id))
            .cloned()
            .unwrap_or_else(|| Bool::from_bool(self.z3ctx, false)))
    }

    /// The symbolic `co(w1, w2)` relation as a boolean expression.
    ///
    /// `co(w1, w2) := addr(w1)=addr(w2) ∧ co_rank[w1]<co_rank[w2]`.
    pub fn co(&self, w1: &Event, w2: &Event) -> Result<Bool<'z>> {
        self.require_known(w1.id)?;
        self.require_known(w2.id)?;
        if w1.addr != w2.addr {
            return Ok(Bool::from_bool(self.z3ctx, false));
        }
        let r1 = &self.co_rank[&w1.id];
        let r2 = &self.co_rank[&w2.id];
        Ok(r1.lt(r2))
    }

    /// The symbolic rank of an event.
    pub fn rank(&self, e: &Event) -> Result<Int<'z>> {
        self.require_known(e.id)?;
        Ok(self.rank[&e.id].clone())
    }

    /// The trace's initial write for `addr`, or [`PredicateError::UnknownAddr`].
    pub fn initial_write(&self, addr: u64) -> Result<&Event> {
        self.writes
            .iter()
            .find(|w| w.addr == addr && w.is_initial())
            .ok_or(PredicateError::UnknownAddr(addr))
    }

    /// Infallible `rf` lookup for internal axiom code, which only ever
    /// queries events it sourced from the same trace.
    pub(crate) fn rf_unchecked(&self, w: &Event, r: &Event) -> Bool<'z> {
        self.rf_matrix
            .get(&(r.id, w.id))
            .cloned()
            .unwrap_or_else(|| Bool::from_bool(self.z3ctx, false))
    }

    /// Infallible `co` lookup for internal axiom code.
    pub(crate) fn co_unchecked(&self, w1: &Event, w2: &Event) -> Bool<'z> {
        if w1.addr != w2.addr {
            return Bool::from_bool(self.z3ctx, false);
        }
        self.co_rank[&w1.id].lt(&self.co_rank[&w2.id])
    }

    /// `fr(r, w') ⇔ ∃w. rf(w, r) ∧ co(w, w')`, restricted to same-address
    /// candidate writes (others contribute `false` terms).
    pub(crate) fn fr_unchecked(&self, r: &Event, w_prime: &Event) -> Bool<'z> {
        let terms: Vec<Bool<'z>> = self
            .writes
            .iter()
            .filter(|w| w.addr == r.addr)
            .map(|w| Bool::and(self.z3ctx, &[&self.rf_unchecked(w, r), &self.co_unchecked(w, w_prime)]))
            .collect();
        let refs: Vec<&Bool<'z>> = terms.iter().collect();
        Bool::or(self.z3ctx, &refs)
    }

    /// The underlying z3 context. Predicates need this to build fresh
    /// constants (e.g. a literal to compare a read value against).
    #[must_use]
    pub fn z3(&self) -> &'z Context {
        self.z3ctx
    }

    fn require_known(&self, id: i64) -> Result<()> {
        let known = self.reads.iter().any(|e| e.id == id) || self.writes.iter().any(|e| e.id == id);
        if known {
            Ok(())
        } else {
            Err(PredicateError::UnknownEventId(id))
        }
    }
}
