//! Symbolic encoder and memory-order axioms: turns a [`wmv_trace::Trace`]
//! into an SMT formula over a `z3::Context`.

mod acyclicity;
mod axioms;
mod co;
mod ctx;
mod encoder;
mod error;
mod rank;
mod rf;

pub use ctx::Ctx;
pub use encoder::{encode, Encoding};
pub use error::PredicateError;

/// A caller-supplied predicate over a [`Ctx`]: a violation, progress, or
/// extra constraint (spec.md §6). Boxed and higher-ranked over the solver
/// context's lifetime so `wmv-solve` can build the `z3::Context` inside
/// `verify` itself while still accepting predicates defined by the caller
/// beforehand.
pub type Predicate = Box<dyn for<'z> Fn(&Ctx<'z>) -> error::Result<z3::ast::Bool<'z>>>;

#[cfg(test)]
mod tests;
