//! Relation kernel: program order, preserved program order, from-read, and
//! well-formedness checks over a [`wmv_trace::Trace`].
//!
//! Everything here is a pure function of a concrete trace (and, where
//! noted, a concrete candidate rf/co). The symbolic counterparts used
//! during axiom emission live in `wmv-encode`.

mod fr;
mod po;
mod wellformed;

pub use fr::fr;
pub use po::{po, ppo, ppo_relaxed, ppo_sc, PpoVariant};
pub use wellformed::{well_formed_co, well_formed_rf};
