//! Continuous-relaxation backend seam.
//!
//! Lets an external box-constrained global optimizer search over real
//! vectors instead of injective assignments. Each coordinate is the slot
//! of one item; vectors are rounded and clipped onto the ring, and every
//! collision (two items rounded to the same slot) adds a penalty of
//! `M * max_edge_weight` to the objective. The penalty is soft: the
//! rounded result of [`RelaxedRunner`] reports how many collisions remain.
//!
//! The optimizer itself is supplied by the caller through
//! [`ContinuousOptimizer`].

mod objective;
mod runner;
mod types;

pub use objective::{round_to_slots, RelaxedObjective};
pub use runner::{RelaxedResult, RelaxedRunner};
pub use types::ContinuousOptimizer;
