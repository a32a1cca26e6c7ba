//! Simulated Annealing (SA) over injective slot assignments.
//!
//! The state is a [`Placement`]: one slot per item, no slot shared. Each
//! iteration draws either a swap of two items or a relocation of one item
//! to a free slot, evaluates the cost change incrementally, and accepts it
//! by the Metropolis criterion. Temperature decays geometrically every
//! iteration. The best assignment seen is returned, not the final one.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{ChainItem, SaResult, SaRunner};
pub use types::{Placement, SlotMove};
