//! Exhaustive search over injective assignments.
//!
//! Enumerates every k-subset of the ring slots and every permutation of
//! the items onto each subset. The work grows as `C(M, k) * k!`, so the
//! runner refuses item counts above [`ExactConfig::max_items`].
//!
//! Because the cost is invariant under rotation, pinning the first item to
//! slot 0 ([`ExactConfig::fix_first`]) still finds the optimum while
//! dividing the work by roughly `M / k`.

mod config;
mod runner;

pub use config::ExactConfig;
pub use runner::{ExactResult, ExactRunner};
