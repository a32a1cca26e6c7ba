//! Circular slot assignment for usage sequences.
//!
//! Given the order in which items are used (for example tools on a
//! rotating carrier with `M` pockets), finds a placement of the distinct
//! items on a ring of `M` slots that keeps frequently consecutive items
//! close together:
//!
//! - **Graph**: distinct items and weighted cyclic adjacencies extracted
//!   from the sequence.
//! - **Cost**: total weighted shorter-arc distance of an assignment.
//! - **Exact**: exhaustive enumeration of injective assignments, for
//!   small item counts.
//! - **Simulated Annealing (SA)**: swap/relocate local search with
//!   Metropolis acceptance and geometric cooling.
//! - **Relax**: penalized continuous objective for plugging in an
//!   external global optimizer.
//! - **Solve**: end-to-end entry point returning the cost and the order
//!   of items around the ring.
//!
//! # Examples
//!
//! ```
//! use ring_placement::sa::SaConfig;
//! use ring_placement::solve::{solve_with_config, SolveConfig};
//!
//! let sequence = [1, 2, 1, 3, 1, 4, 1, 2];
//! let config = SolveConfig::default().with_sa(SaConfig::default().with_seed(42));
//! let solution = solve_with_config(&sequence, 4, &config).unwrap();
//!
//! assert_eq!(solution.cost, 10);
//! assert_eq!(solution.exact_cost, Some(10));
//! ```

pub mod cost;
pub mod error;
pub mod exact;
pub mod graph;
pub mod relax;
pub mod sa;
pub mod solve;

mod random;

pub use error::RingError;
