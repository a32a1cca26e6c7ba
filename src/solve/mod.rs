//! End-to-end placement of a usage sequence.
//!
//! Builds the adjacency graph, optionally runs the exhaustive search as a
//! reference when the instance is small, always runs simulated annealing,
//! and turns the winning assignment into the order of items around the
//! ring. The order is meaningful only up to rotation and reflection.

mod config;
mod runner;

pub use config::SolveConfig;
pub use runner::{derive_order, solve, solve_with_config, Solution};
