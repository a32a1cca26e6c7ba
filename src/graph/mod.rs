//! Adjacency graph extraction from usage sequences.
//!
//! A usage sequence such as `[1, 2, 1, 3]` is read as a cycle: every item
//! is adjacent to its successor, and the last item is adjacent to the
//! first. Each unordered adjacent pair becomes a weighted edge whose
//! weight counts how often the pair occurs.
//!
//! Nodes keep first-occurrence order so that results are reproducible
//! and node indices are stable across calls on the same sequence.

mod builder;
mod types;

pub use builder::build_graph;
pub use types::{Edge, IndexedEdge, RingGraph};
