//! Circular distance cost model.
//!
//! The cost of an assignment is the sum, over all edges, of the edge
//! weight times the shorter arc between the two assigned slots. Both
//! solvers and the relaxed objective evaluate assignments through the
//! same [`CostModel`].

mod distance;
mod model;

pub use distance::{circular_distance, cost, reflect, rotate};
pub use model::CostModel;
