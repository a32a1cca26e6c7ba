//! Relaxed backend driver.

use super::objective::{collisions, round_to_slots, RelaxedObjective};
use super::types::ContinuousOptimizer;
use crate::error::{check_ring, RingError};
use crate::graph::RingGraph;

/// Rounded outcome of a relaxed optimization.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelaxedResult {
    /// Rounded slot per node index. Not necessarily injective.
    pub slots: Vec<usize>,

    /// Circular cost of `slots`, without penalty.
    pub cost: u64,

    /// Items that share a slot with another item. Zero means `slots` is a
    /// valid assignment.
    pub collisions: usize,

    /// Penalized objective value of the optimizer's point.
    pub objective: f64,
}

/// Drives an external [`ContinuousOptimizer`] on the relaxed objective.
pub struct RelaxedRunner;

impl RelaxedRunner {
    /// Minimizes the relaxed objective of `graph` on `m` slots.
    #[tracing::instrument(level = "debug", skip(graph, optimizer))]
    pub fn run<T, O>(graph: &RingGraph<T>, m: usize, optimizer: &O) -> Result<RelaxedResult, RingError>
    where
        O: ContinuousOptimizer + ?Sized,
    {
        let k = graph.num_nodes();
        check_ring(k, m)?;
        if k == 0 {
            return Ok(RelaxedResult {
                slots: Vec::new(),
                cost: 0,
                collisions: 0,
                objective: 0.0,
            });
        }

        let objective = RelaxedObjective::new(graph, m)?;
        let eval = |x: &[f64]| objective.evaluate(x);
        let x = optimizer.minimize(&eval, &objective.bounds());
        if x.len() != k {
            return Err(RingError::DimensionMismatch {
                expected: k,
                got: x.len(),
            });
        }

        let slots = round_to_slots(&x, m);
        let result = RelaxedResult {
            cost: graph.cost_model(m).cost(&slots),
            collisions: collisions(&slots, m),
            objective: objective.evaluate(&x),
            slots,
        };
        if result.collisions > 0 {
            tracing::warn!(
                collisions = result.collisions,
                "relaxed optimum is not injective"
            );
        }
        Ok(result)
    }
}
