//! Penalized objective over real-valued slot vectors.

use crate::cost::CostModel;
use crate::error::{check_ring, RingError};
use crate::graph::RingGraph;

/// Rounds each coordinate to the nearest slot and clips it into `0..m`.
///
/// `m` must be positive. NaN maps to slot 0.
pub fn round_to_slots(x: &[f64], m: usize) -> Vec<usize> {
    let high = m.saturating_sub(1) as f64;
    x.iter()
        .map(|&v| {
            let r = v.round();
            if r.is_nan() {
                0
            } else {
                r.clamp(0.0, high) as usize
            }
        })
        .collect()
}

/// Number of items sharing a slot with an earlier item.
pub(crate) fn collisions(slots: &[usize], m: usize) -> usize {
    let mut used = vec![false; m];
    slots
        .iter()
        .filter(|&&s| std::mem::replace(&mut used[s], true))
        .count()
}

/// Relaxed cost of a graph on a ring: rounded cost plus collision penalty.
#[derive(Debug, Clone, Copy)]
pub struct RelaxedObjective<'a> {
    model: CostModel<'a>,
    penalty_scale: u64,
}

impl<'a> RelaxedObjective<'a> {
    /// Objective for `graph` on `m` slots. Fails if the ring cannot hold
    /// every item.
    pub fn new<T>(graph: &'a RingGraph<T>, m: usize) -> Result<Self, RingError> {
        check_ring(graph.num_nodes(), m)?;
        let max_weight = graph.max_weight().max(1);
        Ok(Self {
            model: graph.cost_model(m),
            penalty_scale: m as u64 * max_weight,
        })
    }

    /// Penalty charged per collision.
    pub fn penalty_scale(&self) -> u64 {
        self.penalty_scale
    }

    /// One `(0, M - 1)` bound per item.
    pub fn bounds(&self) -> Vec<(f64, f64)> {
        let high = self.model.slots().saturating_sub(1) as f64;
        vec![(0.0, high); self.model.num_nodes()]
    }

    /// Penalized cost of a real vector.
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        let slots = round_to_slots(x, self.model.slots());
        let penalty = collisions(&slots, self.model.slots()) as u64 * self.penalty_scale;
        (self.model.cost(&slots) + penalty) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    #[test]
    fn test_round_and_clip() {
        assert_eq!(
            round_to_slots(&[-3.2, 0.49, 0.5, 2.6, 99.0, f64::NAN], 5),
            vec![0, 0, 1, 3, 4, 0]
        );
    }

    #[test]
    fn test_collisions() {
        assert_eq!(collisions(&[0, 1, 2], 4), 0);
        assert_eq!(collisions(&[1, 1, 1, 3], 4), 2);
    }

    #[test]
    fn test_evaluate_injective_has_no_penalty() {
        let graph = build_graph(&[1, 2, 1, 3, 1, 4, 1, 2]);
        let objective = RelaxedObjective::new(&graph, 10).unwrap();
        assert_eq!(objective.penalty_scale(), 40);
        assert_eq!(objective.evaluate(&[0.1, 2.2, 2.9, 0.8]), 16.0);
    }

    #[test]
    fn test_evaluate_penalizes_collisions() {
        let graph = build_graph(&[1, 2, 1, 3, 1, 4, 1, 2]);
        let objective = RelaxedObjective::new(&graph, 10).unwrap();
        // All four items on slot 0: zero distance, three collisions.
        assert_eq!(objective.evaluate(&[0.0, 0.0, 0.0, 0.0]), 120.0);
    }

    #[test]
    fn test_bounds() {
        let graph = build_graph(&['a', 'b', 'c']);
        let objective = RelaxedObjective::new(&graph, 6).unwrap();
        assert_eq!(objective.bounds(), vec![(0.0, 5.0); 3]);
    }

    #[test]
    fn test_rejects_undersized_ring() {
        let graph = build_graph(&[1, 2, 3]);
        assert_eq!(
            RelaxedObjective::new(&graph, 0).unwrap_err(),
            RingError::RingTooSmall { items: 3, slots: 0 }
        );
        assert!(RelaxedObjective::new(&graph, 2).is_err());
        assert!(RelaxedObjective::new(&graph, 3).is_ok());
    }

    #[test]
    fn test_penalty_scale_without_edges() {
        let graph = build_graph(&[42]);
        assert_eq!(RelaxedObjective::new(&graph, 3).unwrap().penalty_scale(), 3);
    }
}
