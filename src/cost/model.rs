//! Index-based cost evaluation for solver hot loops.

use super::distance::circular_distance;
use crate::graph::IndexedEdge;

/// Borrowed view of a graph's edges on a ring of fixed size.
///
/// Assignments are slices where entry `i` is the slot of node `i`.
/// Obtain one with [`RingGraph::cost_model`](crate::graph::RingGraph::cost_model).
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    edges: &'a [IndexedEdge],
    incident: &'a [Vec<usize>],
    slots: usize,
}

impl<'a> CostModel<'a> {
    pub(crate) fn new(edges: &'a [IndexedEdge], incident: &'a [Vec<usize>], slots: usize) -> Self {
        Self {
            edges,
            incident,
            slots,
        }
    }

    /// Ring size.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Number of nodes the model expects in an assignment.
    pub fn num_nodes(&self) -> usize {
        self.incident.len()
    }

    /// Weighted distance of one edge.
    #[inline]
    pub fn edge_cost(&self, edge: &IndexedEdge, assignment: &[usize]) -> u64 {
        edge.weight * circular_distance(assignment[edge.u], assignment[edge.v], self.slots) as u64
    }

    /// Total cost of an assignment.
    pub fn cost(&self, assignment: &[usize]) -> u64 {
        self.edges.iter().map(|e| self.edge_cost(e, assignment)).sum()
    }

    /// Cost of the edges touching `node`.
    ///
    /// Moving `node` alone changes the total by exactly the change of this
    /// value. Swapping two nodes changes it by the change of the sum of
    /// both nodes' values, since edges between them keep their distance.
    #[inline]
    pub fn node_cost(&self, assignment: &[usize], node: usize) -> u64 {
        self.incident[node]
            .iter()
            .map(|&i| self.edge_cost(&self.edges[i], assignment))
            .sum()
    }
}
