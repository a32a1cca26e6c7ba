//! Graph data types.

use crate::cost::CostModel;
use std::collections::HashMap;
use std::hash::Hash;

/// An undirected weighted adjacency between two items.
///
/// `u` is the endpoint that occurs first in the source sequence.
/// `u == v` is a self loop produced by consecutive repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<T> {
    /// First endpoint.
    pub u: T,
    /// Second endpoint.
    pub v: T,
    /// Number of times the pair is adjacent in the cyclic sequence.
    pub weight: u64,
}

/// An edge expressed in node indices, as consumed by the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedEdge {
    /// Index of the first endpoint in [`RingGraph::nodes`].
    pub u: usize,
    /// Index of the second endpoint in [`RingGraph::nodes`].
    pub v: usize,
    /// Adjacency count.
    pub weight: u64,
}

impl IndexedEdge {
    /// Returns the endpoint opposite to `node`.
    #[inline]
    pub fn other(&self, node: usize) -> usize {
        if self.u == node {
            self.v
        } else {
            self.u
        }
    }

    /// Whether both endpoints are the same node.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

/// Distinct items of a sequence and their weighted cyclic adjacencies.
///
/// Built once by [`build_graph`](super::build_graph) and immutable
/// afterwards. Solvers work on node indices: an assignment is a
/// `Vec<usize>` where entry `i` is the slot of `nodes()[i]`.
#[derive(Debug, Clone)]
pub struct RingGraph<T> {
    nodes: Vec<T>,
    index: HashMap<T, usize>,
    edges: Vec<Edge<T>>,
    indexed: Vec<IndexedEdge>,
    incident: Vec<Vec<usize>>,
}

impl<T: Eq + Hash + Clone> RingGraph<T> {
    pub(crate) fn from_parts(
        nodes: Vec<T>,
        index: HashMap<T, usize>,
        indexed: Vec<IndexedEdge>,
    ) -> Self {
        let edges = indexed
            .iter()
            .map(|e| Edge {
                u: nodes[e.u].clone(),
                v: nodes[e.v].clone(),
                weight: e.weight,
            })
            .collect();

        let mut incident = vec![Vec::new(); nodes.len()];
        for (i, e) in indexed.iter().enumerate() {
            incident[e.u].push(i);
            if !e.is_self_loop() {
                incident[e.v].push(i);
            }
        }

        Self {
            nodes,
            index,
            edges,
            indexed,
            incident,
        }
    }

    /// Index of `item` in [`nodes`](Self::nodes), if present.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.index.get(item).copied()
    }

    /// Sum of the weights of all edges touching `item`, self loops counted
    /// twice. Zero for unknown items.
    pub fn incident_weight(&self, item: &T) -> u64 {
        let Some(node) = self.index_of(item) else {
            return 0;
        };
        self.incident[node]
            .iter()
            .map(|&i| {
                let e = &self.indexed[i];
                if e.is_self_loop() {
                    2 * e.weight
                } else {
                    e.weight
                }
            })
            .sum()
    }

    /// Converts an index-based assignment into an item-keyed map.
    ///
    /// # Panics
    /// Panics if `slots.len()` differs from the node count.
    pub fn mapping_from_slots(&self, slots: &[usize]) -> HashMap<T, usize> {
        assert_eq!(slots.len(), self.nodes.len(), "one slot per node required");
        self.nodes.iter().cloned().zip(slots.iter().copied()).collect()
    }

    /// Converts an item-keyed map into an index-based assignment.
    ///
    /// # Panics
    /// Panics if `mapping` lacks any node.
    pub fn slots_from_mapping(&self, mapping: &HashMap<T, usize>) -> Vec<usize> {
        self.nodes.iter().map(|node| mapping[node]).collect()
    }
}

impl<T> RingGraph<T> {
    /// Distinct items in first-occurrence order.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Weighted edges in first-encounter order.
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// Edges in node-index form.
    pub fn indexed_edges(&self) -> &[IndexedEdge] {
        &self.indexed
    }

    /// Indices into [`indexed_edges`](Self::indexed_edges) touching `node`.
    /// A self loop appears once.
    pub fn incident_edges(&self, node: usize) -> &[usize] {
        &self.incident[node]
    }

    /// Number of distinct items.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the source sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Largest edge weight, or 0 without edges.
    pub fn max_weight(&self) -> u64 {
        self.indexed.iter().map(|e| e.weight).max().unwrap_or(0)
    }

    /// Sum of all edge weights. Equals the sequence length for sequences
    /// of two or more elements.
    pub fn total_weight(&self) -> u64 {
        self.indexed.iter().map(|e| e.weight).sum()
    }

    /// Cost model of this graph on a ring of `slots` positions.
    pub fn cost_model(&self, slots: usize) -> CostModel<'_> {
        CostModel::new(&self.indexed, &self.incident, slots)
    }
}
