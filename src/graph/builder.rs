//! Sequence to graph conversion.

use super::types::{IndexedEdge, RingGraph};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Builds the cyclic adjacency graph of a usage sequence.
///
/// Every element is paired with its successor and the last element with
/// the first. Pairs are unordered and counted; the endpoint seen first in
/// the sequence becomes [`Edge::u`](super::Edge::u).
///
/// A single-element sequence yields one node and no edges: its
/// wrap-around pair would be a self loop, which never carries cost.
/// Longer sequences keep self loops from consecutive repeats.
///
/// # Examples
///
/// ```
/// use ring_placement::graph::build_graph;
///
/// let graph = build_graph(&[1, 2, 1, 3, 1, 4, 1, 2]);
/// assert_eq!(graph.nodes(), &[1, 2, 3, 4]);
///
/// let edges: Vec<_> = graph.edges().iter().map(|e| (e.u, e.v, e.weight)).collect();
/// assert_eq!(edges, vec![(1, 2, 4), (1, 3, 2), (1, 4, 2)]);
/// ```
pub fn build_graph<T>(sequence: &[T]) -> RingGraph<T>
where
    T: Eq + Hash + Clone,
{
    let mut nodes = Vec::new();
    let mut index: HashMap<T, usize> = HashMap::new();

    let ids: Vec<usize> = sequence
        .iter()
        .map(|item| {
            *index.entry(item.clone()).or_insert_with(|| {
                nodes.push(item.clone());
                nodes.len() - 1
            })
        })
        .collect();

    let mut indexed: Vec<IndexedEdge> = Vec::new();
    if ids.len() >= 2 {
        let mut position: HashMap<(usize, usize), usize> = HashMap::new();
        let successors = ids.iter().skip(1).chain(ids.first());

        for (&a, &b) in ids.iter().zip(successors) {
            let key = (a.min(b), a.max(b));
            match position.entry(key) {
                Entry::Occupied(slot) => indexed[*slot.get()].weight += 1,
                Entry::Vacant(slot) => {
                    slot.insert(indexed.len());
                    indexed.push(IndexedEdge {
                        u: key.0,
                        v: key.1,
                        weight: 1,
                    });
                }
            }
        }
    }

    RingGraph::from_parts(nodes, index, indexed)
}
