//! Ring distance and item-keyed cost evaluation.

use crate::graph::Edge;
use std::collections::HashMap;
use std::hash::Hash;

/// Shorter-arc distance between slots `i` and `j` on a ring of `m` slots.
///
/// Both indices must lie in `0..m`. The result never exceeds `m / 2`.
///
/// ```
/// use ring_placement::cost::circular_distance;
///
/// assert_eq!(circular_distance(0, 9, 10), 1);
/// assert_eq!(circular_distance(2, 7, 10), 5);
/// ```
#[inline]
pub fn circular_distance(i: usize, j: usize, m: usize) -> usize {
    let d = i.abs_diff(j);
    d.min(m - d)
}

/// Total weighted circular distance of an item-keyed assignment.
///
/// # Panics
/// Panics if `mapping` lacks an item referenced by `edges`.
pub fn cost<T>(mapping: &HashMap<T, usize>, edges: &[Edge<T>], m: usize) -> u64
where
    T: Eq + Hash,
{
    edges
        .iter()
        .map(|e| e.weight * circular_distance(mapping[&e.u], mapping[&e.v], m) as u64)
        .sum()
}

/// Shifts every slot by `offset` around the ring.
pub fn rotate(slots: &[usize], offset: usize, m: usize) -> Vec<usize> {
    slots.iter().map(|&s| (s + offset % m) % m).collect()
}

/// Mirrors every slot (`s -> -s mod m`).
pub fn reflect(slots: &[usize], m: usize) -> Vec<usize> {
    slots.iter().map(|&s| (m - s) % m).collect()
}
