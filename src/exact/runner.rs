//! Exhaustive enumeration loop.

use super::config::ExactConfig;
use crate::error::{check_ring, RingError};
use crate::graph::RingGraph;

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactResult {
    /// Optimal slot per node index.
    pub slots: Vec<usize>,

    /// Optimal cost.
    pub cost: u64,

    /// Number of assignments evaluated.
    pub evaluated: u64,
}

/// Executes the exhaustive search.
///
/// Subsets are visited in lexicographic order and, within a subset,
/// permutations of the node indices in lexicographic order. Among equal
/// costs the first assignment visited wins.
pub struct ExactRunner;

impl ExactRunner {
    /// Finds a minimum-cost injective assignment of `graph` onto `m` slots.
    #[tracing::instrument(level = "debug", skip(graph, config))]
    pub fn run<T>(
        graph: &RingGraph<T>,
        m: usize,
        config: &ExactConfig,
    ) -> Result<ExactResult, RingError> {
        let k = graph.num_nodes();
        check_ring(k, m)?;
        if k > config.max_items {
            return Err(RingError::TooManyItems {
                items: k,
                max: config.max_items,
            });
        }
        if k == 0 {
            return Ok(ExactResult {
                slots: Vec::new(),
                cost: 0,
                evaluated: 0,
            });
        }

        let model = graph.cost_model(m);
        let mut subset: Vec<usize> = (0..k).collect();
        let mut perm: Vec<usize> = Vec::with_capacity(k);
        let mut slots = vec![0usize; k];

        let mut best_slots = Vec::new();
        let mut best_cost = u64::MAX;
        let mut evaluated = 0u64;

        loop {
            // Subsets after the first one not starting at 0 never do again.
            if config.fix_first && subset[0] != 0 {
                break;
            }

            perm.clear();
            perm.extend(0..k);
            loop {
                for (&node, &slot) in perm.iter().zip(&subset) {
                    slots[node] = slot;
                }
                let cost = model.cost(&slots);
                evaluated += 1;
                if cost < best_cost {
                    best_cost = cost;
                    best_slots.clone_from(&slots);
                }

                if !next_permutation(&mut perm) || (config.fix_first && perm[0] != 0) {
                    break;
                }
            }

            if !next_combination(&mut subset, m) {
                break;
            }
        }

        tracing::debug!(k, m, cost = best_cost, evaluated, "exact search finished");

        Ok(ExactResult {
            slots: best_slots,
            cost: best_cost,
            evaluated,
        })
    }

    /// Number of assignments [`run`](Self::run) evaluates for `k` items on
    /// `m` slots, or `None` if it overflows `u64`.
    pub fn enumeration_size(k: usize, m: usize, fix_first: bool) -> Option<u64> {
        if k > m {
            return Some(0);
        }
        if k == 0 {
            return Some(1);
        }
        if fix_first {
            binomial(m - 1, k - 1)?.checked_mul(factorial(k - 1)?)
        } else {
            binomial(m, k)?.checked_mul(factorial(k)?)
        }
    }
}

/// Advances `c` to the next k-subset of `0..n` in lexicographic order.
fn next_combination(c: &mut [usize], n: usize) -> bool {
    let k = c.len();
    let Some(i) = (0..k).rev().find(|&i| c[i] < n - k + i) else {
        return false;
    };
    c[i] += 1;
    for j in i + 1..k {
        c[j] = c[j - 1] + 1;
    }
    true
}

/// Advances `p` to the next permutation in lexicographic order.
fn next_permutation(p: &mut [usize]) -> bool {
    let Some(i) = (1..p.len()).rev().find(|&i| p[i - 1] < p[i]) else {
        return false;
    };
    let pivot = i - 1;
    let Some(j) = (i..p.len()).rev().find(|&j| p[j] > p[pivot]) else {
        return false;
    };
    p.swap(pivot, j);
    p[i..].reverse();
    true
}

fn binomial(n: usize, k: usize) -> Option<u64> {
    let k = k.min(n - k);
    let mut r: u128 = 1;
    for i in 0..k {
        r = r * (n - i) as u128 / (i + 1) as u128;
        if r > u64::MAX as u128 {
            return None;
        }
    }
    Some(r as u64)
}

fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, x| acc.checked_mul(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    #[test]
    fn test_next_combination_order() {
        let mut c = vec![0, 1];
        let mut seen = vec![c.clone()];
        while next_combination(&mut c, 4) {
            seen.push(c.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn test_next_permutation_count() {
        let mut p = vec![0, 1, 2, 3];
        let mut count = 1;
        while next_permutation(&mut p) {
            count += 1;
        }
        assert_eq!(count, 24);
        assert_eq!(p, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_tool_sequence_optimum() {
        let graph = build_graph(&[1, 2, 1, 3, 1, 4, 1, 2]);
        let result = ExactRunner::run(&graph, 4, &ExactConfig::default()).unwrap();
        assert_eq!(result.cost, 10);
        assert_eq!(graph.cost_model(4).cost(&result.slots), 10);
        assert_eq!(result.evaluated, 24);
    }

    #[test]
    fn test_first_minimum_wins() {
        let graph = build_graph(&["a", "b"]);
        let result = ExactRunner::run(&graph, 3, &ExactConfig::default()).unwrap();
        assert_eq!(result.cost, 2);
        assert_eq!(result.slots, vec![0, 1]);
    }

    #[test]
    fn test_fix_first_keeps_optimum() {
        let sequences: [&[u32]; 3] = [
            &[1, 2, 1, 3, 1, 4, 1, 2],
            &[1, 2, 3, 4, 5, 1, 3, 5],
            &[3, 1, 4, 1, 5, 9, 2, 6],
        ];
        for seq in sequences {
            let graph = build_graph(seq);
            let m = graph.num_nodes() + 2;
            let full = ExactRunner::run(&graph, m, &ExactConfig::default()).unwrap();
            let pinned =
                ExactRunner::run(&graph, m, &ExactConfig::default().with_fix_first(true)).unwrap();
            assert_eq!(full.cost, pinned.cost, "sequence {seq:?}");
            assert_eq!(pinned.slots[0], 0);
            assert!(pinned.evaluated < full.evaluated);
        }
    }

    #[test]
    fn test_evaluated_matches_enumeration_size() {
        let graph = build_graph(&[1, 2, 3, 1, 4]);
        for fix_first in [false, true] {
            let config = ExactConfig::default().with_fix_first(fix_first);
            let result = ExactRunner::run(&graph, 6, &config).unwrap();
            assert_eq!(
                Some(result.evaluated),
                ExactRunner::enumeration_size(4, 6, fix_first)
            );
        }
    }

    #[test]
    fn test_enumeration_size_overflow() {
        assert_eq!(ExactRunner::enumeration_size(8, 28, false), Some(3_108_105 * 40_320));
        assert_eq!(ExactRunner::enumeration_size(40, 80, false), None);
        assert_eq!(ExactRunner::enumeration_size(0, 5, false), Some(1));
    }

    #[test]
    fn test_rejects_large_and_undersized() {
        let graph = build_graph(&[1, 2, 3]);
        assert_eq!(
            ExactRunner::run(&graph, 2, &ExactConfig::default()).unwrap_err(),
            RingError::RingTooSmall { items: 3, slots: 2 }
        );
        assert_eq!(
            ExactRunner::run(&graph, 5, &ExactConfig::default().with_max_items(2)).unwrap_err(),
            RingError::TooManyItems { items: 3, max: 2 }
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = build_graph::<u8>(&[]);
        let result = ExactRunner::run(&graph, 0, &ExactConfig::default()).unwrap();
        assert_eq!(result.cost, 0);
        assert!(result.slots.is_empty());
    }
}
