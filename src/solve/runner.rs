//! Orchestration of graph building, reference search and annealing.

use super::config::SolveConfig;
use crate::error::{check_ring, RingError};
use crate::exact::{ExactConfig, ExactRunner};
use crate::graph::{build_graph, RingGraph};
use crate::sa::{ChainItem, SaResult, SaRunner};
use std::collections::HashMap;
use std::hash::Hash;

/// Outcome of [`solve_with_config`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize + Eq + Hash",
        deserialize = "T: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct Solution<T> {
    /// Cost of the returned assignment.
    pub cost: u64,

    /// Items sorted by assigned slot: their arrangement around the ring.
    pub order: Vec<T>,

    /// Slot of every item.
    pub mapping: HashMap<T, usize>,

    /// Optimal cost from the exhaustive reference, when it ran.
    pub exact_cost: Option<u64>,

    /// Statistics of the winning annealing chain.
    pub sa: SaResult,
}

/// Places the items of `sequence` on a ring of `m` slots with default
/// settings, returning the cost and the order of items around the ring.
///
/// ```
/// use ring_placement::solve::solve;
///
/// let (cost, order) = solve(&[1, 2, 1, 4], 5).unwrap();
/// assert_eq!(cost, 4);
/// assert_eq!(order.len(), 3);
/// ```
pub fn solve<T>(sequence: &[T], m: usize) -> Result<(u64, Vec<T>), RingError>
where
    T: Eq + Hash + Clone + ChainItem,
{
    let solution = solve_with_config(sequence, m, &SolveConfig::default())?;
    Ok((solution.cost, solution.order))
}

/// Places the items of `sequence` on a ring of `m` slots.
///
/// The exhaustive reference never changes the result; its cost is only
/// reported in [`Solution::exact_cost`] for comparison.
#[tracing::instrument(level = "debug", skip(sequence, config), fields(len = sequence.len()))]
pub fn solve_with_config<T>(
    sequence: &[T],
    m: usize,
    config: &SolveConfig,
) -> Result<Solution<T>, RingError>
where
    T: Eq + Hash + Clone + ChainItem,
{
    config.validate().map_err(RingError::InvalidConfig)?;
    let graph = build_graph(sequence);
    let k = graph.num_nodes();
    check_ring(k, m)?;

    let exact_cost = if config.run_exact && k <= config.exact_threshold {
        reference_cost(&graph, m, config)?
    } else {
        None
    };

    let sa = SaRunner::run_multi_start(&graph, m, &config.sa, config.chains)?;

    match exact_cost {
        Some(exact) => tracing::info!(
            items = k,
            slots = m,
            exact,
            heuristic = sa.cost,
            "annealing compared against exhaustive optimum"
        ),
        None => tracing::info!(items = k, slots = m, heuristic = sa.cost, "annealing finished"),
    }

    Ok(Solution {
        cost: sa.cost,
        order: derive_order(graph.nodes(), &sa.slots),
        mapping: graph.mapping_from_slots(&sa.slots),
        exact_cost,
        sa,
    })
}

/// Sorts `nodes` by their slot in `slots`.
///
/// # Panics
/// Panics if the slices differ in length.
pub fn derive_order<T: Clone>(nodes: &[T], slots: &[usize]) -> Vec<T> {
    assert_eq!(nodes.len(), slots.len(), "one slot per node required");
    let mut ranked: Vec<usize> = (0..nodes.len()).collect();
    ranked.sort_by_key(|&i| slots[i]);
    ranked.into_iter().map(|i| nodes[i].clone()).collect()
}

fn reference_cost<T>(
    graph: &RingGraph<T>,
    m: usize,
    config: &SolveConfig,
) -> Result<Option<u64>, RingError> {
    let k = graph.num_nodes();
    let size = ExactRunner::enumeration_size(k, m, true);
    if size.is_none_or(|n| n > config.exact_budget) {
        tracing::debug!(k, m, ?size, budget = config.exact_budget, "exhaustive reference skipped");
        return Ok(None);
    }

    let exact_config = ExactConfig::default()
        .with_max_items(config.exact_threshold)
        .with_fix_first(true);
    Ok(Some(ExactRunner::run(graph, m, &exact_config)?.cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::SaConfig;
    use proptest::prelude::*;

    fn seeded(seed: u64) -> SolveConfig {
        SolveConfig::default().with_sa(SaConfig::default().with_iterations(30_000).with_seed(seed))
    }

    fn is_rotation<T: PartialEq>(seq: &[T], target: &[T]) -> bool {
        seq.len() == target.len()
            && (0..target.len().max(1)).any(|shift| {
                (0..seq.len()).all(|i| seq[i] == target[(i + shift) % target.len()])
            })
    }

    fn is_circular_equivalent<T: PartialEq + Clone>(seq: &[T], target: &[T]) -> bool {
        let reversed: Vec<T> = target.iter().rev().cloned().collect();
        is_rotation(seq, target) || is_rotation(seq, &reversed)
    }

    #[test]
    fn test_solve_small_turret() {
        let (cost, order) = solve(&[1, 2, 1, 4], 5).unwrap();
        assert_eq!(cost, 4);
        assert!(is_circular_equivalent(&order, &[4, 1, 2]), "order {order:?}");
    }

    #[test]
    fn test_solve_full_turret_matches_exact() {
        let solution = solve_with_config(&[1, 2, 1, 3, 1, 4, 1, 2], 4, &seeded(42)).unwrap();
        assert_eq!(solution.exact_cost, Some(10));
        assert_eq!(solution.cost, 10);

        // 2 carries the heaviest edge, so it must sit next to 1.
        let pos = |x: u32| solution.order.iter().position(|&y| y == x).unwrap();
        let gap = pos(1).abs_diff(pos(2));
        assert!(gap == 1 || gap == 3, "order {:?}", solution.order);
    }

    #[test]
    fn test_large_instance_skips_exact() {
        let seq = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 1, 15, 16];
        let solution = solve_with_config(&seq, 28, &seeded(7)).unwrap();
        assert_eq!(solution.exact_cost, None);
        assert_eq!(solution.order.len(), 16);
        assert_eq!(solution.mapping.len(), 16);
        assert_eq!(crate::cost::cost(&solution.mapping, build_graph(&seq).edges(), 28), solution.cost);
    }

    #[test]
    fn test_exact_budget_skips_reference() {
        let config = seeded(1).with_exact_budget(0);
        let solution = solve_with_config(&[1, 2, 1, 4], 5, &config).unwrap();
        assert_eq!(solution.exact_cost, None);
    }

    #[test]
    fn test_run_exact_disabled() {
        let config = seeded(1).with_run_exact(false);
        let solution = solve_with_config(&[1, 2, 1, 4], 5, &config).unwrap();
        assert_eq!(solution.exact_cost, None);
        assert_eq!(solution.cost, 4);
    }

    #[test]
    fn test_degenerate_sequences() {
        assert_eq!(solve::<u32>(&[], 0).unwrap(), (0, vec![]));
        assert_eq!(solve(&["T7"], 4).unwrap(), (0, vec!["T7"]));
        assert_eq!(solve(&[3, 3, 3], 1).unwrap(), (0, vec![3]));
    }

    #[test]
    fn test_ring_too_small() {
        assert_eq!(
            solve(&[1, 2, 3], 2).unwrap_err(),
            RingError::RingTooSmall { items: 3, slots: 2 }
        );
    }

    #[test]
    fn test_invalid_config() {
        let config = SolveConfig::default().with_chains(0);
        assert!(matches!(
            solve_with_config(&[1, 2], 2, &config),
            Err(RingError::InvalidConfig(_))
        ));
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn test_solve_accepts_non_sync_items() {
        use std::rc::Rc;

        let seq: Vec<Rc<str>> = ["T1", "T2", "T1", "T4"].into_iter().map(Rc::from).collect();
        let solution = solve_with_config(&seq, 5, &seeded(3)).unwrap();
        assert_eq!(solution.cost, 4);
        assert_eq!(solution.order.len(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_solution_is_serializable() {
        fn assert_serde<S: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<Solution<u32>>();
        assert_serde::<Solution<String>>();
        assert_serde::<SolveConfig>();
    }

    #[test]
    fn test_derive_order() {
        assert_eq!(derive_order(&['a', 'b', 'c'], &[5, 0, 2]), vec!['b', 'c', 'a']);
        assert!(derive_order::<u8>(&[], &[]).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_order_is_permutation_of_nodes(
            seq in prop::collection::vec(0u16..12, 1..30),
            extra in 0usize..10,
            seed in any::<u64>(),
        ) {
            let graph = build_graph(&seq);
            let m = graph.num_nodes() + extra;
            let config = SolveConfig::default()
                .with_run_exact(false)
                .with_sa(SaConfig::default().with_iterations(300).with_seed(seed));

            let solution = solve_with_config(&seq, m, &config).unwrap();
            prop_assert_eq!(solution.order.len(), graph.num_nodes());

            let mut sorted_order = solution.order.clone();
            sorted_order.sort_unstable();
            let mut sorted_nodes = graph.nodes().to_vec();
            sorted_nodes.sort_unstable();
            prop_assert_eq!(sorted_order, sorted_nodes);
        }
    }
}
