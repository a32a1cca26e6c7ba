//! SA execution loop.

use super::config::SaConfig;
use super::types::{Placement, SlotMove};
use crate::cost::CostModel;
use crate::error::{check_ring, RingError};
use crate::graph::RingGraph;
use crate::random::{create_rng, resolve_seed};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// Slot per node index of the best assignment found.
    pub slots: Vec<usize>,

    /// Cost of the best assignment.
    pub cost: u64,

    /// Iterations executed, no-ops included.
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Iterations whose drawn move was impossible.
    pub noop_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost sampled every `history_interval` iterations.
    pub cost_history: Vec<u64>,

    /// Seed the run used.
    pub seed: u64,
}

/// Bound on item types for multi-start runs: `Sync` when chains run on
/// the rayon pool (`parallel` feature), no requirement otherwise.
#[cfg(feature = "parallel")]
pub trait ChainItem: Sync {}

#[cfg(feature = "parallel")]
impl<T: Sync + ?Sized> ChainItem for T {}

/// Bound on item types for multi-start runs: `Sync` when chains run on
/// the rayon pool (`parallel` feature), no requirement otherwise.
#[cfg(not(feature = "parallel"))]
pub trait ChainItem {}

#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> ChainItem for T {}

/// Executes Simulated Annealing over injective slot assignments.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA for `graph` on a ring of `m` slots.
    pub fn run<T>(graph: &RingGraph<T>, m: usize, config: &SaConfig) -> Result<SaResult, RingError> {
        Self::run_with_cancel(graph, m, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The flag is checked once per iteration; when set, the best
    /// assignment found so far is returned with `cancelled == true`.
    #[tracing::instrument(level = "debug", skip(graph, config, cancel))]
    pub fn run_with_cancel<T>(
        graph: &RingGraph<T>,
        m: usize,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult, RingError> {
        config.validate().map_err(RingError::InvalidConfig)?;
        let k = graph.num_nodes();
        check_ring(k, m)?;

        let seed = resolve_seed(config.seed);
        if k == 0 {
            return Ok(SaResult {
                slots: Vec::new(),
                cost: 0,
                iterations: 0,
                final_temperature: config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
                noop_moves: 0,
                cancelled: false,
                cost_history: vec![0],
                seed,
            });
        }

        let mut rng = create_rng(seed);
        let model = graph.cost_model(m);

        let mut placement = Placement::random(k, m, &mut rng);
        let mut current_cost = model.cost(placement.slots());
        let mut best = placement.slots().to_vec();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut noop_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history = Vec::with_capacity(config.iterations / config.history_interval + 2);
        cost_history.push(best_cost);

        for _ in 0..config.iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            match placement.propose(&mut rng) {
                None => noop_moves += 1,
                Some(mv) => {
                    let before = affected_cost(&model, placement.slots(), mv);
                    placement.apply(mv);
                    let after = affected_cost(&model, placement.slots(), mv);
                    let delta = after as f64 - before as f64;

                    // Metropolis acceptance criterion
                    let accept = if delta < 0.0 {
                        improving_moves += 1;
                        true
                    } else if temperature > 0.0 {
                        rng.random::<f64>() < (-delta / temperature).exp()
                    } else {
                        false
                    };

                    if accept {
                        // Edges between swapped nodes appear in both sums and cancel.
                        current_cost = current_cost + after - before;
                        accepted_moves += 1;

                        if current_cost < best_cost {
                            best.copy_from_slice(placement.slots());
                            best_cost = current_cost;
                        }
                    } else {
                        placement.undo(mv);
                    }
                }
            }

            total_iterations += 1;
            temperature *= config.alpha;

            if total_iterations.is_multiple_of(config.history_interval) {
                cost_history.push(best_cost);
            }
        }

        if cost_history.last() != Some(&best_cost) {
            cost_history.push(best_cost);
        }

        tracing::debug!(
            k,
            m,
            cost = best_cost,
            iterations = total_iterations,
            accepted_moves,
            improving_moves,
            noop_moves,
            cancelled,
            "annealing finished"
        );

        Ok(SaResult {
            slots: best,
            cost: best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            noop_moves,
            cancelled,
            cost_history,
            seed,
        })
    }

    /// Runs `chains` independent SA chains and returns the cheapest result.
    ///
    /// Chain `i` uses seed `base + i`, where `base` is the configured seed
    /// (or a random one). Ties go to the lowest chain index. With the
    /// `parallel` feature the chains run on the rayon thread pool.
    pub fn run_multi_start<T: ChainItem>(
        graph: &RingGraph<T>,
        m: usize,
        config: &SaConfig,
        chains: usize,
    ) -> Result<SaResult, RingError> {
        if chains == 0 {
            return Err(RingError::InvalidConfig("chains must be positive".into()));
        }
        let base = resolve_seed(config.seed);
        let configs: Vec<SaConfig> = (0..chains)
            .map(|i| config.clone().with_seed(base.wrapping_add(i as u64)))
            .collect();

        let results = run_chains(graph, m, &configs)?;

        let mut best: Option<SaResult> = None;
        for result in results {
            if best.as_ref().is_none_or(|b| result.cost < b.cost) {
                best = Some(result);
            }
        }
        let best = best.ok_or_else(|| RingError::InvalidConfig("no chain produced a result".into()))?;
        tracing::debug!(chains, cost = best.cost, seed = best.seed, "multi-start finished");
        Ok(best)
    }
}

/// Cost of the edges a move can change, evaluated on `slots`.
#[inline]
fn affected_cost(model: &CostModel<'_>, slots: &[usize], mv: SlotMove) -> u64 {
    match mv {
        SlotMove::Swap { a, b } => model.node_cost(slots, a) + model.node_cost(slots, b),
        SlotMove::Relocate { node, .. } => model.node_cost(slots, node),
    }
}

#[cfg(feature = "parallel")]
fn run_chains<T: ChainItem>(
    graph: &RingGraph<T>,
    m: usize,
    configs: &[SaConfig],
) -> Result<Vec<SaResult>, RingError> {
    use rayon::prelude::*;

    configs
        .par_iter()
        .map(|config| SaRunner::run(graph, m, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_chains<T>(
    graph: &RingGraph<T>,
    m: usize,
    configs: &[SaConfig],
) -> Result<Vec<SaResult>, RingError> {
    configs
        .iter()
        .map(|config| SaRunner::run(graph, m, config))
        .collect()
}
