//! Orchestrator configuration.

use crate::sa::SaConfig;

/// Configuration for [`solve_with_config`](super::solve_with_config).
///
/// # Examples
///
/// ```
/// use ring_placement::sa::SaConfig;
/// use ring_placement::solve::SolveConfig;
///
/// let config = SolveConfig::default()
///     .with_run_exact(false)
///     .with_sa(SaConfig::default().with_seed(42))
///     .with_chains(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    /// Largest item count for which the exhaustive reference runs.
    pub exact_threshold: usize,

    /// Whether to run the exhaustive reference at all.
    pub run_exact: bool,

    /// Upper bound on assignments the exhaustive reference may evaluate.
    /// Larger instances skip it even below `exact_threshold`.
    pub exact_budget: u64,

    /// Annealing parameters.
    pub sa: SaConfig,

    /// Independent annealing chains; the cheapest wins.
    pub chains: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            exact_threshold: 8,
            run_exact: true,
            exact_budget: 5_000_000,
            sa: SaConfig::default(),
            chains: 1,
        }
    }
}

impl SolveConfig {
    pub fn with_exact_threshold(mut self, n: usize) -> Self {
        self.exact_threshold = n;
        self
    }

    pub fn with_run_exact(mut self, run: bool) -> Self {
        self.run_exact = run;
        self
    }

    pub fn with_exact_budget(mut self, budget: u64) -> Self {
        self.exact_budget = budget;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_chains(mut self, n: usize) -> Self {
        self.chains = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.chains == 0 {
            return Err("chains must be positive".into());
        }
        self.sa.validate()
    }
}
