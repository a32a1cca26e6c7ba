//! SA configuration.

/// Configuration for the simulated annealing placement search.
///
/// Temperature follows a geometric schedule, `T_{k+1} = alpha * T_k`,
/// applied once per iteration whether or not the iteration produced a move.
///
/// # Examples
///
/// ```
/// use ring_placement::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_iterations(20_000)
///     .with_initial_temperature(2.0)
///     .with_alpha(0.999)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Number of iterations (proposed moves, including no-ops).
    pub iterations: usize,

    /// Initial temperature. Higher values allow more uphill moves early on.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,

    /// Best cost is sampled into the history every this many iterations.
    pub history_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            initial_temperature: 1.0,
            alpha: 0.9999,
            history_interval: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            ));
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 || self.alpha.is_nan() {
            return Err(format!("geometric alpha must be in (0, 1), got {}", self.alpha));
        }
        if self.history_interval == 0 {
            return Err("history_interval must be positive".into());
        }
        Ok(())
    }
}
