//! Optimizer trait for the relaxed backend.

/// A box-constrained continuous minimizer.
///
/// Implementations receive the penalized objective and one `(low, high)`
/// bound per item, and return the best point they found. The returned
/// vector must have one coordinate per bound.
pub trait ContinuousOptimizer {
    fn minimize(&self, objective: &dyn Fn(&[f64]) -> f64, bounds: &[(f64, f64)]) -> Vec<f64>;
}
