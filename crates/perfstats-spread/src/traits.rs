//! Core traits for dispersion estimation

use perfstats_core::{Result, Sample};

/// A scale (dispersion) estimator over a [`Sample`].
///
/// Produces a single non-negative value normalized to be directly
/// comparable with the standard deviation of normally distributed data.
/// Implementations are stateless and safe to share across threads;
/// consumers take one as a generic strategy parameter.
pub trait DispersionEstimator {
    /// Estimate the dispersion of a sample.
    ///
    /// Fails with [`perfstats_core::Error::EmptySample`] for samples with
    /// no observations.
    fn estimate(&self, sample: &Sample) -> Result<f64>;

    /// Name of this estimator
    fn name(&self) -> &'static str;

    /// Whether the estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;
}
