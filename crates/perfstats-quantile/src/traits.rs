//! Core traits for quantile estimation

use perfstats_core::{Probability, Result, Sample};

/// A quantile estimator over a [`Sample`].
///
/// Implementations are stateless value objects, safe to share across
/// threads and cheap to construct at every call site. Consumers that need
/// a pluggable estimator (dispersion estimators, outlier detectors,
/// quantile-comparison functions) take one as a generic strategy
/// parameter.
pub trait QuantileEstimator {
    /// Estimate the quantile at `probability`.
    ///
    /// Fails with [`perfstats_core::Error::EmptySample`] for samples with
    /// no observations.
    fn quantile(&self, sample: &Sample, probability: Probability) -> Result<f64>;

    /// Estimate the median
    fn median(&self, sample: &Sample) -> Result<f64> {
        self.quantile(sample, Probability::HALF)
    }

    /// Whether the estimator honors per-element weights
    fn supports_weighted_samples(&self) -> bool {
        false
    }
}
