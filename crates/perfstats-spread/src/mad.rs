//! Normalized median absolute deviation estimators
//!
//! MAD, the median of absolute deviations from the median, survives up
//! to 50% contamination, and scaling it by 1/Φ⁻¹(0.75) makes it agree
//! with the standard deviation on normally distributed data. Which
//! quantile estimator computes the two medians is pluggable: the simple
//! order-statistic estimator reproduces textbook MAD values, the
//! Harrell-Davis estimator trades that for smoothness on small samples.

use crate::traits::DispersionEstimator;
use perfstats_core::{Result, Sample};
use perfstats_quantile::{HarrellDavis, QuantileEstimator, Simple};

/// Consistency factor 1/Φ⁻¹(0.75) matching MAD to the standard deviation
/// under normality
pub const MAD_CONSISTENCY_FACTOR: f64 = 1.4826022185056018;

/// Normalized MAD estimator generic over the quantile estimator used for
/// both the median and the median of deviations.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedMad<Q> {
    quantile_estimator: Q,
    consistency_factor: f64,
}

/// Normalized MAD backed by the simple order-statistic estimator
pub type SimpleNormalizedMad = NormalizedMad<Simple>;

/// Normalized MAD backed by the Harrell-Davis estimator
pub type HarrellDavisNormalizedMad = NormalizedMad<HarrellDavis>;

impl<Q: QuantileEstimator> NormalizedMad<Q> {
    /// Create with the standard consistency factor
    pub fn new(quantile_estimator: Q) -> Self {
        Self::with_factor(quantile_estimator, MAD_CONSISTENCY_FACTOR)
    }

    /// Create with a custom consistency factor
    pub fn with_factor(quantile_estimator: Q, consistency_factor: f64) -> Self {
        Self {
            quantile_estimator,
            consistency_factor,
        }
    }
}

/// Convenience constructor for the simple-estimator variant
pub fn simple_normalized_mad() -> SimpleNormalizedMad {
    NormalizedMad::new(Simple)
}

/// Convenience constructor for the Harrell-Davis variant
pub fn harrell_davis_normalized_mad() -> HarrellDavisNormalizedMad {
    NormalizedMad::new(HarrellDavis)
}

impl<Q: QuantileEstimator> DispersionEstimator for NormalizedMad<Q> {
    fn estimate(&self, sample: &Sample) -> Result<f64> {
        let median = self.quantile_estimator.median(sample)?;

        // Deviations inherit the observations' weights
        let deviations: Vec<f64> = sample.values().iter().map(|v| (v - median).abs()).collect();
        let deviation_sample = if sample.is_weighted() {
            Sample::weighted(deviations, sample.weights().to_vec())?
        } else {
            Sample::new(deviations)?
        };

        let mad = self.quantile_estimator.median(&deviation_sample)?;
        Ok(mad * self.consistency_factor)
    }

    fn name(&self) -> &'static str {
        "normalized MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}
