//! Tukey fence outlier detector
//!
//! The classic boxplot rule: fences at `Q1 - k·IQR` and `Q3 + k·IQR`.
//! Symmetric in spread, so it under-reports on skewed data where
//! [`crate::DoubleMad`] keeps working; it stays here as the familiar
//! baseline. The quantile estimator computing the quartiles is pluggable.

use crate::traits::OutlierDetector;
use perfstats_core::{Error, Probability, Result, Sample};
use perfstats_quantile::QuantileEstimator;

/// Outlier detector with interquartile-range fences
#[derive(Debug, Clone, Copy)]
pub struct Tukey {
    lower_fence: f64,
    upper_fence: f64,
}

impl Tukey {
    /// Default fence multiplier
    pub const DEFAULT_K: f64 = 1.5;

    /// Build a detector with the default multiplier.
    pub fn new<Q: QuantileEstimator>(sample: &Sample, quantile_estimator: &Q) -> Result<Self> {
        Self::with_k(sample, quantile_estimator, Self::DEFAULT_K)
    }

    /// Build a detector with an explicit fence multiplier `k`.
    pub fn with_k<Q: QuantileEstimator>(
        sample: &Sample,
        quantile_estimator: &Q,
        k: f64,
    ) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }

        let q1 = quantile_estimator.quantile(sample, Probability::new(0.25)?)?;
        let q3 = quantile_estimator.quantile(sample, Probability::new(0.75)?)?;
        let iqr = q3 - q1;

        Ok(Tukey {
            lower_fence: q1 - k * iqr,
            upper_fence: q3 + k * iqr,
        })
    }
}

impl OutlierDetector for Tukey {
    fn lower_fence(&self) -> f64 {
        self.lower_fence
    }

    fn upper_fence(&self) -> f64 {
        self.upper_fence
    }
}
