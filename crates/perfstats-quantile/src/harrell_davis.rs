//! Harrell-Davis quantile estimator
//!
//! Estimates a quantile as a weighted average of *all* order statistics,
//! with weights drawn from a Beta distribution whose shape follows the
//! sample size. The smoothing makes the estimate far less brittle on
//! small samples than interpolation between two order statistics, which
//! is why the dispersion and confidence-interval estimators elsewhere in
//! this workspace default to it.

use crate::traits::QuantileEstimator;
use crate::weights::harrell_davis_weights;
use perfstats_core::{Error, Probability, Result, Sample};

/// Harrell-Davis quantile estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct HarrellDavis;

impl QuantileEstimator for HarrellDavis {
    fn quantile(&self, sample: &Sample, probability: Probability) -> Result<f64> {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }

        let sorted = sample.sorted_values();
        if sorted.len() == 1 {
            return Ok(sorted[0]);
        }
        // Every quantile of a constant sample is that constant; skipping
        // the weighted sum keeps the result exact rather than within an
        // ulp, which downstream median-equality partitioning relies on.
        if sorted[0] == sorted[sorted.len() - 1] {
            return Ok(sorted[0]);
        }

        // Exact boundary handling; the Beta shape parameters would
        // degenerate at p = 0 and p = 1.
        let p = probability.value();
        if p == 0.0 {
            return Ok(sorted[0]);
        }
        if p == 1.0 {
            return Ok(sorted[sorted.len() - 1]);
        }

        let weights = harrell_davis_weights(sample, probability)?;
        Ok(weights
            .iter()
            .zip(sorted)
            .map(|(w, v)| w * v)
            .sum())
    }

    fn supports_weighted_samples(&self) -> bool {
        true
    }
}
