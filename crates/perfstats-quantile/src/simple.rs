//! Simple order-statistic quantile estimator
//!
//! Linear interpolation between adjacent order statistics (Hyndman-Fan
//! type 7, the default of most statistics packages). Cheap and familiar,
//! but every estimate depends on at most two observations; prefer
//! [`crate::HarrellDavis`] when the sample is small or noisy.

use crate::traits::QuantileEstimator;
use perfstats_core::{Error, Probability, Result, Sample};

/// Type 7 order-statistic quantile estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple;

impl QuantileEstimator for Simple {
    fn quantile(&self, sample: &Sample, probability: Probability) -> Result<f64> {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }
        if sample.is_weighted() {
            return Err(Error::WeightedSamplesNotSupported(
                "simple quantile estimator",
            ));
        }

        let sorted = sample.sorted_values();
        let n = sorted.len();
        if n == 1 {
            return Ok(sorted[0]);
        }

        let h = (n - 1) as f64 * probability.value();
        let index = h.floor() as usize;
        if index + 1 >= n {
            return Ok(sorted[n - 1]);
        }
        Ok(sorted[index] + (h - index as f64) * (sorted[index + 1] - sorted[index]))
    }
}
