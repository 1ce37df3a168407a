//! Double-MAD outlier detector
//!
//! A single MAD-based fence assumes symmetric spread, so on skewed data
//! one inflated MAD hides true outliers on the compressed side. The
//! double-MAD detector instead splits the sample at the median and
//! estimates dispersion separately for each side, giving asymmetric
//! fences that track the tails independently.

use crate::traits::OutlierDetector;
use perfstats_core::{Error, Result, Sample};
use perfstats_quantile::{HarrellDavis, QuantileEstimator};
use perfstats_spread::DispersionEstimator;

/// Outlier detector with independent lower/upper MAD fences
#[derive(Debug, Clone, Copy)]
pub struct DoubleMad {
    median: f64,
    lower_fence: f64,
    upper_fence: f64,
}

impl DoubleMad {
    /// Default fence multiplier
    pub const DEFAULT_K: f64 = 3.0;

    /// Build a detector with the default multiplier.
    ///
    /// `mad_estimator` computes the per-side dispersion; pick
    /// [`perfstats_spread::simple_normalized_mad`] for classic behavior or
    /// [`perfstats_spread::harrell_davis_normalized_mad`] for smoother
    /// fences on small samples.
    pub fn new<D: DispersionEstimator>(sample: &Sample, mad_estimator: &D) -> Result<Self> {
        Self::with_k(sample, mad_estimator, Self::DEFAULT_K)
    }

    /// Build a detector with an explicit fence multiplier `k`.
    pub fn with_k<D: DispersionEstimator>(
        sample: &Sample,
        mad_estimator: &D,
        k: f64,
    ) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }

        let median = HarrellDavis.median(sample)?;

        // Elements equal to the median land in both halves, so each half
        // keeps enough mass for a dispersion estimate even when the
        // sample piles up on the median.
        let mut lower_values = Vec::new();
        let mut lower_weights = Vec::new();
        let mut upper_values = Vec::new();
        let mut upper_weights = Vec::new();
        for (&value, &weight) in sample.values().iter().zip(sample.weights()) {
            if value <= median {
                lower_values.push(value);
                lower_weights.push(weight);
            }
            if value >= median {
                upper_values.push(value);
                upper_weights.push(weight);
            }
        }

        let (lower_half, upper_half) = if sample.is_weighted() {
            (
                Sample::weighted(lower_values, lower_weights)?,
                Sample::weighted(upper_values, upper_weights)?,
            )
        } else {
            (Sample::new(lower_values)?, Sample::new(upper_values)?)
        };

        let mad_lower = mad_estimator.estimate(&lower_half)?;
        let mad_upper = mad_estimator.estimate(&upper_half)?;

        Ok(DoubleMad {
            median,
            lower_fence: median - k * mad_lower,
            upper_fence: median + k * mad_upper,
        })
    }

    /// The Harrell-Davis median the fences are anchored on
    pub fn median(&self) -> f64 {
        self.median
    }
}

impl OutlierDetector for DoubleMad {
    fn lower_fence(&self) -> f64 {
        self.lower_fence
    }

    fn upper_fence(&self) -> f64 {
        self.upper_fence
    }
}
