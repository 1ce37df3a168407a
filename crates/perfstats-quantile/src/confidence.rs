//! Maritz-Jarrett confidence intervals for Harrell-Davis quantiles
//!
//! Based on the method described in:
//! Maritz, J.S. and Jarrett, R.G. (1978). "A note on estimating the
//! variance of the sample median." Journal of the American Statistical
//! Association.
//!
//! The Harrell-Davis weight vector doubles as an inference device: the
//! weighted first and second moments of the order statistics give the
//! point estimate and its standard error, and a normal approximation
//! turns those into a two-sided interval. The approximation is a
//! large-sample one, so correctness is validated by coverage over
//! repeated sampling rather than by exact values.

use crate::weights::harrell_davis_weights;
use perfstats_core::{Probability, Result, Sample};
use statrs::distribution::{ContinuousCDF, Normal};

/// Confidence interval around a quantile estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Quantile point estimate
    pub estimate: f64,
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// Confidence level the interval was built for
    pub level: Probability,
}

impl ConfidenceInterval {
    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether a value falls inside the interval
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Half-width of the interval
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }
}

/// Maritz-Jarrett interval estimator for one (sample, probability) pair.
///
/// Construction computes the weighted moments once; intervals at any
/// number of confidence levels can then be read off without touching the
/// sample again.
#[derive(Debug, Clone, Copy)]
pub struct MaritzJarrett {
    estimate: f64,
    standard_error: f64,
}

impl MaritzJarrett {
    /// Build the estimator from the Harrell-Davis weight vector of
    /// `sample` at `probability`.
    ///
    /// Fails with [`perfstats_core::Error::EmptySample`] on empty input.
    pub fn new(sample: &Sample, probability: Probability) -> Result<Self> {
        let weights = harrell_davis_weights(sample, probability)?;

        let mut m1 = 0.0;
        let mut m2 = 0.0;
        for (weight, value) in weights.iter().zip(sample.sorted_values()) {
            m1 += weight * value;
            m2 += weight * value * value;
        }

        Ok(MaritzJarrett {
            estimate: m1,
            standard_error: (m2 - m1 * m1).max(0.0).sqrt(),
        })
    }

    /// The quantile point estimate (the weighted first moment)
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    /// The Maritz-Jarrett standard error
    pub fn standard_error(&self) -> f64 {
        self.standard_error
    }

    /// Two-sided interval at `level` under the normal approximation
    pub fn confidence_interval(&self, level: Probability) -> ConfidenceInterval {
        let alpha = 1.0 - level.value();
        let normal = Normal::new(0.0, 1.0).unwrap();
        let z = normal.inverse_cdf(1.0 - alpha / 2.0);
        let margin = z * self.standard_error;

        ConfidenceInterval {
            estimate: self.estimate,
            lower: self.estimate - margin,
            upper: self.estimate + margin,
            level,
        }
    }
}
