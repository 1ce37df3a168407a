//! Elementary sample moments

use crate::error::{Error, Result};
use crate::sample::Sample;

/// Mean, variance and standard deviation of a sample's values.
///
/// The variance uses the unbiased n−1 denominator; a single-element sample
/// has variance 0. Weights are not consulted here; moment-based consumers
/// (effect sizes) operate on unweighted groups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl Moments {
    /// Compute moments from a sample, failing on empty input.
    pub fn from_sample(sample: &Sample) -> Result<Moments> {
        let values = sample.values();
        Error::check_non_empty(values)?;

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = if values.len() == 1 {
            0.0
        } else {
            values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0)
        };

        Ok(Moments {
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}
