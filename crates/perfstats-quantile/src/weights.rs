//! Harrell-Davis weight computation
//!
//! One weight per sorted order statistic, obtained as the Beta(a, b) CDF
//! mass falling across that element's normalized cumulative-weight
//! interval. The vector always sums to 1 (within floating tolerance) and
//! is recomputed per call; nothing is cached across samples or
//! probabilities.

use crate::beta::regularized_incomplete_beta;
use perfstats_core::{Error, Probability, Result, Sample};

/// Compute the Harrell-Davis weight vector for a quantile evaluation.
///
/// For an unweighted sample the cumulative boundaries of element `i`
/// (1-indexed) are `(i-1)/n` and `i/n`; weighted samples use cumulative
/// normalized weights instead. Shape parameters derive from the total
/// weight, which equals the element count for unweighted samples.
pub fn harrell_davis_weights(sample: &Sample, probability: Probability) -> Result<Vec<f64>> {
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    let total_weight = sample.total_weight();
    if total_weight == 0.0 {
        // All-zero weights carry no observation mass
        return Err(Error::EmptySample);
    }

    let count = sample.len();
    let p = probability.value();

    if count == 1 {
        return Ok(vec![1.0]);
    }
    if p == 0.0 {
        let mut weights = vec![0.0; count];
        weights[0] = 1.0;
        return Ok(weights);
    }
    if p == 1.0 {
        let mut weights = vec![0.0; count];
        weights[count - 1] = 1.0;
        return Ok(weights);
    }

    let a = (total_weight + 1.0) * p;
    let b = (total_weight + 1.0) * (1.0 - p);

    let mut weights = Vec::with_capacity(count);
    let mut cdf_right = 0.0;
    let mut cumulative = 0.0;

    for &weight in sample.sorted_weights() {
        let cdf_left = cdf_right;
        cumulative += weight / total_weight;
        cdf_right = regularized_incomplete_beta(cumulative.min(1.0), a, b)?;
        weights.push(cdf_right - cdf_left);
    }

    Ok(weights)
}
