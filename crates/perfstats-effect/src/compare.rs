//! Quantile-comparison functions
//!
//! Two samples are compared quantile by quantile: estimate the same
//! quantile in both and combine the pair. The shift function answers
//! "how much slower is B than A at this point of the distribution", the
//! ratio function the multiplicative version of the same question.

use perfstats_core::{Probability, Result, Sample};
use perfstats_quantile::{HarrellDavis, QuantileEstimator};

/// A pointwise combination of two samples' quantiles.
pub trait QuantileCompareFunction {
    /// Combine the two quantile estimates
    fn value(&self, quantile_a: f64, quantile_b: f64) -> f64;

    /// Evaluate at one probability with an explicit quantile estimator
    fn compare_with<Q: QuantileEstimator>(
        &self,
        quantile_estimator: &Q,
        a: &Sample,
        b: &Sample,
        probability: Probability,
    ) -> Result<f64> {
        let qa = quantile_estimator.quantile(a, probability)?;
        let qb = quantile_estimator.quantile(b, probability)?;
        Ok(self.value(qa, qb))
    }

    /// Evaluate at one probability with the Harrell-Davis estimator
    fn compare(&self, a: &Sample, b: &Sample, probability: Probability) -> Result<f64> {
        self.compare_with(&HarrellDavis, a, b, probability)
    }

    /// Evaluate across several probabilities with the Harrell-Davis
    /// estimator
    fn compare_many(
        &self,
        a: &Sample,
        b: &Sample,
        probabilities: &[Probability],
    ) -> Result<Vec<f64>> {
        probabilities
            .iter()
            .map(|&p| self.compare(a, b, p))
            .collect()
    }
}

/// Shift function: `quantile_b - quantile_a`
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftFunction;

impl QuantileCompareFunction for ShiftFunction {
    fn value(&self, quantile_a: f64, quantile_b: f64) -> f64 {
        quantile_b - quantile_a
    }
}

/// Ratio function: `quantile_b / quantile_a`
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioFunction;

impl QuantileCompareFunction for RatioFunction {
    fn value(&self, quantile_a: f64, quantile_b: f64) -> f64 {
        quantile_b / quantile_a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use perfstats_core::Error;
    use perfstats_quantile::Simple;

    fn sample(values: &[f64]) -> Sample {
        Sample::new(values.to_vec()).unwrap()
    }

    fn p(value: f64) -> Probability {
        Probability::new(value).unwrap()
    }

    #[test]
    fn test_shift_of_translated_sample() {
        let a = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = sample(&[11.0, 12.0, 13.0, 14.0, 15.0]);
        // Translation shifts every quantile by the same amount
        for q in [0.25, 0.5, 0.75] {
            assert_relative_eq!(
                ShiftFunction.compare(&a, &b, p(q)).unwrap(),
                10.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_ratio_of_scaled_sample() {
        let a = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = sample(&[2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_relative_eq!(
            RatioFunction.compare(&a, &b, Probability::HALF).unwrap(),
            2.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_explicit_estimator() {
        let a = sample(&[1.0, 2.0, 3.0, 4.0]);
        let b = sample(&[2.0, 3.0, 4.0, 5.0]);
        assert_relative_eq!(
            ShiftFunction
                .compare_with(&Simple, &a, &b, Probability::HALF)
                .unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_compare_many() {
        let a = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = sample(&[6.0, 7.0, 8.0, 9.0, 10.0]);
        let probabilities = [p(0.25), p(0.5), p(0.75)];
        let shifts = ShiftFunction.compare_many(&a, &b, &probabilities).unwrap();
        assert_eq!(shifts.len(), 3);
        for shift in shifts {
            assert_relative_eq!(shift, 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_empty_sample_propagates() {
        let a = sample(&[]);
        let b = sample(&[1.0, 2.0]);
        assert_eq!(
            ShiftFunction.compare(&a, &b, Probability::HALF).unwrap_err(),
            Error::EmptySample
        );
    }
}
