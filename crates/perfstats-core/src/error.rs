//! Error types for robust performance statistics
//!
//! Provides a unified error type shared by all perfstats crates.

use thiserror::Error;

/// Errors produced by sample construction and estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An estimator requiring at least one observation received none
    #[error("Cannot estimate from an empty sample")]
    EmptySample,

    /// An operation requires more observations than the sample provides
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Probability constructed outside [0, 1]
    #[error("Probability {0} must be in [0, 1]")]
    InvalidProbability(f64),

    /// Sample constructed with a negative or non-finite weight
    #[error("Weight {weight} at index {index} must be a non-negative finite number")]
    InvalidWeight { index: usize, weight: f64 },

    /// Weighted sample constructed from slices of different lengths
    #[error("Sample has {values} values but {weights} weights")]
    SampleLengthMismatch { values: usize, weights: usize },

    /// Sample constructed with a NaN or infinite observation
    #[error("Sample values must be finite")]
    NonFinite,

    /// Weighted sample passed to an estimator that only handles unit weights
    #[error("{0} does not support weighted samples")]
    WeightedSamplesNotSupported(&'static str),

    /// Continued-fraction evaluation exhausted its iteration budget.
    /// This is an internal invariant violation, not an input error.
    #[error("Incomplete beta function did not converge after {iterations} iterations")]
    NoConvergence { iterations: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that a slice holds at least one observation
    pub fn check_non_empty<T>(data: &[T]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }
        Ok(())
    }

    /// Check that a slice holds at least `expected` observations
    pub fn check_at_least<T>(data: &[T], expected: usize) -> Result<()> {
        if data.len() < expected {
            return Err(Error::InsufficientData {
                expected,
                actual: data.len(),
            });
        }
        Ok(())
    }
}
