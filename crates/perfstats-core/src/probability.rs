//! Validated probability values

use crate::error::{Error, Result};
use std::fmt;

/// A probability: a finite value in `[0, 1]`, validated at construction.
///
/// Quantile positions and confidence levels are both probabilities, so the
/// same type guards both call sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    pub const ZERO: Probability = Probability(0.0);
    pub const HALF: Probability = Probability(0.5);
    pub const ONE: Probability = Probability(1.0);

    /// Create a probability, rejecting values outside `[0, 1]` (and NaN).
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidProbability(value));
        }
        Ok(Probability(value))
    }

    /// The underlying value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The complementary probability `1 - p`
    pub fn complement(&self) -> Probability {
        Probability(1.0 - self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Probability::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> f64 {
        p.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
