//! Regularized incomplete beta function
//!
//! The CDF of a Beta(a, b) distribution, used to turn order-statistic
//! positions into Harrell-Davis weights. Shape parameters grow linearly
//! with the sample size, so the evaluation has to stay stable well into
//! the thousands. The continued fraction below handles that range, with
//! the symmetry relation picking whichever branch converges fast.
//!
//! Reference: Press et al. (2007), *Numerical Recipes*, 3rd ed., §6.4.

use perfstats_core::{Error, Result};

/// Relative tolerance for the continued fraction
const EPS: f64 = 1e-15;
/// Iteration cap; exhaustion is an internal invariant violation
const MAX_ITERATIONS: usize = 300;

/// Regularized incomplete beta function `I_x(a, b)`.
///
/// Requires `x ∈ [0, 1]` and positive shape parameters; callers construct
/// shapes from validated probabilities, so violations are programming
/// errors and assert. Fails only with [`Error::NoConvergence`] if the
/// continued fraction exhausts its iteration budget, which does not happen
/// for valid inputs.
pub fn regularized_incomplete_beta(x: f64, a: f64, b: f64) -> Result<f64> {
    assert!(a > 0.0 && b > 0.0, "shape parameters must be positive");
    assert!((0.0..=1.0).contains(&x), "x must be in [0, 1]");

    if x == 0.0 {
        return Ok(0.0);
    }
    if x == 1.0 {
        return Ok(1.0);
    }

    let ln_prefix = a * x.ln() + b * (1.0 - x).ln() - ln_beta(a, b);

    // Symmetry relation I_x(a,b) = 1 - I_{1-x}(b,a): evaluate whichever
    // side the continued fraction converges fast on.
    if x < (a + 1.0) / (a + b + 2.0) {
        Ok(ln_prefix.exp() * continued_fraction(x, a, b)? / a)
    } else {
        Ok(1.0 - ln_prefix.exp() * continued_fraction(1.0 - x, b, a)? / b)
    }
}

/// Log of the beta function: `ln B(a, b) = ln Γ(a) + ln Γ(b) − ln Γ(a+b)`.
fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Lanczos (g = 7) approximation of `ln Γ(x)` for positive arguments,
/// with the reflection formula below 0.5.
fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS[1..].iter().enumerate() {
        sum += c / (x + i as f64 + 1.0);
    }

    let t = x + G + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Continued fraction for the incomplete beta function, evaluated with the
/// modified Lentz algorithm.
fn continued_fraction(x: f64, a: f64, b: f64) -> Result<f64> {
    const TINY: f64 = 1e-30;

    let clamp = |v: f64| if v.abs() < TINY { TINY } else { v };

    let mut c = 1.0;
    let mut d = 1.0 / clamp(1.0 - (a + b) * x / (a + 1.0));
    let mut h = d;

    for m in 1..=MAX_ITERATIONS {
        let m = m as f64;

        // Even step
        let numerator = m * (b - m) * x / ((a + 2.0 * m - 1.0) * (a + 2.0 * m));
        d = 1.0 / clamp(1.0 + numerator * d);
        c = clamp(1.0 + numerator / c);
        h *= d * c;

        // Odd step
        let numerator = -(a + m) * (a + b + m) * x / ((a + 2.0 * m) * (a + 2.0 * m + 1.0));
        d = 1.0 / clamp(1.0 + numerator * d);
        c = clamp(1.0 + numerator / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPS {
            return Ok(h);
        }
    }

    Err(Error::NoConvergence {
        iterations: MAX_ITERATIONS,
    })
}
