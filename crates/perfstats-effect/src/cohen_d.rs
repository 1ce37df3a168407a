//! Cohen's d effect size
//!
//! The difference between two group means expressed in units of the
//! pooled standard deviation, so effects from measurements on different
//! scales stay comparable.

use perfstats_core::{Error, Moments, Result, Sample};

/// Cohen's d between two samples: `(mean(y) - mean(x)) / s_pooled`.
///
/// Both samples need at least 2 observations for the pooled variance;
/// fails with [`Error::InsufficientData`] otherwise.
pub fn cohen_d(x: &Sample, y: &Sample) -> Result<f64> {
    Error::check_at_least(x.values(), 2)?;
    Error::check_at_least(y.values(), 2)?;

    let nx = x.len() as f64;
    let ny = y.len() as f64;
    let mx = Moments::from_sample(x)?;
    let my = Moments::from_sample(y)?;

    let pooled =
        (((nx - 1.0) * mx.variance + (ny - 1.0) * my.variance) / (nx + ny - 2.0)).sqrt();
    Ok((my.mean - mx.mean) / pooled)
}
