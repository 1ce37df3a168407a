//! Robust statistical estimators for noisy performance measurements
//!
//! Benchmark timings are small, skewed, heavy-tailed samples; the
//! estimators here are picked to stay reliable under exactly those
//! conditions:
//!
//! - [`quantile`](perfstats_quantile): Harrell-Davis quantile estimation
//!   with Maritz-Jarrett confidence intervals
//! - [`spread`](perfstats_spread): normalized median-absolute-deviation
//!   dispersion estimation
//! - [`outlier`](perfstats_outlier): double-MAD and Tukey fence detectors
//! - [`effect`](perfstats_effect): Cohen's d and shift/ratio functions
//!
//! # Example
//!
//! ```rust
//! use perfstats::prelude::*;
//!
//! let values = vec![
//!     11.9, 12.1, 12.0, 12.2, 11.8, 12.0, 12.1, 11.9, 12.3, 12.1, 48.0,
//! ];
//! let timings = Sample::new(values.clone()).unwrap();
//!
//! let median = HarrellDavis.median(&timings).unwrap();
//! assert!((median - 12.07).abs() < 0.01);
//!
//! let detector = DoubleMad::new(&timings, &harrell_davis_normalized_mad()).unwrap();
//! assert_eq!(detector.outliers(&values), vec![48.0]);
//! ```

pub use perfstats_core as core;
pub use perfstats_effect as effect;
pub use perfstats_outlier as outlier;
pub use perfstats_quantile as quantile;
pub use perfstats_spread as spread;

/// Convenient imports for the common estimation workflow
pub mod prelude {
    pub use perfstats_core::{Error, Moments, Probability, Result, Sample};
    pub use perfstats_effect::{cohen_d, QuantileCompareFunction, RatioFunction, ShiftFunction};
    pub use perfstats_outlier::{DoubleMad, OutlierDetector, Tukey};
    pub use perfstats_quantile::{
        ConfidenceInterval, HarrellDavis, MaritzJarrett, QuantileEstimator, Simple,
    };
    pub use perfstats_spread::{
        harrell_davis_normalized_mad, simple_normalized_mad, DispersionEstimator,
        HarrellDavisNormalizedMad, NormalizedMad, SimpleNormalizedMad,
    };
}
