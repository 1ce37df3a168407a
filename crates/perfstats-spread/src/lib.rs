//! Robust dispersion estimation
//!
//! Normalized median-absolute-deviation estimators: a robust drop-in for
//! the standard deviation, pluggable over the quantile estimator that
//! computes the underlying medians.
//!
//! # Example
//!
//! ```rust
//! use perfstats_core::Sample;
//! use perfstats_spread::{simple_normalized_mad, DispersionEstimator};
//!
//! let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! let spread = simple_normalized_mad().estimate(&sample).unwrap();
//! assert!((spread - 1.4826022185056018).abs() < 1e-12);
//! ```

pub mod mad;
pub mod traits;

pub use mad::{
    harrell_davis_normalized_mad, simple_normalized_mad, HarrellDavisNormalizedMad,
    NormalizedMad, SimpleNormalizedMad, MAD_CONSISTENCY_FACTOR,
};
pub use traits::DispersionEstimator;
