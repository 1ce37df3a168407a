//! Fence-based outlier detection for measurement samples
//!
//! Detectors classify values against a lower/upper fence pair computed
//! once from a sample: [`DoubleMad`] builds asymmetric fences from
//! per-side MAD estimates (the right default for skewed timing data),
//! [`Tukey`] provides the classic interquartile-range rule.
//!
//! # Example
//!
//! ```rust
//! use perfstats_core::Sample;
//! use perfstats_outlier::{DoubleMad, OutlierDetector};
//! use perfstats_spread::simple_normalized_mad;
//!
//! let values = vec![1.0, 4.0, 4.0, 4.0, 5.0, 5.0, 5.0, 5.0, 7.0, 7.0, 8.0, 10.0, 16.0, 30.0];
//! let sample = Sample::new(values.clone()).unwrap();
//! let detector = DoubleMad::new(&sample, &simple_normalized_mad()).unwrap();
//! assert_eq!(detector.outliers(&values), vec![1.0, 16.0, 30.0]);
//! ```

pub mod double_mad;
pub mod traits;
pub mod tukey;

pub use double_mad::DoubleMad;
pub use traits::OutlierDetector;
pub use tukey::Tukey;
