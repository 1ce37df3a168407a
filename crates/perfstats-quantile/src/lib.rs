//! Robust quantile estimation for performance measurements
//!
//! This crate provides the Harrell-Davis quantile estimator, a smooth
//! estimate built from every order statistic via Beta-distribution
//! weights, together with the classic order-statistic estimator and
//! Maritz-Jarrett confidence intervals.
//!
//! # Example
//!
//! ```rust
//! use perfstats_core::{Probability, Sample};
//! use perfstats_quantile::{HarrellDavis, MaritzJarrett, QuantileEstimator};
//!
//! let sample = Sample::new(vec![0.0, 25.0, 50.0, 75.0, 100.0]).unwrap();
//! let median = HarrellDavis.median(&sample).unwrap();
//! assert!((median - 50.0).abs() < 1e-9);
//!
//! let mj = MaritzJarrett::new(&sample, Probability::HALF).unwrap();
//! let ci = mj.confidence_interval(Probability::new(0.95).unwrap());
//! assert!(ci.contains(median));
//! ```

pub mod beta;
pub mod confidence;
pub mod harrell_davis;
pub mod simple;
pub mod traits;
pub mod weights;

pub use beta::regularized_incomplete_beta;
pub use confidence::{ConfidenceInterval, MaritzJarrett};
pub use harrell_davis::HarrellDavis;
pub use simple::Simple;
pub use traits::QuantileEstimator;
pub use weights::harrell_davis_weights;
