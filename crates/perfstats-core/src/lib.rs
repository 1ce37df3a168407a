//! Core value types for robust performance statistics
//!
//! This crate provides the validated inputs every perfstats estimator
//! consumes:
//!
//! - [`Sample`]: an immutable, optionally weighted collection of
//!   observations with a cached sorted view
//! - [`Probability`]: a scalar validated into `[0, 1]`
//! - [`Moments`]: elementary mean/variance computation
//! - [`Error`]/[`Result`]: the unified error type shared by the workspace
//!
//! # Example
//!
//! ```rust
//! use perfstats_core::{Probability, Sample};
//!
//! let sample = Sample::new(vec![12.5, 11.9, 13.1, 45.0]).unwrap();
//! let median = Probability::HALF;
//! assert_eq!(sample.sorted_values()[0], 11.9);
//! assert_eq!(median.value(), 0.5);
//! ```

pub mod error;
pub mod moments;
pub mod probability;
pub mod sample;

pub use error::{Error, Result};
pub use moments::Moments;
pub use probability::Probability;
pub use sample::Sample;
