//! Effect sizes and quantile comparison for sample pairs
//!
//! Thin arithmetic layers over the moment and quantile machinery:
//! Cohen's d for standardized mean differences, and shift/ratio functions
//! for distribution-wide comparisons.
//!
//! # Example
//!
//! ```rust
//! use perfstats_core::{Probability, Sample};
//! use perfstats_effect::{cohen_d, QuantileCompareFunction, ShiftFunction};
//!
//! let before = Sample::new(vec![10.1, 10.4, 9.8, 10.2]).unwrap();
//! let after = Sample::new(vec![12.0, 12.3, 11.9, 12.2]).unwrap();
//!
//! let d = cohen_d(&before, &after).unwrap();
//! assert!(d > 1.0);
//!
//! let shift = ShiftFunction
//!     .compare(&before, &after, Probability::HALF)
//!     .unwrap();
//! assert!(shift > 1.0);
//! ```

pub mod cohen_d;
pub mod compare;

pub use cohen_d::cohen_d;
pub use compare::{QuantileCompareFunction, RatioFunction, ShiftFunction};
