//! Natural cubic spline interpolation bounded to the knot range.
//! The spline is fitted through the knots with zero second derivative at both ends and is
//! never extrapolated: query positions outside the knots are dropped from the result.
//!
//! # Example
//! ```
//! use bounded_spline::interpolate;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let positions = [0.0, 1.0, 2.0];
//! let values = [0.0, 1.0, 2.0];
//!
//! let result = interpolate(&positions, &values, 0.0, 1.0, &[0.5, 1.5]).unwrap();
//!
//! assert!(result.is_complete());
//! assert_approx_eq!(0.5, result.values()[0], 1e-9);
//! assert_approx_eq!(1.5, result.values()[1], 1e-9);
//! ```

mod config;
mod error;
mod interpolate;
mod knot;
mod segment;
mod spline;

pub use config::SplineParameters;
pub use error::{Result, SplineError};
pub use interpolate::{interpolate, interpolate_with, Coverage, Interpolation};
pub use knot::{KnotSet, Orientation};
pub use segment::SplineSample;
pub use spline::NaturalSpline;
