#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SplineError};

/// Shape parameters of the spline.
/// - `tension` - damping factor, only `0.0` is supported,
/// - `weight` - derivative weighting factor, only `1.0` is supported.
///
/// Any other combination has no defined mapping onto the natural boundary conditions
/// and is rejected by [SplineParameters::validate].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplineParameters {
    pub tension: f64,
    pub weight: f64,
}

impl SplineParameters {
    pub const NATURAL_TENSION: f64 = 0.0;
    pub const NATURAL_WEIGHT: f64 = 1.0;

    pub fn new(tension: f64, weight: f64) -> Self {
        SplineParameters { tension, weight }
    }

    /// Returns true when both parameters match the natural spline within `f64::EPSILON`.
    /// NaN never matches.
    pub fn is_natural(&self) -> bool {
        (self.tension - Self::NATURAL_TENSION).abs() <= f64::EPSILON
            && (self.weight - Self::NATURAL_WEIGHT).abs() <= f64::EPSILON
    }

    /// # Example
    /// ```
    /// use bounded_spline::SplineParameters;
    ///
    /// assert!(SplineParameters::default().validate().is_ok());
    /// assert!(SplineParameters::new(0.5, 1.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.is_natural() {
            Ok(())
        } else {
            Err(SplineError::ConfigurationUnsupported {
                tension: self.tension,
                weight: self.weight,
            })
        }
    }
}

impl Default for SplineParameters {
    fn default() -> Self {
        SplineParameters {
            tension: Self::NATURAL_TENSION,
            weight: Self::NATURAL_WEIGHT,
        }
    }
}
