use crate::config::SplineParameters;
use crate::error::{Result, SplineError};
use crate::knot::KnotSet;
use crate::spline::NaturalSpline;

/// Whether every requested position produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    Complete,
    Partial { discarded: usize },
}

/// Values of the in-range queries, in the order the queries were given.
///
/// The values do not correspond index by index to the requested positions when some
/// positions were outside the knot range; only retained positions have an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    values: Vec<f64>,
    requested: usize,
}

impl Interpolation {
    pub(crate) fn new(values: Vec<f64>, requested: usize) -> Self {
        Interpolation { values, requested }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn retained_count(&self) -> usize {
        self.values.len()
    }

    pub fn requested_count(&self) -> usize {
        self.requested
    }

    pub fn discarded_count(&self) -> usize {
        self.requested - self.values.len()
    }

    pub fn coverage(&self) -> Coverage {
        match self.discarded_count() {
            0 => Coverage::Complete,
            discarded => Coverage::Partial { discarded },
        }
    }

    pub fn is_complete(&self) -> bool {
        self.coverage() == Coverage::Complete
    }

    /// Values when every query was in range.
    ///
    /// # Errors
    /// [SplineError::SomePointsOutOfRange] for a partial result.
    pub fn into_complete(self) -> Result<Vec<f64>> {
        match self.coverage() {
            Coverage::Complete => Ok(self.values),
            Coverage::Partial { .. } => Err(SplineError::SomePointsOutOfRange {
                retained: self.retained_count(),
                requested: self.requested,
            }),
        }
    }
}

/// Fits a natural cubic spline through `(knot_positions, knot_values)` and evaluates it at every
/// query inside the knot range.
///
/// # Example
/// ```
/// use bounded_spline::{interpolate, Coverage};
/// use assert_approx_eq::assert_approx_eq;
///
/// let result = interpolate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], 0.0, 1.0, &[-1.0, 1.0, 3.0]).unwrap();
///
/// assert_eq!(1, result.retained_count());
/// assert_approx_eq!(1.0, result.values()[0], 1e-9);
/// assert_eq!(Coverage::Partial { discarded: 2 }, result.coverage());
/// ```
/// # Errors
/// - [SplineError::ConfigurationUnsupported] unless `tension` is 0.0 and `weight` is 1.0,
/// - [SplineError::InvalidKnots] for knots the spline cannot be fitted through,
/// - [SplineError::AllocationFailure] when a buffer cannot be reserved.
///
/// Out-of-range queries are not an error here, see [Interpolation::coverage] and
/// [Interpolation::into_complete].
pub fn interpolate(
    knot_positions: &[f64],
    knot_values: &[f64],
    tension: f64,
    weight: f64,
    query_positions: &[f64],
) -> Result<Interpolation> {
    interpolate_with(
        &SplineParameters::new(tension, weight),
        knot_positions,
        knot_values,
        query_positions,
    )
}

/// [interpolate] with the shape parameters passed as [SplineParameters].
pub fn interpolate_with(
    parameters: &SplineParameters,
    knot_positions: &[f64],
    knot_values: &[f64],
    query_positions: &[f64],
) -> Result<Interpolation> {
    parameters.validate()?;

    let knots = KnotSet::new(knot_positions, knot_values)?;
    let spline = NaturalSpline::fit(knots)?;
    spline.interpolate_within(query_positions)
}
