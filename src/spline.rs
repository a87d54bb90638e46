use nalgebra::DVector;

use crate::error::{Result, SplineError};
use crate::interpolate::Interpolation;
use crate::knot::KnotSet;
use crate::segment::{CubicSegment, SplineSample};

/// Natural cubic spline (zero second derivative at both end knots) through a [KnotSet].
///
/// The spline owns its second-derivative coefficients and borrows the knots; the
/// coefficients are released when the spline is dropped.
pub struct NaturalSpline<'a> {
    knots: KnotSet<'a>,
    second_derivatives: DVector<f64>,
}

impl<'a> NaturalSpline<'a> {
    /// Solves the tridiagonal continuity system for the second derivative at every knot.
    ///
    /// # Errors
    /// [SplineError::AllocationFailure] when the coefficient or scratch buffer cannot be reserved.
    pub fn fit(knots: KnotSet<'a>) -> Result<Self> {
        let size = knots.len();
        let mut second_derivatives = reserve_buffer(size, "coefficient")?;
        let mut upper_prime = reserve_buffer(size, "tridiagonal scratch")?;
        second_derivatives.resize(size, 0.0);
        upper_prime.resize(size, 0.0);

        // rows 0 and size - 1 pin the end second derivatives to zero
        for i in 1..size - 1 {
            let h0 = knots.position(i) - knots.position(i - 1);
            let h1 = knots.position(i + 1) - knots.position(i);
            let rhs = 6.0
                * ((knots.value(i + 1) - knots.value(i)) / h1
                    - (knots.value(i) - knots.value(i - 1)) / h0);

            let denominator = 2.0 * (h0 + h1) - h0 * upper_prime[i - 1];
            upper_prime[i] = h1 / denominator;
            second_derivatives[i] = (rhs - h0 * second_derivatives[i - 1]) / denominator;
        }

        for i in (1..size - 1).rev() {
            second_derivatives[i] -= upper_prime[i] * second_derivatives[i + 1];
        }

        log::debug!("fitted natural cubic spline through {size} knots");

        Ok(NaturalSpline {
            knots,
            second_derivatives: DVector::from_vec(second_derivatives),
        })
    }

    pub fn knots(&self) -> &KnotSet<'a> {
        &self.knots
    }

    /// Second derivative at each knot, in ascending position order.
    pub fn second_derivatives(&self) -> &DVector<f64> {
        &self.second_derivatives
    }

    /// Value, first and second derivative of the spline at `t`.
    ///
    /// # Example
    /// ```
    /// use bounded_spline::{KnotSet, NaturalSpline};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let knots = KnotSet::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
    /// let spline = NaturalSpline::fit(knots).unwrap();
    ///
    /// let sample = spline.evaluate(0.5).unwrap();
    /// assert_approx_eq!(0.6875, sample.value, 1e-12);
    /// assert!(spline.evaluate(2.5).is_err());
    /// ```
    /// # Errors
    /// [SplineError::OutOfRange] when `t` lies outside the knot range; the spline is never extrapolated.
    pub fn evaluate(&self, t: f64) -> Result<SplineSample> {
        if !self.knots.contains(t) {
            return Err(SplineError::OutOfRange {
                position: t,
                min: self.knots.min(),
                max: self.knots.max(),
            });
        }
        let index = self.knots.find_interval_index(t);
        Ok(self.segment(index).evaluate(t))
    }

    /// Evaluates the spline at every query inside the knot range, in query order.
    /// Queries outside the range are skipped and reported through [Interpolation::coverage].
    ///
    /// # Errors
    /// [SplineError::AllocationFailure] when the result buffer cannot be reserved.
    pub fn interpolate_within(&self, queries: &[f64]) -> Result<Interpolation> {
        let mut values = reserve_buffer(queries.len(), "result")?;
        let mut index = 0;

        for &t in queries {
            if !self.knots.contains(t) {
                continue;
            }
            index = self.knots.find_interval_index_with_hint(index, t);
            values.push(self.segment(index).evaluate(t).value);
        }

        let interpolation = Interpolation::new(values, queries.len());
        if !interpolation.is_complete() {
            log::warn!(
                "{} of {} interpolation points were out of knot range [{}, {}]",
                interpolation.discarded_count(),
                interpolation.requested_count(),
                self.knots.min(),
                self.knots.max()
            );
        }
        Ok(interpolation)
    }

    fn segment(&self, index: usize) -> CubicSegment {
        CubicSegment::new(
            self.knots.position(index),
            self.knots.position(index + 1),
            self.knots.value(index),
            self.knots.value(index + 1),
            self.second_derivatives[index],
            self.second_derivatives[index + 1],
        )
    }
}

/// Empty buffer with room for `capacity` values, reserved without aborting on exhaustion.
fn reserve_buffer(capacity: usize, buffer: &'static str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(capacity)
        .map_err(|_| SplineError::AllocationFailure { buffer })?;
    Ok(values)
}
