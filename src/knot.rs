use crate::error::{Result, SplineError};

const UNIFORM_SPACING_TOLERANCE: f64 = 1e-12;

/// Direction in which the caller supplied knot positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Ascending,
    Descending,
}

/// Knots through which the spline passes, borrowed from the caller.
/// - `positions` - strictly monotonic knot positions, ascending or descending,
/// - `values` - knot values paired with `positions`.
///
/// Indexing through [KnotSet::position] and [KnotSet::value] is always in ascending
/// position order, whatever the order of the caller's slices. A descending knot set
/// is therefore fitted and evaluated exactly like its ascending reversal.
#[derive(Debug, Clone, Copy)]
pub struct KnotSet<'a> {
    positions: &'a [f64],
    values: &'a [f64],
    orientation: Orientation,
    is_knot_spacing_uniform: bool,
}

impl<'a> KnotSet<'a> {
    /// # Example
    /// ```
    /// use bounded_spline::{KnotSet, Orientation};
    ///
    /// let knots = KnotSet::new(&[2.0, 1.0, 0.0], &[0.0, 1.0, 0.0]).unwrap();
    /// assert_eq!(Orientation::Descending, knots.orientation());
    /// assert_eq!(0.0, knots.position(0));
    /// assert!(knots.contains(1.5));
    /// ```
    /// # Errors
    /// [SplineError::InvalidKnots] when the slices differ in length, hold fewer than 2 knots,
    /// contain a non-finite position, the positions are not strictly monotonic or their
    /// range overflows `f64`.
    pub fn new(positions: &'a [f64], values: &'a [f64]) -> Result<Self> {
        if positions.len() != values.len() {
            return Err(SplineError::InvalidKnots(format!(
                "{} positions but {} values",
                positions.len(),
                values.len()
            )));
        }
        if positions.len() < 2 {
            return Err(SplineError::InvalidKnots(
                "spline must have at least 2 knots".to_string(),
            ));
        }
        if positions.iter().any(|t| !t.is_finite()) {
            return Err(SplineError::InvalidKnots(
                "knot positions must be finite".to_string(),
            ));
        }

        let orientation = if positions[positions.len() - 1] < positions[0] {
            Orientation::Descending
        } else {
            Orientation::Ascending
        };

        let mut knots = KnotSet {
            positions,
            values,
            orientation,
            is_knot_spacing_uniform: false,
        };
        knots.check_knots_spacing()?;
        Ok(knots)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Position of the `index`-th knot counted in ascending position order.
    pub fn position(&self, index: usize) -> f64 {
        self.positions[self.storage_index(index)]
    }

    /// Value of the `index`-th knot counted in ascending position order.
    pub fn value(&self, index: usize) -> f64 {
        self.values[self.storage_index(index)]
    }

    pub fn min(&self) -> f64 {
        self.position(0)
    }

    pub fn max(&self) -> f64 {
        self.position(self.len() - 1)
    }

    pub fn is_knot_spacing_uniform(&self) -> bool {
        self.is_knot_spacing_uniform
    }

    /// Closed interval membership between the first and last knot, for either orientation.
    pub fn contains(&self, t: f64) -> bool {
        let first = self.positions[0];
        let last = self.positions[self.len() - 1];
        (first <= t && t <= last) || (last <= t && t <= first)
    }

    /// Index `i` of the interval `[position(i), position(i + 1)]` holding `t`.
    /// `t` must be inside the knot range.
    pub(crate) fn find_interval_index(&self, t: f64) -> usize {
        if self.is_knot_spacing_uniform {
            self.find_interval_index_uniform(t)
        } else {
            self.find_interval_index_bisect(t)
        }
    }

    /// Same as [KnotSet::find_interval_index] but checks `index_hint` and the interval after it
    /// first, which is the common case for monotone query batches.
    pub(crate) fn find_interval_index_with_hint(&self, index_hint: usize, t: f64) -> usize {
        let number_of_intervals = self.len() - 1;
        if index_hint < number_of_intervals && self.is_in_interval_range(index_hint, t) {
            return index_hint;
        }
        if index_hint + 1 < number_of_intervals && self.is_in_interval_range(index_hint + 1, t) {
            return index_hint + 1;
        }
        self.find_interval_index(t)
    }

    fn storage_index(&self, index: usize) -> usize {
        match self.orientation {
            Orientation::Ascending => index,
            Orientation::Descending => self.len() - 1 - index,
        }
    }

    fn check_knots_spacing(&mut self) -> Result<()> {
        let spacing: Vec<f64> = (0..self.len() - 1)
            .map(|i| self.position(i + 1) - self.position(i))
            .collect();

        if spacing.iter().any(|h| *h <= 0.0) {
            return Err(SplineError::InvalidKnots(
                "knot positions must be distinct and strictly monotonic".to_string(),
            ));
        }
        if !(self.max() - self.min()).is_finite() {
            return Err(SplineError::InvalidKnots(
                "knot position range overflows".to_string(),
            ));
        }

        let tolerance = UNIFORM_SPACING_TOLERANCE * (self.max() - self.min());
        self.is_knot_spacing_uniform = spacing
            .windows(2)
            .all(|w| (w[1] - w[0]).abs() <= tolerance);
        Ok(())
    }

    fn find_interval_index_bisect(&self, t: f64) -> usize {
        let mut min = 0;
        let mut max = self.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if t < self.position(mid) {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_uniform(&self, t: f64) -> usize {
        let last_interval = self.len() - 2;
        let relative_t = (t - self.min()) / (self.max() - self.min());
        let guess = (relative_t * (self.len() - 1) as f64).floor();
        let mut index = if guess <= 0.0 {
            0
        } else {
            (guess as usize).min(last_interval)
        };

        // rounding in the guess can land one interval off
        if index > 0 && t < self.position(index) {
            index -= 1;
        } else if index < last_interval && t >= self.position(index + 1) {
            index += 1;
        }

        // spacing drift accumulates over many knots
        let below_next = t < self.position(index + 1) || index == last_interval;
        if self.position(index) <= t && below_next {
            index
        } else {
            self.find_interval_index_bisect(t)
        }
    }

    fn is_in_interval_range(&self, interval_index: usize, t: f64) -> bool {
        self.position(interval_index) <= t && t <= self.position(interval_index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_orientation() {
        let positions = [0.0, 1.0, 3.0];
        let values = [1.0, 2.0, 3.0];
        let knots = KnotSet::new(&positions, &values).unwrap();

        assert_eq!(Orientation::Ascending, knots.orientation());
        assert_eq!(3, knots.len());
        assert_eq!(0.0, knots.min());
        assert_eq!(3.0, knots.max());
        assert_eq!(2.0, knots.value(1));
        assert!(!knots.is_knot_spacing_uniform());
    }

    #[test]
    fn descending_is_indexed_ascending() {
        let positions = [3.0, 1.0, 0.0];
        let values = [3.0, 2.0, 1.0];
        let knots = KnotSet::new(&positions, &values).unwrap();

        assert_eq!(Orientation::Descending, knots.orientation());
        assert_eq!(0.0, knots.position(0));
        assert_eq!(1.0, knots.value(0));
        assert_eq!(3.0, knots.position(2));
        assert_eq!(3.0, knots.value(2));
        assert_eq!(0.0, knots.min());
        assert_eq!(3.0, knots.max());
    }

    #[test]
    fn contains_both_orientations() {
        let values = [0.0, 0.0, 0.0];
        let ascending = [0.0, 1.0, 2.0];
        let descending = [2.0, 1.0, 0.0];

        for positions in [&ascending, &descending] {
            let knots = KnotSet::new(positions, &values).unwrap();
            assert!(knots.contains(0.0));
            assert!(knots.contains(1.3));
            assert!(knots.contains(2.0));
            assert!(!knots.contains(-1e-12));
            assert!(!knots.contains(2.0 + 1e-12));
            assert!(!knots.contains(f64::NAN));
        }
    }

    #[test]
    fn mismatched_lengths() {
        let knots = KnotSet::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]);
        assert!(matches!(knots, Err(SplineError::InvalidKnots(_))));
    }

    #[test]
    fn single_knot() {
        assert!(KnotSet::new(&[0.0], &[1.0]).is_err());
        assert!(KnotSet::new(&[], &[]).is_err());
    }

    #[test]
    fn equal_positions() {
        assert!(KnotSet::new(&[0.0, 0.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn non_monotonic_positions() {
        assert!(KnotSet::new(&[0.0, 2.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
        assert!(KnotSet::new(&[2.0, 0.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn non_finite_position() {
        assert!(KnotSet::new(&[0.0, f64::NAN, 1.0], &[1.0, 2.0, 3.0]).is_err());
        assert!(KnotSet::new(&[0.0, 1.0, f64::INFINITY], &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn bisect_and_uniform_agree() {
        let positions: Vec<f64> = (0..11).map(|i| i as f64 * 0.1).collect();
        let values = vec![0.0; positions.len()];
        let knots = KnotSet::new(&positions, &values).unwrap();
        assert!(knots.is_knot_spacing_uniform());

        for i in 0..=100 {
            let t = i as f64 * 0.01;
            let bisect = knots.find_interval_index_bisect(t);
            let uniform = knots.find_interval_index_uniform(t);
            assert!(knots.is_in_interval_range(bisect, t));
            assert!(knots.is_in_interval_range(uniform, t), "t = {t}, index = {uniform}");
        }
    }

    #[test]
    fn drifting_spacing_agrees_with_bisect() {
        // each step differs by less than the uniform tolerance, the drift does not
        let number_of_knots = 100_000;
        let delta = 4e-8;
        let mut positions = Vec::with_capacity(number_of_knots);
        let mut t = 0.0;
        for i in 0..number_of_knots {
            positions.push(t);
            t += 1.0 + i as f64 * delta;
        }
        let values = vec![0.0; number_of_knots];
        let knots = KnotSet::new(&positions, &values).unwrap();
        assert!(knots.is_knot_spacing_uniform());

        for index in [1, number_of_knots / 3, number_of_knots / 2, number_of_knots - 2] {
            for t in [positions[index], positions[index] + 0.5] {
                let found = knots.find_interval_index(t);
                assert_eq!(knots.find_interval_index_bisect(t), found, "t = {t}");
                assert!(knots.is_in_interval_range(found, t));
            }
        }
    }

    #[test]
    fn overflowing_range() {
        let knots = KnotSet::new(&[-1e308, 1e308], &[0.0, 1.0]);
        assert!(matches!(knots, Err(SplineError::InvalidKnots(_))));
        assert!(KnotSet::new(&[-1e308, 0.0, 1e308], &[0.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn last_knot_maps_to_last_interval() {
        let positions = [0.0, 0.5, 2.0, 4.0];
        let values = [0.0; 4];
        let knots = KnotSet::new(&positions, &values).unwrap();

        assert_eq!(0, knots.find_interval_index(0.0));
        assert_eq!(1, knots.find_interval_index(0.5));
        assert_eq!(2, knots.find_interval_index(3.0));
        assert_eq!(2, knots.find_interval_index(4.0));
    }

    #[test]
    fn hint_follows_monotone_queries() {
        let positions = [0.0, 1.0, 2.0, 5.0];
        let values = [0.0; 4];
        let knots = KnotSet::new(&positions, &values).unwrap();

        assert_eq!(0, knots.find_interval_index_with_hint(0, 0.5));
        assert_eq!(1, knots.find_interval_index_with_hint(0, 1.5));
        assert_eq!(2, knots.find_interval_index_with_hint(0, 4.0));
        assert_eq!(0, knots.find_interval_index_with_hint(2, 0.2));
    }
}
