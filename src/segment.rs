/// Spline value and its first two derivatives at one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample {
    pub value: f64,
    pub first_derivative: f64,
    pub second_derivative: f64,
}

/// Cubic piece of the spline on `[t0, t1]`, described by its end values and end
/// second derivatives.
pub(crate) struct CubicSegment {
    t0: f64,
    t1: f64,
    y0: f64,
    y1: f64,
    ypp0: f64,
    ypp1: f64,
}

impl CubicSegment {
    pub fn new(t0: f64, t1: f64, y0: f64, y1: f64, ypp0: f64, ypp1: f64) -> Self {
        CubicSegment { t0, t1, y0, y1, ypp0, ypp1 }
    }

    pub fn evaluate(&self, t: f64) -> SplineSample {
        let dt = t - self.t0;
        let h = self.t1 - self.t0;
        let slope = (self.y1 - self.y0) / h - (self.ypp1 / 6.0 + self.ypp0 / 3.0) * h;
        let curvature_change = (self.ypp1 - self.ypp0) / h;

        let value = self.y0
            + dt * (slope + dt * (0.5 * self.ypp0 + dt * (curvature_change / 6.0)));
        let first_derivative = slope + dt * (self.ypp0 + dt * (0.5 * curvature_change));
        let second_derivative = self.ypp0 + dt * curvature_change;

        SplineSample { value, first_derivative, second_derivative }
    }
}
