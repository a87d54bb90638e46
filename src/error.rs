use thiserror::Error;

/// Errors reported by spline fitting and evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Only the natural spline (tension 0.0, weight 1.0) is supported.
    #[error("unsupported spline configuration: tension = {tension}, weight = {weight} (expected tension = 0.0, weight = 1.0)")]
    ConfigurationUnsupported { tension: f64, weight: f64 },

    #[error("memory allocation failed for {buffer} buffer")]
    AllocationFailure { buffer: &'static str },

    /// Only `retained` of `requested` query positions were inside the knot range.
    #[error("some interpolation points were out of range: {retained} of {requested} retained")]
    SomePointsOutOfRange { retained: usize, requested: usize },

    #[error("invalid knots: {0}")]
    InvalidKnots(String),

    #[error("position {position} is out of knot range [{min}, {max}]")]
    OutOfRange { position: f64, min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, SplineError>;
