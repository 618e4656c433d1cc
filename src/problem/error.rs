use thiserror::Error;

use crate::geometry::{Bounds, Point};

/// A problem instance or solver parameter set that cannot be solved.
///
/// Raised before any search step; only the first violation is reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// `max < min` on at least one axis.
    #[error("the minimum of the bounds {min} cannot be greater than the maximum {max}")]
    MalformedBounds { min: Point, max: Point },

    #[error("delivery point {point} is outside the bounds {bounds}")]
    PointOutOfBounds { point: Point, bounds: Bounds },

    #[error("drone range must be greater than zero, got {0}")]
    NonPositiveRange(f64),

    #[error("initial temperature must be positive and finite, got {0}")]
    NonPositiveTemperature(f64),

    #[error("cooling rate must be in (0, 1], got {0}")]
    InvalidCoolingRate(f64),
}
