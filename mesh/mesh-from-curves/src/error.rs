//! Error types for tube and sphere generation.

use thiserror::Error;

/// Result type for mesh-from-curves operations.
pub type TubeResult<T> = Result<T, TubeError>;

/// Errors that can occur while extruding or tessellating curve geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TubeError {
    /// Curve has too few points.
    #[error("curve needs at least {min} points, got {actual}")]
    TooFewPoints {
        /// Minimum required points.
        min: usize,
        /// Actual point count.
        actual: usize,
    },

    /// Radius is invalid (zero, negative, or not finite).
    #[error("invalid radius: {0}")]
    InvalidRadius(f64),

    /// Too few sides around the circumference.
    #[error("sides must be at least {min}, got {actual}")]
    TooFewSides {
        /// Minimum required sides.
        min: usize,
        /// Actual side count.
        actual: usize,
    },

    /// Input mesh has no polyline cell to extrude.
    #[error("mesh has no polyline cell to extrude")]
    MissingPolyline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TubeError::TooFewPoints { min: 2, actual: 1 };
        assert!(err.to_string().contains("at least 2"));

        let err = TubeError::InvalidRadius(-0.5);
        assert!(err.to_string().contains("-0.5"));

        let err = TubeError::TooFewSides { min: 3, actual: 2 };
        assert!(err.to_string().contains("got 2"));
    }
}
