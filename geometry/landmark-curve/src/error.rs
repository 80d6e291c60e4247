//! Error and warning types for curve generation.

use mesh_from_curves::TubeError;
use thiserror::Error;

/// Result type for curve generation.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that abort curve generation.
///
/// Every variant except [`CurveError::Numerical`] and [`CurveError::Tube`]
/// is a caller-correctable usage error. Failing operations return early and
/// never hand back partially built output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// A required geometry argument is absent.
    #[error("no {what} provided")]
    NullInput {
        /// Which argument was missing.
        what: &'static str,
    },

    /// Too few points for the requested operation.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// A precomputed parameter array does not match the point count.
    #[error("expected {expected} point parameters (one per point), got {actual}")]
    ParameterCountMismatch {
        /// Number of points.
        expected: usize,
        /// Number of parameters supplied.
        actual: usize,
    },

    /// Input geometry is degenerate, e.g. every point coincides.
    #[error("degenerate input: {reason}")]
    DegenerateInput {
        /// Description of the degeneracy.
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which value is wrong and why.
        reason: String,
    },

    /// A linear solve failed.
    #[error("numerical computation failed: {reason}")]
    Numerical {
        /// Description of the numerical issue.
        reason: String,
    },

    /// Tube or sphere generation failed.
    #[error(transparent)]
    Tube(#[from] TubeError),
}

impl CurveError {
    /// Create an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Create a degenerate input error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a numerical error.
    #[must_use]
    pub fn numerical(reason: impl Into<String>) -> Self {
        Self::Numerical {
            reason: reason.into(),
        }
    }

    /// Whether the caller can fix this error by changing its input.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::NullInput { .. }
                | Self::InsufficientPoints { .. }
                | Self::ParameterCountMismatch { .. }
                | Self::DegenerateInput { .. }
                | Self::InvalidConfig { .. }
        )
    }
}

/// Non-fatal conditions raised while generating a curve.
///
/// Generation proceeds after a warning; the warnings are returned alongside
/// the output and also logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveWarning {
    /// The requested polynomial order exceeds the maximum and was clamped.
    UnsupportedOrder {
        /// Order the caller asked for.
        requested: usize,
        /// Order actually used.
        maximum: usize,
    },

    /// Too few distinct parameter values for the order; fewer polynomial
    /// coefficients were fitted.
    ReducedOrder {
        /// Coefficients implied by the (clamped) order.
        requested_coefficients: usize,
        /// Coefficients actually fitted.
        fitted_coefficients: usize,
    },

    /// Point cleaning merged near-duplicate control points.
    PointsMerged {
        /// Number of points removed.
        removed: usize,
    },
}

impl std::fmt::Display for CurveWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOrder { requested, maximum } => write!(
                f,
                "polynomial order {requested} is not supported, using order {maximum}"
            ),
            Self::ReducedOrder {
                requested_coefficients,
                fitted_coefficients,
            } => write!(
                f,
                "only {fitted_coefficients} distinct parameters, fitted {fitted_coefficients} of {requested_coefficients} coefficients"
            ),
            Self::PointsMerged { removed } => write!(f, "merged {removed} duplicate points"),
        }
    }
}
