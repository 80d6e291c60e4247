//! Curve generation configuration.

use crate::error::{CurveError, CurveResult};

/// Highest polynomial order the fitter accepts; larger requests are clamped.
pub const MAX_POLYNOMIAL_ORDER: usize = 6;

/// Algorithm used to turn control points into a dense curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InterpolationType {
    /// Straight segments between consecutive control points.
    #[default]
    Linear,
    /// C2-continuous interpolating cubic spline.
    CardinalSpline,
    /// Interpolating cubic spline with tension, bias and continuity controls.
    KochanekSpline,
    /// Least-squares polynomial approximation of the control points.
    Polynomial,
}

/// How control points are assigned a curve parameter for polynomial fitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointParameterType {
    /// Parameter proportional to the point's index.
    #[default]
    RawIndices,
    /// Parameter from distance along the minimum spanning tree trunk, for
    /// unordered point sets.
    MinimumSpanningTree,
}

/// Shape controls for the Kochanek–Bartels spline.
///
/// All three shape values default to zero, which yields a Catmull-Rom style
/// curve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KochanekParams {
    /// Shifts the tangent toward the incoming (positive) or outgoing
    /// (negative) segment.
    pub bias: f64,
    /// Controls tangent continuity at control points; -1 gives sharp corners.
    pub continuity: f64,
    /// Scales tangent length; 1 gives straight segments.
    pub tension: f64,
    /// Pin open end tangents explicitly to the finite difference of the two
    /// nearest points. The default end condition already follows those two
    /// points, so the curve is the same either way.
    pub ends_copy_nearest_derivative: bool,
}

impl KochanekParams {
    /// Set the bias.
    #[must_use]
    pub const fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    /// Set the continuity.
    #[must_use]
    pub const fn with_continuity(mut self, continuity: f64) -> Self {
        self.continuity = continuity;
        self
    }

    /// Set the tension.
    #[must_use]
    pub const fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// Set the open-end derivative policy.
    #[must_use]
    pub const fn with_ends_copy_nearest_derivative(mut self, copy: bool) -> Self {
        self.ends_copy_nearest_derivative = copy;
        self
    }

    fn validate(&self) -> CurveResult<()> {
        for (name, value) in [
            ("bias", self.bias),
            ("continuity", self.continuity),
            ("tension", self.tension),
        ] {
            if !value.is_finite() {
                return Err(CurveError::invalid_config(format!(
                    "kochanek {name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Parameters controlling curve generation.
///
/// # Example
///
/// ```
/// use landmark_curve::{CurveConfig, InterpolationType};
///
/// let config = CurveConfig::default()
///     .with_interpolation(InterpolationType::CardinalSpline)
///     .with_tube_radius(0.5)
///     .with_tube_loop(true);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.tube_number_of_sides, 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveConfig {
    /// Curve generation algorithm.
    pub interpolation: InterpolationType,

    /// Point parameterization used by the polynomial fit.
    pub point_parameters: PointParameterType,

    /// Whether the curve closes on itself.
    ///
    /// Ignored by the polynomial fit.
    pub tube_loop: bool,

    /// Tube radius. Zero disables extrusion and yields a bare line mesh.
    pub tube_radius: f64,

    /// Number of sides of the tube cross-section, and the resolution of the
    /// single-point sphere marker.
    pub tube_number_of_sides: usize,

    /// Curve samples generated per control point interval.
    pub segments_between_control_points: usize,

    /// Requested polynomial order, clamped to [`MAX_POLYNOMIAL_ORDER`].
    pub polynomial_order: usize,

    /// Kochanek–Bartels shape parameters.
    pub kochanek: KochanekParams,

    /// Merge near-duplicate control points before generating the curve.
    pub clean_markups: bool,

    /// Distance below which two control points are merged when cleaning.
    pub clean_tolerance: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationType::Linear,
            point_parameters: PointParameterType::RawIndices,
            tube_loop: false,
            tube_radius: 1.0,
            tube_number_of_sides: 8,
            segments_between_control_points: 5,
            polynomial_order: 3,
            kochanek: KochanekParams::default(),
            clean_markups: false,
            clean_tolerance: 0.01,
        }
    }
}

impl CurveConfig {
    /// Set the interpolation algorithm.
    #[must_use]
    pub const fn with_interpolation(mut self, interpolation: InterpolationType) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Set the point parameterization.
    #[must_use]
    pub const fn with_point_parameters(mut self, point_parameters: PointParameterType) -> Self {
        self.point_parameters = point_parameters;
        self
    }

    /// Close the curve into a loop.
    #[must_use]
    pub const fn with_tube_loop(mut self, tube_loop: bool) -> Self {
        self.tube_loop = tube_loop;
        self
    }

    /// Set the tube radius.
    #[must_use]
    pub const fn with_tube_radius(mut self, radius: f64) -> Self {
        self.tube_radius = radius;
        self
    }

    /// Set the number of tube sides.
    #[must_use]
    pub const fn with_tube_number_of_sides(mut self, sides: usize) -> Self {
        self.tube_number_of_sides = sides;
        self
    }

    /// Set the number of samples per control point interval.
    #[must_use]
    pub const fn with_segments_between_control_points(mut self, segments: usize) -> Self {
        self.segments_between_control_points = segments;
        self
    }

    /// Set the requested polynomial order.
    #[must_use]
    pub const fn with_polynomial_order(mut self, order: usize) -> Self {
        self.polynomial_order = order;
        self
    }

    /// Set the Kochanek–Bartels shape parameters.
    #[must_use]
    pub const fn with_kochanek(mut self, kochanek: KochanekParams) -> Self {
        self.kochanek = kochanek;
        self
    }

    /// Enable point cleaning with the given merge tolerance.
    #[must_use]
    pub const fn with_clean_markups(mut self, tolerance: f64) -> Self {
        self.clean_markups = true;
        self.clean_tolerance = tolerance;
        self
    }

    /// Check every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfig`] naming the first offending
    /// value.
    pub fn validate(&self) -> CurveResult<()> {
        if !self.tube_radius.is_finite() || self.tube_radius < 0.0 {
            return Err(CurveError::invalid_config(format!(
                "tube radius must be finite and non-negative, got {}",
                self.tube_radius
            )));
        }
        if self.tube_number_of_sides < 3 {
            return Err(CurveError::invalid_config(format!(
                "tube needs at least 3 sides, got {}",
                self.tube_number_of_sides
            )));
        }
        if self.segments_between_control_points < 1 {
            return Err(CurveError::invalid_config(
                "segments between control points must be at least 1",
            ));
        }
        if self.clean_markups && (!self.clean_tolerance.is_finite() || self.clean_tolerance < 0.0) {
            return Err(CurveError::invalid_config(format!(
                "clean tolerance must be finite and non-negative, got {}",
                self.clean_tolerance
            )));
        }
        self.kochanek.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = CurveConfig::default();
        assert_eq!(config.interpolation, InterpolationType::Linear);
        assert_eq!(config.point_parameters, PointParameterType::RawIndices);
        assert!(!config.tube_loop);
        assert_relative_eq!(config.tube_radius, 1.0);
        assert_eq!(config.tube_number_of_sides, 8);
        assert_eq!(config.segments_between_control_points, 5);
        assert_eq!(config.polynomial_order, 3);
        assert_eq!(config.kochanek, KochanekParams::default());
        assert!(!config.clean_markups);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders() {
        let kochanek = KochanekParams::default()
            .with_bias(0.5)
            .with_continuity(-0.25)
            .with_tension(0.1)
            .with_ends_copy_nearest_derivative(true);
        let config = CurveConfig::default()
            .with_interpolation(InterpolationType::KochanekSpline)
            .with_point_parameters(PointParameterType::MinimumSpanningTree)
            .with_tube_loop(true)
            .with_tube_radius(0.0)
            .with_tube_number_of_sides(12)
            .with_segments_between_control_points(10)
            .with_polynomial_order(2)
            .with_kochanek(kochanek)
            .with_clean_markups(0.5);

        assert_eq!(config.interpolation, InterpolationType::KochanekSpline);
        assert!(config.tube_loop);
        assert_relative_eq!(config.tube_radius, 0.0);
        assert_eq!(config.segments_between_control_points, 10);
        assert_relative_eq!(config.kochanek.bias, 0.5);
        assert!(config.kochanek.ends_copy_nearest_derivative);
        assert!(config.clean_markups);
        assert_relative_eq!(config.clean_tolerance, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_values() {
        let cases = [
            CurveConfig::default().with_tube_radius(-1.0),
            CurveConfig::default().with_tube_radius(f64::NAN),
            CurveConfig::default().with_tube_number_of_sides(2),
            CurveConfig::default().with_segments_between_control_points(0),
            CurveConfig::default().with_clean_markups(-0.1),
            CurveConfig::default().with_kochanek(KochanekParams::default().with_tension(f64::INFINITY)),
        ];
        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(CurveError::InvalidConfig { .. })
            ));
        }
    }
}
