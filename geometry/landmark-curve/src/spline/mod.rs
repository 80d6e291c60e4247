//! Interpolating spline evaluators.
//!
//! Both evaluators fit three independent 1D cubic splines, one per axis,
//! through the control point coordinates at integer knots `0, 1, ..., N-1`.
//! They differ only in how the knot tangents are chosen:
//!
//! - [`CardinalSpline`]: tangents solved for second-derivative continuity
//! - [`KochanekSpline`]: tangents from tension, bias and continuity controls
//!
//! Each segment between two knots is a cubic Hermite polynomial:
//!
//! ```text
//! p(s) = h00(s)*y0 + h10(s)*m0 + h01(s)*y1 + h11(s)*m1,   s in [0, 1]
//!
//! h00(s) = 2s³ - 3s² + 1
//! h10(s) = s³ - 2s² + s
//! h01(s) = -2s³ + 3s²
//! h11(s) = s³ - s²
//! ```
//!
//! so evaluating at an integer parameter returns the control coordinate
//! exactly.

mod cardinal;
mod kochanek;

pub use cardinal::CardinalSpline;
pub use kochanek::KochanekSpline;

use nalgebra::Point3;

/// Coordinate axis of a 3D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X coordinate.
    X,
    /// Y coordinate.
    Y,
    /// Z coordinate.
    Z,
}

impl Axis {
    /// All three axes in order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of this axis.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Tangent condition at the ends of an open spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndCondition {
    /// First derivative fixed at the given value.
    Derivative(f64),
    /// Second derivative zero at the end point.
    Natural,
    /// First derivative equal to the difference of the two nearest points.
    NearestDifference,
}

/// A curve that can be evaluated segment by segment.
///
/// Segment `s` runs from control point `s` to control point `s + 1`
/// (wrapping to 0 on closed curves); `fraction` in `[0, 1)` moves along it.
/// The curve samplers drive every interpolation mode through this trait.
pub trait SegmentEvaluator {
    /// Number of control points the curve passes through.
    fn control_point_count(&self) -> usize;

    /// Point at `fraction` of the way along `segment`.
    fn point_in_segment(&self, segment: usize, fraction: f64) -> Point3<f64>;
}

/// Per-axis Hermite data shared by both spline kinds.
#[derive(Debug, Clone)]
pub(crate) struct HermiteAxis {
    values: Vec<f64>,
    /// Tangent leaving each knot.
    outgoing: Vec<f64>,
    /// Tangent arriving at each knot.
    incoming: Vec<f64>,
}

impl HermiteAxis {
    pub(crate) fn new(values: Vec<f64>, outgoing: Vec<f64>, incoming: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), outgoing.len());
        debug_assert_eq!(values.len(), incoming.len());
        Self {
            values,
            outgoing,
            incoming,
        }
    }

    /// Evaluate segment `segment` (already in range) at `s` in `[0, 1]`.
    fn segment_value(&self, segment: usize, s: f64) -> f64 {
        let next = (segment + 1) % self.values.len();
        hermite(
            self.values[segment],
            self.values[next],
            self.outgoing[segment],
            self.incoming[next],
            s,
        )
    }
}

/// Three Hermite axes over a common knot sequence.
#[derive(Debug, Clone)]
pub(crate) struct HermiteCurve {
    axes: [HermiteAxis; 3],
    closed: bool,
}

impl HermiteCurve {
    pub(crate) fn new(axes: [HermiteAxis; 3], closed: bool) -> Self {
        Self { axes, closed }
    }

    pub(crate) fn len(&self) -> usize {
        self.axes[0].values.len()
    }

    pub(crate) const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Map a knot-scale parameter to `(segment, fraction)`.
    ///
    /// Open curves clamp to `[0, N-1]`; closed curves wrap modulo `N`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn locate(&self, parameter: f64) -> (usize, f64) {
        let n = self.len();
        let last_segment = if self.closed { n - 1 } else { n - 2 };
        let t = if self.closed {
            parameter.rem_euclid(n as f64)
        } else {
            parameter.clamp(0.0, (n - 1) as f64)
        };
        let segment = (t.floor() as usize).min(last_segment);
        (segment, t - segment as f64)
    }

    pub(crate) fn evaluate(&self, axis: Axis, parameter: f64) -> f64 {
        let (segment, s) = self.locate(parameter);
        self.axes[axis.index()].segment_value(segment, s)
    }

    pub(crate) fn point_at(&self, parameter: f64) -> Point3<f64> {
        let (segment, s) = self.locate(parameter);
        self.point_in_segment(segment, s)
    }

    pub(crate) fn point_in_segment(&self, segment: usize, fraction: f64) -> Point3<f64> {
        Point3::new(
            self.axes[0].segment_value(segment, fraction),
            self.axes[1].segment_value(segment, fraction),
            self.axes[2].segment_value(segment, fraction),
        )
    }
}

/// Split points into per-axis coordinate lists.
pub(crate) fn axis_values(points: &[Point3<f64>]) -> [Vec<f64>; 3] {
    Axis::ALL.map(|axis| points.iter().map(|p| p[axis.index()]).collect())
}

#[inline]
fn hermite(y0: f64, y1: f64, m0: f64, m1: f64, s: f64) -> f64 {
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * y0 + h10 * m0 + h01 * y1 + h11 * m1
}
