//! Kochanek–Bartels spline.

use mesh_types::PointSequence;
use nalgebra::Point3;

use super::{Axis, HermiteAxis, HermiteCurve, SegmentEvaluator, axis_values};
use crate::config::KochanekParams;
use crate::error::{CurveError, CurveResult};

/// Interpolating cubic spline shaped by tension, bias and continuity.
///
/// The shape values apply uniformly to every knot. With all three at zero
/// the tangents are the Catmull-Rom central differences. A non-zero
/// continuity gives each knot distinct incoming and outgoing tangents.
///
/// Open ends take the line through the two nearest points: the end tangent
/// is `p[1] - p[0]` at the start and `p[n-1] - p[n-2]` at the end. Setting
/// [`KochanekParams::ends_copy_nearest_derivative`] pins the same difference
/// explicitly, so both policies agree on the curve.
#[derive(Debug, Clone)]
pub struct KochanekSpline {
    curve: HermiteCurve,
    params: KochanekParams,
}

impl KochanekSpline {
    /// Fit a spline through `points`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InsufficientPoints`] for fewer than 2 points.
    ///
    /// # Example
    ///
    /// ```
    /// use landmark_curve::{Axis, KochanekParams, KochanekSpline};
    /// use mesh_types::{Point3, PointSequence};
    ///
    /// let points: PointSequence = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 1.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    /// ]
    /// .into();
    ///
    /// let params = KochanekParams::default().with_tension(0.5);
    /// let spline = KochanekSpline::new(&points, true, &params).unwrap();
    /// assert_eq!(spline.evaluate(Axis::X, 1.0), 1.0);
    /// ```
    pub fn new(points: &PointSequence, closed: bool, params: &KochanekParams) -> CurveResult<Self> {
        if points.len() < 2 {
            return Err(CurveError::insufficient_points(2, points.len()));
        }

        let axes = axis_values(points.as_slice()).map(|values| {
            let (outgoing, incoming) = knot_tangents(&values, closed, params);
            HermiteAxis::new(values, outgoing, incoming)
        });

        Ok(Self {
            curve: HermiteCurve::new(axes, closed),
            params: *params,
        })
    }

    /// Evaluate one coordinate at a knot-scale parameter.
    #[must_use]
    pub fn evaluate(&self, axis: Axis, parameter: f64) -> f64 {
        self.curve.evaluate(axis, parameter)
    }

    /// Evaluate the 3D point at a knot-scale parameter.
    #[must_use]
    pub fn point_at(&self, parameter: f64) -> Point3<f64> {
        self.curve.point_at(parameter)
    }

    /// Shape parameters the spline was built with.
    #[must_use]
    pub const fn params(&self) -> &KochanekParams {
        &self.params
    }

    /// Whether the spline wraps from the last control point to the first.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.curve.is_closed()
    }
}

impl SegmentEvaluator for KochanekSpline {
    fn control_point_count(&self) -> usize {
        self.curve.len()
    }

    fn point_in_segment(&self, segment: usize, fraction: f64) -> Point3<f64> {
        self.curve.point_in_segment(segment, fraction)
    }
}

/// Outgoing and incoming tangent at every knot.
///
/// Open ends take the difference of the two nearest values.
fn knot_tangents(values: &[f64], closed: bool, params: &KochanekParams) -> (Vec<f64>, Vec<f64>) {
    let n = values.len();
    let KochanekParams {
        bias: b,
        continuity: c,
        tension: t,
        ..
    } = *params;

    let out_before = (1.0 - t) * (1.0 + b) * (1.0 + c) / 2.0;
    let out_after = (1.0 - t) * (1.0 - b) * (1.0 - c) / 2.0;
    let in_before = (1.0 - t) * (1.0 + b) * (1.0 - c) / 2.0;
    let in_after = (1.0 - t) * (1.0 - b) * (1.0 + c) / 2.0;

    let mut outgoing = vec![0.0; n];
    let mut incoming = vec![0.0; n];
    let knots = if closed { 0..n } else { 1..n - 1 };
    for i in knots {
        let before = values[i] - values[(i + n - 1) % n];
        let after = values[(i + 1) % n] - values[i];
        outgoing[i] = out_before * before + out_after * after;
        incoming[i] = in_before * before + in_after * after;
    }
    if closed {
        return (outgoing, incoming);
    }

    let first = values[1] - values[0];
    let last = values[n - 1] - values[n - 2];
    outgoing[0] = first;
    incoming[0] = first;
    outgoing[n - 1] = last;
    incoming[n - 1] = last;

    (outgoing, incoming)
}
