//! C2-continuous interpolating cubic spline.

use mesh_types::PointSequence;
use nalgebra::{DMatrix, DVector, Point3};

use super::{Axis, EndCondition, HermiteAxis, HermiteCurve, SegmentEvaluator, axis_values};
use crate::error::{CurveError, CurveResult};

/// Interpolating cubic spline with continuous second derivatives.
///
/// Knot tangents come from the tridiagonal system
/// `D[i-1] + 4 D[i] + D[i+1] = 3 (y[i+1] - y[i-1])`, which wraps around the
/// seam when the spline is closed. Open splines pin both end tangents with
/// an [`EndCondition`], zero derivative by default.
///
/// # Example
///
/// ```
/// use landmark_curve::{Axis, CardinalSpline};
/// use mesh_types::{Point3, PointSequence};
///
/// let points: PointSequence = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
///     Point3::new(3.0, 2.0, 1.0),
///     Point3::new(4.0, 0.0, 1.0),
/// ]
/// .into();
///
/// let spline = CardinalSpline::new(&points, false).unwrap();
/// assert_eq!(spline.evaluate(Axis::Y, 2.0), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct CardinalSpline {
    curve: HermiteCurve,
}

impl CardinalSpline {
    /// Fit a spline with zero end derivatives.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InsufficientPoints`] for fewer than 2 points.
    pub fn new(points: &PointSequence, closed: bool) -> CurveResult<Self> {
        Self::with_end_condition(points, closed, EndCondition::Derivative(0.0))
    }

    /// Fit a spline with the given open-end condition.
    ///
    /// The end condition is ignored for closed splines.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InsufficientPoints`] for fewer than 2 points and
    /// [`CurveError::Numerical`] if the tangent system cannot be solved.
    pub fn with_end_condition(
        points: &PointSequence,
        closed: bool,
        end: EndCondition,
    ) -> CurveResult<Self> {
        if points.len() < 2 {
            return Err(CurveError::insufficient_points(2, points.len()));
        }

        let [x, y, z] = axis_values(points.as_slice());
        let axes = [
            fit_axis(x, closed, end)?,
            fit_axis(y, closed, end)?,
            fit_axis(z, closed, end)?,
        ];
        Ok(Self {
            curve: HermiteCurve::new(axes, closed),
        })
    }

    /// Evaluate one coordinate at a knot-scale parameter.
    ///
    /// Integer parameters reproduce the control points.
    #[must_use]
    pub fn evaluate(&self, axis: Axis, parameter: f64) -> f64 {
        self.curve.evaluate(axis, parameter)
    }

    /// Evaluate the 3D point at a knot-scale parameter.
    #[must_use]
    pub fn point_at(&self, parameter: f64) -> Point3<f64> {
        self.curve.point_at(parameter)
    }

    /// Whether the spline wraps from the last control point to the first.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.curve.is_closed()
    }
}

impl SegmentEvaluator for CardinalSpline {
    fn control_point_count(&self) -> usize {
        self.curve.len()
    }

    fn point_in_segment(&self, segment: usize, fraction: f64) -> Point3<f64> {
        self.curve.point_in_segment(segment, fraction)
    }
}

fn fit_axis(values: Vec<f64>, closed: bool, end: EndCondition) -> CurveResult<HermiteAxis> {
    let tangents = solve_tangents(&values, closed, end)?;
    Ok(HermiteAxis::new(values, tangents.clone(), tangents))
}

fn solve_tangents(values: &[f64], closed: bool, end: EndCondition) -> CurveResult<Vec<f64>> {
    let n = values.len();
    let mut system = DMatrix::<f64>::zeros(n, n);
    let mut rhs = DVector::<f64>::zeros(n);

    if closed {
        for i in 0..n {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            system[(i, prev)] += 1.0;
            system[(i, i)] += 4.0;
            system[(i, next)] += 1.0;
            rhs[i] = 3.0 * (values[next] - values[prev]);
        }
    } else {
        for i in 1..n - 1 {
            system[(i, i - 1)] = 1.0;
            system[(i, i)] = 4.0;
            system[(i, i + 1)] = 1.0;
            rhs[i] = 3.0 * (values[i + 1] - values[i - 1]);
        }

        let first_step = values[1] - values[0];
        let last_step = values[n - 1] - values[n - 2];
        match end {
            EndCondition::Derivative(slope) => {
                system[(0, 0)] = 1.0;
                rhs[0] = slope;
                system[(n - 1, n - 1)] = 1.0;
                rhs[n - 1] = slope;
            }
            EndCondition::Natural => {
                system[(0, 0)] = 2.0;
                system[(0, 1)] = 1.0;
                rhs[0] = 3.0 * first_step;
                system[(n - 1, n - 2)] = 1.0;
                system[(n - 1, n - 1)] = 2.0;
                rhs[n - 1] = 3.0 * last_step;
            }
            EndCondition::NearestDifference => {
                system[(0, 0)] = 1.0;
                rhs[0] = first_step;
                system[(n - 1, n - 1)] = 1.0;
                rhs[n - 1] = last_step;
            }
        }
    }

    system
        .lu()
        .solve(&rhs)
        .map(|tangents| tangents.iter().copied().collect())
        .ok_or_else(|| CurveError::numerical("cardinal spline tangent system is singular"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn zigzag() -> PointSequence {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, -1.0),
            Point3::new(2.0, 0.5, 0.0),
            Point3::new(3.0, 3.0, 2.0),
            Point3::new(5.0, 1.0, 1.0),
        ]
        .into()
    }

    #[test]
    fn interpolates_open() {
        let points = zigzag();
        let spline = CardinalSpline::new(&points, false).expect("spline");
        for (i, p) in points.iter().enumerate() {
            assert_eq!(spline.point_at(i as f64), *p);
        }
    }

    #[test]
    fn interpolates_closed() {
        let points = zigzag();
        let spline = CardinalSpline::new(&points, true).expect("spline");
        assert!(spline.is_closed());
        for (i, p) in points.iter().enumerate() {
            assert_eq!(spline.point_at(i as f64), *p);
        }
        // One full period later the curve is back at the start.
        assert_eq!(spline.point_at(5.0), points.first().expect("first"));
    }

    #[test]
    fn reproduces_straight_line_with_natural_ends() {
        let points: PointSequence = (0..4_i32)
            .map(|i| Point3::new(f64::from(i) * 2.0, 0.0, 0.0))
            .collect();
        let spline =
            CardinalSpline::with_end_condition(&points, false, EndCondition::Natural).expect("spline");
        assert_relative_eq!(spline.evaluate(Axis::X, 1.5), 3.0, epsilon = 1e-12);
        assert_relative_eq!(spline.evaluate(Axis::X, 0.25), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_end_derivative() {
        let points = zigzag();
        let spline = CardinalSpline::new(&points, false).expect("spline");
        let h = 1e-6;
        let slope = (spline.evaluate(Axis::Y, h) - spline.evaluate(Axis::Y, 0.0)) / h;
        assert_relative_eq!(slope, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn closed_seam_is_smooth() {
        let points = zigzag();
        let spline = CardinalSpline::new(&points, true).expect("spline");
        let h = 1e-6;
        for axis in Axis::ALL {
            let before = (spline.evaluate(axis, 5.0 - h) - spline.evaluate(axis, 5.0 - 2.0 * h)) / h;
            let after = (spline.evaluate(axis, h) - spline.evaluate(axis, 0.0)) / h;
            assert_relative_eq!(before, after, epsilon = 1e-3);
        }
    }

    #[test]
    fn requires_two_points() {
        let one: PointSequence = vec![Point3::origin()].into();
        assert_eq!(
            CardinalSpline::new(&one, false).err(),
            Some(CurveError::insufficient_points(2, 1))
        );
    }
}
