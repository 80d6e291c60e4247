//! Least-squares polynomial curve fitting.

use mesh_types::PointSequence;
use nalgebra::{DMatrix, Point3};
use tracing::{debug, warn};

use crate::config::MAX_POLYNOMIAL_ORDER;
use crate::error::{CurveError, CurveResult, CurveWarning};
use crate::parameterize::ParameterArray;

/// Singular values below this are treated as zero by the solver.
const SINGULAR_VALUE_EPSILON: f64 = 1e-12;

/// A polynomial per axis, fitted in the least-squares sense to
/// parameterized points.
///
/// `coordinate(t) = sum over c of coefficients[c][axis] * t^c`
///
/// # Example
///
/// ```
/// use landmark_curve::{parameters_from_indices, PolynomialFit};
/// use mesh_types::{Point3, PointSequence};
///
/// let points: PointSequence = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(2.0, 4.0, 0.0),
///     Point3::new(3.0, 9.0, 0.0),
/// ]
/// .into();
///
/// let parameters = parameters_from_indices(&points).unwrap();
/// let fit = PolynomialFit::fit(&points, &parameters, 2).unwrap();
/// let middle = fit.evaluate(0.5);
/// assert!((middle.y - 2.25).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct PolynomialFit {
    /// One row per coefficient (ascending power), one column per axis.
    coefficients: DMatrix<f64>,
    warnings: Vec<CurveWarning>,
}

impl PolynomialFit {
    /// Fit a polynomial of the requested order.
    ///
    /// Orders above [`MAX_POLYNOMIAL_ORDER`] are clamped with a
    /// [`CurveWarning::UnsupportedOrder`]. When there are fewer distinct
    /// parameter values than coefficients, the coefficient count drops to
    /// the distinct count with a [`CurveWarning::ReducedOrder`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than 2 points are provided
    /// - The parameter count differs from the point count
    /// - The least-squares solve fails
    pub fn fit(points: &PointSequence, parameters: &ParameterArray, order: usize) -> CurveResult<Self> {
        let n = points.len();
        if n < 2 {
            warn!(points = n, "polynomial fit needs at least 2 points");
            return Err(CurveError::insufficient_points(2, n));
        }
        if parameters.len() != n {
            warn!(
                points = n,
                parameters = parameters.len(),
                "parameter count does not match point count"
            );
            return Err(CurveError::ParameterCountMismatch {
                expected: n,
                actual: parameters.len(),
            });
        }

        let mut warnings = Vec::new();
        let order = if order > MAX_POLYNOMIAL_ORDER {
            warn!(
                requested = order,
                maximum = MAX_POLYNOMIAL_ORDER,
                "polynomial order not supported, clamping"
            );
            warnings.push(CurveWarning::UnsupportedOrder {
                requested: order,
                maximum: MAX_POLYNOMIAL_ORDER,
            });
            MAX_POLYNOMIAL_ORDER
        } else {
            order
        };

        let requested_coefficients = order + 1;
        let distinct = parameters.distinct_count();
        let coefficient_count = if distinct < requested_coefficients {
            debug!(
                requested_coefficients,
                distinct_parameters = distinct,
                "reducing polynomial coefficients"
            );
            warnings.push(CurveWarning::ReducedOrder {
                requested_coefficients,
                fitted_coefficients: distinct,
            });
            distinct
        } else {
            requested_coefficients
        };

        let params = parameters.as_slice();
        let design = DMatrix::from_fn(n, coefficient_count, |row, column| power(params[row], column));
        let targets = DMatrix::from_fn(n, 3, |row, axis| points.as_slice()[row][axis]);

        let coefficients = design
            .svd(true, true)
            .solve(&targets, SINGULAR_VALUE_EPSILON)
            .map_err(CurveError::numerical)?;

        debug!(points = n, coefficients = coefficient_count, "polynomial fitted");
        Ok(Self {
            coefficients,
            warnings,
        })
    }

    /// Number of fitted coefficients per axis (order + 1).
    #[must_use]
    pub fn coefficient_count(&self) -> usize {
        self.coefficients.nrows()
    }

    /// Fitted coefficient of `t^power` on `axis` (0 = x, 1 = y, 2 = z).
    #[must_use]
    pub fn coefficient(&self, power: usize, axis: usize) -> Option<f64> {
        self.coefficients.get((power, axis)).copied()
    }

    /// Conditions raised while fitting.
    #[must_use]
    pub fn warnings(&self) -> &[CurveWarning] {
        &self.warnings
    }

    /// Consume the fit, returning its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<CurveWarning> {
        self.warnings
    }

    /// Evaluate the fitted curve at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point3<f64> {
        let mut point = Point3::origin();
        for axis in 0..3 {
            // Horner's rule from the highest power down
            point[axis] = (0..self.coefficient_count())
                .rev()
                .fold(0.0, |acc, power| acc * t + self.coefficients[(power, axis)]);
        }
        point
    }

    /// Sample `count` points at evenly spaced `t` in `[0, 1]`.
    ///
    /// A single sample is taken at `t = 0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, count: usize) -> PointSequence {
        let mut curve = PointSequence::allocated(count);
        let last = count.saturating_sub(1).max(1) as f64;
        for index in 0..count {
            curve.set(index, self.evaluate(index as f64 / last));
        }
        curve
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn power(base: f64, exponent: usize) -> f64 {
    base.powi(exponent as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameterize::parameters_from_indices;
    use approx::assert_relative_eq;

    fn parabola(n: i32) -> PointSequence {
        (0..n)
            .map(|i| {
                let x = f64::from(i);
                Point3::new(x, x * x, 1.0)
            })
            .collect()
    }

    #[test]
    fn exact_fit_of_parabola() {
        let points = parabola(6);
        let parameters = parameters_from_indices(&points).expect("parameters");
        let fit = PolynomialFit::fit(&points, &parameters, 3).expect("fit");

        assert_eq!(fit.coefficient_count(), 4);
        assert!(fit.warnings().is_empty());
        // x = 5t, y = 25t², z = 1
        assert_relative_eq!(fit.coefficient(1, 0).expect("x1"), 5.0, epsilon = 1e-8);
        assert_relative_eq!(fit.coefficient(2, 1).expect("y2"), 25.0, epsilon = 1e-8);
        assert_relative_eq!(fit.coefficient(3, 1).expect("y3"), 0.0, epsilon = 1e-8);
        assert_relative_eq!(fit.coefficient(0, 2).expect("z0"), 1.0, epsilon = 1e-8);
    }

    #[test]
    fn least_squares_line_through_noise() {
        let points: PointSequence = vec![
            Point3::new(0.0, 0.1, 0.0),
            Point3::new(1.0, -0.1, 0.0),
            Point3::new(2.0, 0.1, 0.0),
            Point3::new(3.0, -0.1, 0.0),
        ]
        .into();
        let parameters = parameters_from_indices(&points).expect("parameters");
        let fit = PolynomialFit::fit(&points, &parameters, 1).expect("fit");

        let start = fit.evaluate(0.0);
        let end = fit.evaluate(1.0);
        assert_relative_eq!(start.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(end.x, 3.0, epsilon = 1e-9);
        // Residuals in y cancel around a nearly flat line.
        assert!(start.y.abs() < 0.2 && end.y.abs() < 0.2);
    }

    #[test]
    fn two_points_order_one_is_the_line() {
        let points: PointSequence =
            vec![Point3::new(1.0, 2.0, 3.0), Point3::new(3.0, 6.0, -1.0)].into();
        let parameters = parameters_from_indices(&points).expect("parameters");
        let fit = PolynomialFit::fit(&points, &parameters, 1).expect("fit");

        let mid = fit.evaluate(0.5);
        assert_relative_eq!(mid.x, 2.0, epsilon = 1e-10);
        assert_relative_eq!(mid.y, 4.0, epsilon = 1e-10);
        assert_relative_eq!(mid.z, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn order_is_clamped() {
        let points = parabola(10);
        let parameters = parameters_from_indices(&points).expect("parameters");
        let fit = PolynomialFit::fit(&points, &parameters, 10).expect("fit");

        assert_eq!(fit.coefficient_count(), MAX_POLYNOMIAL_ORDER + 1);
        assert_eq!(
            fit.warnings(),
            &[CurveWarning::UnsupportedOrder {
                requested: 10,
                maximum: 6
            }]
        );
    }

    #[test]
    fn order_reduced_to_distinct_parameters() {
        let points = parabola(4);
        let parameters = ParameterArray::new(vec![0.0, 0.0, 1.0, 1.0]);
        let fit = PolynomialFit::fit(&points, &parameters, 3).expect("fit");

        assert_eq!(fit.coefficient_count(), 2);
        assert!(matches!(
            fit.warnings(),
            [CurveWarning::ReducedOrder {
                requested_coefficients: 4,
                fitted_coefficients: 2
            }]
        ));
    }

    #[test]
    fn parameter_count_mismatch() {
        let points = parabola(4);
        let parameters = ParameterArray::new(vec![0.0, 0.5, 1.0]);
        assert_eq!(
            PolynomialFit::fit(&points, &parameters, 2).err(),
            Some(CurveError::ParameterCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn sampling_is_even_and_spans_the_curve() {
        let points = parabola(3);
        let parameters = parameters_from_indices(&points).expect("parameters");
        let fit = PolynomialFit::fit(&points, &parameters, 2).expect("fit");
        let samples = fit.sample(5);

        assert_eq!(samples.len(), 5);
        let xs: Vec<f64> = samples.iter().map(|p| p.x).collect();
        for (x, expected) in xs.iter().zip([0.0, 0.5, 1.0, 1.5, 2.0]) {
            assert_relative_eq!(*x, expected, epsilon = 1e-9);
        }
    }
}
