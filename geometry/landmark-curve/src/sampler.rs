//! Dense curve sampling.
//!
//! Every interpolation mode produces its dense point sequence through the
//! same pipeline: the mode picks a [`SegmentEvaluator`] (or, for the
//! polynomial fit, a parameterized least-squares curve) and
//! [`sample_segments`] walks it at `segments_between_control_points` steps
//! per control point interval.

use mesh_types::PointSequence;
use nalgebra::Point3;
use tracing::{debug, warn};

use crate::config::{CurveConfig, InterpolationType, PointParameterType};
use crate::error::{CurveError, CurveResult, CurveWarning};
use crate::parameterize::{
    ParameterArray, parameters_from_indices, parameters_from_minimum_spanning_tree,
};
use crate::polyfit::PolynomialFit;
use crate::spline::{CardinalSpline, KochanekSpline, SegmentEvaluator};

/// Piecewise-linear evaluation between consecutive control points.
#[derive(Debug, Clone, Copy)]
pub struct LinearInterpolator<'a> {
    points: &'a [Point3<f64>],
}

impl<'a> LinearInterpolator<'a> {
    /// Interpolate straight segments through `points`.
    #[must_use]
    pub const fn new(points: &'a [Point3<f64>]) -> Self {
        Self { points }
    }
}

impl SegmentEvaluator for LinearInterpolator<'_> {
    fn control_point_count(&self) -> usize {
        self.points.len()
    }

    fn point_in_segment(&self, segment: usize, fraction: f64) -> Point3<f64> {
        let n = self.points.len();
        let a = self.points[segment % n];
        let b = self.points[(segment + 1) % n];
        Point3::from(a.coords * (1.0 - fraction) + b.coords * fraction)
    }
}

/// A dense curve and the conditions raised producing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledCurve {
    /// Dense, fully populated point sequence.
    pub points: PointSequence,
    /// Non-fatal conditions, e.g. a clamped polynomial order.
    pub warnings: Vec<CurveWarning>,
}

impl From<PointSequence> for SampledCurve {
    fn from(points: PointSequence) -> Self {
        Self {
            points,
            warnings: Vec::new(),
        }
    }
}

/// Number of dense samples for `control_points` points.
///
/// Open curves get `(N-1) * k + 1` samples. Looped curves get `N * k + 2`:
/// the extra slot past the final point holds the seam closure.
#[must_use]
pub const fn sample_count(control_points: usize, segments_between: usize, looped: bool) -> usize {
    if control_points == 0 {
        0
    } else if looped {
        control_points * segments_between + 2
    } else {
        (control_points - 1) * segments_between + 1
    }
}

/// Walk `evaluator` segment by segment into a dense sequence.
///
/// Writes `segments_between` samples per segment (`N` segments when looped,
/// `N - 1` otherwise), then the closing control point exactly, then closes
/// the seam of looped curves with [`close_loop`]. Every allocated slot is
/// written.
///
/// # Errors
///
/// Returns [`CurveError::InvalidConfig`] if `segments_between` is zero, and
/// [`CurveError::DegenerateInput`] if `control_points` disagrees with the
/// evaluator's point count.
#[allow(clippy::cast_precision_loss)]
pub fn sample_segments<E: SegmentEvaluator + ?Sized>(
    evaluator: &E,
    control_points: &PointSequence,
    segments_between: usize,
    looped: bool,
) -> CurveResult<PointSequence> {
    let n = control_points.len();
    if segments_between == 0 {
        return Err(CurveError::invalid_config(
            "segments between control points must be at least 1",
        ));
    }
    if n != evaluator.control_point_count() {
        return Err(CurveError::degenerate(format!(
            "evaluator holds {} control points, sampling {n}",
            evaluator.control_point_count()
        )));
    }
    if n == 0 {
        return Ok(PointSequence::new());
    }

    let segments = if looped { n } else { n - 1 };
    let mut curve = PointSequence::allocated(sample_count(n, segments_between, looped));
    for segment in 0..segments {
        for step in 0..segments_between {
            let fraction = step as f64 / segments_between as f64;
            curve.set(
                segment * segments_between + step,
                evaluator.point_in_segment(segment, fraction),
            );
        }
    }

    if let Some(last) = control_points.get(segments % n) {
        curve.set(segments * segments_between, last);
    }
    if looped {
        close_loop(&mut curve);
    }
    Ok(curve)
}

/// Replace the first and last points with the midpoint of the first two.
///
/// A tube extruded along the result sees matching tangents at the seam.
/// Sequences shorter than 2 are left unchanged.
pub fn close_loop(curve: &mut PointSequence) {
    let (Some(first), Some(second)) = (curve.get(0), curve.get(1)) else {
        return;
    };
    let midpoint = nalgebra::center(&first, &second);
    curve.set(0, midpoint);
    curve.set(curve.len() - 1, midpoint);
}

/// Sample the dense curve for `points` with the configured algorithm.
///
/// Two control points always produce the linear curve. For the polynomial
/// mode, `parameters` overrides the configured point parameterization.
///
/// # Errors
///
/// Returns [`CurveError::InvalidConfig`] if the configuration fails
/// [`CurveConfig::validate`], [`CurveError::InsufficientPoints`] for fewer
/// than 2 points, and propagates parameterization and fitting failures.
pub fn sample_curve(
    points: &PointSequence,
    parameters: Option<&ParameterArray>,
    config: &CurveConfig,
) -> CurveResult<SampledCurve> {
    if let Err(err) = config.validate() {
        warn!(%err, "rejected sampling configuration");
        return Err(err);
    }
    let n = points.len();
    if n < 2 {
        warn!(points = n, "curve sampling needs at least 2 points");
        return Err(CurveError::insufficient_points(2, n));
    }

    let k = config.segments_between_control_points;
    let looped = config.tube_loop;
    let mode = if n == 2 {
        InterpolationType::Linear
    } else {
        config.interpolation
    };
    debug!(?mode, points = n, segments_between = k, looped, "sampling curve");

    let sampled = match mode {
        InterpolationType::Linear => {
            sample_segments(&LinearInterpolator::new(points.as_slice()), points, k, looped)?.into()
        }
        InterpolationType::CardinalSpline => {
            let spline = CardinalSpline::new(points, looped)?;
            sample_segments(&spline, points, k, looped)?.into()
        }
        InterpolationType::KochanekSpline => {
            let spline = KochanekSpline::new(points, looped, &config.kochanek)?;
            sample_segments(&spline, points, k, looped)?.into()
        }
        InterpolationType::Polynomial => {
            let derived;
            let parameters = match parameters {
                Some(parameters) => parameters,
                None => {
                    derived = match config.point_parameters {
                        PointParameterType::RawIndices => parameters_from_indices(points)?,
                        PointParameterType::MinimumSpanningTree => {
                            parameters_from_minimum_spanning_tree(points)?
                        }
                    };
                    &derived
                }
            };
            let fit = PolynomialFit::fit(points, parameters, config.polynomial_order)?;
            let points = fit.sample(sample_count(n, k, false));
            SampledCurve {
                points,
                warnings: fit.into_warnings(),
            }
        }
    };
    Ok(sampled)
}
