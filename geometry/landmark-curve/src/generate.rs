//! Top-level curve model generation.
//!
//! Ties the pipeline together: validate the configuration, optionally clean
//! the control points, pick the output by point count (nothing, a sphere
//! marker, or a sampled curve), and build the line or tube mesh.

use mesh_types::{PointSequence, PolygonMesh};
use tracing::{debug, info, warn};

use crate::builder::{build_sphere_mesh, build_tube_mesh};
use crate::clean::kept_indices;
use crate::config::{CurveConfig, InterpolationType};
use crate::error::{CurveError, CurveResult, CurveWarning};
use crate::parameterize::ParameterArray;
use crate::sampler::sample_curve;

/// Output of curve generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveModel {
    /// Line, tube or sphere mesh.
    pub mesh: PolygonMesh,
    /// Dense sampled curve; empty when no curve was sampled.
    pub curve_points: PointSequence,
    /// Non-fatal conditions raised along the way.
    pub warnings: Vec<CurveWarning>,
}

/// Generate the curve model for `points` with the configured algorithm.
///
/// | Points | Output                                                     |
/// |--------|------------------------------------------------------------|
/// | 0      | empty mesh                                                 |
/// | 1      | sphere of `tube_radius` centered on the point              |
/// | 2      | linear curve, whatever the interpolation type              |
/// | 3+     | curve from the configured interpolation                    |
///
/// Curves become tubes when `tube_radius` is positive and stay bare
/// polylines otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - `points` is `None`
/// - The configuration fails [`CurveConfig::validate`]
/// - Parameterization, fitting or extrusion fails
///
/// # Example
///
/// ```
/// use landmark_curve::{generate_curve_model, CurveConfig, InterpolationType};
/// use mesh_types::{MeshTopology, Point3, PointSequence};
///
/// let points: PointSequence = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
///     Point3::new(3.0, 1.0, 0.0),
/// ]
/// .into();
///
/// let config = CurveConfig::default()
///     .with_interpolation(InterpolationType::CardinalSpline)
///     .with_tube_radius(0.25);
///
/// let model = generate_curve_model(Some(&points), &config).unwrap();
/// assert_eq!(model.curve_points.len(), 3 * 5 + 1);
/// assert!(model.mesh.face_count() > 0);
/// ```
pub fn generate_curve_model(
    points: Option<&PointSequence>,
    config: &CurveConfig,
) -> CurveResult<CurveModel> {
    generate(points, None, config)
}

/// Generate a polynomial curve model from caller-supplied point parameters.
///
/// The interpolation type in `config` is ignored. `None` parameters fall
/// back to the configured point parameterization.
///
/// # Errors
///
/// Returns [`CurveError::ParameterCountMismatch`] when `parameters` does not
/// hold one value per point, and the errors of [`generate_curve_model`]
/// otherwise.
pub fn generate_polynomial_model_with_parameters(
    points: Option<&PointSequence>,
    parameters: Option<&ParameterArray>,
    config: &CurveConfig,
) -> CurveResult<CurveModel> {
    let config = config
        .clone()
        .with_interpolation(InterpolationType::Polynomial);
    generate(points, parameters, &config)
}

fn generate(
    points: Option<&PointSequence>,
    parameters: Option<&ParameterArray>,
    config: &CurveConfig,
) -> CurveResult<CurveModel> {
    let Some(points) = points else {
        warn!("curve generation without control points");
        return Err(CurveError::NullInput {
            what: "control points",
        });
    };
    if let Err(err) = config.validate() {
        warn!(%err, "rejected curve configuration");
        return Err(err);
    }
    if let Some(parameters) = parameters {
        if parameters.len() != points.len() {
            warn!(
                points = points.len(),
                parameters = parameters.len(),
                "parameter count does not match point count"
            );
            return Err(CurveError::ParameterCountMismatch {
                expected: points.len(),
                actual: parameters.len(),
            });
        }
    }
    debug!(
        interpolation = ?config.interpolation,
        points = points.len(),
        looped = config.tube_loop,
        radius = config.tube_radius,
        "generating curve model"
    );

    let mut warnings = Vec::new();
    let cleaned;
    let cleaned_parameters;
    let (points, parameters) = if config.clean_markups {
        let kept = kept_indices(points, config.clean_tolerance);
        let removed = points.len() - kept.len();
        if removed > 0 {
            warnings.push(CurveWarning::PointsMerged { removed });
        }
        cleaned = kept
            .iter()
            .filter_map(|&i| points.get(i))
            .collect::<PointSequence>();
        cleaned_parameters = parameters.map(|p| {
            ParameterArray::new(kept.iter().filter_map(|&i| p.get(i)).collect())
        });
        (&cleaned, cleaned_parameters.as_ref())
    } else {
        (points, parameters)
    };

    let model = match points.len() {
        0 => CurveModel {
            warnings,
            ..CurveModel::default()
        },
        1 => CurveModel {
            mesh: build_sphere_mesh(
                points.first(),
                config.tube_radius,
                config.tube_number_of_sides,
            )?,
            curve_points: PointSequence::new(),
            warnings,
        },
        _ => {
            let sampled = sample_curve(points, parameters, config)?;
            warnings.extend(sampled.warnings);
            let mesh = build_tube_mesh(
                Some(&sampled.points),
                config.tube_radius,
                config.tube_number_of_sides,
            )?;
            CurveModel {
                mesh,
                curve_points: sampled.points,
                warnings,
            }
        }
    };

    info!(
        control_points = points.len(),
        curve_points = model.curve_points.len(),
        vertices = model.mesh.vertices.len(),
        faces = model.mesh.faces.len(),
        warnings = model.warnings.len(),
        "curve model generated"
    );
    Ok(model)
}
