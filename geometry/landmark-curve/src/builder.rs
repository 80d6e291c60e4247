//! Output mesh construction.

use mesh_from_curves::{TubeConfig, tube_from_line_mesh, uv_sphere};
use mesh_types::{PointSequence, PolygonMesh};
use nalgebra::Point3;
use tracing::{debug, warn};

use crate::error::{CurveError, CurveResult};

/// Build a mesh with one polyline cell visiting every point in order.
///
/// # Errors
///
/// Returns [`CurveError::NullInput`] if `points` is `None`.
pub fn build_line_mesh(points: Option<&PointSequence>) -> CurveResult<PolygonMesh> {
    let points = points.ok_or_else(|| missing("curve points"))?;
    Ok(PolygonMesh::polyline(points))
}

/// Build a capped tube of `radius` around the polyline through `points`.
///
/// A radius of zero (or less) returns the bare line mesh of
/// [`build_line_mesh`].
///
/// # Errors
///
/// Returns [`CurveError::NullInput`] if `points` is `None`, and
/// [`CurveError::Tube`] if extrusion rejects the polyline or parameters.
///
/// # Example
///
/// ```
/// use landmark_curve::build_tube_mesh;
/// use mesh_types::{MeshTopology, Point3, PointSequence};
///
/// let points: PointSequence = vec![Point3::origin(), Point3::new(0.0, 0.0, 5.0)].into();
/// let tube = build_tube_mesh(Some(&points), 1.0, 6).unwrap();
/// assert_eq!(tube.vertex_count(), 2 * 6 + 2);
///
/// let bare = build_tube_mesh(Some(&points), 0.0, 6).unwrap();
/// assert_eq!(bare.line_count(), 1);
/// ```
pub fn build_tube_mesh(
    points: Option<&PointSequence>,
    radius: f64,
    sides: usize,
) -> CurveResult<PolygonMesh> {
    let line = build_line_mesh(points)?;
    if radius <= 0.0 {
        return Ok(line);
    }

    let config = TubeConfig::default().with_radius(radius).with_sides(sides);
    let tube = tube_from_line_mesh(&line, &config)?;
    debug!(
        points = line.vertices.len(),
        radius,
        sides,
        faces = tube.faces.len(),
        "tube extruded"
    );
    Ok(tube)
}

/// Build a sphere marker of `radius` at `center`, with `sides` rings and
/// segments.
///
/// # Errors
///
/// Returns [`CurveError::NullInput`] if `center` is `None`, and
/// [`CurveError::Tube`] for a negative radius or fewer than 3 sides.
pub fn build_sphere_mesh(
    center: Option<Point3<f64>>,
    radius: f64,
    sides: usize,
) -> CurveResult<PolygonMesh> {
    let center = center.ok_or_else(|| missing("sphere center"))?;
    Ok(uv_sphere(center, radius, sides)?)
}

fn missing(what: &'static str) -> CurveError {
    warn!(what, "missing geometry input");
    CurveError::NullInput { what }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_from_curves::TubeError;
    use mesh_types::{MeshBounds, MeshTopology};

    fn points() -> PointSequence {
        (0..4_i32).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect()
    }

    #[test]
    fn line_mesh() {
        let mesh = build_line_mesh(Some(&points())).expect("line");
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.lines, vec![vec![0, 1, 2, 3]]);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn zero_radius_bypasses_extrusion() {
        let points = points();
        let line = build_line_mesh(Some(&points)).expect("line");
        let tube = build_tube_mesh(Some(&points), 0.0, 8).expect("tube");
        assert_eq!(tube, line);
    }

    #[test]
    fn tube_surrounds_line() {
        let mesh = build_tube_mesh(Some(&points()), 0.5, 8).expect("tube");
        assert_eq!(mesh.line_count(), 0);
        assert_eq!(mesh.vertex_count(), 4 * 8 + 2);
        let widest = mesh
            .vertices
            .iter()
            .map(|v| v.position.y.hypot(v.position.z))
            .fold(0.0, f64::max);
        assert_relative_eq!(widest, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn tube_errors_propagate() {
        let one: PointSequence = vec![Point3::origin()].into();
        assert!(matches!(
            build_tube_mesh(Some(&one), 1.0, 8),
            Err(CurveError::Tube(TubeError::TooFewPoints { .. }))
        ));
        assert!(matches!(
            build_tube_mesh(Some(&points()), 1.0, 2),
            Err(CurveError::Tube(TubeError::TooFewSides { .. }))
        ));
    }

    #[test]
    fn sphere_at_center() {
        let center = Point3::new(2.0, -1.0, 0.5);
        let sphere = build_sphere_mesh(Some(center), 1.5, 8).expect("sphere");
        let c = sphere.center();
        assert_relative_eq!(c.x, center.x, epsilon = 1e-10);
        assert_relative_eq!(c.y, center.y, epsilon = 1e-10);
        assert_relative_eq!(c.z, center.z, epsilon = 1e-10);
        for v in &sphere.vertices {
            assert_relative_eq!((v.position - center).norm(), 1.5, epsilon = 1e-10);
        }
    }

    #[test]
    fn missing_inputs() {
        assert_eq!(
            build_line_mesh(None),
            Err(CurveError::NullInput {
                what: "curve points"
            })
        );
        assert!(matches!(
            build_tube_mesh(None, 1.0, 8),
            Err(CurveError::NullInput { .. })
        ));
        assert_eq!(
            build_sphere_mesh(None, 1.0, 8),
            Err(CurveError::NullInput {
                what: "sphere center"
            })
        );
    }
}
