//! Latitude/longitude sphere source.

use mesh_types::{PolygonMesh, Vertex};
use nalgebra::{Point3, Vector3};

use crate::error::{TubeError, TubeResult};

/// Generate a UV sphere centered at `center`.
///
/// The sphere has a pole at each end of the Z axis, `resolution - 1`
/// latitude rings of `resolution` vertices each, triangle fans around the
/// poles and two triangles per quad between rings. All vertices carry
/// outward unit normals.
///
/// A zero radius collapses every vertex onto `center`.
///
/// # Errors
///
/// Returns an error if the radius is negative or not finite, or if
/// `resolution` is less than 3.
///
/// # Example
///
/// ```
/// use mesh_from_curves::uv_sphere;
/// use nalgebra::Point3;
///
/// let sphere = uv_sphere(Point3::new(1.0, 2.0, 3.0), 0.5, 8).unwrap();
/// assert_eq!(sphere.vertices.len(), 8 * 7 + 2);
/// assert_eq!(sphere.faces.len(), 2 * 8 * 7);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn uv_sphere(center: Point3<f64>, radius: f64, resolution: usize) -> TubeResult<PolygonMesh> {
    if radius < 0.0 || !radius.is_finite() {
        return Err(TubeError::InvalidRadius(radius));
    }
    if resolution < 3 {
        return Err(TubeError::TooFewSides {
            min: 3,
            actual: resolution,
        });
    }

    let rings = resolution - 1;
    let mut mesh = PolygonMesh::with_capacity(rings * resolution + 2, 2 * rings * resolution);
    let mut push = |direction: Vector3<f64>| {
        mesh.vertices
            .push(Vertex::with_normal(center + direction * radius, direction));
    };

    push(Vector3::z());
    push(-Vector3::z());
    for ring in 1..=rings {
        let phi = std::f64::consts::PI * ring as f64 / resolution as f64;
        for step in 0..resolution {
            let theta = std::f64::consts::TAU * step as f64 / resolution as f64;
            push(Vector3::new(
                phi.sin() * theta.cos(),
                phi.sin() * theta.sin(),
                phi.cos(),
            ));
        }
    }

    let north = 0_u32;
    let south = 1_u32;
    let ring_vertex = |ring: usize, step: usize| (2 + ring * resolution + step % resolution) as u32;

    for step in 0..resolution {
        mesh.faces
            .push([north, ring_vertex(0, step), ring_vertex(0, step + 1)]);
    }
    for ring in 0..rings - 1 {
        for step in 0..resolution {
            let upper = ring_vertex(ring, step);
            let upper_next = ring_vertex(ring, step + 1);
            let lower = ring_vertex(ring + 1, step);
            let lower_next = ring_vertex(ring + 1, step + 1);
            mesh.faces.push([upper, lower, lower_next]);
            mesh.faces.push([upper, lower_next, upper_next]);
        }
    }
    for step in 0..resolution {
        mesh.faces.push([
            south,
            ring_vertex(rings - 1, step + 1),
            ring_vertex(rings - 1, step),
        ]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{MeshBounds, MeshTopology};

    #[test]
    fn sphere_counts() {
        let sphere = uv_sphere(Point3::origin(), 1.0, 8).expect("sphere");
        assert_eq!(sphere.vertex_count(), 58);
        assert_eq!(sphere.face_count(), 112);
        assert_eq!(sphere.line_count(), 0);
    }

    #[test]
    fn vertices_on_surface() {
        let center = Point3::new(1.0, -2.0, 3.0);
        let sphere = uv_sphere(center, 2.5, 6).expect("sphere");

        for v in &sphere.vertices {
            assert_relative_eq!((v.position - center).norm(), 2.5, epsilon = 1e-10);
            let normal = v.normal.expect("normal");
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn sphere_is_centered() {
        let center = Point3::new(4.0, 5.0, 6.0);
        let sphere = uv_sphere(center, 1.0, 8).expect("sphere");
        let c = sphere.center();
        assert_relative_eq!(c.x, center.x, epsilon = 1e-10);
        assert_relative_eq!(c.y, center.y, epsilon = 1e-10);
        assert_relative_eq!(c.z, center.z, epsilon = 1e-10);
    }

    #[test]
    fn faces_wind_outward() {
        let sphere = uv_sphere(Point3::origin(), 1.0, 10).expect("sphere");
        for &[a, b, c] in &sphere.faces {
            let pa = sphere.vertices[a as usize].position;
            let pb = sphere.vertices[b as usize].position;
            let pc = sphere.vertices[c as usize].position;
            let face_normal = (pb - pa).cross(&(pc - pa));
            let centroid = (pa.coords + pb.coords + pc.coords) / 3.0;
            assert!(face_normal.dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn zero_radius_collapses() {
        let sphere = uv_sphere(Point3::new(1.0, 1.0, 1.0), 0.0, 4).expect("sphere");
        assert!(sphere
            .vertices
            .iter()
            .all(|v| v.position == Point3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn invalid_parameters() {
        assert_eq!(
            uv_sphere(Point3::origin(), -1.0, 8).err(),
            Some(TubeError::InvalidRadius(-1.0))
        );
        assert!(matches!(
            uv_sphere(Point3::origin(), 1.0, 2),
            Err(TubeError::TooFewSides { min: 3, actual: 2 })
        ));
    }
}
