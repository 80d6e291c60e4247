//! Tube extrusion along polylines.
//!
//! Sweeps a regular polygon cross-section along a polyline and optionally
//! caps both ends with triangle fans.

use mesh_types::{PolygonMesh, Vertex};
use nalgebra::Point3;

use crate::error::{TubeError, TubeResult};
use crate::frame::{Frame, parallel_transport_frames};

/// Configuration for tube extrusion.
#[derive(Debug, Clone)]
pub struct TubeConfig {
    /// Radius of the tube.
    pub radius: f64,
    /// Number of sides of the cross-section polygon.
    pub sides: usize,
    /// Whether to cap the ends of the tube.
    pub capped: bool,
}

impl Default for TubeConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            sides: 8,
            capped: true,
        }
    }
}

impl TubeConfig {
    /// Set the radius.
    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of cross-section sides.
    #[must_use]
    pub const fn with_sides(mut self, sides: usize) -> Self {
        self.sides = sides;
        self
    }

    /// Disable end caps.
    #[must_use]
    pub const fn uncapped(mut self) -> Self {
        self.capped = false;
        self
    }

    fn validate(&self, point_count: usize) -> TubeResult<()> {
        if point_count < 2 {
            return Err(TubeError::TooFewPoints {
                min: 2,
                actual: point_count,
            });
        }
        if self.radius <= 0.0 || !self.radius.is_finite() {
            return Err(TubeError::InvalidRadius(self.radius));
        }
        if self.sides < 3 {
            return Err(TubeError::TooFewSides {
                min: 3,
                actual: self.sides,
            });
        }
        Ok(())
    }
}

/// Extrude a tube around a polyline.
///
/// Produces `points.len() * sides` ring vertices, plus one center vertex per
/// cap when capped. Side faces are two triangles per quad; caps are fans.
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than 2 points are provided
/// - Radius is not positive and finite
/// - Fewer than 3 sides are requested
///
/// # Example
///
/// ```
/// use mesh_from_curves::{tube_from_polyline, TubeConfig};
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 10.0),
/// ];
///
/// let config = TubeConfig::default().with_radius(0.5);
/// let mesh = tube_from_polyline(&points, &config).unwrap();
///
/// assert_eq!(mesh.vertices.len(), 2 * 8 + 2);
/// assert!(mesh.lines.is_empty());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn tube_from_polyline(points: &[Point3<f64>], config: &TubeConfig) -> TubeResult<PolygonMesh> {
    config.validate(points.len())?;

    let frames = parallel_transport_frames(points);
    let rings = points.len();
    let sides = config.sides;
    let cap_faces = if config.capped { 2 * sides } else { 0 };
    let mut mesh = PolygonMesh::with_capacity(rings * sides + 2, 2 * (rings - 1) * sides + cap_faces);

    for (ring, (point, frame)) in points.iter().zip(&frames).enumerate() {
        for side in 0..sides {
            let angle = std::f64::consts::TAU * side as f64 / sides as f64;
            let radial = frame.normal * angle.cos() + frame.binormal * angle.sin();
            let normal = radial.try_normalize(f64::EPSILON).unwrap_or(frame.normal);
            mesh.vertices
                .push(Vertex::with_normal(*point + radial * config.radius, normal));

            if ring + 1 < rings {
                let curr = (ring * sides + side) as u32;
                let next_side = (ring * sides + (side + 1) % sides) as u32;
                let next_ring = ((ring + 1) * sides + side) as u32;
                let next_both = ((ring + 1) * sides + (side + 1) % sides) as u32;

                mesh.faces.push([curr, next_ring, next_side]);
                mesh.faces.push([next_side, next_ring, next_both]);
            }
        }
    }

    if config.capped {
        add_cap(&mut mesh, &frames[0], points[0], sides, 0, true);
        add_cap(
            &mut mesh,
            &frames[rings - 1],
            points[rings - 1],
            sides,
            (rings - 1) * sides,
            false,
        );
    }

    Ok(mesh)
}

/// Extrude the first polyline cell of a line mesh.
///
/// # Errors
///
/// Returns [`TubeError::MissingPolyline`] when the mesh has no polyline
/// cell, and the errors of [`tube_from_polyline`] otherwise.
pub fn tube_from_line_mesh(line: &PolygonMesh, config: &TubeConfig) -> TubeResult<PolygonMesh> {
    let cell = line.lines.first().ok_or(TubeError::MissingPolyline)?;
    let points: Vec<Point3<f64>> = cell
        .iter()
        .filter_map(|&i| line.vertices.get(i as usize))
        .map(|v| v.position)
        .collect();
    tube_from_polyline(&points, config)
}

/// Append a triangle fan closing one end of the tube.
#[allow(clippy::cast_possible_truncation)]
fn add_cap(
    mesh: &mut PolygonMesh,
    frame: &Frame,
    center: Point3<f64>,
    sides: usize,
    ring_start: usize,
    is_start: bool,
) {
    let normal = if is_start { -frame.tangent } else { frame.tangent };
    let center_idx = mesh.vertices.len() as u32;
    mesh.vertices.push(Vertex::with_normal(center, normal));

    for side in 0..sides {
        let curr = (ring_start + side) as u32;
        let next = (ring_start + (side + 1) % sides) as u32;
        if is_start {
            mesh.faces.push([center_idx, next, curr]);
        } else {
            mesh.faces.push([center_idx, curr, next]);
        }
    }
}
