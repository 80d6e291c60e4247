//! Mesh vertices.

use nalgebra::{Point3, Vector3};

/// A vertex in 3D space with an optional surface normal.
///
/// Line meshes carry no normals; tube and sphere surfaces carry outward
/// unit normals on every vertex.
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, Vertex};
///
/// let v = Vertex::from_coords(1.0, 2.0, 3.0);
/// assert_eq!(v.position, Point3::new(1.0, 2.0, 3.0));
/// assert!(v.normal.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in space.
    pub position: Point3<f64>,

    /// Unit normal, when the vertex lies on a surface.
    pub normal: Option<Vector3<f64>>,
}

impl Vertex {
    /// Create a vertex without a normal.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: None,
        }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex with a normal.
    #[inline]
    #[must_use]
    pub const fn with_normal(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            normal: Some(normal),
        }
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}
