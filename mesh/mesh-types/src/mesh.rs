//! Polygon mesh with polyline and triangle cells.

use crate::{Aabb, MeshBounds, MeshTopology, PointSequence, Vertex};

/// A polygon mesh holding shared vertices plus two kinds of cells.
///
/// - `lines`: polyline cells, each an ordered list of vertex indices
/// - `faces`: triangles as `[v0, v1, v2]` with counter-clockwise winding
///   when viewed from outside
///
/// A bare curve is a mesh with one polyline cell and no faces; a tube or
/// sphere surface has faces and no lines.
///
/// # Example
///
/// ```
/// use mesh_types::{MeshTopology, Point3, PolygonMesh, PointSequence};
///
/// let points: PointSequence = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ]
/// .into();
///
/// let mesh = PolygonMesh::polyline(&points);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.lines, vec![vec![0, 1, 2]]);
/// assert_eq!(mesh.face_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Polyline cells as indices into the vertex array.
    pub lines: Vec<Vec<u32>>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl PolygonMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            lines: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated vertex and face capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            lines: Vec::new(),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Build a mesh with a single polyline cell visiting every point in
    /// order.
    ///
    /// An empty sequence yields an empty mesh with no cells.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so point counts > 4B are unsupported
    pub fn polyline(points: &PointSequence) -> Self {
        let vertices: Vec<Vertex> = points.iter().copied().map(Vertex::new).collect();
        let lines = if vertices.is_empty() {
            Vec::new()
        } else {
            vec![(0..vertices.len() as u32).collect()]
        };
        Self {
            vertices,
            lines,
            faces: Vec::new(),
        }
    }

    /// Vertex positions in order.
    #[must_use]
    pub fn positions(&self) -> PointSequence {
        self.vertices.iter().map(|v| v.position).collect()
    }
}

impl MeshTopology for PolygonMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }
}

impl MeshBounds for PolygonMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}
