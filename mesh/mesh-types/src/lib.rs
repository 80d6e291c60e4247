//! Geometry containers for landmark curve modelling.
//!
//! This crate provides the data types that flow between curve generation
//! and meshing:
//!
//! - [`PointSequence`] - Ordered, pre-sizable sequence of points
//! - [`Vertex`] - A point in 3D space with an optional normal
//! - [`PolygonMesh`] - Vertices with polyline cells and triangle faces
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. Face winding is
//! **counter-clockwise (CCW) when viewed from outside**.
//!
//! # Example
//!
//! ```
//! use mesh_types::{MeshTopology, Point3, PointSequence, PolygonMesh};
//!
//! let mut points = PointSequence::allocated(2);
//! points.set(0, Point3::new(0.0, 0.0, 0.0));
//! points.set(1, Point3::new(0.0, 0.0, 1.0));
//!
//! let mesh = PolygonMesh::polyline(&points);
//! assert_eq!(mesh.line_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod points;
mod traits;
mod vertex;

pub use bounds::Aabb;
pub use mesh::PolygonMesh;
pub use points::PointSequence;
pub use traits::{MeshBounds, MeshTopology};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
