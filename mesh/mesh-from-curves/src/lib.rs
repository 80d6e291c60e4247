//! Generate surface meshes from curve polylines.
//!
//! This crate turns sampled curves into renderable geometry:
//!
//! - **Tube extrusion**: sweep a regular polygon along a polyline, with
//!   optional end caps
//! - **Parallel transport**: rotation-minimizing frames for twist-free tubes,
//!   with matching tangents across the seam of closed polylines
//! - **Sphere source**: a latitude/longitude sphere, used as a marker when a
//!   curve degenerates to a single point
//!
//! # Quick Start
//!
//! ```
//! use mesh_from_curves::{tube_from_polyline, TubeConfig};
//! use nalgebra::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 10.0),
//! ];
//!
//! let config = TubeConfig::default()
//!     .with_radius(0.5)
//!     .with_sides(16);
//!
//! let mesh = tube_from_polyline(&points, &config).unwrap();
//! assert!(!mesh.faces.is_empty());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod error;
mod frame;
mod sphere;
mod tube;

pub use error::{TubeError, TubeResult};
pub use frame::{Frame, parallel_transport_frames};
pub use sphere::uv_sphere;
pub use tube::{TubeConfig, tube_from_line_mesh, tube_from_polyline};
