//! Smooth curves and tube meshes through sparse 3D landmark points.
//!
//! Turns a handful of control points into continuous geometry: a dense
//! sampled curve, extruded into a capped tube or left as a bare polyline.
//!
//! - **Interpolation**: piecewise [`InterpolationType::Linear`],
//!   [`CardinalSpline`], [`KochanekSpline`], or a least-squares
//!   [`PolynomialFit`]
//! - **Parameterization**: by point index, or by distance along the
//!   minimum spanning tree of an unordered point cloud
//! - **Meshing**: line and tube meshes for curves, a sphere marker for a
//!   single point
//!
//! Degenerate inputs are handled uniformly by [`generate_curve_model`]: no
//! points give an empty mesh, one point gives a sphere, and two points give a
//! straight segment whatever the interpolation type.
//!
//! # Example
//!
//! ```
//! use landmark_curve::{generate_curve_model, CurveConfig, InterpolationType};
//! use mesh_types::{Point3, PointSequence};
//!
//! let landmarks: PointSequence = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 5.0, 0.0),
//!     Point3::new(20.0, 0.0, 5.0),
//!     Point3::new(30.0, 5.0, 5.0),
//! ]
//! .into();
//!
//! let config = CurveConfig::default()
//!     .with_interpolation(InterpolationType::KochanekSpline)
//!     .with_segments_between_control_points(10)
//!     .with_tube_radius(0.5);
//!
//! let model = generate_curve_model(Some(&landmarks), &config).unwrap();
//!
//! // The curve passes through every landmark.
//! assert_eq!(model.curve_points.get(10), landmarks.get(1));
//! assert!(model.warnings.is_empty());
//! ```
//!
//! # Logging
//!
//! Events are emitted through `tracing`; no subscriber is installed.
//! Rejected inputs log at `warn`, pipeline steps at `debug`.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::suboptimal_flops,
    clippy::cast_precision_loss,
    clippy::doc_markdown
)]

mod builder;
mod clean;
mod config;
mod error;
mod generate;
mod parameterize;
mod polyfit;
mod sampler;
mod spline;

pub use builder::{build_line_mesh, build_sphere_mesh, build_tube_mesh};
pub use clean::clean_points;
pub use config::{
    CurveConfig, InterpolationType, KochanekParams, MAX_POLYNOMIAL_ORDER, PointParameterType,
};
pub use error::{CurveError, CurveResult, CurveWarning};
pub use generate::{CurveModel, generate_curve_model, generate_polynomial_model_with_parameters};
pub use parameterize::{
    ParameterArray, parameters_from_indices, parameters_from_minimum_spanning_tree,
};
pub use polyfit::PolynomialFit;
pub use sampler::{
    LinearInterpolator, SampledCurve, close_loop, sample_count, sample_curve, sample_segments,
};
pub use spline::{Axis, CardinalSpline, EndCondition, KochanekSpline, SegmentEvaluator};
