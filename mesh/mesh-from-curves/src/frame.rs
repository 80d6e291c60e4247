//! Moving frames along a sampled curve.
//!
//! Tube cross-sections are oriented by rotation-minimizing (parallel
//! transport) frames so the tube does not twist between samples.

use nalgebra::{Point3, Vector3};

/// Orthonormal frame at a curve sample.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Unit tangent, pointing forward along the curve.
    pub tangent: Vector3<f64>,
    /// Unit normal, perpendicular to the tangent.
    pub normal: Vector3<f64>,
    /// Unit binormal, `tangent × normal`.
    pub binormal: Vector3<f64>,
}

impl Frame {
    /// Build a frame around a tangent, choosing an arbitrary normal.
    ///
    /// A zero tangent falls back to `+Z`.
    #[must_use]
    pub fn from_tangent(tangent: Vector3<f64>) -> Self {
        let tangent = tangent.try_normalize(f64::EPSILON).unwrap_or(Vector3::z());
        let normal = find_perpendicular(tangent);
        Self {
            tangent,
            normal,
            binormal: tangent.cross(&normal),
        }
    }
}

/// Unit vector perpendicular to `v`, built from the least aligned axis.
fn find_perpendicular(v: Vector3<f64>) -> Vector3<f64> {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
    let axis = if ax <= ay && ax <= az {
        Vector3::x()
    } else if ay <= az {
        Vector3::y()
    } else {
        Vector3::z()
    };

    v.cross(&axis)
        .try_normalize(f64::EPSILON)
        .unwrap_or(Vector3::y())
}

/// Direction of the first non-degenerate step forward from `start`.
fn forward_direction(points: &[Point3<f64>], start: usize) -> Option<Vector3<f64>> {
    points[start..]
        .windows(2)
        .find_map(|w| (w[1] - w[0]).try_normalize(f64::EPSILON))
}

/// Compute a parallel transport frame at every point of a polyline.
///
/// Interior tangents bisect the incoming and outgoing directions. When the
/// polyline is closed (first point equals last point) the seam tangent is
/// the bisector across the seam, so the first and last frames share a
/// tangent and the tube closes without a crease.
///
/// Returns an empty vector for fewer than 2 points.
///
/// # Example
///
/// ```
/// use mesh_from_curves::parallel_transport_frames;
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ];
///
/// let frames = parallel_transport_frames(&points);
/// assert_eq!(frames.len(), 3);
/// ```
#[must_use]
pub fn parallel_transport_frames(points: &[Point3<f64>]) -> Vec<Frame> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let closed = n > 3 && points[0] == points[n - 1];
    let seam_tangent = if closed {
        let outgoing = points[1] - points[0];
        let incoming = points[n - 1] - points[n - 2];
        (outgoing + incoming).try_normalize(f64::EPSILON)
    } else {
        None
    };

    let first_tangent = seam_tangent
        .or_else(|| forward_direction(points, 0))
        .unwrap_or(Vector3::z());

    let mut frames = Vec::with_capacity(n);
    frames.push(Frame::from_tangent(first_tangent));

    for i in 1..n {
        let prev = frames[i - 1];
        let tangent = if i == n - 1 {
            seam_tangent
                .or_else(|| (points[i] - points[i - 1]).try_normalize(f64::EPSILON))
                .unwrap_or(prev.tangent)
        } else {
            let incoming = points[i] - points[i - 1];
            let outgoing = points[i + 1] - points[i];
            (incoming + outgoing)
                .try_normalize(f64::EPSILON)
                .unwrap_or(prev.tangent)
        };

        frames.push(transport(&prev, tangent));
    }

    frames
}

/// Rotate `prev` so its tangent aligns with `tangent` (Rodrigues' formula).
fn transport(prev: &Frame, tangent: Vector3<f64>) -> Frame {
    let axis = prev.tangent.cross(&tangent);
    let sin_a = axis.norm();
    let cos_a = prev.tangent.dot(&tangent).clamp(-1.0, 1.0);

    if sin_a < f64::EPSILON {
        // Parallel or anti-parallel tangents
        let sign = if cos_a >= 0.0 { 1.0 } else { -1.0 };
        return Frame {
            tangent,
            normal: prev.normal * sign,
            binormal: prev.binormal * sign,
        };
    }

    let k = axis / sin_a;
    let rotate = |v: Vector3<f64>| v * cos_a + k.cross(&v) * sin_a + k * k.dot(&v) * (1.0 - cos_a);

    Frame {
        tangent,
        normal: rotate(prev.normal),
        binormal: rotate(prev.binormal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_orthonormal(frame: &Frame) {
        assert_relative_eq!(frame.tangent.norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(frame.normal.norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(frame.binormal.norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(frame.tangent.dot(&frame.normal), 0.0, epsilon = 1e-10);
        assert_relative_eq!(frame.tangent.dot(&frame.binormal), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn frame_from_axis_tangents() {
        for tangent in [Vector3::x(), Vector3::y(), Vector3::z()] {
            assert_orthonormal(&Frame::from_tangent(tangent));
        }
    }

    #[test]
    fn frame_from_zero_tangent() {
        let frame = Frame::from_tangent(Vector3::zeros());
        assert_relative_eq!(frame.tangent.z, 1.0);
    }

    #[test]
    fn straight_line_frames() {
        let points: Vec<_> = (0..4_i32).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        let frames = parallel_transport_frames(&points);

        assert_eq!(frames.len(), 4);
        for frame in &frames {
            assert_relative_eq!(frame.tangent.x, 1.0, epsilon = 1e-10);
            assert_relative_eq!(frame.normal.dot(&frames[0].normal), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn quarter_turn_frames() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let frames = parallel_transport_frames(&points);

        assert!(frames[0].tangent.x > 0.5);
        assert!(frames[2].tangent.y > 0.5);
        frames.iter().for_each(assert_orthonormal);
    }

    #[test]
    fn duplicate_samples_keep_previous_tangent() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let frames = parallel_transport_frames(&points);

        assert_eq!(frames.len(), 3);
        assert_relative_eq!(frames[0].tangent.z, 1.0, epsilon = 1e-10);
        frames.iter().for_each(assert_orthonormal);
    }

    #[test]
    fn closed_polyline_shares_seam_tangent() {
        let points = vec![
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.5, 0.0, 0.0),
        ];
        let frames = parallel_transport_frames(&points);
        let first = frames[0].tangent;
        let last = frames[frames.len() - 1].tangent;

        assert_relative_eq!(first.dot(&last), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn too_few_points() {
        assert!(parallel_transport_frames(&[]).is_empty());
        assert!(parallel_transport_frames(&[Point3::origin()]).is_empty());
    }

    #[test]
    fn perpendicular_is_perpendicular() {
        for v in [Vector3::x(), Vector3::y(), Vector3::z(), Vector3::new(1.0, 2.0, 3.0)] {
            assert_relative_eq!(v.dot(&find_perpendicular(v)), 0.0, epsilon = 1e-10);
        }
    }
}
