//! Near-duplicate control point removal.

use mesh_types::PointSequence;
use tracing::debug;

/// Merge points lying within `tolerance` of an earlier kept point.
///
/// The first occurrence survives and order is preserved. Returns the
/// cleaned sequence and the number of points removed.
///
/// # Example
///
/// ```
/// use landmark_curve::clean_points;
/// use mesh_types::{Point3, PointSequence};
///
/// let points: PointSequence = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.001, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
/// ]
/// .into();
///
/// let (cleaned, removed) = clean_points(&points, 0.01);
/// assert_eq!(cleaned.len(), 2);
/// assert_eq!(removed, 1);
/// ```
#[must_use]
pub fn clean_points(points: &PointSequence, tolerance: f64) -> (PointSequence, usize) {
    let kept = kept_indices(points, tolerance);
    let cleaned: PointSequence = kept.iter().filter_map(|&i| points.get(i)).collect();
    (cleaned, points.len() - kept.len())
}

/// Indices of the points [`clean_points`] keeps, in order.
pub(crate) fn kept_indices(points: &PointSequence, tolerance: f64) -> Vec<usize> {
    let slice = points.as_slice();
    let mut kept: Vec<usize> = Vec::with_capacity(slice.len());
    for (index, point) in slice.iter().enumerate() {
        let duplicate = kept
            .iter()
            .any(|&existing| nalgebra::distance(&slice[existing], point) <= tolerance);
        if !duplicate {
            kept.push(index);
        }
    }

    let removed = slice.len() - kept.len();
    if removed > 0 {
        debug!(removed, remaining = kept.len(), tolerance, "merged duplicate points");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn keeps_distinct_points() {
        let points: PointSequence = (0..5_i32).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        let (cleaned, removed) = clean_points(&points, 0.01);
        assert_eq!(cleaned, points);
        assert_eq!(removed, 0);
    }

    #[test]
    fn merges_later_duplicates() {
        let points: PointSequence = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.005, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ]
        .into();
        let (cleaned, removed) = clean_points(&points, 0.01);

        assert_eq!(removed, 2);
        assert_eq!(
            cleaned.as_slice(),
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn zero_tolerance_removes_exact_copies_only() {
        let points: PointSequence = vec![
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(1.0, 1.0, 1.000_001),
        ]
        .into();
        let (cleaned, removed) = clean_points(&points, 0.0);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(removed, 1);
    }

    #[test]
    fn empty_input() {
        let (cleaned, removed) = clean_points(&PointSequence::new(), 0.01);
        assert!(cleaned.is_empty());
        assert_eq!(removed, 0);
    }
}
