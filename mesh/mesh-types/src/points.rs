//! Ordered point sequences.

use nalgebra::Point3;

/// An ordered, index-addressable sequence of points.
///
/// Used both for sparse control points (landmarks) and for dense curve
/// samples. A sequence can be pre-sized with [`PointSequence::allocated`]
/// and then filled slot by slot with [`PointSequence::set`].
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, PointSequence};
///
/// let mut points = PointSequence::allocated(2);
/// points.set(0, Point3::new(0.0, 0.0, 0.0));
/// points.set(1, Point3::new(1.0, 0.0, 0.0));
///
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.get(1), Some(Point3::new(1.0, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    points: Vec<Point3<f64>>,
}

impl PointSequence {
    /// Create an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a sequence of `len` slots, all at the origin.
    ///
    /// Every slot is expected to be overwritten before the sequence is
    /// consumed.
    #[must_use]
    pub fn allocated(len: usize) -> Self {
        Self {
            points: vec![Point3::origin(); len],
        }
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sequence holds no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, or `None` when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point3<f64>> {
        self.points.get(index).copied()
    }

    /// Overwrite the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; slots must be allocated first.
    #[inline]
    pub fn set(&mut self, index: usize, point: Point3<f64>) {
        self.points[index] = point;
    }

    /// Append a point.
    #[inline]
    pub fn push(&mut self, point: Point3<f64>) {
        self.points.push(point);
    }

    /// First point, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<Point3<f64>> {
        self.points.first().copied()
    }

    /// Last point, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<Point3<f64>> {
        self.points.last().copied()
    }

    /// Borrow the points as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Iterate over the points in order.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.points.iter()
    }

    /// Consume the sequence, returning the underlying points.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<Point3<f64>> {
        self.points
    }
}

impl From<Vec<Point3<f64>>> for PointSequence {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point3<f64>> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point3<f64>;
    type IntoIter = std::slice::Iter<'a, Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
