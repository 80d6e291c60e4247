//! Point parameterization.
//!
//! Assigns every control point a scalar in `[0, 1]` describing how far along
//! the intended curve it lies. The polynomial fit uses these values as the
//! abscissa of its least-squares system.
//!
//! Two strategies are provided:
//!
//! - [`parameters_from_indices`]: parameter proportional to the point index,
//!   for points already in curve order.
//! - [`parameters_from_minimum_spanning_tree`]: parameter from the distance
//!   along the longest path of the point cloud's minimum spanning tree, for
//!   unordered point sets.

use mesh_types::PointSequence;
use nalgebra::Point3;
use tracing::{debug, warn};

use crate::error::{CurveError, CurveResult};

/// One curve parameter per control point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterArray(Vec<f64>);

impl ParameterArray {
    /// Wrap raw parameter values.
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameter of the point at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// All parameter values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of distinct values, compared exactly.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        let mut sorted = self.0.clone();
        sorted.sort_by(f64::total_cmp);
        sorted.dedup();
        sorted.len()
    }
}

impl From<Vec<f64>> for ParameterArray {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Parameterize points by index: `parameter[i] = i / (N - 1)`.
///
/// # Errors
///
/// Returns [`CurveError::InsufficientPoints`] for fewer than 2 points.
///
/// # Example
///
/// ```
/// use landmark_curve::parameters_from_indices;
/// use mesh_types::{Point3, PointSequence};
///
/// let points: PointSequence = (0..5).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
/// let parameters = parameters_from_indices(&points).unwrap();
/// assert_eq!(parameters.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn parameters_from_indices(points: &PointSequence) -> CurveResult<ParameterArray> {
    let n = points.len();
    if n < 2 {
        warn!(points = n, "index parameterization needs at least 2 points");
        return Err(CurveError::insufficient_points(2, n));
    }
    let last = (n - 1) as f64;
    Ok((0..n).map(|i| i as f64 / last).collect::<Vec<_>>().into())
}

/// Parameterize an unordered point set by minimum spanning tree distance.
///
/// The two points farthest apart anchor the tree's trunk. Prim's algorithm
/// grows a spanning tree from the first of them, and the trunk is the tree
/// path between the pair. Trunk points get their normalized cumulative
/// distance from the start; every other point inherits the parameter of the
/// first trunk point on its parent chain, so branches collapse onto their
/// attachment point.
///
/// # Errors
///
/// Returns [`CurveError::InsufficientPoints`] for fewer than 2 points and
/// [`CurveError::DegenerateInput`] when every point coincides.
pub fn parameters_from_minimum_spanning_tree(points: &PointSequence) -> CurveResult<ParameterArray> {
    let n = points.len();
    if n < 2 {
        warn!(points = n, "tree parameterization needs at least 2 points");
        return Err(CurveError::insufficient_points(2, n));
    }

    let (distances, start, end) = DistanceMatrix::with_farthest_pair(points.as_slice());
    let parent = prim_spanning_tree(&distances, start);
    let trunk = trunk_path(&parent, start, end);

    let total: f64 = trunk.windows(2).map(|w| distances.get(w[0], w[1])).sum();
    if total <= 0.0 {
        warn!(points = n, "all points coincide, trunk has zero length");
        return Err(CurveError::degenerate("all points coincide"));
    }

    let mut on_trunk: Vec<Option<f64>> = vec![None; n];
    let mut travelled = 0.0;
    on_trunk[start] = Some(0.0);
    for w in trunk.windows(2) {
        travelled += distances.get(w[0], w[1]);
        on_trunk[w[1]] = Some(travelled / total);
    }
    on_trunk[end] = Some(1.0);

    let values: Vec<f64> = (0..n)
        .map(|vertex| {
            let mut current = vertex;
            loop {
                if let Some(parameter) = on_trunk[current] {
                    break parameter;
                }
                match parent[current] {
                    Some(up) => current = up,
                    None => break 0.0,
                }
            }
        })
        .collect();

    debug!(
        points = n,
        start,
        end,
        trunk_points = trunk.len(),
        trunk_length = total,
        "minimum spanning tree parameterization"
    );
    Ok(values.into())
}

/// Dense symmetric matrix of pairwise point distances, stored row-major.
#[derive(Debug, Clone)]
struct DistanceMatrix {
    size: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Build the matrix and return it with the farthest pair `(start, end)`.
    ///
    /// Ties keep the first pair found scanning rows outer, columns inner.
    fn with_farthest_pair(points: &[Point3<f64>]) -> (Self, usize, usize) {
        let size = points.len();
        let mut matrix = Self {
            size,
            data: vec![0.0; size * size],
        };
        let (mut start, mut end, mut farthest) = (0, 0, 0.0);

        for v in 0..size {
            for u in 0..size {
                let distance = nalgebra::distance(&points[v], &points[u]);
                matrix.data[v * size + u] = distance;
                if distance > farthest {
                    farthest = distance;
                    start = v;
                    end = u;
                }
            }
        }
        (matrix, start, end)
    }

    #[inline]
    fn get(&self, row: usize, column: usize) -> f64 {
        self.data[row * self.size + column]
    }
}

/// Prim's algorithm on the complete graph; returns each vertex's parent.
fn prim_spanning_tree(distances: &DistanceMatrix, root: usize) -> Vec<Option<usize>> {
    let n = distances.size;
    let mut key = vec![f64::INFINITY; n];
    let mut parent = vec![None; n];
    let mut in_tree = vec![false; n];
    key[root] = 0.0;

    for _ in 0..n {
        let Some(next) = (0..n)
            .filter(|&v| !in_tree[v])
            .min_by(|&a, &b| key[a].total_cmp(&key[b]))
        else {
            break;
        };
        in_tree[next] = true;

        for v in 0..n {
            let weight = distances.get(next, v);
            if !in_tree[v] && weight < key[v] {
                key[v] = weight;
                parent[v] = Some(next);
            }
        }
    }
    parent
}

/// Tree path from `start` to `end`, following parent links back from `end`.
fn trunk_path(parent: &[Option<usize>], start: usize, end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match parent[current] {
            Some(up) => {
                path.push(up);
                current = up;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
