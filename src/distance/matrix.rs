//! Dense distance matrix.

use crate::error::RoutingError;
use crate::models::Node;

/// Euclidean distance between two points.
///
/// ```
/// use u_hive::distance::euclidean;
///
/// assert!((euclidean((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < 1e-10);
/// ```
pub fn euclidean(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let dx = p1.0 - p2.0;
    let dy = p1.1 - p2.1;
    (dx * dx + dy * dy).sqrt()
}

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per instance and read-only afterwards.
///
/// # Examples
///
/// ```
/// use u_hive::models::Node;
/// use u_hive::distance::DistanceMatrix;
///
/// let nodes = vec![
///     Node::new(0, 0.0, 0.0),
///     Node::new(1, 3.0, 4.0),
///     Node::new(2, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a symmetric Euclidean matrix with a zero diagonal.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let n = nodes.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = nodes[i].distance_to(&nodes[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from explicit rows.
    ///
    /// Every row must have as many entries as there are rows, and every
    /// entry must be finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RoutingError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(RoutingError::InvalidMatrix {
                    reason: format!("row {i} has {} entries, expected {size}", row.len()),
                });
            }
            if let Some(j) = row.iter().position(|d| !d.is_finite()) {
                return Err(RoutingError::InvalidMatrix {
                    reason: format!("entry ({i}, {j}) is not finite"),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
