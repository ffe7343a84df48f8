//! Weighted clustering and path-length metrics over dense adjacency
//! matrices.
//!
//! Degenerate networks are not errors here: an all-zero input surfaces as a
//! NaN clustering coefficient and a disconnected one as an infinite
//! characteristic path length. The propensity composer resolves both with
//! its override rules.

use crate::matrix::SquareMatrix;

/// Effective lattice radius: half the average unweighted degree, rounded
/// up.
///
/// # Examples
/// ```
/// use smallworld_core::{SquareMatrix, effective_radius};
///
/// let path = SquareMatrix::from_rows(vec![
///     vec![0.0, 1.0, 0.0],
///     vec![1.0, 0.0, 1.0],
///     vec![0.0, 1.0, 0.0],
/// ]).expect("square");
/// assert_eq!(effective_radius(&path), 1);
/// ```
#[must_use]
pub fn effective_radius(matrix: &SquareMatrix) -> usize {
    let n = matrix.n();
    if n == 0 {
        return 0;
    }
    let average_degree = matrix.positive_count() as f64 / n as f64;
    (average_degree / 2.0).ceil() as usize
}

/// Weighted clustering coefficient of an undirected network.
///
/// Weights are normalised by the matrix maximum and cube-rooted so that a
/// triangle's strength is the geometric mean of its three edge weights;
/// per-node triangle strength is the diagonal of the transformed matrix's
/// cube. Each node contributes its triangle strength over `k * (k - 1)`
/// possible triangles (`k` being the unweighted degree), with the
/// denominator treated as infinite when the node closes no triangles so
/// isolated and degree-one nodes contribute a clean zero. An all-zero
/// input normalises to NaN, which propagates through the mean.
#[must_use]
pub fn clustering_coefficient(matrix: &SquareMatrix) -> f64 {
    let n = matrix.n();
    if n == 0 {
        return f64::NAN;
    }

    let max = matrix.max_value();
    let transformed: Vec<f64> = matrix
        .values()
        .iter()
        .map(|&value| (value / max).cbrt())
        .collect();
    let triangle_strength = cube_diagonal(&transformed, n);

    let mut total = 0.0_f64;
    for i in 0..n {
        let degree = (0..n).filter(|&j| matrix.get(i, j) > 0.0).count() as f64;
        let strength = triangle_strength[i];
        let denominator = if strength == 0.0 {
            f64::INFINITY
        } else {
            degree * (degree - 1.0)
        };
        total += strength / denominator;
    }
    total / n as f64
}

/// Diagonal of `m^3` for a dense row-major `n x n` buffer.
fn cube_diagonal(m: &[f64], n: usize) -> Vec<f64> {
    let mut squared = vec![0.0_f64; n * n];
    for i in 0..n {
        for k in 0..n {
            let left = m[i * n + k];
            if left == 0.0 {
                continue;
            }
            for j in 0..n {
                squared[i * n + j] += left * m[k * n + j];
            }
        }
    }
    (0..n)
        .map(|i| (0..n).map(|j| squared[i * n + j] * m[j * n + i]).sum())
        .collect()
}

/// Weighted characteristic path length of an undirected network.
///
/// Each positive weight contributes its reciprocal as a distance (stronger
/// edges are closer); absent edges are infinitely distant. All-pairs
/// shortest distances come from a dense Floyd-Warshall sweep, and the
/// result is the mean over the `n * (n - 1) / 2` unordered pairs. A
/// disconnected network yields `+inf`; fewer than two nodes yield NaN.
///
/// # Examples
/// ```
/// use smallworld_core::{SquareMatrix, characteristic_path_length};
///
/// let path = SquareMatrix::from_rows(vec![
///     vec![0.0, 1.0, 0.0],
///     vec![1.0, 0.0, 1.0],
///     vec![0.0, 1.0, 0.0],
/// ]).expect("square");
/// let length = characteristic_path_length(&path);
/// assert!((length - 4.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn characteristic_path_length(matrix: &SquareMatrix) -> f64 {
    let n = matrix.n();
    let mut dist = vec![f64::INFINITY; n * n];
    for i in 0..n {
        dist[i * n + i] = 0.0;
        for j in 0..n {
            let weight = matrix.get(i, j);
            if i != j && weight > 0.0 {
                dist[i * n + j] = weight.recip();
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let through = dist[i * n + k];
            if through.is_infinite() {
                continue;
            }
            for j in 0..n {
                let candidate = through + dist[k * n + j];
                if candidate < dist[i * n + j] {
                    dist[i * n + j] = candidate;
                }
            }
        }
    }

    let mut total = 0.0_f64;
    for i in 0..n {
        for j in (i + 1)..n {
            total += dist[i * n + j];
        }
    }
    let pairs = (n * (n.saturating_sub(1))) as f64 / 2.0;
    total / pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> SquareMatrix {
        SquareMatrix::from_rows(vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ])
        .expect("square")
    }

    fn triangle_graph() -> SquareMatrix {
        SquareMatrix::from_rows(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn effective_radius_of_path_graph_is_one() {
        assert_eq!(effective_radius(&path_graph()), 1);
    }

    #[test]
    fn effective_radius_of_empty_matrix_is_zero() {
        assert_eq!(effective_radius(&SquareMatrix::zeros(0)), 0);
    }

    #[test]
    fn path_graph_has_no_triangles() {
        assert_eq!(clustering_coefficient(&path_graph()), 0.0);
    }

    #[test]
    fn binary_triangle_clusters_fully() {
        // Each node closes its one triangle both ways round, so strength 2
        // over k * (k - 1) = 2 possible gives 1 per node before averaging.
        let c = clustering_coefficient(&triangle_graph());
        assert!((c - 1.0).abs() < 1e-12, "got {c}");
    }

    #[test]
    fn clustering_of_all_zero_matrix_is_nan() {
        assert!(clustering_coefficient(&SquareMatrix::zeros(4)).is_nan());
    }

    #[test]
    fn clustering_is_scale_invariant() {
        let scaled = triangle_graph().scaled(0.25);
        let c = clustering_coefficient(&scaled);
        assert!((c - clustering_coefficient(&triangle_graph())).abs() < 1e-12);
    }

    #[test]
    fn path_length_of_path_graph_is_positive_and_finite() {
        let length = characteristic_path_length(&path_graph());
        assert!(length > 0.0);
        assert!(length.is_finite());
        assert!((length - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn stronger_edges_shorten_paths() {
        let weak = path_graph();
        let strong = path_graph().scaled(2.0);
        assert!(
            characteristic_path_length(&strong) < characteristic_path_length(&weak)
        );
    }

    #[test]
    fn disconnected_network_has_infinite_path_length() {
        let mut m = SquareMatrix::zeros(4);
        m.set(0, 1, 1.0);
        m.set(1, 0, 1.0);
        m.set(2, 3, 1.0);
        m.set(3, 2, 1.0);
        assert!(characteristic_path_length(&m).is_infinite());
    }

    #[test]
    fn single_node_path_length_is_nan() {
        assert!(characteristic_path_length(&SquareMatrix::zeros(1)).is_nan());
    }
}
