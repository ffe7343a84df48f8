//! Symmetrisation of arbitrary square matrices into undirected adjacency
//! matrices.
//!
//! The pipeline decides *whether* symmetrisation is needed (via the
//! `allclose` check on [`SquareMatrix::is_symmetric`]); this module only
//! performs the rewrite.

use crate::matrix::SquareMatrix;

/// Produces a symmetric adjacency matrix from an arbitrary square input.
///
/// For every unordered pair `(i, j)` with `i < j`, if either direction
/// carries a nonzero weight the output receives the mean of the two
/// directed weights, or `1.0` when `binary` is set. Pairs with no weight in
/// either direction stay zero, as does the diagonal of the freshly
/// allocated output.
///
/// # Examples
/// ```
/// use smallworld_core::{SquareMatrix, make_symmetric};
///
/// let directed = SquareMatrix::from_rows(vec![
///     vec![0.0, 4.0, 0.0],
///     vec![0.0, 0.0, 2.0],
///     vec![0.0, 0.0, 0.0],
/// ]).expect("square");
/// let w = make_symmetric(&directed, false);
/// assert_eq!(w.get(0, 1), 2.0);
/// assert_eq!(w.get(1, 0), 2.0);
/// assert_eq!(w.get(2, 1), 1.0);
/// ```
#[must_use]
pub fn make_symmetric(matrix: &SquareMatrix, binary: bool) -> SquareMatrix {
    let n = matrix.n();
    let mut out = SquareMatrix::zeros(n);
    for i in 0..n {
        for j in (i + 1)..n {
            let forward = matrix.get(i, j);
            let backward = matrix.get(j, i);
            if forward != 0.0 || backward != 0.0 {
                let value = if binary {
                    1.0
                } else {
                    (forward + backward) / 2.0
                };
                out.set(i, j, value);
                out.set(j, i, value);
            }
        }
    }
    out
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

    #[test]
    fn symmetric_input_is_unchanged() {
        let w = path_graph();
        assert_eq!(make_symmetric(&w, false), w);
    }

    #[test]
    fn output_matches_transpose() {
        let a = SquareMatrix::from_rows(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0],
        ])
        .expect("square");
        let w = make_symmetric(&a, false);
        for i in 0..w.n() {
            for j in 0..w.n() {
                assert_eq!(w.get(i, j), w.get(j, i));
            }
        }
    }

    #[test]
    fn binary_mode_writes_unit_weights() {
        let a = SquareMatrix::from_rows(vec![
            vec![0.0, 3.0],
            vec![5.0, 0.0],
        ])
        .expect("square");
        let w = make_symmetric(&a, true);
        assert_eq!(w.get(0, 1), 1.0);
        assert_eq!(w.get(1, 0), 1.0);
    }

    #[test]
    fn one_sided_edges_are_averaged_with_zero() {
        let a = SquareMatrix::from_rows(vec![
            vec![0.0, 4.0],
            vec![0.0, 0.0],
        ])
        .expect("square");
        let w = make_symmetric(&a, false);
        assert_eq!(w.get(0, 1), 2.0);
    }

    #[test]
    fn diagonal_stays_zero() {
        let mut a = SquareMatrix::zeros(2);
        a.set(0, 0, 7.0);
        let w = make_symmetric(&a, false);
        assert_eq!(w.get(0, 0), 0.0);
    }
}
