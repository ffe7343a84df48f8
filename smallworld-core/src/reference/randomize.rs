//! Uniform edge rewiring for the randomised reference network.

use rand::{rngs::SmallRng, seq::SliceRandom};

use crate::matrix::SquareMatrix;

/// Reassigns the off-diagonal weight multiset to node pairs uniformly at
/// random.
///
/// The upper-triangular weights (`i < j`, row-major) are collected,
/// permuted with a uniform shuffle, and written back symmetrically to the
/// same canonical pair order. Total weight and the weight distribution are
/// preserved exactly; all topological structure is destroyed. Degenerate
/// inputs (`n <= 1`) have no unordered pairs and yield an all-zero matrix.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use smallworld_core::{SquareMatrix, randomize_matrix};
///
/// let w = SquareMatrix::from_rows(vec![
///     vec![0.0, 1.0, 0.0],
///     vec![1.0, 0.0, 1.0],
///     vec![0.0, 1.0, 0.0],
/// ]).expect("square");
/// let mut rng = SmallRng::seed_from_u64(7);
/// let shuffled = randomize_matrix(&w, &mut rng);
/// assert_eq!(shuffled.n(), 3);
/// let mut weights: Vec<f64> = shuffled.upper_triangle().map(|(_, _, v)| v).collect();
/// weights.sort_by(f64::total_cmp);
/// assert_eq!(weights, vec![0.0, 1.0, 1.0]);
/// ```
#[must_use]
pub fn randomize_matrix(matrix: &SquareMatrix, rng: &mut SmallRng) -> SquareMatrix {
    let n = matrix.n();
    let mut weights: Vec<f64> = matrix.upper_triangle().map(|(_, _, value)| value).collect();
    weights.shuffle(rng);

    let mut out = SquareMatrix::zeros(n);
    let mut next = weights.into_iter();
    for i in 0..n {
        for j in (i + 1)..n {
            // One weight per unordered pair; the iterator length matches by
            // construction.
            if let Some(value) = next.next() {
                out.set(i, j, value);
                out.set(j, i, value);
            }
        }
    }
    out
}
