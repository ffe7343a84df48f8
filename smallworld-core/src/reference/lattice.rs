//! Ring-lattice construction for the regular reference network.
//!
//! The generator keeps the canonical ring topology of a regular lattice of
//! degree `2 * radius` while drawing edge weights from the input's weight
//! pool so that globally larger weights land in the nearer rings. Weights
//! are binned by rank into per-ring columns and assigned to node pairs by
//! rejection sampling over bin rows.

use rand::{Rng, rngs::SmallRng};

use crate::matrix::SquareMatrix;

/// Rank-sorted weight pool binned into per-ring columns of `n` entries.
///
/// Mirrors flattening the upper triangle of the input (lower-triangular
/// zeros included), sorting descending, and zero-padding so the pool
/// length is an exact multiple of `n`. Column `z` holds the weights ranked
/// `[z * n, (z + 1) * n)`; a column index beyond the pool behaves as an
/// exhausted (all-zero) column.
struct WeightBins {
    rows: usize,
    columns: usize,
    pool: Vec<f64>,
}

impl WeightBins {
    fn from_matrix(matrix: &SquareMatrix) -> Self {
        let n = matrix.n();
        let mut pool: Vec<f64> = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in i..n {
                pool.push(matrix.get(i, j));
            }
        }
        // The flattened triangle carries the lower-triangular zeros too.
        pool.resize(n * n, 0.0);
        pool.sort_by(|a, b| b.total_cmp(a));

        // Pad so the pool divides into columns of n, two rings per column
        // block as in the canonical construction.
        let half_columns = (n * n).div_ceil(2 * n.max(1));
        let padded = 2 * n * half_columns;
        pool.resize(padded, 0.0);
        let columns = if n == 0 { 0 } else { padded / n };
        Self {
            rows: n,
            columns,
            pool,
        }
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        if column >= self.columns {
            return 0.0;
        }
        self.pool[column * self.rows + row]
    }

    fn take(&mut self, row: usize, column: usize) -> f64 {
        if column >= self.columns {
            return 0.0;
        }
        let value = self.pool[column * self.rows + row];
        self.pool[column * self.rows + row] = 0.0;
        value
    }

    fn column_exhausted(&self, column: usize) -> bool {
        if column >= self.columns {
            return true;
        }
        self.pool[column * self.rows..(column + 1) * self.rows]
            .iter()
            .all(|&value| value == 0.0)
    }
}

/// Builds a regular ring-lattice reference network from `matrix`.
///
/// Each node `i` is connected to its `radius` nearest neighbours on each
/// side (by index distance modulo `n`). Ring `z` edges draw their weights
/// from bin column `z` by uniform rejection sampling: zero entries are
/// redrawn until the column has exhausted its nonzero entries, after which
/// a zero assignment is accepted so the loop terminates. In practice only
/// the last ring's column runs dry, because earlier columns hold the
/// higher-ranked weights. Every drawn weight is consumed and cannot be
/// reused.
///
/// A zero `radius` (an edgeless input) yields the all-zero matrix.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use smallworld_core::{SquareMatrix, regular_lattice};
///
/// let w = SquareMatrix::from_rows(vec![
///     vec![0.0, 1.0, 0.0],
///     vec![1.0, 0.0, 1.0],
///     vec![0.0, 1.0, 0.0],
/// ]).expect("square");
/// let mut rng = SmallRng::seed_from_u64(1337);
/// let lattice = regular_lattice(&w, 1, &mut rng);
/// assert_eq!(lattice.n(), 3);
/// ```
#[must_use]
pub fn regular_lattice(matrix: &SquareMatrix, radius: usize, rng: &mut SmallRng) -> SquareMatrix {
    let n = matrix.n();
    let mut out = SquareMatrix::zeros(n);
    if n == 0 || radius == 0 {
        return out;
    }

    let mut bins = WeightBins::from_matrix(matrix);
    for i in 0..n {
        for z in 0..radius {
            let row = draw_row(&bins, z, rng);
            let value = bins.take(row, z);
            let j = (i + z + 1) % n;
            out.set(i, j, value);
            out.set(j, i, value);
        }
    }
    out
}

/// Draws a bin row whose entry in `column` is nonzero, redrawing on zeros.
///
/// The rejection stops once the column has no nonzero entries left: the
/// padding zeros mean a ring (typically the last) may legitimately run out
/// of nonzero entries before every node has been assigned, and the loop
/// must then accept a zero rather than spin forever.
fn draw_row(bins: &WeightBins, column: usize, rng: &mut SmallRng) -> usize {
    loop {
        let row = rng.gen_range(0..bins.rows);
        if bins.get(row, column) != 0.0 {
            return row;
        }
        if bins.column_exhausted(column) {
            return row;
        }
    }
}
