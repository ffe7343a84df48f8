//! Dense square-matrix storage for adjacency data.
//!
//! Provides the [`SquareMatrix`] type used throughout the pipeline. The
//! matrix is row-major, owns its buffer, and is treated as immutable by
//! every downstream stage: each derived network (symmetrised, randomised,
//! regularised) is a fresh allocation.

use thiserror::Error;

/// Errors raised while constructing a [`SquareMatrix`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MatrixError {
    /// The flat buffer length did not match `n * n`.
    #[error("buffer of length {actual} cannot form a {n}x{n} matrix (expected {expected})")]
    LengthMismatch {
        /// Requested side length.
        n: usize,
        /// Expected buffer length (`n * n`).
        expected: usize,
        /// Actual buffer length supplied by the caller.
        actual: usize,
    },
    /// A row length did not match the number of rows.
    #[error("row {row} has length {actual} but a square matrix of side {expected} was expected")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Expected row length (the number of rows).
        expected: usize,
        /// Actual length of the offending row.
        actual: usize,
    },
}

/// Dense `n x n` matrix of `f64` weights in row-major order.
///
/// # Examples
/// ```
/// use smallworld_core::SquareMatrix;
///
/// let m = SquareMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]])
///     .expect("rows form a square matrix");
/// assert_eq!(m.n(), 2);
/// assert_eq!(m.get(0, 1), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Creates an `n x n` matrix filled with zeros.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Builds a matrix from a row-major buffer.
    ///
    /// # Errors
    /// Returns [`MatrixError::LengthMismatch`] when `values.len() != n * n`.
    pub fn from_vec(n: usize, values: Vec<f64>) -> Result<Self, MatrixError> {
        let expected = n * n;
        if values.len() != expected {
            return Err(MatrixError::LengthMismatch {
                n,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { n, data: values })
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    /// Returns [`MatrixError::NotSquare`] when any row length differs from
    /// the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: n,
                    actual: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { n, data })
    }

    /// Side length of the matrix.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Returns `true` when the matrix has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Reads the entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics when either index is out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n && col < self.n, "index out of bounds");
        self.data[row * self.n + col]
    }

    /// Writes the entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics when either index is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.n && col < self.n, "index out of bounds");
        self.data[row * self.n + col] = value;
    }

    /// Immutable view over the row-major buffer.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Largest entry in the matrix, or zero for an empty matrix.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(0.0_f64, f64::max)
    }

    /// Number of strictly positive entries across the whole matrix.
    #[must_use]
    pub fn positive_count(&self) -> usize {
        self.data.iter().filter(|&&value| value > 0.0).count()
    }

    /// Returns a copy with every entry multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            n: self.n,
            data: self.data.iter().map(|value| value * factor).collect(),
        }
    }

    /// Elementwise symmetry check under the `allclose` rule
    /// `|a - b| <= atol + rtol * |b|` against the transpose.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::SquareMatrix;
    ///
    /// let m = SquareMatrix::from_rows(vec![
    ///     vec![0.0, 2.0],
    ///     vec![2.0, 0.0],
    /// ]).expect("square");
    /// assert!(m.is_symmetric(1e-5, 1e-8));
    /// ```
    #[must_use]
    pub fn is_symmetric(&self, rtol: f64, atol: f64) -> bool {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let a = self.get(i, j);
                let b = self.get(j, i);
                if !(a - b).abs().le(&(atol + rtol * b.abs())) {
                    return false;
                }
            }
        }
        true
    }

    /// Iterates the upper-triangular entries (`i < j`) in row-major order.
    pub fn upper_triangle(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.n)
            .flat_map(move |i| ((i + 1)..self.n).map(move |j| (i, j, self.get(i, j))))
    }
}
