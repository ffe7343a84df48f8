//! Error types for adjacency-matrix ingestion.

use arrow_schema::{ArrowError, DataType};
use smallworld_core::MatrixError;
use thiserror::Error;

/// Errors raised while loading an adjacency matrix from columnar data.
#[derive(Debug, Error)]
pub enum AdjacencyProviderError {
    /// The requested column was absent from the Parquet schema.
    #[error("column `{column}` not found in Parquet schema")]
    ColumnNotFound {
        /// Name of the missing column.
        column: String,
    },
    /// The column did not hold fixed-size list rows.
    #[error("column `{column}` must be a FixedSizeList<Float64, _> but found {actual:?}")]
    InvalidColumnType {
        /// Name of the offending column.
        column: String,
        /// Actual Arrow data type encountered.
        actual: DataType,
    },
    /// The list elements were not 64-bit floats.
    #[error("FixedSizeList child type must be Float64 but found {actual:?}")]
    InvalidListValueType {
        /// Actual Arrow data type encountered.
        actual: DataType,
    },
    /// The declared list width was not representable.
    #[error("invalid FixedSizeList dimension {actual}")]
    InvalidDimension {
        /// Raw width reported by Arrow.
        actual: i32,
    },
    /// A matrix row was null.
    #[error("row {row} is null")]
    NullRow {
        /// Index of the null row.
        row: usize,
    },
    /// A matrix entry was null.
    #[error("row {row} contains null value at position {value_index}")]
    NullValue {
        /// Row holding the null entry.
        row: usize,
        /// Position of the null entry within the row.
        value_index: usize,
    },
    /// A row's length disagreed with the declared dimension.
    #[error("row {row} has length {actual} but expected {expected}")]
    InvalidRowLength {
        /// Index of the offending row.
        row: usize,
        /// Declared row width.
        expected: usize,
        /// Actual row width encountered.
        actual: usize,
    },
    /// The row count did not match the row width, so the data cannot form
    /// an adjacency matrix.
    #[error("{rows} rows of width {dimension} do not form a square adjacency matrix")]
    NotSquare {
        /// Number of rows read.
        rows: usize,
        /// Width of each row.
        dimension: usize,
    },
    /// The buffer size overflowed `usize`.
    #[error("matrix with {rows} rows and dimension {dimension} exceeds capacity limits")]
    CapacityOverflow {
        /// Number of rows requested.
        rows: usize,
        /// Width of each row.
        dimension: usize,
    },
    /// Record batches disagreed on the row width.
    #[error("inconsistent dimensions across batches: expected {expected}, got {actual}")]
    InconsistentBatchDimension {
        /// Width established by the first batch.
        expected: usize,
        /// Width reported by a later batch.
        actual: usize,
    },
    /// Matrix assembly failed in the core library.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// Arrow-level failure while decoding.
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
    /// Parquet-level failure while reading.
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    /// Operating-system failure while opening the file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
