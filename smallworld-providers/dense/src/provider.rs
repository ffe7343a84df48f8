//! Adjacency provider implementation and Parquet ingestion.

use std::{fs::File, path::Path};

use arrow_array::{Array, FixedSizeListArray, RecordBatchReader};
use parquet::arrow::{ProjectionMask, arrow_reader::ParquetRecordBatchReaderBuilder};
use parquet::file::reader::ChunkReader;
use smallworld_core::SquareMatrix;

use crate::errors::AdjacencyProviderError;
use crate::ingest::{append_fixed_size_list_values, validate_fixed_size_list_field};

/// Named adjacency matrix loaded from columnar data.
#[derive(Debug)]
pub struct AdjacencyProvider {
    name: String,
    matrix: SquareMatrix,
}

impl AdjacencyProvider {
    fn from_parts(
        name: impl Into<String>,
        rows: usize,
        dimension: usize,
        values: Vec<f64>,
    ) -> Result<Self, AdjacencyProviderError> {
        if rows != dimension {
            return Err(AdjacencyProviderError::NotSquare { rows, dimension });
        }
        let matrix = SquareMatrix::from_vec(dimension, values)?;
        Ok(Self {
            name: name.into(),
            matrix,
        })
    }

    /// Display name reported alongside results.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the loaded adjacency matrix.
    #[must_use]
    pub fn matrix(&self) -> &SquareMatrix {
        &self.matrix
    }

    /// Consumes the provider and yields the matrix.
    #[must_use]
    pub fn into_matrix(self) -> SquareMatrix {
        self.matrix
    }

    /// Loads an adjacency matrix from an Arrow [`FixedSizeListArray`]
    /// whose row count equals its row width.
    ///
    /// # Errors
    /// Returns [`AdjacencyProviderError`] when the list type is not
    /// `Float64`, any row or value is null, or the data is not square.
    pub fn try_from_fixed_size_list(
        name: impl Into<String>,
        array: &FixedSizeListArray,
    ) -> Result<Self, AdjacencyProviderError> {
        let mut values = Vec::new();
        let dimension = append_fixed_size_list_values(array, None, 0, &mut values)?;
        Self::from_parts(name, array.len(), dimension, values)
    }

    /// Loads an adjacency matrix from a Parquet file whose `column` holds
    /// `FixedSizeList<Float64, n>` rows.
    ///
    /// # Errors
    /// Returns [`AdjacencyProviderError`] when the file cannot be opened
    /// or its contents violate the adjacency contract.
    pub fn try_from_parquet_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        column: &str,
    ) -> Result<Self, AdjacencyProviderError> {
        let file = File::open(path)?;
        Self::try_from_parquet_reader(name, file, column)
    }

    /// Loads an adjacency matrix from a Parquet reader.
    ///
    /// # Errors
    /// Returns [`AdjacencyProviderError`] when decoding fails or the data
    /// does not form a square `Float64` matrix.
    pub fn try_from_parquet_reader<R>(
        name: impl Into<String>,
        reader: R,
        column: &str,
    ) -> Result<Self, AdjacencyProviderError>
    where
        R: ChunkReader + Send + 'static,
    {
        let builder = ParquetRecordBatchReaderBuilder::try_new(reader)?;
        let mask = ProjectionMask::columns(builder.parquet_schema(), [column]);
        let reader = builder.with_projection(mask).build()?;
        let schema = reader.schema();
        let column_index =
            schema
                .index_of(column)
                .map_err(|_| AdjacencyProviderError::ColumnNotFound {
                    column: column.to_owned(),
                })?;
        let field = schema.field(column_index);
        let mut dimension = Some(validate_fixed_size_list_field(field, column)?);
        let mut values = Vec::new();
        let mut rows = 0_usize;
        for batch in reader {
            let batch = batch?;
            let column_array = batch.column(column_index);
            let list = column_array
                .as_any()
                .downcast_ref::<FixedSizeListArray>()
                .ok_or_else(|| AdjacencyProviderError::InvalidColumnType {
                    column: column.to_owned(),
                    actual: column_array.data_type().clone(),
                })?;
            dimension = Some(append_fixed_size_list_values(
                list, dimension, rows, &mut values,
            )?);
            rows += list.len();
        }
        Self::from_parts(name, rows, dimension.unwrap_or(0), values)
    }
}
