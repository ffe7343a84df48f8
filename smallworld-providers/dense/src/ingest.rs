//! Helpers for ingesting fixed-size list arrays into dense row buffers.

use arrow_array::{Array, FixedSizeListArray, Float64Array};
use arrow_schema::{DataType, Field};

use crate::errors::AdjacencyProviderError;

pub(crate) fn validate_fixed_size_list_field(
    field: &Field,
    column: &str,
) -> Result<usize, AdjacencyProviderError> {
    match field.data_type() {
        DataType::FixedSizeList(child, width) => {
            if child.data_type() != &DataType::Float64 {
                return Err(AdjacencyProviderError::InvalidListValueType {
                    actual: child.data_type().clone(),
                });
            }
            usize::try_from(*width)
                .map_err(|_| AdjacencyProviderError::InvalidDimension { actual: *width })
        }
        other => Err(AdjacencyProviderError::InvalidColumnType {
            column: column.to_owned(),
            actual: other.clone(),
        }),
    }
}

pub(crate) fn append_fixed_size_list_values(
    array: &FixedSizeListArray,
    expected_dimension: Option<usize>,
    start_row: usize,
    out: &mut Vec<f64>,
) -> Result<usize, AdjacencyProviderError> {
    let dimension = validate_fixed_size_list(array)?;
    if let Some(expected) = expected_dimension.filter(|&expected| expected != dimension) {
        return Err(AdjacencyProviderError::InconsistentBatchDimension {
            expected,
            actual: dimension,
        });
    }
    copy_list_values(array, dimension, start_row, out)?;
    Ok(dimension)
}

pub(crate) fn validate_fixed_size_list(
    array: &FixedSizeListArray,
) -> Result<usize, AdjacencyProviderError> {
    let value_type = array.value_type();
    if value_type != DataType::Float64 {
        return Err(AdjacencyProviderError::InvalidListValueType { actual: value_type });
    }
    usize::try_from(array.value_length()).map_err(|_| AdjacencyProviderError::InvalidDimension {
        actual: array.value_length(),
    })
}

pub(crate) fn copy_list_values(
    array: &FixedSizeListArray,
    dimension: usize,
    start_row: usize,
    out: &mut Vec<f64>,
) -> Result<(), AdjacencyProviderError> {
    let rows = array.len();
    let additional = rows
        .checked_mul(dimension)
        .ok_or(AdjacencyProviderError::CapacityOverflow { rows, dimension })?;
    out.reserve(additional);
    for row_index in 0..rows {
        let absolute_row = start_row + row_index;
        if array.is_null(row_index) {
            return Err(AdjacencyProviderError::NullRow { row: absolute_row });
        }
        let row = array.value(row_index);
        let floats = row.as_any().downcast_ref::<Float64Array>().ok_or_else(|| {
            AdjacencyProviderError::InvalidListValueType {
                actual: row.data_type().clone(),
            }
        })?;
        if floats.len() != dimension {
            return Err(AdjacencyProviderError::InvalidRowLength {
                row: absolute_row,
                expected: dimension,
                actual: floats.len(),
            });
        }
        if floats.null_count() > 0 {
            if let Some(value_index) = (0..dimension).find(|&idx| floats.is_null(idx)) {
                return Err(AdjacencyProviderError::NullValue {
                    row: absolute_row,
                    value_index,
                });
            }
        }
        let values = floats.values().as_ref();
        let start = floats.offset();
        let end = start + dimension;
        out.extend_from_slice(&values[start..end]);
    }
    Ok(())
}
