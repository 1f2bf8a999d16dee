//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::SampleError;


/// Check whether the header names at least one attribute
/// and the class column.
#[inline(always)]
pub(crate) fn check_header(header: &[String]) -> Result<(), SampleError> {
    let n_column = header.len();
    if n_column < 2 {
        return Err(SampleError::TooFewColumns(n_column));
    }
    Ok(())
}


/// Check whether a record has the same width as the header.
/// `line` is the 1-based line number reported on failure.
#[inline(always)]
pub(crate) fn check_width(expected: usize, found: usize, line: usize)
    -> Result<(), SampleError>
{
    if expected != found {
        return Err(SampleError::RaggedRow { line, expected, found });
    }
    Ok(())
}


/// Check whether every value of `values` is `0` or `1`.
#[inline(always)]
pub(crate) fn check_binary(values: &[u8], row: usize)
    -> Result<(), SampleError>
{
    match values.iter().position(|&v| v > 1) {
        Some(column) => {
            let value = values[column];
            Err(SampleError::NonBinary { row, column, value })
        },
        None => Ok(()),
    }
}
