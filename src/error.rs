//! Errors raised while turning delimited records into a [`Sample`].
//!
//! [`Sample`]: crate::Sample
use thiserror::Error;


/// Errors produced by [`SampleReader`](crate::SampleReader)
/// and [`Sample::from_rows`](crate::Sample::from_rows).
#[derive(Debug, Error)]
pub enum SampleError {
    /// The input has no header line.
    #[error("missing header row")]
    MissingHeader,

    /// The header does not name at least one attribute and the class.
    #[error("header must have at least 2 columns, found {0}")]
    TooFewColumns(usize),

    /// A record has a different number of columns than the header.
    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        /// 1-based line number in the input.
        line: usize,
        /// Number of columns in the header.
        expected: usize,
        /// Number of columns in the record.
        found: usize,
    },

    /// A value other than `0` or `1` was given.
    #[error("row {row}, column {column}: value {value} is not binary")]
    NonBinary {
        /// 0-based row index (header excluded).
        row: usize,
        /// 0-based column index.
        column: usize,
        /// The offending value.
        value: u8,
    },

    /// Failed to read the input.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
