//! Struct `Sample` represents a batch of binary labeled instances.

// Provides sample struct.
pub(crate) mod sample_struct;

// Provides the categorical token table.
pub(crate) mod token;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::SampleReader;
pub use sample_struct::{Sample, Instance};
pub use token::{PositiveTokens, DEFAULT_POSITIVE_TOKENS};
