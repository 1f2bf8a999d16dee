//! Defines some common types and functions used in this library.

/// Defines the newtypes shared by the tree algorithm.
pub mod type_and_struct;

/// Defines some checker functions.
pub(crate) mod checker;

pub use type_and_struct::*;
