//! This directory provides some features for experiments.
//! Measure the followings of the decision tree
//! - Running time
//! - Training error
//! - Test error
//! - Entropy and majority error of a sample

/// Provides a struct that grows a tree and reports its errors.
pub mod logger;

/// Defines loss functions (e.g., zero-one loss).
pub mod loss_functions;

/// Inspects the label distribution of a sample.
pub mod inspect;

pub use logger::{Logger, Report};
pub use loss_functions::zero_one_loss;
pub use inspect::{inspect, Inspection};
