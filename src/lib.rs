#![warn(missing_docs)]

//!
//! A crate that grows a depth-bounded binary decision tree
//! from binary categorical data.
//!
//! - Each node splits on the attribute with the largest
//!     information gain (reduction of the binary entropy of labels).
//!     An attribute is tested at most once on any root-to-leaf path.
//!
//! - A node stops growing when it is pure, when no attribute is left,
//!     when it reaches the maximal depth (default `3`),
//!     when a split leaves one side empty,
//!     or when the gain does not exceed a threshold (default `0.1`).
//!
//! - Prediction walks the tree under the same depth bound
//!     and answers the majority label of the deepest node reached.
//!
//! # Example
//! ```no_run
//! use minitree::prelude::*;
//!
//! let train = SampleReader::new()
//!     .file("/path/to/train.csv")
//!     .read()
//!     .unwrap();
//! let test = SampleReader::new()
//!     .file("/path/to/test.csv")
//!     .read()
//!     .unwrap();
//!
//! let tree = DecisionTreeBuilder::new(&train).build();
//! let f = tree.produce(&train);
//! println!("{}", f.display(train.attribute_names()));
//!
//! println!("error(train): {}", zero_one_loss(&train, &f));
//! println!("error(test): {}", zero_one_loss(&test, &f));
//! ```

pub mod common;
pub mod error;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod research;
pub mod prelude;


pub use error::SampleError;
pub use sample::{Sample, Instance, SampleReader};
pub use classifier::Classifier;
pub use common::{Label, LabelCount};

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
};
