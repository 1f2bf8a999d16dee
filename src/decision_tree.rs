//! The information-gain decision tree:
//! entropy, split selection, tree growing and prediction.

/// Defines the binary entropy.
pub mod entropy;
/// Defines the set of attributes eligible for splitting.
pub mod attribute_set;
/// Defines the information gain criterion.
pub mod criterion;
/// Defines the inner representations of `DecisionTreeClassifier`.
pub mod node;

mod builder;
mod decision_tree_algorithm;
mod decision_tree_classifier;
mod display;


pub use entropy::{binary_entropy, sequence_entropy};
pub use attribute_set::AttributeSet;
pub use criterion::{best_split, BestSplit};
pub use node::{Node, NodeStats};
pub use builder::{
    DecisionTreeBuilder,
    DEFAULT_MAX_DEPTH,
    DEFAULT_GAIN_THRESHOLD,
};
pub use decision_tree_algorithm::{DecisionTree, mark_label};
pub use decision_tree_classifier::DecisionTreeClassifier;
pub use display::TreeDisplay;
