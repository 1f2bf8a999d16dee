//! Exports the standard structs and traits.
//!
pub use crate::sample::{
    Sample,
    Instance,
    SampleReader,
};


pub use crate::decision_tree::{
    // Tree algorithm
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    AttributeSet,

    // Core functions
    binary_entropy,
    sequence_entropy,
    best_split,
    mark_label,
};


pub use crate::classifier::Classifier;


pub use crate::research::{
    zero_one_loss,
    inspect,
};


pub use crate::common::{Label, LabelCount};
pub use crate::error::SampleError;
