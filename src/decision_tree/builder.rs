use crate::Sample;
use crate::common::{Depth, Gain};
use super::decision_tree_algorithm::DecisionTree;


/// The maxmial depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 3;
/// A node splits only if the information gain exceeds this value.
pub const DEFAULT_GAIN_THRESHOLD: f64 = 0.1;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minitree::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/train.csv")
///     .read()
///     .unwrap();
/// let tree = DecisionTreeBuilder::new(&sample)
///     .max_depth(3)
///     .gain_threshold(0.1)
///     .build();
/// let f = tree.produce(&sample);
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    max_depth: Depth,
    gain_threshold: Gain,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 3,
    /// gain_threshold: DEFAULT_GAIN_THRESHOLD == 0.1,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        let max_depth = Depth::from(DEFAULT_MAX_DEPTH);
        let gain_threshold = Gain::from(DEFAULT_GAIN_THRESHOLD);

        Self { sample, max_depth, gain_threshold, }
    }


    /// Specify the maximal depth of the tree.
    /// The same bound is used when predicting.
    /// Default maximal depth is `3`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Tree must have positive depth");
        self.max_depth = Depth::from(depth);

        self
    }


    /// Set the information gain a split must exceed.
    /// Default value is `0.1`.
    pub fn gain_threshold(mut self, threshold: f64) -> Self {
        assert!(
            threshold.is_finite() && threshold >= 0.0,
            "Gain threshold must be a non-negative number"
        );
        self.gain_threshold = Gain::from(threshold);

        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        let n_attribute = self.sample.shape().1;
        DecisionTree::from_components(
            n_attribute, self.max_depth, self.gain_threshold
        )
    }
}
