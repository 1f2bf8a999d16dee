use crate::Sample;
use crate::common::{Depth, Gain, Label};

use super::{
    node::*,
    criterion::*,
    entropy::count_entropy,
    attribute_set::AttributeSet,
    decision_tree_classifier::DecisionTreeClassifier,
};



/// The Decision Tree algorithm.
/// Given a set of binary training examples,
/// [`DecisionTree`] grows a binary tree top-down,
/// splitting each node on the attribute
/// with the largest information gain.
/// An attribute is tested at most once on any root-to-leaf path.
///
/// A node becomes a leaf if
/// - its instances share one label,
/// - no attribute is left,
/// - it lies at the maximal depth,
/// - the best split leaves one side empty, or
/// - the best split does not gain more than the threshold.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let train = SampleReader::new()
///     .file("/path/to/train.csv")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&train).build();
/// let f = tree.produce(&train);
///
/// let loss = zero_one_loss(&train, &f);
/// println!("error(train): {loss}");
/// ```
pub struct DecisionTree {
    n_attribute: usize,
    max_depth: Depth,
    gain_threshold: Gain,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        n_attribute: usize,
        max_depth: Depth,
        gain_threshold: Gain,
    ) -> Self
    {
        Self { n_attribute, max_depth, gain_threshold, }
    }


    /// Returns the name of this algorithm.
    pub fn name(&self) -> &str {
        "Decision Tree (information gain)"
    }


    /// Returns the parameters of this algorithm.
    pub fn info(&self) -> Vec<(&str, String)> {
        Vec::from([
            ("# of attributes", format!("{}", self.n_attribute)),
            ("Max depth", format!("{}", self.max_depth)),
            ("Gain threshold", format!("{}", self.gain_threshold)),
        ])
    }


    /// Grow a tree on `sample` and wrap it into a classifier.
    pub fn produce(&self, sample: &Sample) -> DecisionTreeClassifier {
        let n_attribute = sample.shape().1;
        assert_eq!(
            n_attribute, self.n_attribute,
            "The sample has {n_attribute} attributes, \
             but the tree was built for {}",
            self.n_attribute,
        );

        let indices = (0..sample.shape().0).collect::<Vec<_>>();
        let attributes = AttributeSet::full(n_attribute);

        let root = self.full_tree(
            sample, indices, attributes, None, Depth::from(0)
        );

        DecisionTreeClassifier::new(root, self.max_depth)
    }


    /// Construct the sub-tree for the rows `indices`.
    /// `attributes` are the attributes not yet tested on the path
    /// from the root, and `depth` is the number of edges above this node.
    fn full_tree(
        &self,
        sample: &Sample,
        indices: Vec<usize>,
        attributes: AttributeSet,
        parent_attribute: Option<usize>,
        depth: Depth,
    ) -> Node
    {
        let count = sample.label_count(&indices[..]);
        let label = mark_label(count.positive, count.total());


        // A pure node never splits.
        if count.is_pure() {
            let stats = NodeStats {
                entropy: 0.0, count, label, parent_attribute,
            };
            return Node::leaf(stats);
        }


        let entropy = count_entropy(&count);
        let stats = NodeStats { entropy, count, label, parent_attribute };

        if attributes.is_empty() || depth >= self.max_depth {
            return Node::leaf(stats);
        }


        let best = match best_split(entropy, sample, &indices, &attributes) {
            Some(best) => best,
            None => { return Node::leaf(stats); },
        };
        let attr = best.attribute;


        // Split the rows for left/right childrens
        let (lindices, rindices) = partition(sample, &indices, attr);


        // If the split has no meaning, construct a leaf node.
        if lindices.is_empty() || rindices.is_empty() {
            return Node::leaf(stats);
        }


        if best.gain <= self.gain_threshold {
            return Node::leaf(stats);
        }


        // Each child gets its own copy of the remaining attributes.
        let attributes = attributes.without(attr);
        let depth = depth + 1;
        let ltree = self.full_tree(
            sample, lindices, attributes.clone(), Some(attr), depth
        );
        let rtree = self.full_tree(
            sample, rindices, attributes, Some(attr), depth
        );

        Node::branch(attr, stats, ltree, rtree)
    }
}


/// Returns the majority label among `n_sample` instances,
/// `positive` of which are labeled `1`.
/// Ties go to `0`.
#[inline]
pub fn mark_label(positive: usize, n_sample: usize) -> Label {
    if 2 * positive > n_sample { 1 } else { 0 }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_label() {
        assert_eq!(mark_label(2, 4), 0, "ties must go to 0.");
        assert_eq!(mark_label(3, 4), 1);
        assert_eq!(mark_label(3, 5), 1);
        assert_eq!(mark_label(2, 5), 0);
        assert_eq!(mark_label(0, 0), 0);
    }
}
