//! Text rendering of a decision tree.
use super::node::{Node, attribute_name};

use std::fmt;


/// Helper struct for printing a tree with [`format!`] and `{}`.
/// Created by [`DecisionTreeClassifier::display`].
///
/// The root prints its label counts.
/// Every other node prints the attribute its parent tested,
/// the branch taken (`y` or `n`) and its label counts,
/// indented by one `| ` per level below the first.
/// Nodes deeper than the depth bound are not printed.
///
/// [`DecisionTreeClassifier::display`]: super::DecisionTreeClassifier::display
pub struct TreeDisplay<'a> {
    root: &'a Node,
    names: &'a [String],
    max_depth: usize,
}


impl<'a> TreeDisplay<'a> {
    #[inline]
    pub(super) fn new(
        root: &'a Node,
        names: &'a [String],
        max_depth: usize,
    ) -> Self
    {
        Self { root, names, max_depth }
    }


    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &Node,
        edge: Option<(usize, &str)>,
        depth: usize,
    ) -> fmt::Result
    {
        if depth >= self.max_depth {
            return Ok(());
        }

        let count = node.count();
        match edge {
            None => writeln!(f, "{count}")?,
            Some((attr, branch)) => {
                let indent = "| ".repeat(depth - 1);
                let name = attribute_name(self.names, attr);
                writeln!(f, "{indent}{name} = {branch}: {count}")?;
            },
        }

        if let Node::Branch { attribute, left, right, .. } = node {
            self.write_node(f, left, Some((*attribute, "y")), depth + 1)?;
            self.write_node(f, right, Some((*attribute, "n")), depth + 1)?;
        }
        Ok(())
    }
}


impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root, None, 0)
    }
}
