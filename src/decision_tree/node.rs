//! Defines the nodes of the decision tree.
use serde::{Serialize, Deserialize};

use crate::common::{Label, LabelCount};


/// Enumeration of branch nodes and leaf nodes.
/// The shape of a node is decided when it is created
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that tests `attribute` and has two childrens.
    /// Instances with `attribute` set go `left`, the others go `right`.
    Branch {
        /// The tested attribute.
        attribute: usize,
        /// Statistics of this node.
        stats: NodeStats,
        /// Sub-tree for the instances with `attribute` set.
        left: Box<Node>,
        /// Sub-tree for the other instances.
        right: Box<Node>,
    },


    /// A node that have no child.
    Leaf {
        /// Statistics of this node.
        stats: NodeStats,
    },
}


/// Values every node carries, regardless of its shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeStats {
    /// Binary entropy of the labels reaching this node.
    pub entropy: f64,
    /// Label counts of the instances reaching this node.
    pub count: LabelCount,
    /// Majority label of the instances reaching this node.
    pub label: Label,
    /// The attribute the parent tested to route here.
    /// `None` for the root.
    pub parent_attribute: Option<usize>,
}


impl Node {
    /// Construct a leaf node.
    #[inline]
    pub(crate) fn leaf(stats: NodeStats) -> Self {
        Self::Leaf { stats }
    }


    /// Construct a branch node.
    #[inline]
    pub(crate) fn branch(
        attribute: usize,
        stats: NodeStats,
        left: Node,
        right: Node,
    ) -> Self
    {
        Self::Branch {
            attribute,
            stats,
            left: Box::new(left),
            right: Box::new(right),
        }
    }


    /// Returns the statistics of this node.
    #[inline]
    pub fn stats(&self) -> &NodeStats {
        match self {
            Self::Branch { stats, .. } | Self::Leaf { stats } => stats,
        }
    }


    /// Returns the majority label of this node.
    #[inline]
    pub fn label(&self) -> Label {
        self.stats().label
    }


    /// Returns the label counts of this node.
    #[inline]
    pub fn count(&self) -> LabelCount {
        self.stats().count
    }


    /// Returns the entropy of this node.
    #[inline]
    pub fn entropy(&self) -> f64 {
        self.stats().entropy
    }


    /// Returns the attribute tested by this node, if any.
    #[inline]
    pub fn split_attribute(&self) -> Option<usize> {
        match self {
            Self::Branch { attribute, .. } => Some(*attribute),
            Self::Leaf { .. } => None,
        }
    }


    /// Returns the pair of children, if any.
    #[inline]
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Self::Branch { left, right, .. } => Some((left.as_ref(), right.as_ref())),
            Self::Leaf { .. } => None,
        }
    }


    /// Returns `true` if this node has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the number of edges of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                1 + left.depth().max(right.depth())
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                left.leaves() + right.leaves()
            },
            Self::Leaf { .. } => 1,
        }
    }


    pub(super) fn to_dot_info(&self, names: &[String], id: usize)
        -> (Vec<String>, usize)
    {
        match self {
            Node::Branch { attribute, stats, left, right } => {
                let branch = format!(
                    "\tnode_{id} [ label = \"{name} ?\\n{count}\" ];\n",
                    name = attribute_name(names, *attribute),
                    count = stats.count,
                );

                let left_id = id + 1;
                let (     left,  right_id) = left.to_dot_info(names, left_id);
                let (mut right, return_id) = right.to_dot_info(names, right_id);

                let mut info = left;
                info.push(branch);
                info.append(&mut right);

                let left_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"y\" ];\n",
                );
                info.push(left_edge);
                let right_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"n\" ];\n",
                );
                info.push(right_edge);

                (info, return_id)
            },
            Node::Leaf { stats } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\\n{count}\", shape = box ];\n",
                    label = stats.label,
                    count = stats.count,
                );

                (vec![info], id + 1)
            },
        }
    }
}


/// Returns the name of `attr`, or its index if the name is unknown.
pub(super) fn attribute_name(names: &[String], attr: usize) -> String {
    names.get(attr)
        .cloned()
        .unwrap_or_else(|| format!("Attr. [{attr}]"))
}
