//! Defines the decision tree classifier.
use crate::{Classifier, Sample, Instance};
use crate::common::{Depth, Label};

use super::node::*;
use super::display::TreeDisplay;
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::{self, prelude::*, BufReader, BufWriter};


/// Decision tree classifier.
/// This struct is a wrapper of the root `Node`
/// together with the depth bound used when walking it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    max_depth: Depth,
}


impl DecisionTreeClassifier {
    /// Construct a classifier from the root node.
    #[inline]
    pub(super) fn new(root: Node, max_depth: Depth) -> Self {
        Self { root, max_depth }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the depth bound of this classifier.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth.into()
    }


    /// Walk the tree for `instance` and returns the majority labels
    /// of the visited nodes, the deepest one last.
    /// At most `max_depth` nodes are visited.
    pub fn predict_path(&self, instance: &Instance) -> Vec<Label> {
        let mut path = Vec::new();
        let mut node = &self.root;
        let mut depth = Depth::from(0);

        while depth < self.max_depth {
            path.push(node.label());

            node = match node {
                Node::Branch { attribute, left, right, .. } => {
                    if instance.value(*attribute) { left.as_ref() } else { right.as_ref() }
                },
                Node::Leaf { .. } => break,
            };
            depth = depth + 1;
        }
        path
    }


    /// Returns the predicted label of `instance`.
    #[inline]
    pub fn predict_instance(&self, instance: &Instance) -> Label {
        self.predict_path(instance)
            .last()
            .copied()
            .unwrap_or(self.root.label())
    }


    /// Returns a value that prints this tree
    /// with the attribute names `names`.
    #[inline]
    pub fn display<'a>(&'a self, names: &'a [String]) -> TreeDisplay<'a> {
        TreeDisplay::new(&self.root, names, self.max_depth.into())
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P, names: &[String]) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;


        let info = self.root.to_dot_info(names, 0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }


    /// Write the current decision tree to a JSON file.
    pub fn to_json_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()
    }


    /// Read a decision tree from a JSON file
    /// written by [`DecisionTreeClassifier::to_json_file`].
    pub fn from_json_file<P>(path: P) -> io::Result<Self>
        where P: AsRef<Path>
    {
        let reader = BufReader::new(File::open(path)?);
        let tree = serde_json::from_reader(reader)?;
        Ok(tree)
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict(&self, sample: &Sample, row: usize) -> Label {
        self.predict_instance(&sample[row])
    }
}
