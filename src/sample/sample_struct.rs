use std::ops::Index;

use crate::common::{checker, Label, LabelCount};
use crate::SampleError;


/// A labeled instance.
/// The attribute values come first and the class label
/// sits at the last position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    values: Vec<u8>,
}


impl Instance {
    /// Construct an `Instance` from a row whose last value is the label.
    /// The row must not be empty.
    #[inline]
    pub(crate) fn from_row(values: Vec<u8>) -> Self {
        assert!(!values.is_empty(), "An instance needs at least a label");
        Self { values }
    }


    /// Returns `true` if the attribute `attr` is set.
    #[inline]
    pub fn value(&self, attr: usize) -> bool {
        self.values[attr] != 0
    }


    /// Returns the class label of this instance.
    #[inline]
    pub fn label(&self) -> Label {
        self.values[self.values.len() - 1]
    }


    /// Returns the number of attributes (the label excluded).
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.values.len() - 1
    }


    /// Returns the raw row, label included.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..]
    }
}


/// Struct `Sample` holds the training/test instances
/// together with the attribute-name header.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) attributes: Vec<String>,
    pub(super) target: String,
    pub(super) instances: Vec<Instance>,
}


impl Sample {
    /// Construct a `Sample` from a header and binary rows.
    /// The last entry of `header` names the class column,
    /// the last value of each row is its label.
    pub fn from_rows<S>(header: Vec<S>, rows: Vec<Vec<u8>>)
        -> Result<Self, SampleError>
        where S: Into<String>
    {
        let mut attributes = header.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        checker::check_header(&attributes)?;

        let n_column = attributes.len();
        let instances = rows.into_iter()
            .enumerate()
            .map(|(row, values)| -> Result<Instance, SampleError> {
                // line 1 is the header.
                checker::check_width(n_column, values.len(), row + 2)?;
                checker::check_binary(&values, row)?;
                Ok(Instance::from_row(values))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let target = attributes.pop()
            .ok_or(SampleError::TooFewColumns(0))?;

        Ok(Self { attributes, target, instances })
    }


    /// Returns the pair of the number of instances and attributes.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.instances.len(), self.attributes.len())
    }


    /// Returns `true` if the sample has no instance.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }


    /// Returns the attribute names. The class name is excluded.
    #[inline]
    pub fn attribute_names(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Returns the name of the class column.
    #[inline]
    pub fn target_name(&self) -> &str {
        &self.target
    }


    /// Returns the instances.
    #[inline]
    pub fn instances(&self) -> &[Instance] {
        &self.instances[..]
    }


    /// Returns the labels of all instances.
    pub fn target(&self) -> Vec<Label> {
        self.instances.iter()
            .map(Instance::label)
            .collect()
    }


    /// Returns the label counts of the rows in `indices`.
    pub(crate) fn label_count(&self, indices: &[usize]) -> LabelCount {
        LabelCount::from_labels(
            indices.iter().map(|&i| self.instances[i].label())
        )
    }
}


impl Index<usize> for Sample {
    type Output = Instance;
    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.instances[row]
    }
}
