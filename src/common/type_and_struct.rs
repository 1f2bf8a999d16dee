//! Newtypes shared by the tree algorithm.
use serde::{Serialize, Deserialize};
use std::{fmt, cmp, ops};


/// A binary class label.
/// Every label in this crate takes value in `{0, 1}`.
pub type Label = u8;


/// Struct `Depth` defines the maximal depth of a tree.
/// This is just a wrapper for `usize`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Depth(usize);


impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.0;
        write!(f, "{depth}")
    }
}


impl From<usize> for Depth {
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}


impl From<Depth> for usize {
    fn from(depth: Depth) -> Self {
        depth.0
    }
}


impl ops::Add<usize> for Depth {
    type Output = Self;
    #[inline]
    fn add(self, other: usize) -> Self::Output {
        Self(self.0 + other)
    }
}


impl cmp::PartialEq<usize> for Depth {
    #[inline]
    fn eq(&self, rhs: &usize) -> bool {
        self.0.eq(rhs)
    }
}


impl cmp::PartialOrd<Self> for Depth {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}


impl cmp::Ord for Depth {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.cmp(&other.0)
    }
}


impl cmp::PartialOrd<usize> for Depth {
    #[inline]
    fn partial_cmp(&self, other: &usize) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}


/// Information gain of a split.
/// This is just a wrapper for `f64`.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Gain(pub f64);


impl From<f64> for Gain {
    #[inline(always)]
    fn from(gain: f64) -> Self {
        Self(gain)
    }
}


impl fmt::Display for Gain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


impl cmp::PartialOrd for Gain {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}


impl cmp::PartialEq<f64> for Gain {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0.eq(other)
    }
}


impl cmp::PartialOrd<f64> for Gain {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}


/// Number of positive (`1`) and negative (`0`) labels
/// reaching a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct LabelCount {
    /// Number of instances labeled `1`.
    pub positive: usize,
    /// Number of instances labeled `0`.
    pub negative: usize,
}


impl LabelCount {
    /// Construct a new `LabelCount`.
    #[inline]
    pub fn new(positive: usize, negative: usize) -> Self {
        Self { positive, negative }
    }


    /// Count the labels of the given iterator.
    /// Any non-zero label is counted as positive.
    pub fn from_labels<I>(labels: I) -> Self
        where I: IntoIterator<Item = Label>
    {
        labels.into_iter()
            .fold(Self::default(), |mut count, y| {
                if y != 0 {
                    count.positive += 1;
                } else {
                    count.negative += 1;
                }
                count
            })
    }


    /// Returns the number of instances counted.
    #[inline]
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }


    /// Returns `true` if all the counted labels are the same,
    /// including the case where nothing is counted.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.positive == 0 || self.negative == 0
    }
}


impl fmt::Display for LabelCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}+/{}-]", self.positive, self.negative)
    }
}
