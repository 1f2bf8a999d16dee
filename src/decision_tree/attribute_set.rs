//! The set of attributes that are still eligible for splitting.
use fixedbitset::FixedBitSet;


/// A set of attribute indices.
/// The iteration order is the ascending order of the indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    bits: FixedBitSet,
}


impl AttributeSet {
    /// Returns the set `{0, 1, ..., n_attribute - 1}`.
    pub fn full(n_attribute: usize) -> Self {
        let mut bits = FixedBitSet::with_capacity(n_attribute);
        bits.insert_range(..);
        Self { bits }
    }


    /// Returns an empty set that can hold `n_attribute` attributes.
    pub fn empty(n_attribute: usize) -> Self {
        let bits = FixedBitSet::with_capacity(n_attribute);
        Self { bits }
    }


    /// Returns a copy of this set without `attr`.
    /// `self` is left untouched.
    #[inline]
    pub fn without(&self, attr: usize) -> Self {
        let mut bits = self.bits.clone();
        bits.set(attr, false);
        Self { bits }
    }


    /// Returns `true` if `attr` is in this set.
    #[inline]
    pub fn contains(&self, attr: usize) -> bool {
        self.bits.contains(attr)
    }


    /// Returns the number of attributes in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }


    /// Returns `true` if no attribute is left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.ones().next().is_none()
    }


    /// Iterate over the attributes in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }
}


impl FromIterator<usize> for AttributeSet {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = usize>
    {
        let bits = iter.into_iter().collect::<FixedBitSet>();
        Self { bits }
    }
}
