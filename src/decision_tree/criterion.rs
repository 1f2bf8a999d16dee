//! Selects the attribute whose binary split
//! reduces the entropy the most.
use crate::Sample;
use crate::common::{Gain, LabelCount};
use super::attribute_set::AttributeSet;
use super::entropy::count_entropy;


/// The output of [`partition`].
/// Whether an instance goes left or right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LR {
    Left,
    Right,
}


impl LR {
    /// Instances whose attribute is set go left.
    #[inline(always)]
    pub(crate) fn of(value: bool) -> Self {
        if value { LR::Left } else { LR::Right }
    }
}


/// The best attribute and the information gain of its split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestSplit {
    /// The attribute to test.
    pub attribute: usize,
    /// Entropy reduction achieved by splitting on `attribute`.
    pub gain: Gain,
}


/// Returns the attribute in `attributes` whose split of the rows `indices`
/// maximizes the information gain w.r.t. `parent_entropy`.
///
/// The attributes are scanned in ascending order and only a strictly
/// larger gain replaces the current best,
/// so ties go to the smallest attribute index.
/// If no attribute has a positive gain,
/// the first attribute is returned with gain `0`.
/// Returns `None` if `attributes` is empty.
pub fn best_split(
    parent_entropy: f64,
    sample: &Sample,
    indices: &[usize],
    attributes: &AttributeSet,
) -> Option<BestSplit>
{
    let first = attributes.iter().next()?;

    let mut best = BestSplit { attribute: first, gain: Gain::default() };
    for attr in attributes.iter() {
        let gain = information_gain(parent_entropy, sample, indices, attr);

        if gain > best.gain {
            best = BestSplit { attribute: attr, gain };
        }
    }
    Some(best)
}


/// Returns the information gain of splitting `indices` on `attr`.
pub(crate) fn information_gain(
    parent_entropy: f64,
    sample: &Sample,
    indices: &[usize],
    attr: usize,
) -> Gain
{
    let n_sample = indices.len();
    if n_sample == 0 {
        return Gain::default();
    }

    let mut left = LabelCount::default();
    let mut right = LabelCount::default();
    for &i in indices {
        let instance = &sample[i];
        let side = match LR::of(instance.value(attr)) {
            LR::Left => &mut left,
            LR::Right => &mut right,
        };
        if instance.label() != 0 {
            side.positive += 1;
        } else {
            side.negative += 1;
        }
    }

    let n_sample = n_sample as f64;
    let lp = left.total() as f64 / n_sample;
    let rp = right.total() as f64 / n_sample;

    let weighted = lp * count_entropy(&left) + rp * count_entropy(&right);

    Gain::from(parent_entropy - weighted)
}


/// Split the rows `indices` into the ones whose `attr` is set
/// and the others.
pub(crate) fn partition(sample: &Sample, indices: &[usize], attr: usize)
    -> (Vec<usize>, Vec<usize>)
{
    let mut lindices = Vec::new();
    let mut rindices = Vec::new();
    for &i in indices {
        match LR::of(sample[i].value(attr)) {
            LR::Left  => { lindices.push(i); },
            LR::Right => { rindices.push(i); },
        }
    }
    (lindices, rindices)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sample {
        // `A` decides the label, `B` does not.
        let header = vec!["A", "B", "class"];
        let rows = vec![
            vec![1, 1, 1],
            vec![1, 0, 1],
            vec![0, 1, 0],
            vec![0, 0, 0],
        ];
        Sample::from_rows(header, rows).unwrap()
    }

    #[test]
    fn test_best_split_perfect_attribute() {
        let sample = sample();
        let indices = (0..4).collect::<Vec<_>>();
        let attrs = AttributeSet::full(2);

        let best = best_split(1.0, &sample, &indices, &attrs).unwrap();
        assert_eq!(best.attribute, 0);
        assert_eq!(best.gain, 1.0, "got {best:?}.");

        let gain = information_gain(1.0, &sample, &indices, 1);
        assert_eq!(gain, 0.0, "`B` must be uninformative, got {gain:?}.");
    }

    #[test]
    fn test_best_split_falls_back_to_first() {
        let sample = sample();
        let indices = (0..4).collect::<Vec<_>>();
        let attrs = [1].into_iter().collect::<AttributeSet>();

        let best = best_split(1.0, &sample, &indices, &attrs).unwrap();
        assert_eq!(best.attribute, 1);
        assert_eq!(best.gain, 0.0);
    }

    #[test]
    fn test_best_split_ties_keep_first() {
        // `A` and `B` are identical columns.
        let header = vec!["A", "B", "class"];
        let rows = vec![vec![1, 1, 1], vec![0, 0, 0], vec![1, 1, 0]];
        let sample = Sample::from_rows(header, rows).unwrap();
        let indices = (0..3).collect::<Vec<_>>();
        let parent = crate::decision_tree::binary_entropy(1, 2);

        let best = best_split(
            parent, &sample, &indices, &AttributeSet::full(2)
        ).unwrap();
        assert_eq!(best.attribute, 0);
        assert!(best.gain > 0.0);
    }

    #[test]
    fn test_best_split_empty_set() {
        let sample = sample();
        let indices = (0..4).collect::<Vec<_>>();
        let attrs = AttributeSet::empty(2);
        assert!(best_split(1.0, &sample, &indices, &attrs).is_none());
    }

    #[test]
    fn test_partition() {
        let sample = sample();
        let indices = vec![0, 1, 2, 3];
        let (l, r) = partition(&sample, &indices, 1);
        assert_eq!(l, vec![0, 2]);
        assert_eq!(r, vec![1, 3]);
    }
}
