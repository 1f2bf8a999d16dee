//! Binary entropy of label distributions.
use crate::common::{Label, LabelCount};


/// Returns the binary entropy (in bits) of
/// `positive` positive and `negative` negative labels.
/// If either count is zero, returns `0`.
#[inline]
pub fn binary_entropy(positive: usize, negative: usize) -> f64 {
    if positive == 0 || negative == 0 {
        return 0.0;
    }

    let p = positive as f64 / (positive + negative) as f64;
    let q = 1.0 - p;
    -p * p.log2() - q * q.log2()
}


/// Returns the binary entropy of the given labels.
/// An empty or single-class sequence has entropy `0`.
#[inline]
pub fn sequence_entropy<I>(labels: I) -> f64
    where I: IntoIterator<Item = Label>
{
    let count = LabelCount::from_labels(labels);
    count_entropy(&count)
}


/// Returns the binary entropy of `count`.
#[inline(always)]
pub(crate) fn count_entropy(count: &LabelCount) -> f64 {
    binary_entropy(count.positive, count.negative)
}


#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_pure_counts() {
        assert_eq!(binary_entropy(5, 0), 0.0);
        assert_eq!(binary_entropy(0, 7), 0.0);
        assert_eq!(binary_entropy(0, 0), 0.0);
    }

    #[test]
    fn test_balanced_counts() {
        let h = binary_entropy(4, 4);
        assert!((h - 1.0).abs() < EPS, "expected 1.0, got {h}.");
    }

    #[test]
    fn test_known_value() {
        // H(1/4) = 0.811278...
        let h = binary_entropy(1, 3);
        assert!((h - 0.8112781244591328).abs() < EPS, "got {h}.");
    }

    #[test]
    fn test_symmetry_and_range() {
        for p in 1..20 {
            for n in 1..20 {
                let h = binary_entropy(p, n);
                let r = binary_entropy(n, p);
                assert!(h > 0.0 && h <= 1.0 + EPS, "H({p}, {n}) = {h}");
                assert!((h - r).abs() < EPS, "H({p}, {n}) != H({n}, {p})");
            }
        }
    }

    #[test]
    fn test_sequence_entropy() {
        assert_eq!(sequence_entropy(Vec::new()), 0.0);
        assert_eq!(sequence_entropy([1, 1, 1]), 0.0);
        assert_eq!(sequence_entropy([0, 0]), 0.0);

        let h = sequence_entropy([1, 0, 1, 0]);
        assert!((h - 1.0).abs() < EPS, "expected 1.0, got {h}.");
        let h = sequence_entropy([1, 0, 0, 0]);
        assert!((h - binary_entropy(1, 3)).abs() < EPS);
    }
}
