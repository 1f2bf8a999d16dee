use crate::Sample;
use crate::common::LabelCount;
use crate::decision_tree::entropy::count_entropy;

use std::fmt;


/// Label statistics of a whole sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inspection {
    /// Binary entropy of the labels.
    pub entropy: f64,
    /// Error of always predicting the majority label.
    pub error: f64,
}


/// Returns the label entropy of `sample` and the error rate of
/// the classifier that always predicts the majority label.
/// An empty or single-class sample gives `0` for both.
pub fn inspect(sample: &Sample) -> Inspection {
    let count = LabelCount::from_labels(sample.target());

    let n_sample = count.total();
    if count.is_pure() {
        return Inspection { entropy: 0.0, error: 0.0 };
    }

    let minority = count.positive.min(count.negative);
    let error = minority as f64 / n_sample as f64;
    let entropy = count_entropy(&count);

    Inspection { entropy, error }
}


impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "entropy: {}", self.entropy)?;
        write!(f, "error: {}", self.error)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_mixed() {
        let header = vec!["A", "class"];
        let rows = vec![vec![1, 1], vec![0, 0], vec![0, 0], vec![1, 0]];
        let sample = Sample::from_rows(header, rows).unwrap();

        let res = inspect(&sample);
        assert_eq!(res.error, 0.25);
        assert!((res.entropy - 0.8112781244591328).abs() < 1e-12);
    }

    #[test]
    fn test_inspect_empty() {
        let sample = Sample::from_rows(vec!["A", "class"], Vec::new())
            .unwrap();

        let res = inspect(&sample);
        assert_eq!(res, Inspection { entropy: 0.0, error: 0.0 });
    }

    #[test]
    fn test_inspect_pure() {
        let header = vec!["A", "class"];
        let rows = vec![vec![1, 1], vec![0, 1]];
        let sample = Sample::from_rows(header, rows).unwrap();

        let res = inspect(&sample);
        assert_eq!(res, Inspection { entropy: 0.0, error: 0.0 });
    }
}
