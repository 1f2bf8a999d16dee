//! The trait for the hypotheses produced in this library.
use crate::Sample;
use crate::common::Label;


/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of the i'th row of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> Label;


    /// Predicts the labels of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<Label> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}
