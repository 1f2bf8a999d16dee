use crate::{Classifier, Sample};


/// Zero-one loss.
/// Returns the fraction of instances of `sample`
/// whose label differs from the prediction of `f`.
/// An empty sample has loss `0`.
pub fn zero_one_loss<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier
{
    if sample.is_empty() {
        return 0.0;
    }
    let n_sample = sample.shape().0;

    let target = sample.target();

    f.predict_all(sample)
        .into_iter()
        .zip(target)
        .map(|(hx, y)| if hx != y { 1.0 } else { 0.0 })
        .sum::<f64>()
        / n_sample as f64
}
