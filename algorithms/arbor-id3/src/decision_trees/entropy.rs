//! Entropy of label distributions and of candidate splits
//!
use std::ops::Range;

use arbor::{error::Result, TrainingStore};
use ndarray::{ArrayBase, Axis, Data, Ix1};

/// Returns `p * log2(p)`, with `0 * log2(0) = 0`
fn entropy_term(p: f64) -> f64 {
    if p > 0.0 {
        p * p.log2()
    } else {
        0.0
    }
}

/// Given the class counts calculates the entropy of the subset in bits.
///
/// An empty subset has entropy zero.
pub fn entropy<D: Data<Elem = usize>>(class_counts: &ArrayBase<D, Ix1>) -> f64 {
    let n_samples = class_counts.sum();
    if n_samples == 0 {
        return 0.0;
    }

    -class_counts
        .iter()
        .map(|count| entropy_term(*count as f64 / n_samples as f64))
        .sum::<f64>()
}

/// Entropy of the labels in `range`
pub fn range_entropy(store: &TrainingStore, range: Range<usize>) -> Result<f64> {
    Ok(entropy(&store.label_counts(range)?))
}

/// Weighted class entropy expected after splitting `range` on `attribute`
///
/// Each of the three value segments contributes its entropy weighted by its share of the
/// range. Empty segments have weight zero and are skipped, and so is an empty range. The
/// counts are tallied without reordering the store.
pub fn split_entropy(store: &TrainingStore, attribute: usize, range: Range<usize>) -> Result<f64> {
    let total = range.len();
    let counts = store.value_label_counts(attribute, range)?;
    if total == 0 {
        return Ok(0.0);
    }

    let score: f64 = counts
        .axis_iter(Axis(0))
        .map(|segment| {
            let size = segment.sum();
            if size == 0 {
                0.0
            } else {
                size as f64 / total as f64 * entropy(&segment)
            }
        })
        .sum();

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn entropy_example() {
        // Class 0 occurs 75% of the time
        // Class 1 occurs 25% of the time
        // Class 2 occurs 0% of the time
        // Entropy is -0.75*log2(0.75) - 0.25*log2(0.25) - 0*log2(0) = 0.81127812
        assert_abs_diff_eq!(entropy(&array![6usize, 2, 0]), 0.81127, epsilon = 1e-5);

        // If split is perfect then entropy is zero
        assert_abs_diff_eq!(entropy(&array![8usize, 0, 0]), 0.0);

        // Uniform over four labels
        assert_abs_diff_eq!(entropy(&array![3usize, 3, 3, 3]), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn entropy_of_nothing_is_zero() {
        let value = entropy(&array![0usize, 0, 0]);

        assert!(!value.is_nan());
        assert_abs_diff_eq!(value, 0.0);
    }

    #[test]
    fn split_entropy_example() -> Result<()> {
        let store = TrainingStore::new(
            array![[0, 0], [0, 1], [1, 0], [1, 1], [1, 1]],
            array![0, 0, 1, 1, 0],
        )?;

        // attribute 0: [0, 0] -> {0, 0}, [1, 1, 1] -> {1, 1, 0}
        // 2/5 * 0 + 3/5 * H(2/3, 1/3) = 0.6 * 0.9182958
        assert_abs_diff_eq!(
            split_entropy(&store, 0, 0..5)?,
            0.6 * 0.918_295_834,
            epsilon = 1e-8
        );

        // attribute 1: [0, 1] -> {0, 1}, [1, 1, 1] -> {0, 1, 0}
        // 2/5 * 1 + 3/5 * 0.9182958
        assert_abs_diff_eq!(
            split_entropy(&store, 1, 0..5)?,
            0.4 + 0.6 * 0.918_295_834,
            epsilon = 1e-8
        );

        // the store is only read
        assert_eq!(store.targets(), &array![0usize, 0, 1, 1, 0]);

        Ok(())
    }

    #[test]
    fn split_entropy_of_a_pure_range_is_zero() -> Result<()> {
        let store = TrainingStore::new(array![[0, 2], [1, 2], [2, 0]], array![1, 1, 1])?;

        for attribute in 0..2 {
            assert_abs_diff_eq!(split_entropy(&store, attribute, 0..3)?, 0.0);
        }
        assert_abs_diff_eq!(range_entropy(&store, 0..3)?, 0.0);

        Ok(())
    }

    #[test]
    fn split_entropy_of_an_empty_range_is_zero() -> Result<()> {
        let store = TrainingStore::new(array![[0], [1]], array![0, 1])?;
        let value = split_entropy(&store, 0, 1..1)?;

        assert!(!value.is_nan());
        assert_abs_diff_eq!(value, 0.0);

        Ok(())
    }
}
