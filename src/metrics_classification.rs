//! Common metrics for performance evaluation of classifiers
//!
//! Predictions are compared with the labels of a training store, or any other array of labels,
//! in a confusion matrix. Accuracy, precision, recall and the F-scores are all derived from its
//! entries.
use std::fmt;

use ndarray::prelude::*;
use ndarray::Data;

use crate::dataset::{TrainingStore, MAX_LABELS, MIN_LABELS};
use crate::error::{Error, Result};

fn ratio(a: usize, b: usize) -> f32 {
    if b == 0 {
        0.0
    } else {
        a as f32 / b as f32
    }
}

/// Confusion matrix for multi-label evaluation
///
/// A confusion matrix shows predictions in a matrix, where rows correspond to target and columns
/// to predicted labels. The diagonal entries are correct predictions. Rows and columns cover the
/// whole label domain, labels which never occur have a zero row and column.
#[derive(Clone, PartialEq)]
pub struct ConfusionMatrix {
    matrix: Array2<usize>,
}

impl ConfusionMatrix {
    /// Count every (target, predicted) pair over a label domain of size `n_labels`
    pub fn new<S: Data<Elem = usize>, T: Data<Elem = usize>>(
        prediction: &ArrayBase<S, Ix1>,
        ground_truth: &ArrayBase<T, Ix1>,
        n_labels: usize,
    ) -> Result<ConfusionMatrix> {
        if prediction.len() != ground_truth.len() {
            return Err(Error::LengthMismatch {
                expected: ground_truth.len(),
                actual: prediction.len(),
            });
        }

        let pairs = ground_truth.iter().zip(prediction.iter());
        for (index, (target, predicted)) in pairs.clone().enumerate() {
            if let Some(label) = [*target, *predicted].iter().find(|x| **x >= n_labels) {
                return Err(Error::LabelOutOfDomain {
                    index,
                    label: *label,
                    n_labels,
                });
            }
        }

        let mut matrix = Array2::zeros((n_labels, n_labels));
        for (target, predicted) in pairs {
            matrix[(*target, *predicted)] += 1;
        }

        Ok(ConfusionMatrix { matrix })
    }

    /// Raw counts, indexed by (target, predicted)
    pub fn matrix(&self) -> &Array2<usize> {
        &self.matrix
    }

    pub fn n_labels(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of evaluated examples
    pub fn total(&self) -> usize {
        self.matrix.sum()
    }

    /// Number of correctly classified examples
    pub fn correct(&self) -> usize {
        self.matrix.diag().sum()
    }

    /// Return mean accuracy, zero if nothing was evaluated
    pub fn accuracy(&self) -> f32 {
        ratio(self.correct(), self.total())
    }

    /// Calculate precision for every label
    ///
    /// A label which was never predicted has precision zero.
    pub fn precision(&self) -> Array1<f32> {
        let sum = self.matrix.sum_axis(Axis(0));

        self.matrix
            .diag()
            .iter()
            .zip(sum.iter())
            .map(|(a, b)| ratio(*a, *b))
            .collect()
    }

    /// Calculate recall for every label
    ///
    /// A label which never occurs in the targets has recall zero.
    pub fn recall(&self) -> Array1<f32> {
        let sum = self.matrix.sum_axis(Axis(1));

        self.matrix
            .diag()
            .iter()
            .zip(sum.iter())
            .map(|(a, b)| ratio(*a, *b))
            .collect()
    }

    /// Return beta score for every label
    pub fn f_score(&self, beta: f32) -> Array1<f32> {
        let sb = beta * beta;
        let precision = self.precision();
        let recall = self.recall();

        precision
            .iter()
            .zip(recall.iter())
            .map(|(p, r)| {
                let denom = sb * p + r;
                if denom > 0.0 {
                    (1.0 + sb) * (p * r) / denom
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Return beta=1 score for every label
    pub fn f1_score(&self) -> Array1<f32> {
        self.f_score(1.0)
    }
}

/// Print a confusion matrix
impl fmt::Debug for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let len = self.n_labels();
        writeln!(f, "{}", "-".repeat(len * 4 + 1))?;

        for row in self.matrix.rows() {
            write!(f, "| ")?;
            for count in row {
                write!(f, "{} | ", count)?;
            }
            writeln!(f)?;
        }

        write!(f, "{}", "-".repeat(len * 4 + 1))
    }
}

/// Compare predicted labels with the ground truth
pub trait ToConfusionMatrix<T> {
    fn confusion_matrix(&self, ground_truth: T) -> Result<ConfusionMatrix>;
}

/// The label domain is inferred from the largest label of both arrays
impl<S: Data<Elem = usize>, T: Data<Elem = usize>> ToConfusionMatrix<&ArrayBase<T, Ix1>>
    for ArrayBase<S, Ix1>
{
    fn confusion_matrix(&self, ground_truth: &ArrayBase<T, Ix1>) -> Result<ConfusionMatrix> {
        let n_labels = self
            .iter()
            .chain(ground_truth.iter())
            .max()
            .map_or(MIN_LABELS, |max| max.saturating_add(1).max(MIN_LABELS))
            .min(MAX_LABELS);

        ConfusionMatrix::new(self, ground_truth, n_labels)
    }
}

/// Uses the targets and the label domain of the store
impl<S: Data<Elem = usize>> ToConfusionMatrix<&TrainingStore> for ArrayBase<S, Ix1> {
    fn confusion_matrix(&self, ground_truth: &TrainingStore) -> Result<ConfusionMatrix> {
        ConfusionMatrix::new(self, ground_truth.targets(), ground_truth.n_labels())
    }
}
