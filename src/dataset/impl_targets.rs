use std::ops::Range;

use ndarray::{s, Array1, Array2, Zip};

use super::{TrainingStore, ATTRIBUTE_ARITY};
use crate::error::Result;

impl TrainingStore {
    /// Count the occurrences of every label in `range`
    ///
    /// The result has one entry per label of the label domain.
    pub fn label_counts(&self, range: Range<usize>) -> Result<Array1<usize>> {
        self.check_range(&range)?;

        let mut counts = Array1::zeros(self.n_labels());
        for label in self.targets().slice(s![range]) {
            counts[*label] += 1;
        }

        Ok(counts)
    }

    /// Count the occurrences of every (attribute value, label) pair in `range`
    ///
    /// Rows of the result correspond to the attribute values `0, 1, 2` and columns to labels.
    /// The store is only read, never reordered.
    pub fn value_label_counts(&self, attribute: usize, range: Range<usize>) -> Result<Array2<usize>> {
        self.check_attribute(attribute)?;
        self.check_range(&range)?;

        let mut counts = Array2::zeros((ATTRIBUTE_ARITY, self.n_labels()));
        let values = self.records().slice(s![range.clone(), attribute]);
        let labels = self.targets().slice(s![range]);

        Zip::from(&values).and(&labels).for_each(|value, label| {
            counts[(*value as usize, *label)] += 1;
        });

        Ok(counts)
    }

    /// Returns the most frequent label in `range`
    ///
    /// Ties are broken in favour of the smallest label. An empty range has no majority and
    /// returns `None`.
    pub fn majority_label(&self, range: Range<usize>) -> Result<Option<usize>> {
        if range.start == range.end {
            self.check_range(&range)?;
            return Ok(None);
        }

        let counts = self.label_counts(range)?;
        let majority = counts
            .iter()
            .enumerate()
            .fold(None, |acc: Option<(usize, usize)>, (label, count)| match acc {
                Some((_, best_count)) if best_count >= *count => acc,
                _ => Some((label, *count)),
            })
            .map(|(label, _)| label);

        Ok(majority)
    }

    /// Returns the shared label if every example in `range` carries the same one
    ///
    /// An empty range is not pure.
    pub fn pure_label(&self, range: Range<usize>) -> Result<Option<usize>> {
        self.check_range(&range)?;

        let mut labels = self.targets().slice(s![range]).into_iter();
        let first = match labels.next() {
            Some(first) => *first,
            None => return Ok(None),
        };

        if labels.all(|label| *label == first) {
            Ok(Some(first))
        } else {
            Ok(None)
        }
    }
}
