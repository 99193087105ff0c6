use std::fmt;
use std::ops::Range;

use ndarray::{s, Array1, Array2, Axis};

use super::{Example, Iter, TrainingStore, ATTRIBUTE_ARITY, MAX_LABELS, MIN_LABELS};
use crate::error::{Error, Result};

impl TrainingStore {
    /// Create a new training store from records and targets
    ///
    /// Every record must be in `{0, 1, 2}` and there has to be exactly one target per row. The
    /// label domain is inferred as `0..=max(targets)` and never smaller than two labels, use
    /// [`with_label_domain`](Self::with_label_domain) to fix it explicitly. Labels of
    /// [`MAX_LABELS`](super::MAX_LABELS) or more are rejected with `LabelOutOfDomain`.
    pub fn new(records: Array2<u8>, targets: Array1<usize>) -> Result<TrainingStore> {
        if records.nrows() != targets.len() {
            return Err(Error::LengthMismatch {
                expected: records.nrows(),
                actual: targets.len(),
            });
        }

        for (index, row) in records.axis_iter(Axis(0)).enumerate() {
            if let Some((attribute, value)) = row
                .iter()
                .enumerate()
                .find(|(_, value)| **value as usize >= ATTRIBUTE_ARITY)
            {
                return Err(Error::AttributeValue {
                    index,
                    attribute,
                    value: *value,
                });
            }
        }

        if let Some((index, label)) = targets
            .iter()
            .enumerate()
            .find(|(_, label)| **label >= MAX_LABELS)
        {
            return Err(Error::LabelOutOfDomain {
                index,
                label: *label,
                n_labels: MAX_LABELS,
            });
        }

        let n_labels = targets
            .iter()
            .max()
            .map(|max| max + 1)
            .unwrap_or(0)
            .max(MIN_LABELS);

        Ok(TrainingStore {
            records,
            targets,
            n_labels,
            feature_names: Vec::new(),
        })
    }

    /// Fix the size of the label domain
    ///
    /// Fails if the domain has less than two or more than [`MAX_LABELS`](super::MAX_LABELS)
    /// labels, or if any target is not part of it.
    pub fn with_label_domain(mut self, n_labels: usize) -> Result<TrainingStore> {
        self.set_label_domain(n_labels)?;

        Ok(self)
    }

    /// Fix the size of the label domain of an existing store
    ///
    /// On failure the store keeps its previous label domain.
    pub fn set_label_domain(&mut self, n_labels: usize) -> Result<()> {
        if n_labels < MIN_LABELS || n_labels > MAX_LABELS {
            return Err(Error::Parameters(format!(
                "label domain needs between {} and {} labels, but was {}",
                MIN_LABELS, MAX_LABELS, n_labels
            )));
        }

        if let Some((index, label)) = self
            .targets
            .iter()
            .enumerate()
            .find(|(_, label)| **label >= n_labels)
        {
            return Err(Error::LabelOutOfDomain {
                index,
                label: *label,
                n_labels,
            });
        }

        self.n_labels = n_labels;

        Ok(())
    }

    /// Updates the attribute names of a store
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> Result<TrainingStore> {
        if names.len() != self.nfeatures() {
            return Err(Error::LengthMismatch {
                expected: self.nfeatures(),
                actual: names.len(),
            });
        }

        self.feature_names = names.into_iter().map(|x| x.into()).collect();

        Ok(self)
    }

    /// Returns the attribute names
    ///
    /// An attribute name gives a human-readable string describing the purpose of a single
    /// attribute. If no names were given, `feature-<i>` is returned for every attribute.
    pub fn feature_names(&self) -> Vec<String> {
        if !self.feature_names.is_empty() {
            self.feature_names.clone()
        } else {
            (0..self.nfeatures())
                .map(|idx| format!("feature-{}", idx))
                .collect()
        }
    }

    /// Return records of a store
    pub fn records(&self) -> &Array2<u8> {
        &self.records
    }

    /// Return targets of a store
    pub fn targets(&self) -> &Array1<usize> {
        &self.targets
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    /// Size of the label domain
    pub fn n_labels(&self) -> usize {
        self.n_labels
    }

    /// Returns the example at `index`
    pub fn example(&self, index: usize) -> Result<Example<'_>> {
        self.check_index(index)?;

        Ok(Example {
            attributes: self.records.row(index),
            label: self.targets[index],
        })
    }

    /// Iterate over all examples in their current order
    pub fn examples(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Split the store into the examples before `index` and the examples from `index` on
    ///
    /// Both halves keep the label domain and attribute names of the store.
    pub fn split_at(&self, index: usize) -> Result<(TrainingStore, TrainingStore)> {
        if index > self.nsamples() {
            return Err(Error::OutOfRange {
                index,
                len: self.nsamples(),
            });
        }

        let first = TrainingStore {
            records: self.records.slice(s![..index, ..]).to_owned(),
            targets: self.targets.slice(s![..index]).to_owned(),
            n_labels: self.n_labels,
            feature_names: self.feature_names.clone(),
        };
        let second = TrainingStore {
            records: self.records.slice(s![index.., ..]).to_owned(),
            targets: self.targets.slice(s![index..]).to_owned(),
            n_labels: self.n_labels,
            feature_names: self.feature_names.clone(),
        };

        Ok((first, second))
    }

    /// Swap the examples at `a` and `b`
    ///
    /// All attribute values and the label move together.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.swap_examples(a, b);

        Ok(())
    }

    /// Unchecked swap, panics when an index is out of bounds
    pub(crate) fn swap_examples(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        for attribute in 0..self.records.ncols() {
            self.records.swap((a, attribute), (b, attribute));
        }
        self.targets.swap(a, b);
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.nsamples() {
            Err(Error::OutOfRange {
                index,
                len: self.nsamples(),
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end || range.end > self.nsamples() {
            Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.nsamples(),
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_attribute(&self, attribute: usize) -> Result<()> {
        if attribute >= self.nfeatures() {
            Err(Error::AttributeOutOfRange {
                attribute,
                n_attributes: self.nfeatures(),
            })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for TrainingStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for name in self.feature_names() {
            write!(f, "{:>15}", name)?;
        }
        writeln!(f, "{:>15}", "class")?;

        for example in self.examples() {
            for value in example.attributes.iter() {
                write!(f, "{:>15}", value)?;
            }
            writeln!(f, "{:>15}", example.label)?;
        }

        Ok(())
    }
}
