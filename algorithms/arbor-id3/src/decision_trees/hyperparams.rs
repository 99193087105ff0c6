use arbor::{
    error::{Error, Result},
    ParamGuard,
};

use crate::Id3Tree;

/// The set of hyperparameters that can be specified for fitting an
/// [ID3 decision tree](struct.Id3Tree.html).
///
/// ID3 itself has no tuning knobs, every node is split until it is pure or runs out of
/// attributes. The parameters pin down the shape of the training data instead, so that a
/// store which does not match the expected attribute count or label domain is rejected
/// before any example is moved.
///
/// ### Example
///
/// ```rust
/// use arbor::prelude::*;
/// use arbor_id3::Id3Tree;
/// use ndarray::array;
///
/// let mut store = TrainingStore::new(
///     array![[0, 0], [0, 1], [1, 0], [1, 1]],
///     array![0, 0, 1, 1],
/// )?;
///
/// // Initialize the default set of parameters and pin down the data shape
/// let params = Id3Tree::params().n_attributes(Some(2)).n_labels(Some(2));
/// // Fit the tree on the training store
/// let tree = params.fit(&mut store)?;
///
/// assert_eq!(tree.predict_one(&[1, 0])?, 1);
/// # Result::Ok(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Id3ValidParams {
    n_attributes: Option<usize>,
    n_labels: Option<usize>,
}

impl Id3ValidParams {
    pub fn n_attributes(&self) -> Option<usize> {
        self.n_attributes
    }

    pub fn n_labels(&self) -> Option<usize> {
        self.n_labels
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Id3Params(Id3ValidParams);

impl Id3Params {
    pub fn new() -> Self {
        Self(Id3ValidParams {
            n_attributes: None,
            n_labels: None,
        })
    }

    /// Sets the number of attributes every training example must have
    ///
    /// If `None` the attribute count of the training store is used as is.
    pub fn n_attributes(mut self, n_attributes: Option<usize>) -> Self {
        self.0.n_attributes = n_attributes;
        self
    }

    /// Sets the size of the label domain
    ///
    /// If `None` the label domain of the training store is used as is. Otherwise fitting
    /// replaces the label domain of the store with `n_labels`.
    pub fn n_labels(mut self, n_labels: Option<usize>) -> Self {
        self.0.n_labels = n_labels;
        self
    }
}

impl Id3Tree {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `n_attributes = None`
    /// * `n_labels = None`
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> Id3Params {
        Id3Params::new()
    }
}

impl ParamGuard for Id3Params {
    type Checked = Id3ValidParams;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        match (self.0.n_attributes, self.0.n_labels) {
            (Some(0), _) => Err(Error::Parameters(
                "Number of attributes should be greater than zero".to_string(),
            )),
            (_, Some(n_labels)) if n_labels < 2 => Err(Error::Parameters(format!(
                "Label domain should contain at least two labels, but was {}",
                n_labels
            ))),
            _ => Ok(&self.0),
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_the_check() {
        let params = Id3Tree::params().check_unwrap();

        assert_eq!(params.n_attributes(), None);
        assert_eq!(params.n_labels(), None);
    }

    #[test]
    fn setters_are_kept() {
        let params = Id3Tree::params()
            .n_attributes(Some(4))
            .n_labels(Some(3))
            .check_unwrap();

        assert_eq!(params.n_attributes(), Some(4));
        assert_eq!(params.n_labels(), Some(3));
    }

    #[test]
    #[should_panic]
    /// Check that a label domain with a single label panics
    fn panic_single_label() {
        Id3Tree::params().n_labels(Some(1)).check().unwrap();
    }

    #[test]
    fn zero_attributes_are_rejected() {
        assert!(matches!(
            Id3Tree::params().n_attributes(Some(0)).check(),
            Err(Error::Parameters(_))
        ));
    }
}
