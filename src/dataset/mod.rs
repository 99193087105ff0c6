//! Datasets
//!
//! This module implements the training store and the helpers which read and reorder it by
//! subrange.
use ndarray::{Array1, Array2, ArrayView1};

mod impl_dataset;
mod impl_targets;
mod iter;
mod partition;

pub use iter::Iter;

/// Number of values every attribute can take
///
/// Attribute values are always drawn from `{0, 1, 2}`.
pub const ATTRIBUTE_ARITY: usize = 3;

/// Smallest label domain a store can be trained on
pub const MIN_LABELS: usize = 2;

/// Largest label domain a store accepts
pub const MAX_LABELS: usize = 1024;

/// TrainingStore
///
/// Holds all training examples of a training run contiguously. Examples are never created or
/// destroyed after the store is built, the only mutation is swapping two complete examples.
/// Algorithms refer to a subset of examples by a contiguous index range `start..end` into
/// the store, and reorder that range in place with [`partition`](TrainingStore::partition).
///
/// # Fields
///
/// * `records`: attribute values with dimensionality (nsamples, nfeatures), each in `{0, 1, 2}`
/// * `targets`: class labels with dimensionality (nsamples), each below `n_labels`
/// * `n_labels`: size of the label domain, at least two
/// * `feature_names`: optional display names of the attributes with dimensionality (nfeatures)
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingStore {
    records: Array2<u8>,
    targets: Array1<usize>,
    n_labels: usize,
    feature_names: Vec<String>,
}

/// A single training example borrowed from a store
#[derive(Debug, Clone, PartialEq)]
pub struct Example<'a> {
    pub attributes: ArrayView1<'a, u8>,
    pub label: usize,
}
