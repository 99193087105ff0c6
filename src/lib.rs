//! `arbor` holds the shared data model for inducing decision trees over discretely valued
//! attributes.
//!
//! Every attribute takes one of exactly three values, `0`, `1` or `2`, and every example carries
//! a class label from a small label domain. All examples of a training run live in a single
//! [`TrainingStore`](dataset::TrainingStore). Algorithms never copy examples when they descend
//! into a subset: a subset is a contiguous index range of the store, and the store is reordered
//! in place so that the examples of every subset stay contiguous.
//!
//! The induction algorithm itself lives in the `arbor-id3` crate, loaders for text tables and
//! bundled data in `arbor-datasets`.
//!

pub mod dataset;
pub mod error;
mod metrics_classification;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Example, TrainingStore};
pub use error::Error;
pub use param_guard::ParamGuard;

/// Common metrics functions for classification
pub mod metrics {
    pub use crate::metrics_classification::{ConfusionMatrix, ToConfusionMatrix};
}
