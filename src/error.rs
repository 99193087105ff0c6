//! Error types in Arbor
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
    #[error("not enough samples to build a tree")]
    NotEnoughSamples,
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("example {index} has value {value} for attribute {attribute}, expected 0, 1 or 2")]
    AttributeValue {
        index: usize,
        attribute: usize,
        value: u8,
    },
    #[error("example {index} has label {label} outside of the label domain of size {n_labels}")]
    LabelOutOfDomain {
        index: usize,
        label: usize,
        n_labels: usize,
    },
    #[error("attribute {attribute} out of range for {n_attributes} attributes")]
    AttributeOutOfRange {
        attribute: usize,
        n_attributes: usize,
    },
    #[error("index {index} out of range for {len} examples")]
    OutOfRange { index: usize, len: usize },
    #[error("range {start}..{end} is not valid for {len} examples")]
    InvalidRange { start: usize, end: usize, len: usize },
    #[error("feature value {value} for attribute {attribute} is not one of 0, 1, 2")]
    InvalidFeature { attribute: usize, value: u8 },
}
