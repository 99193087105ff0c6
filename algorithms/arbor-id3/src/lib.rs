//!
//! # ID3 decision trees
//! `arbor-id3` induces classification trees over ternary attributes with the ID3 algorithm.
//!
//! # The big picture
//!
//! `arbor-id3` builds on the [`arbor`](arbor) core crate, which holds the training store, the
//! in-place partitioner and the shared `Fit`/`Predict` traits.
//!
//! Every attribute takes one of the values `0`, `1` or `2`. Starting from the root, the tree
//! greedily splits on the attribute with the lowest remaining class entropy, moves the examples
//! of each value into a contiguous segment of the store and recurses into the three segments.
//! A node stops splitting when its examples share a label, when no attribute is left or when
//! no example reached it.
//!
//! # Current state
//!
//! `arbor-id3` provides an [implementation](Id3Tree) of single-tree fitting for
//! classification together with the plain [`build`] and [`predict`] entry points.
//!

mod decision_trees;

// Re-export all core decision tree functionality
pub use decision_trees::*;

// Re-export the common Result alias for convenience
pub use arbor::error::Result;
