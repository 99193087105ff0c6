//! ID3 decision trees
//!
use std::collections::BTreeSet;
use std::ops::Range;

use fixedbitset::FixedBitSet;
use log::{debug, info, trace};
use ndarray::{aview1, Array1, ArrayBase, Data, Ix1, Ix2};

use super::entropy::{range_entropy, split_entropy};
use super::{Id3ValidParams, NodeIter, TextExport};
use arbor::{
    dataset::ATTRIBUTE_ARITY,
    error::{Error, Result},
    metrics::ConfusionMatrix,
    traits::*,
    TrainingStore,
};

/// Post-split entropies closer than this are treated as equal
///
/// Attributes which split a range into the same segments in a different value order sum the
/// same weighted terms in a different order, and may differ in the last bits.
const SCORE_TOLERANCE: f64 = 1e-12;

/// Reason a node was turned into a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// All examples of the node carry the same label
    Pure,
    /// Every attribute was already used on the path from the root
    Exhausted,
    /// No example reached the node, it predicts the majority label of its parent
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
enum NodeKind {
    Leaf {
        prediction: usize,
        termination: Termination,
    },
    Split {
        attribute: usize,
        feature_name: String,
        information_gain: f64,
        majority: usize,
        children: Box<[TreeNode; ATTRIBUTE_ARITY]>,
    },
}

/// A node in the decision tree
///
/// Every node covers a contiguous range of the training store it was fitted on. Internal nodes
/// have exactly three children, one per attribute value, and their ranges split the range of
/// the parent without overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    samples: Range<usize>,
    depth: usize,
    kind: NodeKind,
}

impl TreeNode {
    fn leaf(prediction: usize, termination: Termination, samples: Range<usize>, depth: usize) -> Self {
        trace!(
            "leaf at depth {} over {:?}: label {} ({:?})",
            depth,
            samples,
            prediction,
            termination
        );

        TreeNode {
            samples,
            depth,
            kind: NodeKind::Leaf {
                prediction,
                termination,
            },
        }
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Returns the depth of the node in the decision tree
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Range of the training store covered by this node
    ///
    /// The range refers to the order the store was left in after fitting.
    pub fn samples(&self) -> Range<usize> {
        self.samples.clone()
    }

    pub fn nsamples(&self) -> usize {
        self.samples.len()
    }

    /// Returns `Some(prediction)` for leaf nodes and `None` for internal nodes.
    pub fn prediction(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Leaf { prediction, .. } => Some(prediction),
            NodeKind::Split { .. } => None,
        }
    }

    /// Returns why a leaf stopped splitting, `None` for internal nodes
    pub fn termination(&self) -> Option<Termination> {
        match self.kind {
            NodeKind::Leaf { termination, .. } => Some(termination),
            NodeKind::Split { .. } => None,
        }
    }

    /// Returns the three children, indexed by attribute value, of an internal node
    pub fn children(&self) -> Option<&[TreeNode; ATTRIBUTE_ARITY]> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Split { children, .. } => Some(&**children),
        }
    }

    /// Return the split attribute and its information gain
    pub fn split(&self) -> Option<(usize, f64)> {
        match self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Split {
                attribute,
                information_gain,
                ..
            } => Some((attribute, information_gain)),
        }
    }

    /// Returns the name of the attribute used in the split if the node is internal,
    /// `None` otherwise
    pub fn feature_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Split { feature_name, .. } => Some(feature_name.as_str()),
        }
    }

    /// Most frequent label among the examples of an internal node
    pub fn majority(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Split { majority, .. } => Some(majority),
        }
    }

    /// Recursively fits the node
    ///
    /// `untouched` holds the attributes not yet split on between the root and this node,
    /// `fallback` the label an empty node predicts.
    fn fit(
        store: &mut TrainingStore,
        feature_names: &[String],
        samples: Range<usize>,
        untouched: &FixedBitSet,
        fallback: usize,
        depth: usize,
    ) -> Result<Self> {
        if let Some(label) = store.pure_label(samples.clone())? {
            return Ok(Self::leaf(label, Termination::Pure, samples, depth));
        }

        let majority = match store.majority_label(samples.clone())? {
            Some(majority) => majority,
            None => return Ok(Self::leaf(fallback, Termination::Empty, samples, depth)),
        };

        // Find the attribute with the lowest post-split entropy, the first one wins a tie
        let mut best: Option<(usize, f64)> = None;
        for attribute in untouched.ones() {
            let score = split_entropy(store, attribute, samples.clone())?;

            best = match best {
                Some((_, best_score)) if score > best_score - SCORE_TOLERANCE => best,
                _ => Some((attribute, score)),
            };
        }

        let (attribute, score) = match best {
            Some(best) => best,
            None => return Ok(Self::leaf(majority, Termination::Exhausted, samples, depth)),
        };
        let information_gain = range_entropy(store, samples.clone())? - score;

        let (b1, b2) = store.partition(attribute, samples.clone())?;
        debug!(
            "split {:?} at depth {} on attribute {} ({}): entropy {:.4}, gain {:.4}, boundaries {} {}",
            samples, depth, attribute, feature_names[attribute], score, information_gain, b1, b2
        );

        let mut remaining = untouched.clone();
        remaining.set(attribute, false);

        let children = Box::new([
            Self::fit(store, feature_names, samples.start..b1, &remaining, majority, depth + 1)?,
            Self::fit(store, feature_names, b1..b2, &remaining, majority, depth + 1)?,
            Self::fit(store, feature_names, b2..samples.end, &remaining, majority, depth + 1)?,
        ]);

        Ok(TreeNode {
            samples,
            depth,
            kind: NodeKind::Split {
                attribute,
                feature_name: feature_names[attribute].clone(),
                information_gain,
                majority,
                children,
            },
        })
    }
}

/// A fitted ID3 decision tree for classification.
///
/// ### Structure
/// An ID3 tree is a ternary tree where:
/// * Each internal node splits on one attribute. The examples with value `0`, `1` and `2`
///   for that attribute fall into the first, second and third child. An attribute is used at
///   most once on every path from the root, so the depth never exceeds the attribute count.
///
/// * Leaf nodes make predictions. A pure leaf predicts the label all of its examples share,
///   a leaf without attributes left predicts its most common label and a leaf no example
///   reached predicts the most common label of its parent.
///
/// ### Algorithm
///
/// Starting with a single root node covering the whole training store, every node is fitted
/// by applying the following rules:
///
/// * If all examples share one label, the node becomes a pure leaf;
/// * If no examples are left, or no attributes are left to split on, the node becomes a leaf;
/// * Otherwise the attribute with the lowest expected entropy after the split, i.e. the
///   largest information gain, is selected. The node's range of the training store is
///   partitioned in place by this attribute and the three resulting ranges are fitted
///   recursively without the selected attribute.
///
/// The training store is reordered while fitting and no example is ever copied.
///
/// ### Predictions
///
/// To predict the label of a feature vector, the tree is traversed from the root to a leaf,
/// following at every internal node the child of the vector's value for the split attribute.
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
/// // Fit the tree
/// let tree = Id3Tree::params().fit(&mut store)?;
/// // Only the first attribute is informative
/// assert_eq!(tree.features(), vec![0]);
/// assert_eq!(tree.predict(&array![[0u8, 1], [1, 1]])?, array![0usize, 1]);
/// # Result::Ok(())
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct Id3Tree {
    root_node: TreeNode,
    num_features: usize,
    num_labels: usize,
}

impl Fit<Error> for Id3ValidParams {
    type Object = Id3Tree;

    /// Fit an ID3 tree on the training store, reordering it in place
    fn fit(&self, store: &mut TrainingStore) -> Result<Self::Object> {
        if let Some(n_attributes) = self.n_attributes() {
            if n_attributes != store.nfeatures() {
                return Err(Error::LengthMismatch {
                    expected: n_attributes,
                    actual: store.nfeatures(),
                });
            }
        }
        if let Some(n_labels) = self.n_labels() {
            store.set_label_domain(n_labels)?;
        }

        let nsamples = store.nsamples();
        let majority = store
            .majority_label(0..nsamples)?
            .ok_or(Error::NotEnoughSamples)?;

        let feature_names = store.feature_names();
        let mut untouched = FixedBitSet::with_capacity(store.nfeatures());
        untouched.insert_range(..);

        let root_node = TreeNode::fit(store, &feature_names, 0..nsamples, &untouched, majority, 0)?;

        let tree = Id3Tree {
            root_node,
            num_features: store.nfeatures(),
            num_labels: store.n_labels(),
        };
        info!(
            "fitted ID3 tree on {} examples with {} attributes and {} labels: {} leaves, depth {}",
            nsamples,
            tree.num_features,
            tree.num_labels,
            tree.num_leaves(),
            tree.max_depth()
        );

        Ok(tree)
    }
}

impl<D: Data<Elem = u8>> Predict<&ArrayBase<D, Ix1>, Result<usize>> for Id3Tree {
    /// Predict the label of a single feature vector
    fn predict(&self, x: &ArrayBase<D, Ix1>) -> Result<usize> {
        self.check_features(x)?;

        Ok(make_prediction(x, &self.root_node))
    }
}

impl<D: Data<Elem = u8>> Predict<&ArrayBase<D, Ix2>, Result<Array1<usize>>> for Id3Tree {
    /// Make predictions for each row of a matrix of features `x`.
    fn predict(&self, x: &ArrayBase<D, Ix2>) -> Result<Array1<usize>> {
        let mut targets = Array1::zeros(x.nrows());

        for (row, target) in x.rows().into_iter().zip(targets.iter_mut()) {
            self.check_features(&row)?;
            *target = make_prediction(&row, &self.root_node);
        }

        Ok(targets)
    }
}

impl Id3Tree {
    /// Predict the label of a single feature vector given as slice
    pub fn predict_one(&self, features: &[u8]) -> Result<usize> {
        self.predict(&aview1(features))
    }

    /// Create a node iterator in level-order (BFT)
    pub fn iter_nodes(&self) -> NodeIter<'_> {
        NodeIter::new(&self.root_node)
    }

    /// Return the attributes used by any split, in ascending order
    pub fn features(&self) -> Vec<usize> {
        self.iter_nodes()
            .filter_map(|node| node.split())
            .map(|(attribute, _)| attribute)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Return the feature importance of each attribute
    ///
    /// The importance of an attribute is the information gain of all splits on it, each
    /// weighted by the share of examples reaching the split, normalised to sum up to one. If
    /// the tree has no split with positive gain, all importances are zero.
    pub fn feature_importance(&self) -> Vec<f64> {
        let total = self.root_node.nsamples() as f64;
        let mut importance = vec![0.0; self.num_features];

        for node in self.iter_nodes() {
            if let Some((attribute, gain)) = node.split() {
                importance[attribute] += node.nsamples() as f64 / total * gain;
            }
        }

        let sum: f64 = importance.iter().sum();
        if sum > 0.0 {
            importance.iter_mut().for_each(|x| *x /= sum);
        }

        importance
    }

    /// Return root node of the tree
    pub fn root_node(&self) -> &TreeNode {
        &self.root_node
    }

    /// Return max depth of the tree
    pub fn max_depth(&self) -> usize {
        self.iter_nodes()
            .fold(0, |max, node| usize::max(max, node.depth))
    }

    /// Return the number of leaves in this tree
    pub fn num_leaves(&self) -> usize {
        self.iter_nodes().filter(|node| node.is_leaf()).count()
    }

    /// Number of attributes a feature vector must have
    pub fn n_features(&self) -> usize {
        self.num_features
    }

    /// Size of the label domain the tree was fitted on
    pub fn n_labels(&self) -> usize {
        self.num_labels
    }

    /// Compare the predictions for every example of `store` with its labels
    ///
    /// The confusion matrix covers the larger of the tree's and the store's label domain.
    pub fn evaluate(&self, store: &TrainingStore) -> Result<ConfusionMatrix> {
        let predictions = self.predict(store.records())?;

        ConfusionMatrix::new(
            &predictions,
            store.targets(),
            self.num_labels.max(store.n_labels()),
        )
    }

    /// Generates a [`TextExport`](struct.TextExport.html) structure to print the fitted tree
    /// as indented text.
    pub fn export_to_text(&self) -> TextExport<'_> {
        TextExport::new(self)
    }

    fn check_features<D: Data<Elem = u8>>(&self, x: &ArrayBase<D, Ix1>) -> Result<()> {
        if x.len() != self.num_features {
            return Err(Error::LengthMismatch {
                expected: self.num_features,
                actual: x.len(),
            });
        }

        match x
            .iter()
            .enumerate()
            .find(|(_, value)| **value as usize >= ATTRIBUTE_ARITY)
        {
            Some((attribute, value)) => Err(Error::InvalidFeature {
                attribute,
                value: *value,
            }),
            None => Ok(()),
        }
    }
}

/// Fit an ID3 tree on `store`, which must have `n_attributes` attributes and labels below
/// `n_labels`
///
/// Besides being reordered, the store keeps `n_labels` as its label domain afterwards.
pub fn build(store: &mut TrainingStore, n_attributes: usize, n_labels: usize) -> Result<Id3Tree> {
    Id3Tree::params()
        .n_attributes(Some(n_attributes))
        .n_labels(Some(n_labels))
        .fit(store)
}

/// Classify the feature vector `features` with `tree`
pub fn predict(tree: &Id3Tree, features: &[u8]) -> Result<usize> {
    tree.predict_one(features)
}

/// Classify a validated sample &x by walking down from `node`.
fn make_prediction<D: Data<Elem = u8>>(x: &ArrayBase<D, Ix1>, node: &TreeNode) -> usize {
    let mut node = node;

    loop {
        match &node.kind {
            NodeKind::Leaf { prediction, .. } => return *prediction,
            NodeKind::Split {
                attribute,
                children,
                ..
            } => node = &children[x[*attribute] as usize],
        }
    }
}
