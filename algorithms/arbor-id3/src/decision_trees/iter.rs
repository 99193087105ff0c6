use std::collections::VecDeque;
use std::iter::Iterator;

use super::TreeNode;

/// Level-order (BFT) iterator of nodes in a decision tree
///
/// Children are visited in the order of the attribute value they stand for.
pub struct NodeIter<'a> {
    queue: VecDeque<&'a TreeNode>,
}

impl<'a> NodeIter<'a> {
    pub fn new(root: &'a TreeNode) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);

        NodeIter { queue }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(|node| {
            if let Some(children) = node.children() {
                self.queue.extend(children.iter());
            }

            node
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Id3Tree;
    use arbor::prelude::*;
    use ndarray::array;

    #[test]
    fn nodes_come_level_by_level() -> Result<()> {
        let mut store = TrainingStore::new(
            array![[0, 0], [0, 1], [1, 0], [1, 1], [2, 0], [2, 1]],
            array![0, 1, 1, 1, 0, 0],
        )?;
        let tree = Id3Tree::params().fit(&mut store)?;

        let depths = tree.iter_nodes().map(|node| node.depth()).collect::<Vec<_>>();
        assert_eq!(depths, vec![0, 1, 1, 1, 2, 2, 2]);

        // the first child of the root is the only internal node below it
        let internal = tree
            .iter_nodes()
            .skip(1)
            .filter(|node| !node.is_leaf())
            .collect::<Vec<_>>();
        assert_eq!(internal.len(), 1);
        assert_eq!(internal[0].samples(), 0..2);
        assert_eq!(
            tree.iter_nodes().filter(|node| node.is_leaf()).count(),
            tree.num_leaves()
        );

        Ok(())
    }
}
