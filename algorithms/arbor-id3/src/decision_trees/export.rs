use std::fmt;

use super::{Id3Tree, Termination, TreeNode};

/// Struct to print a fitted decision tree as indented plain text.
///
/// Internal nodes are printed with the display name of their attribute, followed by one
/// indented line per attribute value. Leaves print the label they predict.
///
/// ### Usage
///
/// ```rust
/// use arbor::prelude::*;
/// use arbor_id3::Id3Tree;
/// use ndarray::array;
///
/// let mut store = TrainingStore::new(array![[0], [1]], array![0, 1])?
///     .with_feature_names(vec!["outlook"])?;
/// let tree = Id3Tree::params().fit(&mut store)?;
///
/// let text = tree.export_to_text().to_string();
/// assert!(text.starts_with("outlook"));
/// # Result::Ok(())
/// ```
pub struct TextExport<'a> {
    samples: bool,
    indent: &'a str,
    tree: &'a Id3Tree,
}

impl<'a> TextExport<'a> {
    pub fn new(tree: &'a Id3Tree) -> Self {
        TextExport {
            samples: false,
            indent: "    ",
            tree,
        }
    }

    /// Whether the number of training examples is printed next to every node
    pub fn with_samples(mut self, samples: bool) -> Self {
        self.samples = samples;

        self
    }

    /// String repeated once per level of depth
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent = indent;

        self
    }

    fn format_label(&self, node: &TreeNode, prediction: usize) -> String {
        let mut out = format!("class {}", prediction);
        if node.termination() == Some(Termination::Empty) {
            out.push_str(" (no examples)");
        } else if self.samples {
            out.push_str(&format!(" ({} examples)", node.nsamples()));
        }

        out
    }

    fn format_node(&self, node: &TreeNode, out: &mut String) {
        if let Some(prediction) = node.prediction() {
            out.push_str(&self.format_label(node, prediction));
            out.push('\n');
            return;
        }

        out.push_str(node.feature_name().unwrap_or_default());
        if self.samples {
            out.push_str(&format!(" ({} examples)", node.nsamples()));
        }
        out.push('\n');

        let prefix = self.indent.repeat(node.depth() + 1);
        for (value, child) in node.children().iter().flat_map(|x| x.iter()).enumerate() {
            out.push_str(&format!("{}= {}: ", prefix, value));
            self.format_node(child, out);
        }
    }
}

impl<'a> fmt::Display for TextExport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut out = String::new();
        self.format_node(self.tree.root_node(), &mut out);

        write!(f, "{}", out)
    }
}

#[cfg(test)]
mod tests {
    use crate::Id3Tree;
    use arbor::prelude::*;
    use ndarray::array;

    #[test]
    fn renders_names_and_branches() -> Result<()> {
        let mut store = TrainingStore::new(
            array![[0, 0], [0, 1], [1, 0], [1, 1]],
            array![0, 0, 1, 1],
        )?
        .with_feature_names(vec!["wind", "humidity"])?;
        let tree = Id3Tree::params().fit(&mut store)?;

        let expected = "wind\n    = 0: class 0\n    = 1: class 1\n    = 2: class 0 (no examples)\n";
        assert_eq!(tree.export_to_text().to_string(), expected);

        Ok(())
    }

    #[test]
    fn nested_splits_are_indented() -> Result<()> {
        let mut store = TrainingStore::new(
            array![[0, 0], [0, 1], [1, 0], [1, 1], [2, 0], [2, 1]],
            array![0, 1, 1, 1, 0, 0],
        )?;
        let tree = Id3Tree::params().fit(&mut store)?;

        let text = tree.export_to_text().indent("\t").with_samples(true).to_string();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "feature-0 (6 examples)");
        assert_eq!(lines[1], "\t= 0: feature-1 (2 examples)");
        assert_eq!(lines[2], "\t\t= 0: class 0 (1 examples)");
        assert_eq!(lines[4], "\t\t= 2: class 0 (no examples)");
        assert_eq!(lines[5], "\t= 1: class 1 (2 examples)");
        assert_eq!(lines.len(), 7);

        Ok(())
    }
}
