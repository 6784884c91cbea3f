use super::split::Split;
use crate::data::features::{FeatureVector, RealNumber};
use std::fmt;

/// Decision tree node
///
/// Every node carries a label, so any internal node can be turned into a leaf
/// by dropping its branch.
#[derive(Debug)]
pub struct TreeNode<T: RealNumber> {
    label: bool,
    branch: Option<Branch<T>>,
}

/// Split and both subtrees of an internal node.
pub struct Branch<T: RealNumber> {
    split: Box<dyn Split<T>>,
    left: Box<TreeNode<T>>,
    right: Box<TreeNode<T>>,
}

impl<T: RealNumber> fmt::Debug for Branch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("split", &self.split.describe())
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T: RealNumber> TreeNode<T> {
    pub fn leaf(label: bool) -> Self {
        Self {
            label,
            branch: None,
        }
    }

    pub fn internal(
        label: bool,
        split: Box<dyn Split<T>>,
        left: TreeNode<T>,
        right: TreeNode<T>,
    ) -> Self {
        Self {
            label,
            branch: Some(Branch {
                split,
                left: Box::new(left),
                right: Box::new(right),
            }),
        }
    }

    pub fn label(&self) -> bool {
        self.label
    }

    pub fn is_leaf(&self) -> bool {
        self.branch.is_none()
    }

    pub fn split(&self) -> Option<&dyn Split<T>> {
        self.branch.as_ref().map(|branch| branch.split.as_ref())
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.branch.as_ref().map(|branch| branch.left.as_ref())
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.branch.as_ref().map(|branch| branch.right.as_ref())
    }

    /// Walks down to a leaf and returns its label.
    pub fn descend(&self, features: &FeatureVector<T>) -> bool {
        let mut node = self;
        while let Some(branch) = &node.branch {
            node = if branch.split.go_left(features) {
                branch.left.as_ref()
            } else {
                branch.right.as_ref()
            };
        }
        node.label
    }

    /// Turns every node `depth` levels below this one into a leaf.
    pub fn prune(&mut self, depth: usize) {
        if depth == 0 {
            self.branch = None;
            return;
        }
        if let Some(branch) = self.branch.as_mut() {
            branch.left.prune(depth - 1);
            branch.right.prune(depth - 1);
        }
    }

    /// Appends the if/else rendering of this subtree to `lines`.
    pub fn render_into(&self, indent: &str, lines: &mut Vec<String>) {
        match &self.branch {
            None => lines.push(format!("{indent}return {};", self.label)),
            Some(branch) => {
                let nested = format!("{indent} ");
                lines.push(format!("{indent}if ({})", branch.split.describe()));
                branch.left.render_into(&nested, lines);
                lines.push(format!("{indent}else"));
                branch.right.render_into(&nested, lines);
            }
        }
    }

    /// Number of edges on the longest path down to a leaf.
    pub fn depth(&self) -> usize {
        match &self.branch {
            None => 0,
            Some(branch) => 1 + branch.left.depth().max(branch.right.depth()),
        }
    }

    /// Widest feature index any split below this node reads, plus one.
    pub fn min_features(&self) -> usize {
        match &self.branch {
            None => 0,
            Some(branch) => branch
                .split
                .min_features()
                .max(branch.left.min_features())
                .max(branch.right.min_features()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match &self.branch {
            None => 1,
            Some(branch) => branch.left.leaf_count() + branch.right.leaf_count(),
        }
    }

    pub fn node_count(&self) -> usize {
        match &self.branch {
            None => 1,
            Some(branch) => 1 + branch.left.node_count() + branch.right.node_count(),
        }
    }
}
