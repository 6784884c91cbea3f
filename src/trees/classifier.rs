//! Decision Tree Text Classifier
use super::{
    node::TreeNode,
    params::TreeParams,
    splitter::{SplitOutcome, Splitter},
};
use crate::{
    data::features::{first_row, FeatureMatrix, FeatureVector, RealNumber},
    error::{ClassifierError, Result},
    metrics::confusion::ClassificationMetrics,
    vectorizer::Vectorizer,
};
use nalgebra::DVector;
use std::{
    fmt,
    io::{self},
};
use tracing::{debug, trace};

/// Binary decision tree over vectorized text.
///
/// Internal nodes hold a [`Split`](super::split::Split), leaves hold a boolean label.
/// The tree is built once from a [`Splitter`] and afterwards only changes through
/// [`prune`](TextClassifier::prune).
pub struct TextClassifier<T: RealNumber, V> {
    root: TreeNode<T>,
    vectorizer: V,
    tree_params: TreeParams,
    min_features: usize,
}

impl<T: RealNumber, V: Vectorizer<T>> ClassificationMetrics for TextClassifier<T, V> {}

impl<T: RealNumber, V: Vectorizer<T>> TextClassifier<T, V> {
    /// Builds the tree from `splitter` with default parameters.
    pub fn new<S: Splitter<T>>(vectorizer: V, splitter: S) -> Self {
        Self::with_params(vectorizer, splitter, TreeParams::new())
    }

    /// Builds the tree from `splitter`.
    ///
    /// # Arguments
    ///
    /// * `vectorizer` - Turns text into features at classification time.
    /// * `splitter` - Decides the structure of the tree.
    /// * `tree_params` - A maximum depth stops construction early, as if the
    ///   full tree had been pruned at that depth.
    pub fn with_params<S: Splitter<T>>(
        vectorizer: V,
        splitter: S,
        tree_params: TreeParams,
    ) -> Self {
        let root = Self::build_tree(splitter, 0, tree_params.max_depth());
        debug!(
            nodes = root.node_count(),
            leaves = root.leaf_count(),
            depth = root.depth(),
            "built decision tree"
        );
        let min_features = root.min_features();
        Self {
            root,
            vectorizer,
            tree_params,
            min_features,
        }
    }

    fn build_tree<S: Splitter<T>>(
        splitter: S,
        current_depth: usize,
        max_depth: Option<usize>,
    ) -> TreeNode<T> {
        let label = splitter.label();
        if max_depth.is_some_and(|depth| current_depth >= depth) {
            trace!(current_depth, "depth limit reached, closing leaf");
            return TreeNode::leaf(label);
        }
        match splitter.split() {
            SplitOutcome::Terminal => TreeNode::leaf(label),
            SplitOutcome::Partition { left, right, split } => {
                let left_node = Self::build_tree(left, current_depth + 1, max_depth);
                let right_node = Self::build_tree(right, current_depth + 1, max_depth);
                TreeNode::internal(label, split, left_node, right_node)
            }
        }
    }

    pub fn root(&self) -> &TreeNode<T> {
        &self.root
    }

    pub fn tree_params(&self) -> &TreeParams {
        &self.tree_params
    }

    /// Number of edges on the longest root to leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Predicts the label of a piece of text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the vectorizer produces an empty matrix and
    /// `Precondition` if the feature count differs from the pinned `num_features`
    /// or is too small for the splits in the tree.
    pub fn classify(&self, text: &str) -> Result<bool> {
        let features = first_row(&self.vectorizer.transform(text))?;
        self.check_width(&features)?;
        let label = self.classify_features(&features);
        trace!(label, "classified text");
        Ok(label)
    }

    /// Predicts the label of an already vectorized document.
    ///
    /// The width is not checked; a split whose feature is missing sends the vector right.
    pub fn classify_features(&self, features: &FeatureVector<T>) -> bool {
        self.root.descend(features)
    }

    /// Predicts one label per row of `features`.
    pub fn predict(&self, features: &FeatureMatrix<T>) -> DVector<bool> {
        let predictions: Vec<_> = features
            .row_iter()
            .map(|row| self.classify_features(&row.transpose()))
            .collect();

        DVector::from_vec(predictions)
    }

    /// Predicts one label per text, stopping at the first failure.
    pub fn predict_texts(&self, texts: &[&str]) -> Result<DVector<bool>> {
        let predictions = texts
            .iter()
            .map(|text| self.classify(text))
            .collect::<Result<Vec<_>>>()?;

        Ok(DVector::from_vec(predictions))
    }

    /// Accuracy of the classifier on labelled texts.
    pub fn evaluate(&self, texts: &[&str], labels: &[bool]) -> Result<f64> {
        if texts.len() != labels.len() {
            return Err(ClassifierError::InvalidArgument(format!(
                "{} texts but {} labels",
                texts.len(),
                labels.len()
            )));
        }
        let y_pred = self.predict_texts(texts)?;
        let y_true = DVector::from_column_slice(labels);
        self.accuracy(&y_true, &y_pred)
    }

    fn check_width(&self, features: &FeatureVector<T>) -> Result<()> {
        match self.tree_params.num_features() {
            Some(expected) if expected != features.len() => {
                Err(ClassifierError::Precondition(format!(
                    "expected {expected} features, vectorizer produced {}",
                    features.len()
                )))
            }
            _ if features.len() < self.min_features => {
                Err(ClassifierError::Precondition(format!(
                    "tree splits on {} features, vectorizer produced {}",
                    self.min_features,
                    features.len()
                )))
            }
            _ => Ok(()),
        }
    }

    /// Renders the tree as if/else pseudocode, one statement per line.
    ///
    /// Each nesting level adds a single space of indentation.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.root.render_into("", &mut lines);
        lines
    }

    /// Prints the rendered tree to standard output.
    pub fn print(&self) {
        for line in self.render() {
            println!("{line}");
        }
    }

    /// Writes the lines of [`render`](TextClassifier::render), each followed by a newline.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in self.render() {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    /// Turns every node `depth` levels below the root into a leaf that keeps
    /// the node's label. Pruning at or below the deepest leaf changes nothing.
    pub fn prune(&mut self, depth: usize) {
        let nodes_before = self.root.node_count();
        self.root.prune(depth);
        self.min_features = self.root.min_features();
        debug!(
            depth,
            removed = nodes_before - self.root.node_count(),
            "pruned decision tree"
        );
    }
}

impl<T: RealNumber, V: Vectorizer<T>> fmt::Display for TextClassifier<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().join("\n"))
    }
}
