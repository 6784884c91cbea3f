//! Splitters drive tree construction.
use super::split::Split;
use crate::data::features::RealNumber;

/// What a splitter decided for its current subset.
pub enum SplitOutcome<T: RealNumber, S> {
    /// No further partition, the node becomes a leaf.
    Terminal,
    /// Partition into two subsets, each handled by its own splitter.
    Partition {
        left: S,
        right: S,
        split: Box<dyn Split<T>>,
    },
}

/// Recursively partitions a labelled dataset.
///
/// Used only while the tree is being built. A splitter that never returns
/// [`SplitOutcome::Terminal`] builds an unbounded tree, unless the classifier is
/// given a maximum depth.
pub trait Splitter<T: RealNumber>: Sized {
    /// Label assigned to the current subset, usually its majority class.
    fn label(&self) -> bool;

    fn split(&self) -> SplitOutcome<T, Self>;
}
