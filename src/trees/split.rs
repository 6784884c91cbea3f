//! Split predicates held by internal tree nodes.
use crate::data::features::{FeatureVector, RealNumber};

/// Decides which way a feature vector descends at an internal node.
pub trait Split<T: RealNumber> {
    /// Returns `true` if the features belong to the left subtree.
    fn go_left(&self, features: &FeatureVector<T>) -> bool;

    /// Human readable condition, printed verbatim inside `if (...)`.
    fn describe(&self) -> String;

    /// Smallest feature vector width this split can evaluate.
    fn min_features(&self) -> usize;
}

/// Sends a vector left when one feature lies strictly below a threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdSplit<T: RealNumber> {
    feature_index: usize,
    threshold: T,
}

impl<T: RealNumber> ThresholdSplit<T> {
    pub fn new(feature_index: usize, threshold: T) -> Self {
        Self {
            feature_index,
            threshold,
        }
    }

    pub fn feature_index(&self) -> usize {
        self.feature_index
    }

    pub fn threshold(&self) -> T {
        self.threshold
    }
}

impl<T: RealNumber> Split<T> for ThresholdSplit<T> {
    /// A vector too short to hold the feature goes right.
    fn go_left(&self, features: &FeatureVector<T>) -> bool {
        features
            .get(self.feature_index)
            .is_some_and(|value| *value < self.threshold)
    }

    fn describe(&self) -> String {
        format!("feature[{}] < {}", self.feature_index, self.threshold)
    }

    fn min_features(&self) -> usize {
        self.feature_index + 1
    }
}
