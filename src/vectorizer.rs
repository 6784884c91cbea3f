//! Text vectorizers
use crate::data::features::{FeatureMatrix, RealNumber};

/// Turns raw text into a feature matrix with one row per document.
///
/// The classifier only ever passes a single document and reads the first row back.
/// Tokenization and case folding are up to the implementation.
pub trait Vectorizer<T: RealNumber> {
    fn transform(&self, text: &str) -> FeatureMatrix<T>;
}

impl<T, F> Vectorizer<T> for F
where
    T: RealNumber,
    F: Fn(&str) -> FeatureMatrix<T>,
{
    fn transform(&self, text: &str) -> FeatureMatrix<T> {
        self(text)
    }
}
