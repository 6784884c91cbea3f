use crate::error::{ClassifierError, Result};

/// Construction and input checks for a [`TextClassifier`](super::classifier::TextClassifier).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeParams {
    max_depth: Option<usize>,
    num_features: Option<usize>,
}

impl TreeParams {
    pub fn new() -> Self {
        Self {
            max_depth: None,
            num_features: None,
        }
    }

    /// Caps the depth of the built tree. `None` lets the splitter decide alone.
    pub fn set_max_depth(&mut self, max_depth: Option<usize>) {
        self.max_depth = max_depth;
    }

    /// Pins the width every vectorized document must have.
    pub fn set_num_features(&mut self, num_features: Option<usize>) -> Result<()> {
        if num_features.is_some_and(|width| width < 1) {
            return Err(ClassifierError::InvalidArgument(
                "The number of features must be greater than 0.".into(),
            ));
        }
        self.num_features = num_features;
        Ok(())
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn num_features(&self) -> Option<usize> {
        self.num_features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = TreeParams::default();
        assert_eq!(params, TreeParams::new());
        assert_eq!(params.max_depth(), None);
        assert_eq!(params.num_features(), None);
    }

    #[test]
    fn test_set_num_features() {
        let mut params = TreeParams::new();
        assert!(params.set_num_features(Some(0)).is_err());
        assert_eq!(params.num_features(), None);
        assert!(params.set_num_features(Some(3)).is_ok());
        assert_eq!(params.num_features(), Some(3));
    }

    #[test]
    fn test_set_max_depth() {
        let mut params = TreeParams::new();
        params.set_max_depth(Some(0));
        assert_eq!(params.max_depth(), Some(0));
    }
}
