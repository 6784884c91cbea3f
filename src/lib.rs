//! # Rusty-text-tree
//!
//! `rusty-text-tree` classifies text with a binary decision tree. Internal nodes hold a
//! split predicate over a numeric feature vector, leaves hold a boolean label.
//!
//! The crate does not learn anything on its own. The tree shape comes from a
//! [`Splitter`](trees::splitter::Splitter) and features come from a
//! [`Vectorizer`](vectorizer::Vectorizer), both supplied by the caller.
//!
//! ## Getting Started
//!
//! To use `rusty-text-tree`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-text-tree = "*"
//! ```
//!
//! ## Example Usage
//!
//! A one-split tree that flags any text mentioning "spam":
//!
//! ```rust
//! use nalgebra::DMatrix;
//! use rusty_text_tree::trees::classifier::TextClassifier;
//! use rusty_text_tree::trees::split::ThresholdSplit;
//! use rusty_text_tree::trees::splitter::{SplitOutcome, Splitter};
//!
//! enum Stump {
//!     Root,
//!     Leaf(bool),
//! }
//!
//! impl Splitter<f64> for Stump {
//!     fn label(&self) -> bool {
//!         matches!(self, Stump::Leaf(true))
//!     }
//!
//!     fn split(&self) -> SplitOutcome<f64, Self> {
//!         match self {
//!             Stump::Root => SplitOutcome::Partition {
//!                 left: Stump::Leaf(false),
//!                 right: Stump::Leaf(true),
//!                 split: Box::new(ThresholdSplit::new(0, 0.5)),
//!             },
//!             Stump::Leaf(_) => SplitOutcome::Terminal,
//!         }
//!     }
//! }
//!
//! let vectorizer = |text: &str| {
//!     let hits = text.to_lowercase().matches("spam").count() as f64;
//!     DMatrix::from_row_slice(1, 1, &[hits])
//! };
//!
//! let mut classifier = TextClassifier::new(vectorizer, Stump::Root);
//!
//! assert!(classifier.classify("Buy SPAM now").unwrap());
//! assert!(!classifier.classify("hello").unwrap());
//! assert_eq!(
//!     classifier.render(),
//!     vec!["if (feature[0] < 0.5)", " return false;", "else", " return true;"]
//! );
//!
//! classifier.prune(0);
//! assert!(!classifier.classify("Buy SPAM now").unwrap());
//! ```

/// Feature vectors and the numeric types they hold
pub mod data;
/// Classifier errors
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;
/// Text to feature conversion
pub mod vectorizer;
