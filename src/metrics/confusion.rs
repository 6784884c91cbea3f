use crate::error::{ClassifierError, Result};
use nalgebra::{DMatrix, DVector};

/// Rows are true labels, columns are predictions, index 0 is `false` and 1 is `true`.
pub type ConfusionMatrix = DMatrix<usize>;

pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the vectors are empty or of different sizes.
    fn confusion_matrix(
        &self,
        y_true: &DVector<bool>,
        y_pred: &DVector<bool>,
    ) -> Result<ConfusionMatrix> {
        if y_true.len() != y_pred.len() {
            return Err(ClassifierError::InvalidArgument(
                "Predictions and labels are of different sizes.".into(),
            ));
        }
        if y_true.is_empty() {
            return Err(ClassifierError::InvalidArgument(
                "Cannot score an empty set of predictions.".into(),
            ));
        }

        let mut matrix = DMatrix::zeros(2, 2);
        for (&y_t, &y_p) in y_true.iter().zip(y_pred.iter()) {
            matrix[(usize::from(y_t), usize::from(y_p))] += 1;
        }

        Ok(matrix)
    }

    /// Share of predictions that match the true labels.
    fn accuracy(&self, y_true: &DVector<bool>, y_pred: &DVector<bool>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let correct = matrix.diagonal().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }

    /// Precision of the `true` class, 0.0 when nothing was predicted `true`.
    fn precision(&self, y_true: &DVector<bool>, y_pred: &DVector<bool>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let tp = matrix[(1, 1)];
        let fp = matrix[(0, 1)];

        Ok(ratio(tp, tp + fp))
    }

    /// Recall of the `true` class, 0.0 when no label is `true`.
    fn recall(&self, y_true: &DVector<bool>, y_pred: &DVector<bool>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let tp = matrix[(1, 1)];
        let fn_ = matrix[(1, 0)];

        Ok(ratio(tp, tp + fn_))
    }

    fn f1_score(&self, y_true: &DVector<bool>, y_pred: &DVector<bool>) -> Result<f64> {
        let precision = self.precision(y_true, y_pred)?;
        let recall = self.recall(y_true, y_pred)?;

        if precision + recall == 0.0 {
            return Ok(0.0);
        }
        Ok(2.0 * precision * recall / (precision + recall))
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct Scorer;

    impl ClassificationMetrics for Scorer {}

    fn labels() -> (DVector<bool>, DVector<bool>) {
        let y_true = DVector::from_vec(vec![true, true, true, false, false, false]);
        let y_pred = DVector::from_vec(vec![true, true, false, true, false, false]);
        (y_true, y_pred)
    }

    #[test]
    fn test_confusion_matrix() {
        let (y_true, y_pred) = labels();
        let matrix = Scorer.confusion_matrix(&y_true, &y_pred).unwrap();
        assert_eq!(matrix, DMatrix::from_row_slice(2, 2, &[2, 1, 1, 2]));
    }

    #[test]
    fn test_scores() {
        let (y_true, y_pred) = labels();
        assert_relative_eq!(Scorer.accuracy(&y_true, &y_pred).unwrap(), 4.0 / 6.0, epsilon = 1e-9);
        assert_relative_eq!(Scorer.precision(&y_true, &y_pred).unwrap(), 2.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(Scorer.recall(&y_true, &y_pred).unwrap(), 2.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(Scorer.f1_score(&y_true, &y_pred).unwrap(), 2.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_positive_predictions() {
        let y_true = DVector::from_vec(vec![true, false]);
        let y_pred = DVector::from_vec(vec![false, false]);
        assert_eq!(Scorer.precision(&y_true, &y_pred).unwrap(), 0.0);
        assert_eq!(Scorer.recall(&y_true, &y_pred).unwrap(), 0.0);
        assert_eq!(Scorer.f1_score(&y_true, &y_pred).unwrap(), 0.0);
        assert_relative_eq!(Scorer.accuracy(&y_true, &y_pred).unwrap(), 0.5);
    }

    #[test]
    fn test_mismatched_sizes() {
        let y_true = DVector::from_vec(vec![true, false]);
        let y_pred = DVector::from_vec(vec![true]);
        assert!(matches!(
            Scorer.accuracy(&y_true, &y_pred),
            Err(ClassifierError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_labels() {
        let empty: DVector<bool> = DVector::from_vec(vec![]);
        assert!(Scorer.confusion_matrix(&empty, &empty).is_err());
    }
}
