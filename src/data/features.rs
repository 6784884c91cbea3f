//! Numeric feature types shared by the tree and its collaborators.
use crate::error::{ClassifierError, Result};
use nalgebra::{DMatrix, DVector};
use num_traits::{Float, FromPrimitive, ToPrimitive};
use std::fmt::{Debug, Display};

/// Scalar type a vectorizer can produce and a split can compare.
pub trait RealNumber:
    Debug + Display + Clone + Copy + PartialOrd + Float + FromPrimitive + ToPrimitive + 'static
{
}

impl<T> RealNumber for T where
    T: Debug + Display + Clone + Copy + PartialOrd + Float + FromPrimitive + ToPrimitive + 'static
{
}

/// One document's features.
pub type FeatureVector<T> = DVector<T>;

/// Row-per-document feature matrix, as returned by a vectorizer.
pub type FeatureMatrix<T> = DMatrix<T>;

/// Takes the first row of a vectorized document as a column vector.
///
/// # Errors
///
/// Returns `InvalidArgument` if the matrix has no rows or no columns.
pub fn first_row<T: RealNumber>(matrix: &FeatureMatrix<T>) -> Result<FeatureVector<T>> {
    if matrix.nrows() == 0 || matrix.ncols() == 0 {
        return Err(ClassifierError::InvalidArgument(format!(
            "vectorizer produced an empty {}x{} matrix",
            matrix.nrows(),
            matrix.ncols()
        )));
    }
    Ok(matrix.row(0).transpose())
}
