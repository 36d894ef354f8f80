//! Core linear-algebra traits for gaussel.

use crate::error::Result;
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display, LowerExp};

/// Real scalar stored in vectors and matrices.
///
/// Blanket-implemented for every float type that also formats and crosses
/// thread boundaries, which in practice means `f32` and `f64`.
pub trait Scalar: Float + FromPrimitive + Debug + Display + LowerExp + Send + Sync + 'static {
    /// Convert an `f64` constant, falling back to zero if unrepresentable.
    fn lit(v: f64) -> Self {
        Self::from_f64(v).unwrap_or_else(Self::zero)
    }
}

impl<T> Scalar for T where T: Float + FromPrimitive + Debug + Display + LowerExp + Send + Sync + 'static {}

/// Dimensions of a dense object.
pub trait Shape {
    /// Number of rows (or length for a vector).
    fn nrows(&self) -> usize;
    /// Number of columns (1 for a vector).
    fn ncols(&self) -> usize;
    /// `(nrows, ncols)` pair, the form used in dimension errors.
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Matrix–vector product: y = A x.
pub trait MatVec<V> {
    /// Compute A · x, failing if `x` does not match the column count.
    fn matvec(&self, x: &V) -> Result<V>;
}
