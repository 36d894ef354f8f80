//! Core traits shared by vectors, matrices and solvers.

pub mod traits;
pub use traits::{MatVec, Scalar, Shape};
