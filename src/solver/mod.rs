//! Direct solver interfaces.

/// Common interface for direct solvers.
pub trait LinearSolver<M, V> {
    type Error;
    type Scalar: Copy + PartialOrd;
    /// Solve A·x = b, returning a freshly allocated `x`.
    fn solve(&mut self, a: &M, b: &V) -> Result<V, Self::Error>;
}

pub mod gauss;
pub use gauss::{GaussSolver, solve};
