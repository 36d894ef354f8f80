//! Matrix module: dense row-major matrix type.

pub mod dense;
pub use dense::Matrix;
