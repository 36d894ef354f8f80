//! Diagnostics shared by solvers and experiments.

pub mod stats;
pub use stats::{EliminationStats, residual_norm};
