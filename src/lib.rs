//! gaussel: dense vectors, dense matrices and Gaussian elimination
//!
//! This crate provides owned dense `Vector` and `Matrix` types with checked
//! arithmetic, and a direct solver for square linear systems using Gaussian
//! elimination with partial pivoting. Text persistence, interactive input and
//! an accuracy sweep are provided around the solver.

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod experiment;
pub mod io;
pub mod matrix;
pub mod solver;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use solver::*;
pub use utils::*;
pub use vector::*;
