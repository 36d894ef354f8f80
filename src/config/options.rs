//! Options for the Gaussian-elimination solver.
//!
//! This module provides the `SolverOptions` struct, used to tune the pivot
//! threshold below which a system is treated as singular and the number of
//! rows below a pivot at which elimination switches to the parallel path.

use crate::error::{LinAlgError, Result};

/// Absolute pivot magnitude below which elimination reports a singular system.
pub const DEFAULT_PIVOT_TOL: f64 = 1e-12;

/// Rows below the pivot needed before the `rayon` path is taken.
pub const DEFAULT_PARALLEL_MIN_ROWS: usize = 64;

/// Solver parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// Absolute degeneracy threshold. Not scaled by the matrix entries, so
    /// very large or very small systems may need a different value.
    pub pivot_tol: f64,

    /// Minimum number of rows to eliminate in parallel for one pivot
    pub parallel_min_rows: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            pivot_tol: DEFAULT_PIVOT_TOL,
            parallel_min_rows: DEFAULT_PARALLEL_MIN_ROWS,
        }
    }
}

impl SolverOptions {
    pub fn with_pivot_tol(mut self, tol: f64) -> Result<Self> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(LinAlgError::InvalidArgument(format!(
                "pivot tolerance must be finite and non-negative, got {tol}"
            )));
        }
        self.pivot_tol = tol;
        Ok(self)
    }

    pub fn with_parallel_min_rows(mut self, rows: usize) -> Self {
        self.parallel_min_rows = rows;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_builders() {
        let o = SolverOptions::default();
        assert_eq!(o.pivot_tol, 1e-12);
        let o = o.with_pivot_tol(1e-8).unwrap().with_parallel_min_rows(4);
        assert_eq!(o.pivot_tol, 1e-8);
        assert_eq!(o.parallel_min_rows, 4);
        assert!(SolverOptions::default().with_pivot_tol(-1.0).is_err());
        assert!(SolverOptions::default().with_pivot_tol(f64::NAN).is_err());
    }
}
