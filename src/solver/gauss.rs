//! Gaussian elimination with partial pivoting.
//!
//! The solver copies `A` and `b` into an `n x (n+1)` augmented matrix, reduces
//! it to upper-triangular form and back-substitutes. At each pivot step the row
//! with the largest absolute entry in the pivot column is swapped into place;
//! a pivot whose magnitude falls below `SolverOptions::pivot_tol` aborts the
//! solve with [`LinAlgError::Singular`].
//!
//! Shape errors are reported before any work is done and the caller's inputs
//! are never modified.
//!
//! # Parallelism
//! With the `rayon` feature, the rows below a pivot are reduced in parallel
//! once there are at least `parallel_min_rows` of them. Pivot search and the
//! row swap always run sequentially since every step depends on the fully
//! reduced state of the previous one.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.4

use crate::config::SolverOptions;
use crate::core::traits::{Scalar, Shape};
use crate::error::{LinAlgError, Result};
use crate::matrix::Matrix;
use crate::solver::LinearSolver;
use crate::utils::stats::EliminationStats;
use crate::vector::Vector;

/// Direct solver for square systems.
///
/// Keeps the statistics of the most recent successful solve.
pub struct GaussSolver<T: Scalar = f64> {
    options: SolverOptions,
    last_stats: Option<EliminationStats<T>>,
}

impl<T: Scalar> GaussSolver<T> {
    /// Create a solver with default options.
    pub fn new() -> Self {
        Self::with_options(SolverOptions::default())
    }

    pub fn with_options(options: SolverOptions) -> Self {
        GaussSolver { options, last_stats: None }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Statistics of the last successful [`LinearSolver::solve`] call.
    pub fn last_stats(&self) -> Option<&EliminationStats<T>> {
        self.last_stats.as_ref()
    }

    /// Solve `A·x = b`, also returning what elimination observed.
    ///
    /// # Errors
    /// * `NotSquare` if `A` is not square
    /// * `DimensionMismatch` if `b.len() != A.rows()`
    /// * `Singular` if a pivot falls below the degeneracy threshold
    pub fn solve_with_stats(
        &self,
        a: &Matrix<T>,
        b: &Vector<T>,
    ) -> Result<(Vector<T>, EliminationStats<T>)> {
        if !a.is_square() {
            return Err(LinAlgError::NotSquare { rows: a.rows(), cols: a.cols() });
        }
        let n = a.rows();
        if b.len() != n {
            return Err(LinAlgError::mismatch("gauss solve", a.shape(), b.shape()));
        }
        log::debug!("gauss: solving {n}x{n} system");

        let mut aug = augment(a, b)?;
        let tol = T::lit(self.options.pivot_tol);
        let mut stats = EliminationStats::new(n);

        for i in 0..n {
            let p = pivot_row(&aug, i);
            let swapped = p != i;
            if swapped {
                aug.swap_rows(i, p);
            }
            let pivot = aug[(i, i)];
            // NaN pivots count as singular too
            if !(pivot.abs() >= tol) {
                log::warn!("gauss: pivot {pivot:e} below {tol:e} at row {}", i + 1);
                return Err(LinAlgError::Singular {
                    row: i,
                    pivot: pivot.to_f64().unwrap_or(f64::NAN),
                });
            }
            stats.record_pivot(pivot, swapped);
            log::trace!("gauss: step {i} pivot {pivot} from row {p}");
            eliminate_below(aug.rows_mut(), i, self.options.parallel_min_rows);
        }

        let x = back_substitute(&aug);
        log::debug!(
            "gauss: done, {} row swaps, min |pivot| {:e}",
            stats.row_swaps,
            stats.min_pivot
        );
        Ok((x, stats))
    }
}

impl<T: Scalar> Default for GaussSolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> LinearSolver<Matrix<T>, Vector<T>> for GaussSolver<T> {
    type Error = LinAlgError;
    type Scalar = T;

    fn solve(&mut self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>> {
        let (x, stats) = self.solve_with_stats(a, b)?;
        self.last_stats = Some(stats);
        Ok(x)
    }
}

/// Solve `A·x = b` with default options.
pub fn solve<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>> {
    GaussSolver::new().solve_with_stats(a, b).map(|(x, _)| x)
}

/// `[A | b]` as a fresh `n x (n+1)` matrix.
fn augment<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Matrix<T>> {
    let n = a.rows();
    let mut aug = Matrix::zeros(n, n + 1)?;
    for ((dst, src), &bi) in aug.rows_mut().iter_mut().zip(a.iter_rows()).zip(b.iter()) {
        let dst = dst.as_mut_slice();
        dst[..n].copy_from_slice(src.as_slice());
        dst[n] = bi;
    }
    Ok(aug)
}

/// Row in `i..n` with the largest absolute entry in column `i`, first on ties.
fn pivot_row<T: Scalar>(aug: &Matrix<T>, i: usize) -> usize {
    let mut best = i;
    let mut best_abs = aug[(i, i)].abs();
    for r in (i + 1)..aug.rows() {
        let v = aug[(r, i)].abs();
        if v > best_abs {
            best = r;
            best_abs = v;
        }
    }
    best
}

fn eliminate_below<T: Scalar>(rows: &mut [Vector<T>], i: usize, parallel_min_rows: usize) {
    let (head, below) = rows.split_at_mut(i + 1);
    let pivot = head[i].as_slice();

    #[cfg(feature = "rayon")]
    {
        if below.len() >= parallel_min_rows.max(1) {
            use rayon::prelude::*;
            below
                .par_iter_mut()
                .for_each(|row| eliminate_row(pivot, row.as_mut_slice(), i));
            return;
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel_min_rows;

    for row in below.iter_mut() {
        eliminate_row(pivot, row.as_mut_slice(), i);
    }
}

// row[k] -= (row[i] / pivot[i]) * pivot[k] for k >= i
fn eliminate_row<T: Scalar>(pivot: &[T], row: &mut [T], i: usize) {
    let factor = row[i] / pivot[i];
    for (r, &p) in row[i..].iter_mut().zip(&pivot[i..]) {
        *r = *r - factor * p;
    }
}

fn back_substitute<T: Scalar>(aug: &Matrix<T>) -> Vector<T> {
    let n = aug.rows();
    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        let row = aug[i].as_slice();
        let sum = ((i + 1)..n).fold(T::zero(), |acc, j| acc + row[j] * x[j]);
        x[i] = (row[n] - sum) / row[i];
    }
    Vector::from_raw(x)
}
