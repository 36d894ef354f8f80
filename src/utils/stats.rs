//! Elimination statistics and solution checks.

use crate::core::traits::Scalar;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// What one elimination pass observed.
#[derive(Clone, Debug, PartialEq)]
pub struct EliminationStats<T> {
    /// Order of the system.
    pub size: usize,
    /// Number of pivot steps that swapped two rows.
    pub row_swaps: usize,
    /// Smallest absolute pivot accepted.
    pub min_pivot: T,
}

impl<T: Scalar> EliminationStats<T> {
    pub(crate) fn new(size: usize) -> Self {
        EliminationStats { size, row_swaps: 0, min_pivot: T::infinity() }
    }

    pub(crate) fn record_pivot(&mut self, pivot: T, swapped: bool) {
        if swapped {
            self.row_swaps += 1;
        }
        self.min_pivot = self.min_pivot.min(pivot.abs());
    }
}

/// Infinity norm of the residual `A·x - b`.
pub fn residual_norm<T: Scalar>(a: &Matrix<T>, x: &Vector<T>, b: &Vector<T>) -> Result<T> {
    Ok(a.multiply_vector(x)?.subtract(b)?.norm())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_of_exact_solution_is_zero() {
        let a = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 4.0]]).unwrap();
        let x = Vector::from_items(2, &[1.0, 0.5]).unwrap();
        let b = Vector::from_items(2, &[2.0, 2.0]).unwrap();
        assert_eq!(residual_norm(&a, &x, &b).unwrap(), 0.0);
        let short = Vector::from_items(1, &[1.0]).unwrap();
        assert!(residual_norm(&a, &short, &b).is_err());
    }

    #[test]
    fn stats_track_smallest_pivot() {
        let mut s = EliminationStats::<f64>::new(2);
        s.record_pivot(-3.0, true);
        s.record_pivot(0.5, false);
        assert_eq!(s.row_swaps, 1);
        assert_eq!(s.min_pivot, 0.5);
    }
}
