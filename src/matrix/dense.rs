//! Row-major dense matrix built from owned row [`Vector`]s.
//!
//! Every row has exactly `cols` elements and a matrix always has at least one
//! row and one column. Row assignment takes the new row by value, so the
//! matrix is the sole owner of its storage and no outside handle can alias it.

use crate::core::traits::{MatVec, Scalar, Shape};
use crate::error::{LinAlgError, Result};
use crate::vector::{Vector, uniform_range};
use faer::Mat;
use rand::Rng;
use rand::distributions::uniform::SampleUniform;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// Dense `rows x cols` matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Scalar = f64> {
    rows: usize,
    cols: usize,
    data: Vec<Vector<T>>,
}

impl<T: Scalar> Matrix<T> {
    /// Zero matrix with the given dimensions.
    ///
    /// # Errors
    /// `InvalidArgument` if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LinAlgError::InvalidArgument(format!(
                "matrix dimensions must be positive, got {rows}x{cols}"
            )));
        }
        Ok(Matrix { rows, cols, data: (0..rows).map(|_| Vector::zeros(cols)).collect() })
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i][i] = T::one();
        }
        Ok(m)
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut m = Self::zeros(rows.len(), cols)?;
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(LinAlgError::mismatch("matrix rows", (1, cols), (1, row.len())));
            }
            m.data[i] = Vector::try_from(row)?;
        }
        Ok(m)
    }

    /// Matrix whose elements are drawn uniformly from `[start, end]`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        start: T,
        end: T,
        rng: &mut R,
    ) -> Result<Self>
    where
        T: SampleUniform,
    {
        let dist = uniform_range(start, end)?;
        let mut m = Self::zeros(rows, cols)?;
        for row in m.data.iter_mut() {
            row.as_mut_slice().iter_mut().for_each(|a| *a = rng.sample(&dist));
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn iter_rows(&self) -> std::slice::Iter<'_, Vector<T>> {
        self.data.iter()
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vector<T>] {
        &mut self.data
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(LinAlgError::IndexOutOfRange { axis: "row", index: row, len: self.rows });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(LinAlgError::IndexOutOfRange { axis: "column", index: col, len: self.cols });
        }
        Ok(())
    }

    fn check_same_shape(&self, op: &'static str, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinAlgError::mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&Vector<T>> {
        self.check_row(row)?;
        Ok(&self.data[row])
    }

    /// Replace a whole row. The vector is moved into the matrix.
    ///
    /// # Errors
    /// `IndexOutOfRange` for a bad row, `InvalidArgument` if the vector length
    /// differs from the column count.
    pub fn set_row(&mut self, row: usize, vector: Vector<T>) -> Result<()> {
        self.check_row(row)?;
        if vector.len() != self.cols {
            return Err(LinAlgError::InvalidArgument(format!(
                "row vector has length {}, expected {}",
                vector.len(),
                self.cols
            )));
        }
        self.data[row] = vector;
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        self.data[row].set(col, value)
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape("matrix add", other)?;
        self.zip_rows(other, Vector::add)
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_shape("matrix subtract", other)?;
        self.zip_rows(other, Vector::subtract)
    }

    pub fn add_assign_checked(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape("matrix add", other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            a.add_assign_checked(b)?;
        }
        Ok(())
    }

    pub fn sub_assign_checked(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape("matrix subtract", other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            a.sub_assign_checked(b)?;
        }
        Ok(())
    }

    /// Matrix product `self * other`, of shape `self.rows x other.cols`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinAlgError::mismatch("matrix multiply", self.shape(), other.shape()));
        }
        let mut out = Self::zeros(self.rows, other.cols)?;
        for (lhs, dst) in self.data.iter().zip(out.data.iter_mut()) {
            let dst = dst.as_mut_slice();
            for (k, &a) in lhs.iter().enumerate() {
                for (d, &b) in dst.iter_mut().zip(other.data[k].iter()) {
                    *d = *d + a * b;
                }
            }
        }
        Ok(out)
    }

    /// Matrix-vector product, a vector of length `self.rows`.
    pub fn multiply_vector(&self, x: &Vector<T>) -> Result<Vector<T>> {
        if self.cols != x.len() {
            return Err(LinAlgError::mismatch("matrix-vector multiply", self.shape(), x.shape()));
        }
        Ok(Vector::from_raw(
            self.data
                .iter()
                .map(|row| row.iter().zip(x.iter()).fold(T::zero(), |acc, (&a, &b)| acc + a * b))
                .collect(),
        ))
    }

    pub fn scale(&self, scalar: T) -> Self {
        self.map_rows(|r| r.scale(scalar))
    }

    pub fn divide(&self, scalar: T) -> Result<Self> {
        if scalar.is_zero() {
            return Err(LinAlgError::DivisionByZero { index: None });
        }
        Ok(self.map_rows(|r| Vector::from_raw(r.iter().map(|&a| a / scalar).collect())))
    }

    /// Column-wise division: element `(i, j)` is divided by `divisor[j]`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `divisor.len() != cols`, `DivisionByZero` naming
    /// the first zero entry of `divisor`.
    pub fn divide_by_vector(&self, divisor: &Vector<T>) -> Result<Self> {
        if self.cols != divisor.len() {
            return Err(LinAlgError::mismatch("matrix-vector divide", self.shape(), divisor.shape()));
        }
        if let Some(j) = divisor.iter().position(|d| d.is_zero()) {
            return Err(LinAlgError::DivisionByZero { index: Some(j) });
        }
        Ok(self.map_rows(|r| {
            Vector::from_raw(r.iter().zip(divisor.iter()).map(|(&a, &d)| a / d).collect())
        }))
    }

    pub fn negate(&self) -> Self {
        self.map_rows(Vector::negate)
    }

    pub fn sum_elements(&self) -> T {
        self.data.iter().flat_map(Vector::iter).fold(T::zero(), |acc, &a| acc + a)
    }

    /// Order two matrices of equal shape by the sum of their elements.
    pub fn compare_by_sum(&self, other: &Self) -> Result<Ordering> {
        self.check_same_shape("matrix compare", other)?;
        self.sum_elements()
            .partial_cmp(&other.sum_elements())
            .ok_or_else(|| LinAlgError::InvalidArgument("element sum is NaN".into()))
    }

    /// Copy into a faer matrix.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.rows, self.cols, |i, j| self.data[i][j])
    }

    /// Copy out of a faer matrix.
    pub fn from_faer(m: &Mat<T>) -> Result<Self> {
        let rows = (0..m.nrows())
            .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
            .collect();
        Self::from_rows(rows)
    }

    fn map_rows(&self, f: impl Fn(&Vector<T>) -> Vector<T>) -> Self {
        Matrix { rows: self.rows, cols: self.cols, data: self.data.iter().map(f).collect() }
    }

    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>>,
    ) -> Result<Self> {
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }
}

impl<T: Scalar> Shape for Matrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl<T: Scalar> MatVec<Vector<T>> for Matrix<T> {
    fn matvec(&self, x: &Vector<T>) -> Result<Vector<T>> {
        self.multiply_vector(x)
    }
}

impl<T: Scalar> Index<usize> for Matrix<T> {
    type Output = Vector<T>;
    fn index(&self, row: usize) -> &Vector<T> {
        &self.data[row]
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i][j]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i][j]
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, a) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{a}")?;
            }
        }
        Ok(())
    }
}

fn or_panic<V>(r: Result<V>) -> V {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

/// # Panics
/// Panics on a shape mismatch; use [`Matrix::add`] to get an error instead.
impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Self) -> Matrix<T> {
        or_panic(Matrix::add(self, rhs))
    }
}

/// # Panics
/// Panics on a shape mismatch; use [`Matrix::subtract`] to get an error instead.
impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Self) -> Matrix<T> {
        or_panic(self.subtract(rhs))
    }
}

/// # Panics
/// Panics if `self.cols != rhs.rows`.
impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Self) -> Matrix<T> {
        or_panic(self.multiply(rhs))
    }
}

/// # Panics
/// Panics if `self.cols != rhs.len()`.
impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        or_panic(self.multiply_vector(rhs))
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}
