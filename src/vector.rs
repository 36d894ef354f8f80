//! Dense vector of real scalars.
//!
//! `Vector` is a fixed-size, owned sequence of elements with checked elementwise
//! arithmetic and the infinity norm. Every fallible operation returns a
//! [`LinAlgError`] describing the offending index or shapes; the non-mutating
//! operations always return a fresh vector and leave their operands untouched.
//!
//! Operator sugar (`&a + &b`, `&a * s`, `-&a`, ...) is provided on top of the
//! named methods. The operators panic where the named method would return an
//! error, mirroring how `std` slices panic on out-of-bounds indexing.

use crate::core::traits::{Scalar, Shape};
use crate::error::{LinAlgError, Result};
use rand::Rng;
use rand::distributions::uniform::{SampleUniform, Uniform};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

/// Fixed-size dense vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T: Scalar = f64> {
    data: Vec<T>,
}

fn check_value<T: Scalar>(value: T) -> Result<T> {
    if value.is_nan() {
        Err(LinAlgError::InvalidArgument("value is not a number".into()))
    } else {
        Ok(value)
    }
}

impl<T: Scalar> Vector<T> {
    /// Zero vector of the given size.
    pub fn zeros(size: usize) -> Self {
        Vector { data: vec![T::zero(); size] }
    }

    /// Vector of `size` elements, the first `items.len()` taken from `items` and
    /// the rest zero-filled.
    ///
    /// # Errors
    /// `InvalidArgument` if `items` is longer than `size` or contains NaN.
    pub fn from_items(size: usize, items: &[T]) -> Result<Self> {
        if items.len() > size {
            return Err(LinAlgError::InvalidArgument(format!(
                "{} items exceed vector size {}",
                items.len(),
                size
            )));
        }
        let mut data = Vec::with_capacity(size);
        for &item in items {
            data.push(check_value(item)?);
        }
        data.resize(size, T::zero());
        Ok(Vector { data })
    }

    /// `[value, 0, 0, ...]` of the given size.
    pub fn with_first(size: usize, value: T) -> Result<Self> {
        if size == 0 {
            return Err(LinAlgError::InvalidArgument(
                "cannot place an initial value in an empty vector".into(),
            ));
        }
        Self::from_items(size, &[value])
    }

    /// Vector whose elements are drawn uniformly from `[start, end]`.
    ///
    /// The generator is supplied by the caller so results are reproducible
    /// with a seeded RNG.
    pub fn random<R: Rng + ?Sized>(size: usize, start: T, end: T, rng: &mut R) -> Result<Self>
    where
        T: SampleUniform,
    {
        let dist = uniform_range(start, end)?;
        Ok(Vector { data: (0..size).map(|_| rng.sample(&dist)).collect() })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub(crate) fn from_raw(data: Vec<T>) -> Self {
        Vector { data }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.data.len() {
            return Err(LinAlgError::IndexOutOfRange { axis: "vector", index, len: self.data.len() });
        }
        Ok(())
    }

    fn check_same_len(&self, op: &'static str, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinAlgError::mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.data[index])
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.data[index] = check_value(value)?;
        Ok(())
    }

    /// Elementwise `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_len("vector add", other)?;
        Ok(self.zip_map(other, |a, b| a + b))
    }

    /// Elementwise `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_len("vector subtract", other)?;
        Ok(self.zip_map(other, |a, b| a - b))
    }

    pub fn scale(&self, scalar: T) -> Self {
        self.map(|a| a * scalar)
    }

    /// Divide every element by `scalar`.
    ///
    /// # Errors
    /// `DivisionByZero` if `scalar == 0`.
    pub fn divide(&self, scalar: T) -> Result<Self> {
        if scalar.is_zero() {
            return Err(LinAlgError::DivisionByZero { index: None });
        }
        Ok(self.map(|a| a / scalar))
    }

    pub fn negate(&self) -> Self {
        self.map(|a| -a)
    }

    /// In-place `self += other`. Nothing is written on a length mismatch.
    pub fn add_assign_checked(&mut self, other: &Self) -> Result<()> {
        self.check_same_len("vector add", other)?;
        self.data.iter_mut().zip(&other.data).for_each(|(a, &b)| *a = *a + b);
        Ok(())
    }

    /// In-place `self -= other`. Nothing is written on a length mismatch.
    pub fn sub_assign_checked(&mut self, other: &Self) -> Result<()> {
        self.check_same_len("vector subtract", other)?;
        self.data.iter_mut().zip(&other.data).for_each(|(a, &b)| *a = *a - b);
        Ok(())
    }

    pub fn scale_in_place(&mut self, scalar: T) {
        self.data.iter_mut().for_each(|a| *a = *a * scalar);
    }

    pub fn divide_in_place(&mut self, scalar: T) -> Result<()> {
        if scalar.is_zero() {
            return Err(LinAlgError::DivisionByZero { index: None });
        }
        self.data.iter_mut().for_each(|a| *a = *a / scalar);
        Ok(())
    }

    /// Infinity norm: the largest absolute element, `0` for an empty vector.
    pub fn norm(&self) -> T {
        self.data.iter().fold(T::zero(), |m, &a| m.max(a.abs()))
    }

    /// Order two vectors of equal length by their infinity norms.
    ///
    /// # Errors
    /// `DimensionMismatch` if the lengths differ, `InvalidArgument` if a norm
    /// is NaN.
    pub fn compare_by_norm(&self, other: &Self) -> Result<Ordering> {
        self.check_same_len("vector compare", other)?;
        self.norm()
            .partial_cmp(&other.norm())
            .ok_or_else(|| LinAlgError::InvalidArgument("norm is NaN".into()))
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Vector { data: self.data.iter().map(|&a| f(a)).collect() }
    }

    fn zip_map(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        Vector { data: self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect() }
    }
}

pub(crate) fn uniform_range<T: Scalar + SampleUniform>(start: T, end: T) -> Result<Uniform<T>> {
    if !start.is_finite() || !end.is_finite() || start > end || !(end - start).is_finite() {
        return Err(LinAlgError::InvalidArgument(format!(
            "invalid sampling range [{start}, {end}]"
        )));
    }
    Ok(Uniform::new_inclusive(start, end))
}

impl<T: Scalar> TryFrom<Vec<T>> for Vector<T> {
    type Error = LinAlgError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        if data.iter().any(|a| a.is_nan()) {
            return Err(LinAlgError::InvalidArgument("value is not a number".into()));
        }
        Ok(Vector { data })
    }
}

impl<T: Scalar> Shape for Vector<T> {
    fn nrows(&self) -> usize {
        self.data.len()
    }
    fn ncols(&self) -> usize {
        1
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, a) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a}")?;
        }
        write!(f, "]")
    }
}

/// # Panics
/// Panics if the lengths differ; use [`Vector::add`] to get an error instead.
impl<T: Scalar> Add for &Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: Self) -> Vector<T> {
        match Vector::add(self, rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

/// # Panics
/// Panics if the lengths differ; use [`Vector::subtract`] to get an error instead.
impl<T: Scalar> Sub for &Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: Self) -> Vector<T> {
        match self.subtract(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> AddAssign<&Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.add_assign_checked(rhs) {
            panic!("{e}");
        }
    }
}

impl<T: Scalar> SubAssign<&Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.sub_assign_checked(rhs) {
            panic!("{e}");
        }
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: T) -> Vector<T> {
        self.scale(rhs)
    }
}

/// # Panics
/// Panics on a zero divisor; use [`Vector::divide`] to get an error instead.
impl<T: Scalar> Div<T> for &Vector<T> {
    type Output = Vector<T>;
    fn div(self, rhs: T) -> Vector<T> {
        match self.divide(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;
    fn neg(self) -> Vector<T> {
        self.negate()
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;
    fn neg(mut self) -> Vector<T> {
        self.data.iter_mut().for_each(|a| *a = -*a);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn v(items: &[f64]) -> Vector {
        Vector::from_items(items.len(), items).unwrap()
    }

    #[test]
    fn short_initializer_is_zero_padded() {
        let a = Vector::from_items(3, &[1.0, 2.0]).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 0.0]);
        let b = Vector::<f64>::with_first(3, 7.0).unwrap();
        assert_eq!(b.as_slice(), &[7.0, 0.0, 0.0]);
    }

    #[test]
    fn bad_initializers_are_rejected() {
        assert!(matches!(
            Vector::from_items(1, &[1.0, 2.0]),
            Err(LinAlgError::InvalidArgument(_))
        ));
        assert!(matches!(
            Vector::from_items(2, &[f64::NAN]),
            Err(LinAlgError::InvalidArgument(_))
        ));
        assert!(Vector::<f64>::with_first(0, 1.0).is_err());
        assert!(Vector::try_from(vec![1.0, f64::NAN]).is_err());
    }

    #[test]
    fn indexed_access_is_bounds_checked() {
        let mut a = v(&[1.0, 2.0]);
        assert_eq!(a.get(1).unwrap(), 2.0);
        assert!(matches!(
            a.get(2),
            Err(LinAlgError::IndexOutOfRange { index: 2, len: 2, .. })
        ));
        a.set(0, 5.0).unwrap();
        assert_eq!(a[0], 5.0);
        assert!(a.set(5, 1.0).is_err());
        assert!(matches!(a.set(0, f64::NAN), Err(LinAlgError::InvalidArgument(_))));
        assert_eq!(a[0], 5.0);
    }

    #[test]
    fn arithmetic_leaves_operands_unchanged() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, 5.0, 6.0]);
        assert_eq!(a.add(&b).unwrap(), v(&[5.0, 7.0, 9.0]));
        assert_eq!(b.subtract(&a).unwrap(), v(&[3.0, 3.0, 3.0]));
        assert_eq!(a.scale(2.0), v(&[2.0, 4.0, 6.0]));
        assert_eq!(a.divide(2.0).unwrap(), v(&[0.5, 1.0, 1.5]));
        assert_eq!(a.negate(), v(&[-1.0, -2.0, -3.0]));
        assert_eq!(a, v(&[1.0, 2.0, 3.0]));
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(-&a, a.negate());
    }

    #[test]
    fn mismatched_lengths_fail() {
        let a = v(&[1.0, 2.0]);
        let b = v(&[1.0, 2.0, 3.0]);
        assert!(matches!(a.add(&b), Err(LinAlgError::DimensionMismatch { .. })));
        assert!(matches!(a.subtract(&b), Err(LinAlgError::DimensionMismatch { .. })));
    }

    #[test]
    fn in_place_ops_validate_before_writing() {
        let mut a = v(&[1.0, 2.0]);
        assert!(a.add_assign_checked(&v(&[1.0])).is_err());
        assert!(a.divide_in_place(0.0).is_err());
        assert_eq!(a, v(&[1.0, 2.0]));
        a.add_assign_checked(&v(&[1.0, 1.0])).unwrap();
        a.sub_assign_checked(&v(&[0.5, 0.5])).unwrap();
        a.scale_in_place(2.0);
        a.divide_in_place(3.0).unwrap();
        assert_eq!(a, v(&[1.0, 5.0 / 3.0]));
        let mut b = v(&[1.0, 2.0]);
        b += &v(&[2.0, 2.0]);
        assert_eq!(b, v(&[3.0, 4.0]));
        b -= &v(&[3.0, 1.0]);
        assert_eq!(b, v(&[0.0, 3.0]));
    }

    #[test]
    fn division_by_zero() {
        assert!(matches!(
            v(&[1.0]).divide(0.0),
            Err(LinAlgError::DivisionByZero { index: None })
        ));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn operator_add_panics_on_mismatch() {
        let _ = &v(&[1.0]) + &v(&[1.0, 2.0]);
    }

    #[test]
    fn infinity_norm() {
        assert_eq!(v(&[1.0, 2.0, 3.0]).norm(), 3.0);
        assert_eq!(v(&[-5.0, 2.0]).norm(), 5.0);
        assert_eq!(Vector::<f64>::zeros(0).norm(), 0.0);
    }

    #[test]
    fn equality_and_ordering() {
        assert_ne!(v(&[1.0, 2.0]), v(&[1.0, 2.0, 0.0]));
        assert_eq!(
            v(&[1.0, -4.0]).compare_by_norm(&v(&[3.0, 3.0])).unwrap(),
            Ordering::Greater
        );
        assert_eq!(
            v(&[1.0, 2.0]).compare_by_norm(&v(&[2.0, 1.0])).unwrap(),
            Ordering::Equal
        );
        assert!(matches!(
            v(&[1.0]).compare_by_norm(&v(&[1.0, 2.0])),
            Err(LinAlgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn random_respects_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Vector::random(50, 1.0, 10.0, &mut rng).unwrap();
        assert_eq!(a.len(), 50);
        assert!(a.iter().all(|&x| (1.0..=10.0).contains(&x)));
        assert!(Vector::random(3, 2.0, 1.0, &mut rng).is_err());
        assert!(Vector::random(3, 0.0, f64::INFINITY, &mut rng).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(v(&[1.0, 2.5]).to_string(), "[1, 2.5]");
    }
}
