//! Plain-text persistence for matrices and vector sets.
//!
//! The format is one row per line, elements separated by whitespace. Matrix
//! files must have the same number of elements on every non-blank line; blank
//! lines are ignored. In a vector file every line is one vector, so a blank
//! line is an empty vector and lines may differ in length.

use crate::core::traits::Scalar;
use crate::error::{LinAlgError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Parse one whitespace-separated line. `line_no` is 1-based, for errors.
pub(crate) fn parse_row<T: Scalar + FromStr>(line: &str, line_no: usize) -> Result<Vec<T>> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<T>().map_err(|_| LinAlgError::Parse { line: line_no, token: tok.to_string() })
        })
        .collect()
}

fn write_row<T: Scalar, W: Write>(w: &mut W, row: &[T]) -> Result<()> {
    for (j, a) in row.iter().enumerate() {
        if j > 0 {
            w.write_all(b" ")?;
        }
        write!(w, "{a}")?;
    }
    w.write_all(b"\n")?;
    Ok(())
}

pub fn write_matrix<T: Scalar, W: Write>(m: &Matrix<T>, w: &mut W) -> Result<()> {
    for row in m.iter_rows() {
        write_row(w, row.as_slice())?;
    }
    w.flush()?;
    Ok(())
}

/// Read a matrix, one row per line.
///
/// # Errors
/// * `Parse` for a token that is not a number
/// * `DimensionMismatch` if a row length differs from the first row
/// * `InvalidArgument` if there are no rows or a value is NaN
pub fn read_matrix<T: Scalar + FromStr, R: BufRead>(r: R) -> Result<Matrix<T>> {
    let mut rows: Vec<Vec<T>> = Vec::new();
    for (idx, line) in r.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_row(&line, idx + 1)?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                log::warn!("matrix row on line {} has {} elements, expected {}", idx + 1, row.len(), first.len());
                return Err(LinAlgError::mismatch("matrix file row", (1, first.len()), (1, row.len())));
            }
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(LinAlgError::InvalidArgument("matrix file contains no rows".into()));
    }
    Matrix::from_rows(rows)
}

pub fn write_vectors<T: Scalar, W: Write>(vectors: &[Vector<T>], w: &mut W) -> Result<()> {
    for v in vectors {
        write_row(w, v.as_slice())?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_vectors<T: Scalar + FromStr, R: BufRead>(r: R) -> Result<Vec<Vector<T>>> {
    r.lines()
        .enumerate()
        .map(|(idx, line)| Vector::try_from(parse_row(&line?, idx + 1)?))
        .collect()
}

pub fn save_matrix<T: Scalar>(path: impl AsRef<Path>, m: &Matrix<T>) -> Result<()> {
    let path = path.as_ref();
    log::debug!("saving {}x{} matrix to {}", m.rows(), m.cols(), path.display());
    write_matrix(m, &mut BufWriter::new(File::create(path)?))
}

pub fn load_matrix<T: Scalar + FromStr>(path: impl AsRef<Path>) -> Result<Matrix<T>> {
    let path = path.as_ref();
    log::debug!("loading matrix from {}", path.display());
    read_matrix(BufReader::new(File::open(path)?))
}

pub fn save_vectors<T: Scalar>(path: impl AsRef<Path>, vectors: &[Vector<T>]) -> Result<()> {
    let path = path.as_ref();
    log::debug!("saving {} vectors to {}", vectors.len(), path.display());
    write_vectors(vectors, &mut BufWriter::new(File::create(path)?))
}

pub fn load_vectors<T: Scalar + FromStr>(path: impl AsRef<Path>) -> Result<Vec<Vector<T>>> {
    let path = path.as_ref();
    log::debug!("loading vectors from {}", path.display());
    read_vectors(BufReader::new(File::open(path)?))
}
