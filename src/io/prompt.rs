//! Line-oriented interactive construction of vectors and matrices.
//!
//! Prompts are written to `out`, answers are read from `input`. Any malformed
//! answer or an early end of input is an error; nothing falls back to a
//! default value.

use crate::core::traits::Scalar;
use crate::error::{LinAlgError, Result};
use crate::io::text::parse_row;
use crate::matrix::Matrix;
use crate::vector::Vector;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

struct Lines<'a, R> {
    input: &'a mut R,
    line_no: usize,
}

impl<'a, R: BufRead> Lines<'a, R> {
    fn new(input: &'a mut R) -> Self {
        Lines { input, line_no: 0 }
    }

    fn next_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended early").into());
        }
        self.line_no += 1;
        Ok(buf.trim().to_string())
    }

    fn next_parsed<V: FromStr>(&mut self) -> Result<V> {
        let line = self.next_line()?;
        line.parse().map_err(|_| LinAlgError::Parse { line: self.line_no, token: line })
    }
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

/// Ask for a size, then one element per line.
pub fn read_vector_interactive<T, R, W>(input: &mut R, out: &mut W) -> Result<Vector<T>>
where
    T: Scalar + FromStr,
    R: BufRead,
    W: Write,
{
    let mut lines = Lines::new(input);
    prompt(out, "Enter the size of the vector: ")?;
    let size: usize = lines.next_parsed()?;
    let mut v = Vector::zeros(size);
    writeln!(out, "Enter the vector elements:")?;
    for i in 0..size {
        prompt(out, &format!("Element {}: ", i + 1))?;
        v.set(i, lines.next_parsed()?)?;
    }
    Ok(v)
}

/// Ask for rows and columns, then one whitespace-separated line per row.
pub fn read_matrix_interactive<T, R, W>(input: &mut R, out: &mut W) -> Result<Matrix<T>>
where
    T: Scalar + FromStr,
    R: BufRead,
    W: Write,
{
    let mut lines = Lines::new(input);
    prompt(out, "Enter the number of rows: ")?;
    let rows: usize = lines.next_parsed()?;
    prompt(out, "Enter the number of columns: ")?;
    let cols: usize = lines.next_parsed()?;
    let mut m = Matrix::zeros(rows, cols)?;
    writeln!(out, "Enter the matrix elements (row by row):")?;
    for i in 0..rows {
        let line = lines.next_line()?;
        let row: Vec<T> = parse_row(&line, lines.line_no)?;
        if row.len() != cols {
            return Err(LinAlgError::mismatch("matrix input row", (1, cols), (1, row.len())));
        }
        m.set_row(i, Vector::try_from(row)?)?;
    }
    Ok(m)
}
