use thiserror::Error;

// Unified error type for gaussel

#[derive(Error, Debug)]
pub enum LinAlgError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{axis} index {index} out of range for length {len}")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        len: usize,
    },
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("division by zero{}", at_index(.index))]
    DivisionByZero { index: Option<usize> },
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("system is inconsistent or underdetermined: pivot {pivot:e} at row {row}")]
    Singular { row: usize, pivot: f64 },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse {token:?} on line {line}")]
    Parse { line: usize, token: String },
}

fn at_index(index: &Option<usize>) -> String {
    index.map(|i| format!(" at index {i}")).unwrap_or_default()
}

pub type Result<T, E = LinAlgError> = std::result::Result<T, E>;

impl LinAlgError {
    /// Shorthand for a dimension mismatch between two `(rows, cols)` shapes.
    pub(crate) fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        LinAlgError::DimensionMismatch { op, left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let e = LinAlgError::IndexOutOfRange { axis: "row", index: 4, len: 3 };
        assert_eq!(e.to_string(), "row index 4 out of range for length 3");
        let e = LinAlgError::DivisionByZero { index: Some(2) };
        assert_eq!(e.to_string(), "division by zero at index 2");
        let e = LinAlgError::DivisionByZero { index: None };
        assert_eq!(e.to_string(), "division by zero");
        let e = LinAlgError::mismatch("add", (2, 1), (3, 1));
        assert!(e.to_string().contains("add"));
    }
}
