//! Error types for matrix operations.

use thiserror::Error;

/// Error types for matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row's length differs from the number of rows.
    #[error("Matrix is not square: row {row} has {actual} elements, expected {expected}")]
    NotSquare {
        /// Index of the first offending row.
        row: usize,
        /// Required row length (the number of rows).
        expected: usize,
        /// Actual length of the offending row.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_square_message() {
        let err = MatrixError::NotSquare {
            row: 2,
            expected: 3,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "Matrix is not square: row 2 has 4 elements, expected 3"
        );
    }
}
