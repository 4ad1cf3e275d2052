//! Quarter-turn rotation of square matrices.
//!
//! For an `n x n` matrix with `last = n - 1`, a clockwise quarter turn moves
//! each element as:
//! ```text
//! out[j][last - i] = m[i][j]
//! ```
//! Each layer is processed as cycles of four elements, so the rotation
//! needs one temporary per cycle and no auxiliary matrix.

use super::types::MatrixError;

/// Check that `matrix` is square.
///
/// # Returns
///
/// The side length `n`. An empty matrix is a valid `0 x 0` matrix.
///
/// # Errors
///
/// [`MatrixError::NotSquare`] naming the first row whose length differs from
/// the number of rows.
pub fn validate_square<T>(matrix: &[Vec<T>]) -> Result<usize, MatrixError> {
    let n = matrix.len();
    match matrix.iter().position(|row| row.len() != n) {
        Some(row) => Err(MatrixError::NotSquare {
            row,
            expected: n,
            actual: matrix[row].len(),
        }),
        None => Ok(n),
    }
}

/// Rotate a square matrix 90 degrees clockwise in place.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if any row length differs from the row
/// count. The matrix is not modified in that case.
///
/// # Example
///
/// ```
/// use drills_core::matrix::rotate_clockwise;
///
/// let mut m = vec![vec![1, 2], vec![3, 4]];
/// rotate_clockwise(&mut m).unwrap();
/// assert_eq!(m, vec![vec![3, 1], vec![4, 2]]);
/// ```
pub fn rotate_clockwise<T: Copy>(matrix: &mut [Vec<T>]) -> Result<(), MatrixError> {
    let n = validate_square(matrix)?;
    rotate_layers(matrix, n);
    Ok(())
}

/// Rotate a square matrix clockwise by `turns` quarter turns in place.
///
/// Only `turns % 4` rotations are performed; the shape is validated once.
pub fn rotate_quarter_turns<T: Copy>(matrix: &mut [Vec<T>], turns: u32) -> Result<(), MatrixError> {
    let n = validate_square(matrix)?;
    for _ in 0..turns % 4 {
        rotate_layers(matrix, n);
    }
    Ok(())
}

/// Four-way cyclic swap over every layer. `matrix` must be `n x n`.
fn rotate_layers<T: Copy>(matrix: &mut [Vec<T>], n: usize) {
    // 0x0 and 1x1 are fixed points
    if n < 2 {
        return;
    }
    let last = n - 1;

    for layer in 0..n / 2 {
        // The layer's last top-edge element is the first of the right edge.
        for pos in layer..last - layer {
            let top = matrix[layer][pos];
            matrix[layer][pos] = matrix[last - pos][layer];
            matrix[last - pos][layer] = matrix[last - layer][last - pos];
            matrix[last - layer][last - pos] = matrix[pos][last - layer];
            matrix[pos][last - layer] = top;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_4x4() {
        let mut m = vec![
            vec![1, 2, 3, 4],
            vec![5, 6, 7, 8],
            vec![9, 10, 11, 12],
            vec![13, 14, 15, 16],
        ];
        rotate_clockwise(&mut m).unwrap();
        assert_eq!(
            m,
            vec![
                vec![13, 9, 5, 1],
                vec![14, 10, 6, 2],
                vec![15, 11, 7, 3],
                vec![16, 12, 8, 4],
            ]
        );
    }

    #[test]
    fn test_rotate_2x2() {
        let mut m = vec![vec![1, 2], vec![3, 4]];
        rotate_clockwise(&mut m).unwrap();
        assert_eq!(m, vec![vec![3, 1], vec![4, 2]]);
    }

    #[test]
    fn test_rotate_3x3_keeps_center() {
        let mut m = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        rotate_clockwise(&mut m).unwrap();
        assert_eq!(m, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
    }

    #[test]
    fn test_rotate_1x1_noop() {
        let mut m = vec![vec![42]];
        rotate_clockwise(&mut m).unwrap();
        assert_eq!(m, vec![vec![42]]);
    }

    #[test]
    fn test_rotate_empty_noop() {
        let mut m: Vec<Vec<i32>> = Vec::new();
        rotate_clockwise(&mut m).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_rotate_chars() {
        let mut m = vec![vec!['a', 'b'], vec!['c', 'd']];
        rotate_clockwise(&mut m).unwrap();
        assert_eq!(m, vec![vec!['c', 'a'], vec!['d', 'b']]);
    }

    #[test]
    fn test_non_square_rejected_unchanged() {
        let mut m = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let original = m.clone();
        let err = rotate_clockwise(&mut m).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 0,
                expected: 2,
                actual: 3
            }
        );
        assert_eq!(m, original);
    }

    #[test]
    fn test_ragged_rejected() {
        let m = vec![vec![1, 2], vec![3]];
        assert_eq!(
            validate_square(&m),
            Err(MatrixError::NotSquare {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_validate_square_returns_side() {
        assert_eq!(validate_square(&[vec![0u8; 3], vec![0; 3], vec![0; 3]]), Ok(3));
        assert_eq!(validate_square::<u8>(&[]), Ok(0));
    }

    #[test]
    fn test_quarter_turns() {
        let original = vec![vec![1, 2], vec![3, 4]];

        let mut m = original.clone();
        rotate_quarter_turns(&mut m, 2).unwrap();
        assert_eq!(m, vec![vec![4, 3], vec![2, 1]]);

        let mut m = original.clone();
        rotate_quarter_turns(&mut m, 3).unwrap();
        assert_eq!(m, vec![vec![2, 4], vec![1, 3]]);

        let mut m = original.clone();
        rotate_quarter_turns(&mut m, 8).unwrap();
        assert_eq!(m, original);
    }

    #[test]
    fn test_quarter_turns_rejects_non_square() {
        let mut m = vec![vec![1, 2]];
        assert!(rotate_quarter_turns(&mut m, 0).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for square matrices up to 9x9.
    fn square_strategy() -> impl Strategy<Value = Vec<Vec<i32>>> {
        (0usize..=9).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(any::<i32>(), n), n))
    }

    proptest! {
        /// Property: four quarter turns restore the original matrix.
        #[test]
        fn prop_four_turns_identity(original in square_strategy()) {
            let mut m = original.clone();
            for _ in 0..4 {
                rotate_clockwise(&mut m).unwrap();
            }
            prop_assert_eq!(m, original);
        }

        /// Property: element (i, j) lands at (j, n - 1 - i).
        #[test]
        fn prop_element_mapping(original in square_strategy()) {
            let n = original.len();
            let mut m = original.clone();
            rotate_clockwise(&mut m).unwrap();

            for i in 0..n {
                for j in 0..n {
                    prop_assert_eq!(m[j][n - 1 - i], original[i][j]);
                }
            }
        }

        /// Property: two quarter turns equal reversing rows and columns.
        #[test]
        fn prop_half_turn_reverses(original in square_strategy()) {
            let mut m = original.clone();
            rotate_quarter_turns(&mut m, 2).unwrap();

            let expected: Vec<Vec<i32>> = original
                .iter()
                .rev()
                .map(|row| row.iter().rev().copied().collect())
                .collect();
            prop_assert_eq!(m, expected);
        }

        /// Property: matrices with a wrong row length are rejected untouched.
        #[test]
        fn prop_non_square_rejected(rows in 1usize..6, cols in 0usize..6) {
            prop_assume!(rows != cols);
            let original: Vec<Vec<i32>> = (0..rows)
                .map(|r| (0..cols).map(|c| (r * cols + c) as i32).collect())
                .collect();
            let mut m = original.clone();

            let is_not_square = matches!(
                rotate_clockwise(&mut m),
                Err(MatrixError::NotSquare { .. })
            );
            prop_assert!(is_not_square);
            prop_assert_eq!(m, original);
        }
    }
}
