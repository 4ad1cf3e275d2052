//! In-place rotation of square matrices.
//!
//! # Layout
//!
//! Matrices are row-major slices of rows (`&mut [Vec<T>]`): `matrix[i][j]`
//! is row `i`, column `j`. Every operation validates that the matrix is
//! square before touching any element, so a rejected matrix is returned
//! unchanged.
//!
//! # Algorithm
//!
//! Rotation walks concentric layers from the border inwards and moves four
//! elements at a time (left to top, bottom to left, right to bottom, top to
//! right). No second matrix is allocated.

mod rotation;
mod types;

pub use rotation::{rotate_clockwise, rotate_quarter_turns, validate_square};
pub use types::MatrixError;
