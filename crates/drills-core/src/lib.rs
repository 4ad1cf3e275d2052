//! Drills Core - small algorithm library
//!
//! This crate provides two independent routines:
//! - `permutation` - does any substring of a text permute a pattern?
//! - `matrix` - rotate a square matrix 90 degrees clockwise in place
//!
//! Both are synchronous and keep no state between calls.

pub mod matrix;
pub mod permutation;

pub use matrix::{rotate_clockwise, rotate_quarter_turns, validate_square, MatrixError};
pub use permutation::{
    contains_permutation, find_permutation, PermutationChecker, PermutationMatch,
};
