//! Permutation-in-string search.
//!
//! Answers whether some contiguous substring of a text is a reordering of a
//! pattern's characters, using a single left-to-right sliding window.
//!
//! # Algorithm
//!
//! The pattern is counted once into a baseline demand table. While scanning
//! the text, a working copy tracks how many occurrences of each character the
//! current window still needs:
//!
//! - a character outside the pattern discards the window and restarts it
//!   just past that character
//! - a character whose demand is already met shrinks the window from the
//!   left until its earliest occurrence has been dropped
//! - otherwise the character is consumed, and once no demand is left the
//!   window is a match
//!
//! # Character Handling
//!
//! ASCII patterns use a flat 128-entry table and scan the text as bytes.
//! Other patterns use a hash map keyed by `char`.

mod checker;
mod frequency;

pub use checker::{contains_permutation, find_permutation, PermutationChecker, PermutationMatch};
