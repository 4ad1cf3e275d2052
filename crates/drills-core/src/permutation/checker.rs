//! Sliding-window search for a permutation of a pattern inside a text.

use std::collections::HashMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::frequency::{AsciiCounts, CountMap, FrequencyTable};

/// Byte range of a window in the searched text whose characters are a
/// permutation of the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutationMatch {
    /// Inclusive start offset in bytes.
    pub start: usize,
    /// Exclusive end offset in bytes.
    pub end: usize,
}

impl PermutationMatch {
    /// The match as a range, suitable for slicing the searched text.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the matched window in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for the zero-width match of an empty pattern.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone)]
enum Baseline {
    /// Pattern is pure ASCII: text is scanned byte by byte.
    Ascii(FrequencyTable<AsciiCounts>),
    /// Pattern has non-ASCII characters: text is scanned per `char`.
    Unicode(FrequencyTable<HashMap<char, u32>>),
}

/// A pattern compiled into its character frequency baseline.
///
/// Building the checker once and calling [`check`](Self::check) on many texts
/// avoids recounting the pattern. The checker itself is immutable, so every
/// call starts from a fresh working copy of the baseline.
#[derive(Debug, Clone)]
pub struct PermutationChecker {
    baseline: Baseline,
    pattern_len: usize,
    pattern_bytes: usize,
}

impl PermutationChecker {
    /// Compile `pattern` into a checker.
    pub fn new(pattern: &str) -> Self {
        let baseline = if pattern.is_ascii() {
            Baseline::Ascii(FrequencyTable::from_keys(pattern.bytes()))
        } else {
            Baseline::Unicode(FrequencyTable::from_keys(pattern.chars()))
        };

        Self {
            baseline,
            pattern_len: pattern.chars().count(),
            pattern_bytes: pattern.len(),
        }
    }

    /// Number of characters in the pattern.
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// Check whether any contiguous substring of `text` is a permutation of
    /// the pattern.
    pub fn check(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Find the first window of `text` that is a permutation of the pattern.
    ///
    /// An empty pattern matches at offset 0 of every text, including the
    /// empty one.
    pub fn find(&self, text: &str) -> Option<PermutationMatch> {
        if self.pattern_len == 0 {
            return Some(PermutationMatch { start: 0, end: 0 });
        }

        // A permutation has exactly the pattern's UTF-8 length.
        if self.pattern_bytes > text.len() {
            log::debug!(
                "pattern ({} bytes) longer than text ({} bytes), skipping scan",
                self.pattern_bytes,
                text.len()
            );
            return None;
        }

        let found = match &self.baseline {
            // Bytes of multi-byte UTF-8 sequences are all >= 0x80 and
            // therefore never pattern characters.
            Baseline::Ascii(table) => {
                scan(table, text.bytes().enumerate()).map(|(start, (last, _))| PermutationMatch {
                    start,
                    end: last + 1,
                })
            }
            Baseline::Unicode(table) => {
                scan(table, text.char_indices()).map(|(start, (last, ch))| PermutationMatch {
                    start,
                    end: last + ch.len_utf8(),
                })
            }
        };

        if let Some(m) = &found {
            log::debug!("permutation found at bytes {}..{}", m.start, m.end);
        }
        found
    }
}

/// Check whether any contiguous substring of `text` is a permutation of
/// `pattern`.
///
/// # Example
/// ```
/// use drills_core::permutation::contains_permutation;
///
/// assert!(contains_permutation("ab", "eidbaooo"));
/// assert!(!contains_permutation("ab", "eidboaoo"));
/// ```
pub fn contains_permutation(pattern: &str, text: &str) -> bool {
    PermutationChecker::new(pattern).check(text)
}

/// Find the first window of `text` that is a permutation of `pattern`.
pub fn find_permutation(pattern: &str, text: &str) -> Option<PermutationMatch> {
    PermutationChecker::new(pattern).find(text)
}

/// Run the sliding window over `(offset, key)` pairs.
///
/// Returns the offset of the first key in the matching window together with
/// the last `(offset, key)` pair, so callers can compute the end in their own
/// units. `window` is a second cursor over the same keys, always positioned
/// at the left edge of the current window.
fn scan<M, I>(baseline: &FrequencyTable<M>, keys: I) -> Option<(usize, (usize, M::Key))>
where
    M: CountMap,
    I: Iterator<Item = (usize, M::Key)> + Clone,
{
    let mut working = baseline.clone();
    let mut window = keys.clone();
    let mut rest = keys;
    let mut in_sequence = false;

    while let Some((pos, key)) = rest.next() {
        let Some(demand) = working.demand(key) else {
            // Not a pattern character: nothing before it can be part of a match.
            if in_sequence {
                log::trace!("window reset by a non-pattern character at {}", pos);
                working.clone_from(baseline);
            }
            in_sequence = false;
            window = rest.clone();
            continue;
        };

        // Outside a window the working table equals the baseline, whose
        // demands are all positive.
        debug_assert!(in_sequence || demand > 0);
        in_sequence = true;

        if demand == 0 {
            // Excess occurrence: drop everything up to and including the
            // earliest copy of `key` in the window.
            for (_, front) in window.by_ref() {
                if front == key {
                    break;
                }
                working.release(front);
            }
            log::trace!("window shrunk past excess occurrence at {}", pos);
            continue;
        }

        working.consume(key);
        if working.is_satisfied() {
            let start = window.next().map_or(pos, |(offset, _)| offset);
            return Some((start, (pos, key)));
        }
    }

    None
}


// ============================================================================
// Property-Based Tests
// ============================================================================
