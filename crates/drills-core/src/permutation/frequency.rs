//! Character demand tables for the sliding-window scan.
//!
//! A [`FrequencyTable`] maps each pattern character to how many more
//! occurrences the current window still needs. Storage is abstracted behind
//! [`CountMap`] so ASCII patterns can use a flat array while everything else
//! falls back to a hash map.

use std::collections::HashMap;

/// Storage for per-character counts.
///
/// `count` returns `None` for characters that never appeared in the pattern.
pub trait CountMap: Clone {
    type Key: Copy + Eq;

    fn count(&self, key: Self::Key) -> Option<u32>;
    fn count_mut(&mut self, key: Self::Key) -> Option<&mut u32>;

    /// Add one occurrence of `key`, inserting it if absent.
    fn bump(&mut self, key: Self::Key);
}

/// Counts for ASCII keys, indexed directly by byte value.
///
/// Bytes at or above 0x80 are never present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiCounts([Option<u32>; 128]);

impl Default for AsciiCounts {
    fn default() -> Self {
        Self([None; 128])
    }
}

impl CountMap for AsciiCounts {
    type Key = u8;

    #[inline]
    fn count(&self, key: u8) -> Option<u32> {
        self.0.get(key as usize).copied().flatten()
    }

    #[inline]
    fn count_mut(&mut self, key: u8) -> Option<&mut u32> {
        self.0.get_mut(key as usize).and_then(Option::as_mut)
    }

    fn bump(&mut self, key: u8) {
        if let Some(slot) = self.0.get_mut(key as usize) {
            *slot.get_or_insert(0) += 1;
        }
    }
}

impl CountMap for HashMap<char, u32> {
    type Key = char;

    #[inline]
    fn count(&self, key: char) -> Option<u32> {
        self.get(&key).copied()
    }

    #[inline]
    fn count_mut(&mut self, key: char) -> Option<&mut u32> {
        self.get_mut(&key)
    }

    fn bump(&mut self, key: char) {
        *self.entry(key).or_insert(0) += 1;
    }
}

/// Remaining demand per character plus a running count of characters whose
/// demand is still positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<M> {
    counts: M,
    unsatisfied: usize,
}

impl<M: CountMap + Default> FrequencyTable<M> {
    /// Build a table from the pattern's characters.
    pub fn from_keys(keys: impl IntoIterator<Item = M::Key>) -> Self {
        let mut counts = M::default();
        let mut unsatisfied = 0;
        for key in keys {
            if counts.count(key).is_none() {
                unsatisfied += 1;
            }
            counts.bump(key);
        }
        Self {
            counts,
            unsatisfied,
        }
    }
}

impl<M: CountMap> FrequencyTable<M> {
    /// Remaining demand for `key`, or `None` if it is not a pattern character.
    #[inline]
    pub fn demand(&self, key: M::Key) -> Option<u32> {
        self.counts.count(key)
    }

    /// Take one occurrence of `key` into the window.
    ///
    /// Callers must only consume keys with positive demand.
    #[inline]
    pub fn consume(&mut self, key: M::Key) {
        if let Some(count) = self.counts.count_mut(key) {
            debug_assert!(*count > 0, "consumed a character with no demand left");
            *count -= 1;
            if *count == 0 {
                self.unsatisfied -= 1;
            }
        }
    }

    /// Return one occurrence of `key` from the window.
    #[inline]
    pub fn release(&mut self, key: M::Key) {
        if let Some(count) = self.counts.count_mut(key) {
            if *count == 0 {
                self.unsatisfied += 1;
            }
            *count += 1;
        }
    }

    /// True when every pattern character's demand is met.
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.unsatisfied == 0
    }
}
