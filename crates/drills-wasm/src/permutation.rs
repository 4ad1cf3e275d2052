//! Permutation search WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { contains_permutation, JsPermutationChecker } from '@drills/wasm';
//!
//! contains_permutation('adc', 'dcda'); // true
//!
//! // Reuse a compiled pattern across many texts
//! const checker = new JsPermutationChecker('ab');
//! checker.check('eidboaoo');   // false
//! checker.find('eidbaooo');    // { start: 3, end: 5 }
//! ```

use drills_core::permutation::{
    contains_permutation as core_contains, PermutationChecker, PermutationMatch,
};
use wasm_bindgen::prelude::*;

/// Check whether any substring of `text` is a permutation of `pattern`.
///
/// An empty pattern always matches.
#[wasm_bindgen]
pub fn contains_permutation(pattern: &str, text: &str) -> bool {
    core_contains(pattern, text)
}

/// A compiled pattern that can be checked against many texts.
#[wasm_bindgen]
pub struct JsPermutationChecker {
    inner: PermutationChecker,
}

#[wasm_bindgen]
impl JsPermutationChecker {
    /// Count the pattern's characters once.
    #[wasm_bindgen(constructor)]
    pub fn new(pattern: &str) -> JsPermutationChecker {
        JsPermutationChecker {
            inner: PermutationChecker::new(pattern),
        }
    }

    /// Number of characters in the pattern.
    #[wasm_bindgen(getter)]
    pub fn pattern_len(&self) -> usize {
        self.inner.pattern_len()
    }

    /// Check whether any substring of `text` is a permutation of the pattern.
    pub fn check(&self, text: &str) -> bool {
        self.inner.check(text)
    }

    /// First matching window as `{ start, end }`, or `undefined`.
    ///
    /// Offsets are UTF-8 byte offsets into `text`.
    pub fn find(&self, text: &str) -> Result<JsValue, JsValue> {
        match self.find_match(text) {
            Some(m) => serde_wasm_bindgen::to_value(&m)
                .map_err(|e| JsValue::from_str(&format!("Failed to convert match: {}", e))),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPermutationChecker {
    fn find_match(&self, text: &str) -> Option<PermutationMatch> {
        self.inner.find(text)
    }
}
