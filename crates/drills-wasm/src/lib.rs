//! Drills WASM - WebAssembly bindings for drills-core
//!
//! # Module Structure
//!
//! - `permutation` - substring permutation search
//! - `matrix` - square matrix rotation
//! - `logger` - routes `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { contains_permutation, rotate_clockwise } from '@drills/wasm';
//!
//! await init();
//!
//! contains_permutation('ab', 'eidbaooo'); // true
//! rotate_clockwise([[1, 2], [3, 4]]);     // [[3, 1], [4, 2]]
//! ```

use wasm_bindgen::prelude::*;

mod logger;
mod matrix;
mod permutation;

pub use matrix::rotate_clockwise;
pub use permutation::{contains_permutation, JsPermutationChecker};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init();
}

/// Change how much core logging reaches the browser console.
///
/// Accepts `off`, `error`, `warn`, `info`, `debug` or `trace`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logger::parse_level(level).map_err(|e| JsValue::from_str(&e))?;
    log::set_max_level(filter);
    Ok(())
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
