//! Matrix rotation WASM bindings.
//!
//! JavaScript passes matrices as nested arrays (`number[][]`). They are
//! converted with serde, rotated in place on the Rust side, and converted
//! back.

use drills_core::matrix::rotate_clockwise as core_rotate;
use wasm_bindgen::prelude::*;

/// Rotate a square matrix 90 degrees clockwise.
///
/// # Arguments
///
/// * `matrix` - Array of rows, each an array of integers
///
/// # Returns
///
/// The rotated matrix as a new nested array.
///
/// # Errors
///
/// Returns an error if the value is not an array of integer arrays, or if
/// the matrix is not square.
///
/// # Example (TypeScript)
///
/// ```typescript
/// rotate_clockwise([[1, 2], [3, 4]]); // [[3, 1], [4, 2]]
/// ```
#[wasm_bindgen]
pub fn rotate_clockwise(matrix: JsValue) -> Result<JsValue, JsValue> {
    if !js_sys::Array::is_array(&matrix) {
        return Err(JsValue::from_str("Invalid matrix: expected an array of rows"));
    }

    let rows: Vec<Vec<i32>> = serde_wasm_bindgen::from_value(matrix)
        .map_err(|e| JsValue::from_str(&format!("Invalid matrix: {}", e)))?;

    let rotated = rotate_rows(rows).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&rotated)
        .map_err(|e| JsValue::from_str(&format!("Failed to convert matrix: {}", e)))
}

/// Rotate owned rows, reporting shape errors as strings.
fn rotate_rows(mut rows: Vec<Vec<i32>>) -> Result<Vec<Vec<i32>>, String> {
    core_rotate(&mut rows).map_err(|e| e.to_string())?;
    Ok(rows)
}
