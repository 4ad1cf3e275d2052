//! Drills demo binary
//!
//! Prints the sample permutation checks and a rotated 4x4 matrix.
//! Set `RUST_LOG=debug` to see the scan decisions.

use drills_core::{contains_permutation, rotate_clockwise};

/// Hardcoded (pattern, text) pairs with their expected answers.
const PERMUTATION_SAMPLES: [(&str, &str, bool); 3] = [
    ("ab", "eidboaoo", false),
    ("ab", "eidbaooo", true),
    ("adc", "dcda", true),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    for (pattern, text, expected) in PERMUTATION_SAMPLES {
        let found = contains_permutation(pattern, text);
        log::info!("contains_permutation({pattern:?}, {text:?}) = {found}");
        println!("{found} (expected {expected})");
    }

    let mut matrix = vec![
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
        vec![13, 14, 15, 16],
    ];
    rotate_clockwise(&mut matrix)?;
    print!("{}", format_matrix(&matrix));

    Ok(())
}

/// Render one row per line, values separated by spaces.
fn format_matrix(matrix: &[Vec<i32>]) -> String {
    matrix
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            format!("{}\n", cells.join(" "))
        })
        .collect()
}
