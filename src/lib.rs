//! Shared fixtures for the workspace-level integration tests.

use serde::Deserialize;

/// Contents of `tests/testdata/products_golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    /// Products given in full.
    pub values: Vec<GoldenEntry>,
    /// Products of repdigit operands, checked by length and ends.
    pub patterns: Vec<GoldenPattern>,
}

#[derive(Debug, Deserialize)]
pub struct GoldenEntry {
    pub a: String,
    pub b: String,
    pub product: String,
}

#[derive(Debug, Deserialize)]
pub struct GoldenPattern {
    pub digit_a: u8,
    pub len_a: usize,
    pub digit_b: u8,
    pub len_b: usize,
    pub product_digits: usize,
    pub product_prefix: String,
    pub product_suffix: String,
}

impl GoldenPattern {
    /// Build both operands as numerals.
    #[must_use]
    pub fn operands(&self) -> (String, String) {
        (
            char::from(b'0' + self.digit_a).to_string().repeat(self.len_a),
            char::from(b'0' + self.digit_b).to_string().repeat(self.len_b),
        )
    }
}

/// Load the golden product table.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed.
pub fn load_golden_data() -> Result<GoldenData, Box<dyn std::error::Error>> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/products_golden.json"
    );
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
