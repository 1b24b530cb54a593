/// String tokens that upstream coercion emits for "no data". Normalized to
/// the empty string so the typed stages see one uniform missing value.
const NULL_TOKENS: &[&str] = &["nan", "NaN", "NULL", "null", "None", "N/A", "n/a", "#N/A"];

/// Trim a cell and collapse null-like tokens to the empty string.
pub fn clean_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    if NULL_TOKENS.contains(&trimmed) {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Clean every cell of a row in place.
pub fn clean_row(row: &mut [String]) {
    for cell in row {
        *cell = clean_cell(cell);
    }
}
