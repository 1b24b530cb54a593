use tracing::warn;

/// Coerce a raw cell to a number. Thousands separators are stripped first.
/// Empty input is absent (never zero); an unparseable value is also absent,
/// with a non-fatal note.
pub fn parse_number(raw: &str) -> Option<f64> {
    let value = raw.replace(',', "");
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    match value.parse::<f64>() {
        Ok(number) => Some(number),
        Err(_) => {
            warn!("numbers: failed to parse numeric value: {}", raw);
            None
        }
    }
}

/// Canonical rendering for output: integral values print without a
/// fractional part, absent values as the empty field.
pub fn render_number(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", n as i64),
        Some(n) => n.to_string(),
    }
}
