//! Questionnaire text normalization.
//!
//! Free-text answers stay as entered until submission; these helpers
//! turn them into the typed document fields. The behavior — not the
//! schema — is the compatibility contract with the service: lists are
//! comma-split, trimmed, empties dropped, order preserved, duplicates
//! allowed; numeric fields become a valid number or stay absent, never
//! an unparsed string.

/// Split a comma-separated free-text field into an ordered list.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Re-join a stored list for editing in a free-text field.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Parse an integer answer. Blank or unparsable input is an absent
/// answer, not an error.
pub fn parse_u32(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Parse a decimal answer (height, weight, sleep hours).
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Parse the stress-level answer. Range validation (1-5) stays with the
/// service, which rejects out-of-range values with a field error.
pub fn parse_u8(value: &str) -> Option<u8> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Render an optional numeric answer back into its form field.
pub fn number_field<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}
