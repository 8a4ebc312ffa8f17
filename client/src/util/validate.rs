//! Required-field validation shared by the message form.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Strip leading and trailing whitespace, including the U+FEFF byte-order
/// mark that browsers treat as whitespace in form input.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Returns `true` when `value` holds at least one non-whitespace character.
pub fn is_valid_input(value: &str) -> bool {
    !trim_input(value).is_empty()
}
