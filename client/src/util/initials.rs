//! Avatar initials derived from an author name.

#[cfg(test)]
#[path = "initials_test.rs"]
mod initials_test;

use crate::util::validate::trim_input;

/// Compute the avatar initials for `name`.
///
/// A trimmed name with at least one space yields the first character of the
/// first and last space-separated parts. Anything else yields the first two
/// characters of `name` as given, so a one-character name stays one
/// character and an empty name stays empty.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = trim_input(name).split(' ').collect();
    if let [first, .., last] = parts.as_slice() {
        let mut out = String::new();
        out.extend(first.chars().next());
        out.extend(last.chars().next());
        return out.to_uppercase();
    }
    name.chars().take(2).collect::<String>().to_uppercase()
}
