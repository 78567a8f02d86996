//! Tab name → renderer identifier

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{Nd}]+").unwrap());

/// Normalize a tab name into a renderer identifier
///
/// Lower-cases, collapses every run of non-alphanumeric characters into a
/// single `_` and trims separators at both ends. Total: any input yields an
/// identifier, possibly empty.
///
/// ```rust
/// use ontodash_view::view_name_to_module_name;
///
/// assert_eq!(
///     view_name_to_module_name("  System  Logical-Architecture "),
///     "system_logical_architecture"
/// );
/// ```
#[must_use]
pub fn view_name_to_module_name(view: &str) -> String {
    let lowered = view.to_lowercase();
    SEPARATORS
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_spacing_and_case() {
        assert_eq!(
            view_name_to_module_name("System Logical Architecture"),
            "system_logical_architecture"
        );
        assert_eq!(
            view_name_to_module_name("system logical architecture"),
            view_name_to_module_name("  System  Logical-Architecture ")
        );
    }

    #[test]
    fn keeps_digits_and_unicode_letters() {
        assert_eq!(view_name_to_module_name("Phase 2 / Überblick"), "phase_2_überblick");
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(view_name_to_module_name(""), "");
        assert_eq!(view_name_to_module_name(" -- "), "");
        assert_eq!(view_name_to_module_name("Requirements"), "requirements");
    }
}
