// crates/citygrid-core/src/text.rs

/// Normalizes a free-text search term: trims surrounding whitespace and
/// lower-cases it.
///
/// Matching is plain substring containment on the result; no accent folding
/// or locale-aware collation is applied.
///
/// # Examples
/// ```rust
/// use citygrid_core::text::normalize_term;
///
/// assert_eq!(normalize_term("  BERL  "), "berl");
/// assert_eq!(normalize_term(" \t "), "");
/// ```
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Best-effort Unicode → ASCII transliteration (e.g. `Łódź` -> `Lodz`).
///
/// Used to fill the ASCII name column when a dataset row leaves it blank.
/// The implementation uses the `deunicode` crate.
pub fn ascii_fold(s: &str) -> String {
    deunicode::deunicode(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_term("\n São Paulo "), "são paulo");
    }

    #[test]
    fn folds_to_ascii() {
        assert_eq!(ascii_fold("Łódź"), "Lodz");
        assert_eq!(ascii_fold("São Paulo"), "Sao Paulo");
    }
}
