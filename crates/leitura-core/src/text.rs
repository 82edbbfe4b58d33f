//! Accent and case folding for country-name comparison.
//!
//! The reading log is hand-entered Brazilian Portuguese, so the same
//! country shows up as "Rússia", "RUSSIA", or "russia " depending on the
//! row. All comparisons in the resolver run over the *folded* form:
//! trimmed, diacritics stripped, uppercased.

use unidecode::unidecode;

/// Strip diacritics, mapping accented characters to their ASCII base
/// ("Rússia" → "Russia").
pub fn strip_accents(s: &str) -> String {
    unidecode(s)
}

/// Fold a string for comparison: trim, strip diacritics, uppercase.
///
/// # Example
///
/// ```rust
/// use leitura_core::text::fold;
///
/// assert_eq!(fold("  União Soviética "), "UNIAO SOVIETICA");
/// assert_eq!(fold("reino unido"), "REINO UNIDO");
/// ```
pub fn fold(s: &str) -> String {
    unidecode(s.trim()).to_uppercase()
}

/// Title-case a string: first letter of each whitespace-separated word
/// uppercased, the rest lowercased.
///
/// Used during candidate generation to mimic how registry names are
/// written ("estados unidos" → "Estados Unidos").
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
