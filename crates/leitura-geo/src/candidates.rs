//! Candidate generation for country-name lookup.
//!
//! A query like "União Soviética" is expanded into a list of string
//! variants that are each attempted against the registry in order. The
//! generation order is part of the resolver's observable behavior
//! (first match wins) and is kept exactly as the original system tuned
//! it: casing variants, then accent-stripped variants, then word
//! substitutions applied over everything generated so far.

use std::collections::HashSet;

use leitura_core::text::{strip_accents, title_case};

/// Portuguese qualifier words translated to English during candidate
/// generation. Applied in table order, against the uppercased variants
/// (the folded words only occur there).
pub(crate) const WORD_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("UNIAO", "UNION"),
    ("SUL", "SOUTH"),
    ("NORTE", "NORTH"),
    ("REPUBLICA", "REPUBLIC"),
];

/// Generate lookup candidates for a raw query, in attempt order.
///
/// Duplicates are dropped, keeping the first occurrence so the attempt
/// order is unchanged.
///
/// # Example
///
/// ```rust
/// use leitura_geo::candidates;
///
/// let variants = candidates("União Soviética");
/// assert_eq!(variants[0], "União Soviética"); // title-cased original
/// assert!(variants.contains(&"UNIAO SOVIETICA".to_string()));
/// assert!(variants.contains(&"UNION SOVIETICA".to_string()));
/// ```
pub fn candidates(query: &str) -> Vec<String> {
    let trimmed = query.trim();

    let mut list = vec![
        title_case(trimmed),
        trimmed.to_uppercase(),
        trimmed.to_lowercase(),
    ];

    let stripped: Vec<String> = list.iter().map(|c| strip_accents(c)).collect();
    list.extend(stripped);

    // Substitutions compound: each pass runs over every variant produced
    // so far, including variants produced by earlier substitutions.
    for (from, to) in WORD_SUBSTITUTIONS {
        let substituted: Vec<String> = list.iter().map(|c| c.replace(from, to)).collect();
        list.extend(substituted);
    }

    let mut seen = HashSet::new();
    list.retain(|candidate| seen.insert(candidate.clone()));
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casing_variants_come_first() {
        let variants = candidates("reino unido");
        assert_eq!(variants[0], "Reino Unido");
        assert_eq!(variants[1], "REINO UNIDO");
        assert_eq!(variants[2], "reino unido");
    }

    #[test]
    fn accent_stripped_variants_follow_casing_variants() {
        let variants = candidates("Japão");
        let stripped_pos = variants.iter().position(|c| c == "Japao").unwrap();
        let upper_pos = variants.iter().position(|c| c == "JAPÃO").unwrap();
        assert!(upper_pos < stripped_pos);
        assert!(variants.contains(&"JAPAO".to_string()));
        assert!(variants.contains(&"japao".to_string()));
    }

    #[test]
    fn substitutions_translate_qualifier_words() {
        let variants = candidates("África do Sul");
        // SUL only occurs in the uppercased variants.
        assert!(variants.contains(&"AFRICA DO SOUTH".to_string()));
        // Accented uppercase variant is substituted too.
        assert!(variants.contains(&"ÁFRICA DO SOUTH".to_string()));
    }

    #[test]
    fn substitutions_compound_across_passes() {
        let variants = candidates("República do Norte");
        // NORTE pass runs before REPUBLICA, and the REPUBLICA pass
        // applies to the NORTE-substituted variant as well.
        assert!(variants.contains(&"REPUBLICA DO NORTH".to_string()));
        assert!(variants.contains(&"REPUBLIC DO NORTH".to_string()));
    }

    #[test]
    fn duplicates_are_dropped_keeping_first_occurrence() {
        let variants = candidates("BRAZIL");
        let unique: HashSet<&String> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
        // All-caps ASCII input collapses to just the three casing forms.
        assert_eq!(variants, vec!["Brazil", "BRAZIL", "brazil"]);
    }

    #[test]
    fn blank_query_collapses_to_a_single_empty_candidate() {
        assert_eq!(candidates("   "), vec![String::new()]);
    }
}
