//! Hardcoded override table for country names the general algorithm gets
//! wrong, or that refer to political entities with no current ISO entry.
//!
//! These mappings take priority over every other resolution step. That is
//! intentional: "União Soviética" must map to the retired `SUN` code even
//! though a fuzzy match would happily produce a current-day country.

use std::collections::HashMap;

use leitura_core::text::fold;

/// Default overrides, keyed by folded name.
///
/// Carried over verbatim from the original reading-log dashboard.
const STANDARD_MAPPINGS: &[(&str, &str)] = &[
    ("RUSSIA", "RUS"),
    ("UNIAO SOVIETICA", "SUN"),
    ("ESTADOS UNIDOS", "USA"),
    ("REINO UNIDO", "GBR"),
    ("COREIA DO SUL", "KOR"),
    ("COREIA DO NORTE", "PRK"),
    ("REPUBLICA TCHECA", "CZE"),
    ("ARABIA SAUDITA", "SAU"),
    ("EMIRADOS ARABES UNIDOS", "ARE"),
    ("ESPANHA", "ESP"),
    ("REPUBLICA DOMINICANA", "DOM"),
    ("REPUBLICA DOMINICANA DA", "DOM"),
];

/// Special-mapping table consulted before any registry lookup.
#[derive(Debug, Clone)]
pub struct SpecialMappings {
    map: HashMap<String, String>,
}

impl SpecialMappings {
    /// The standard override table.
    pub fn standard() -> Self {
        let map = STANDARD_MAPPINGS
            .iter()
            .map(|(name, code)| ((*name).to_string(), (*code).to_string()))
            .collect();
        Self { map }
    }

    /// An empty table, for callers that want full control.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Add or replace an override. The name is folded before insertion,
    /// so `insert("Alemanha Oriental", ...)` and a later query for
    /// "ALEMANHA ORIENTAL" meet on the same key.
    pub fn insert(&mut self, name: &str, alpha3: &str) {
        self.map.insert(fold(name), alpha3.to_uppercase());
    }

    /// Look up an already-folded name.
    pub(crate) fn get_folded(&self, folded: &str) -> Option<&str> {
        self.map.get(folded).map(String::as_str)
    }

    /// Look up a raw name (folds it first).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_folded(&fold(name))
    }

    /// Number of overrides in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table holds no overrides.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (folded name, code) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for SpecialMappings {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_the_original_entries() {
        let special = SpecialMappings::standard();
        assert_eq!(special.len(), STANDARD_MAPPINGS.len());
        assert_eq!(special.get("União Soviética"), Some("SUN"));
        assert_eq!(special.get("reino unido"), Some("GBR"));
        assert_eq!(special.get("CORÉIA DO SUL"), Some("KOR"));
    }

    #[test]
    fn insert_folds_name_and_uppercases_code() {
        let mut special = SpecialMappings::empty();
        special.insert("Alemanha Oriental", "ddr");
        assert_eq!(special.get("ALEMANHA ORIENTAL"), Some("DDR"));
        assert_eq!(special.get("alemanha oriental"), Some("DDR"));
    }

    #[test]
    fn lookup_misses_are_none() {
        let special = SpecialMappings::standard();
        assert_eq!(special.get("Brasil"), None);
    }
}
