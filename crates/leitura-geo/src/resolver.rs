//! Best-effort resolution of free-text country names to alpha-3 codes.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;

use leitura_core::text::fold;
use leitura_core::{Error, Result};

use crate::candidates::candidates;
use crate::registry::{Country, Registry};
use crate::special::SpecialMappings;

/// Resolver configuration.
///
/// The defaults reproduce the behavior the original dashboard was tuned
/// to; the cutoff in particular is a trial-and-error value, kept
/// configurable rather than retuned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Minimum similarity (normalized Levenshtein, 0.0–1.0) for the
    /// fuzzy fallback to accept a match.
    #[serde(default = "default_fuzzy_cutoff")]
    pub fuzzy_cutoff: f64,

    /// Enable the fuzzy fallback step.
    #[serde(default = "default_true")]
    pub fuzzy_enabled: bool,
}

fn default_fuzzy_cutoff() -> f64 {
    0.6
}

fn default_true() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: default_fuzzy_cutoff(),
            fuzzy_enabled: default_true(),
        }
    }
}

impl ResolverConfig {
    /// Check that the cutoff is a sensible similarity value.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_cutoff) || self.fuzzy_cutoff.is_nan() {
            return Err(Error::config(format!(
                "fuzzy_cutoff must be within 0.0..=1.0, got {}",
                self.fuzzy_cutoff
            )));
        }
        Ok(())
    }
}

/// Maps free-text country names (Portuguese, accented, variant
/// spellings) to ISO 3166-1 alpha-3 codes.
///
/// Resolution is an ordered pipeline, first match wins:
///
/// 1. fold the query and consult the special-mapping table;
/// 2. generate candidates (casing, accent, word-substitution variants)
///    and try each as an exact registry lookup;
/// 3. fuzzy-match each candidate against all registry names, accepting
///    the best score at or above the cutoff;
/// 4. give up: log a diagnostic and return `None`.
///
/// The resolver holds no mutable state after construction and never
/// fails per call; an unresolvable name is a normal outcome surfaced as
/// `None`.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: &'static Registry,
    special: SpecialMappings,
    config: ResolverConfig,
}

impl Resolver {
    /// Resolver with the standard special mappings and default config.
    pub fn new() -> Self {
        Self {
            registry: Registry::global(),
            special: SpecialMappings::standard(),
            config: ResolverConfig::default(),
        }
    }

    /// Resolver with a custom configuration (validated).
    pub fn with_config(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: Registry::global(),
            special: SpecialMappings::standard(),
            config,
        })
    }

    /// Replace the special-mapping table.
    pub fn with_special_mappings(mut self, special: SpecialMappings) -> Self {
        self.special = special;
        self
    }

    /// Add one override to the special-mapping table.
    pub fn add_special_mapping(&mut self, name: &str, alpha3: &str) {
        self.special.insert(name, alpha3);
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a free-text country name to an alpha-3 code.
    ///
    /// Returns `None` for blank input and for names nothing matched;
    /// never panics or errors for any string input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leitura_geo::Resolver;
    ///
    /// let resolver = Resolver::new();
    /// assert_eq!(resolver.resolve("Reino Unido").as_deref(), Some("GBR"));
    /// assert_eq!(resolver.resolve(""), None);
    /// ```
    pub fn resolve(&self, query: &str) -> Option<String> {
        let folded = fold(query);
        if folded.is_empty() {
            return None;
        }

        // Special mappings win over everything, including fuzzy matches
        // that would point at a current-day country.
        if let Some(code) = self.special.get_folded(&folded) {
            debug!("special mapping: {query:?} -> {code}");
            return Some(code.to_string());
        }

        let variants = candidates(query);

        for candidate in &variants {
            if let Some(country) = self.registry.lookup_name(candidate) {
                debug!("exact match: {query:?} -> {} via {candidate:?}", country.alpha3);
                return Some(country.alpha3.to_string());
            }
        }

        if self.config.fuzzy_enabled {
            for candidate in &variants {
                if let Some((country, score)) = self.best_fuzzy_match(candidate) {
                    debug!(
                        "fuzzy match: {query:?} -> {} ({:.2} via {candidate:?})",
                        country.alpha3, score
                    );
                    return Some(country.alpha3.to_string());
                }
            }
        }

        warn!("no ISO 3166-1 code found for country name {query:?}");
        None
    }

    /// Best fuzzy match for one candidate, if it clears the cutoff.
    ///
    /// Ties keep the earliest registry entry, so the result is
    /// deterministic for a given registry snapshot.
    fn best_fuzzy_match(&self, candidate: &str) -> Option<(&'static Country, f64)> {
        let folded = fold(candidate);
        if folded.is_empty() {
            return None;
        }

        let mut best: Option<(&'static Country, f64)> = None;
        for (name, country) in self.registry.folded_names() {
            let score = normalized_levenshtein(&folded, name);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((country, score));
            }
        }

        best.filter(|(_, score)| *score >= self.config.fuzzy_cutoff)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Resolver {
        Resolver::new()
    }

    // ------------------------------------------------------------------
    // Special mappings
    // ------------------------------------------------------------------

    #[test]
    fn special_mappings_resolve_regardless_of_case_and_accents() {
        let r = resolver();
        assert_eq!(r.resolve("Russia").as_deref(), Some("RUS"));
        assert_eq!(r.resolve("RÚSSIA").as_deref(), Some("RUS"));
        assert_eq!(r.resolve("estados unidos").as_deref(), Some("USA"));
        assert_eq!(r.resolve("Reino Unido").as_deref(), Some("GBR"));
        assert_eq!(r.resolve("União Soviética").as_deref(), Some("SUN"));
        assert_eq!(r.resolve("Coreia do Norte").as_deref(), Some("PRK"));
        assert_eq!(r.resolve("REPÚBLICA TCHECA").as_deref(), Some("CZE"));
    }

    #[test]
    fn every_standard_special_mapping_wins() {
        let r = resolver();
        for (name, code) in SpecialMappings::standard().iter() {
            assert_eq!(r.resolve(name).as_deref(), Some(code), "mapping {name}");
        }
    }

    #[test]
    fn special_mapping_beats_exact_and_fuzzy_matches() {
        // Synthetic override colliding with a registry name: once
        // "Austria" is special-mapped, the exact registry hit (AUT) and
        // any fuzzy match must lose to it.
        let mut r = resolver();
        r.add_special_mapping("Austria", "AUS");
        assert_eq!(r.resolve("Áustria").as_deref(), Some("AUS"));
        assert_eq!(r.resolve("AUSTRIA").as_deref(), Some("AUS"));
    }

    // ------------------------------------------------------------------
    // Exact registry lookups
    // ------------------------------------------------------------------

    #[test]
    fn exact_english_names_resolve() {
        let r = resolver();
        assert_eq!(r.resolve("Germany").as_deref(), Some("DEU"));
        assert_eq!(r.resolve("japan").as_deref(), Some("JPN"));
        assert_eq!(r.resolve("SOUTH KOREA").as_deref(), Some("KOR"));
        assert_eq!(r.resolve("  France  ").as_deref(), Some("FRA"));
    }

    #[test]
    fn accented_forms_of_registry_names_resolve() {
        let r = resolver();
        assert_eq!(r.resolve("Réunion").as_deref(), Some("REU"));
        assert_eq!(r.resolve("curaçao").as_deref(), Some("CUW"));
    }

    // ------------------------------------------------------------------
    // Fuzzy fallback
    // ------------------------------------------------------------------

    #[test]
    fn misspelled_names_resolve_at_default_cutoff() {
        let r = resolver();
        // One edit away from registry names.
        assert_eq!(r.resolve("Brazul").as_deref(), Some("BRA"));
        assert_eq!(r.resolve("Janan").as_deref(), Some("JPN"));
        // Portuguese spelling, one letter off the English name.
        assert_eq!(r.resolve("Brasil").as_deref(), Some("BRA"));
    }

    #[test]
    fn cutoff_of_one_rejects_anything_but_exact() {
        let config = ResolverConfig {
            fuzzy_cutoff: 1.0,
            ..ResolverConfig::default()
        };
        let r = Resolver::with_config(config).unwrap();
        assert_eq!(r.resolve("Brazul"), None);
        assert_eq!(r.resolve("Brazil").as_deref(), Some("BRA"));
    }

    #[test]
    fn fuzzy_can_be_disabled() {
        let config = ResolverConfig {
            fuzzy_enabled: false,
            ..ResolverConfig::default()
        };
        let r = Resolver::with_config(config).unwrap();
        assert_eq!(r.resolve("Brazul"), None);
        assert_eq!(r.resolve("Brazil").as_deref(), Some("BRA"));
    }

    // ------------------------------------------------------------------
    // Unresolved outcomes
    // ------------------------------------------------------------------

    #[test]
    fn fictional_and_blank_names_are_unresolved() {
        let r = resolver();
        assert_eq!(r.resolve("Atlantis"), None);
        assert_eq!(r.resolve(""), None);
        assert_eq!(r.resolve("   "), None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let r = resolver();
        for query in ["Rússia", "Brasil", "Atlantis", "Coreia do Sul"] {
            assert_eq!(r.resolve(query), r.resolve(query));
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    #[test]
    fn config_rejects_out_of_range_cutoff() {
        let config = ResolverConfig {
            fuzzy_cutoff: 1.5,
            ..ResolverConfig::default()
        };
        assert!(Resolver::with_config(config).is_err());
    }

    #[test]
    fn config_deserializes_from_toml_with_defaults() {
        let config: ResolverConfig = toml::from_str("").unwrap();
        assert_eq!(config.fuzzy_cutoff, 0.6);
        assert!(config.fuzzy_enabled);

        let config: ResolverConfig = toml::from_str("fuzzy_cutoff = 0.8").unwrap();
        assert_eq!(config.fuzzy_cutoff, 0.8);
        assert!(config.fuzzy_enabled);
    }
}
