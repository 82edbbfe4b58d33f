//! Country registry and free-text country-name resolution.
//!
//! The reading log stores the country of each book as free text in
//! Portuguese: accented, inconsistently cased, sometimes a variant
//! spelling, sometimes a state that no longer exists. Placing that data on
//! a world map needs ISO 3166-1 alpha-3 codes, so this crate provides a
//! best-effort resolver from human-entered names to codes.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     leitura-geo                        │
//! ├────────────────────────────────────────────────────────┤
//! │  Resolver (ordered pipeline, first match wins)         │
//! │  ├── SpecialMappings (hardcoded overrides)             │
//! │  ├── exact registry lookup per candidate               │
//! │  └── fuzzy fallback (normalized Levenshtein ≥ cutoff)  │
//! ├────────────────────────────────────────────────────────┤
//! │  candidates (casing / accent / word-substitution       │
//! │              variants of the query)                    │
//! │  Registry (embedded ISO 3166-1 table, folded index)    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use leitura_geo::Resolver;
//!
//! let resolver = Resolver::new();
//!
//! assert_eq!(resolver.resolve("Rússia").as_deref(), Some("RUS"));
//! assert_eq!(resolver.resolve("estados unidos").as_deref(), Some("USA"));
//! assert_eq!(resolver.resolve("Atlantis"), None);
//! ```

pub mod candidates;
pub mod registry;
pub mod resolver;
pub mod special;

mod proptests;

// Re-exports
pub use candidates::candidates;
pub use registry::{Country, Registry};
pub use resolver::{Resolver, ResolverConfig};
pub use special::SpecialMappings;
