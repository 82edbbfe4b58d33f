//! Leitura Core — shared types, errors, and text utilities.
//!
//! This crate provides the foundational types used across all Leitura crates.
//! It has no internal Leitura dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`book`]: The `Book` record type shared by ingestion and stats
//! - [`error`]: Error types and Result alias
//! - [`text`]: Accent/case folding helpers used by the country resolver

pub mod book;
pub mod error;
pub mod text;

// Re-export key types at crate root for convenience
pub use book::Book;
pub use error::{Error, Result};
pub use text::{fold, strip_accents, title_case};
