//! Error types for the Leitura crates.

use thiserror::Error;

/// Result type alias for Leitura operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and processing a reading log.
///
/// The enum is `#[non_exhaustive]` to allow adding new error types
/// without breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The spreadsheet export is missing required columns.
    ///
    /// Raised once, at header validation time, with the full list of
    /// absent columns rather than failing per-cell later.
    #[error("missing required columns: {}", missing.join(", "))]
    MissingColumns {
        /// Names of the absent columns, in schema order.
        missing: Vec<String>,
    },

    /// CSV parsing error (malformed row, wrong field count, etc.)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error (file not found, permissions, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Build a [`Error::MissingColumns`] from anything iterable over names.
    pub fn missing_columns<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingColumns {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a [`Error::Config`] with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_every_column() {
        let err = Error::missing_columns(["País", "Nota"]);
        assert_eq!(err.to_string(), "missing required columns: País, Nota");
    }

    #[test]
    fn config_error_message() {
        let err = Error::config("fuzzy_cutoff must be within 0.0..=1.0");
        assert_eq!(
            err.to_string(),
            "configuration error: fuzzy_cutoff must be within 0.0..=1.0"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
