#![forbid(unsafe_code)]

//! Leitura CLI
//!
//! Command-line interface over the reading-log analytics crates:
//! country resolution, schema validation, map data, and retrospective
//! reports. Output is JSON on stdout; diagnostics go to stderr via
//! `env_logger` (`RUST_LOG=debug` for resolver tracing).

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use leitura_geo::{Resolver, ResolverConfig};
use leitura_ingest::read_books;
use leitura_stats::{
    aggregate_by_country, count_by, filter_year_range, mean_rating_by_genre, pages_by_genre,
    summary, Dimension, Summary,
};

/// Leitura - reading-log analytics
#[derive(Parser, Debug)]
#[command(name = "leitura")]
#[command(version, about = "Reading-log analytics and country resolution", long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve country names to ISO 3166-1 alpha-3 codes
    Resolve {
        /// Country names (free text, Portuguese accepted)
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Validate a reading-log CSV export against the required schema
    Validate {
        /// Path to the CSV export
        file: PathBuf,
    },
    /// Emit per-country map data as JSON
    Map {
        /// Path to the CSV export
        file: PathBuf,
    },
    /// Emit a retrospective report as JSON
    Retro {
        /// Path to the CSV export
        file: PathBuf,
        /// Restrict the report to one dimension (genre, author, country,
        /// region, year, century, gender, ethnicity, fiction, finished)
        #[arg(long)]
        column: Option<Dimension>,
        /// Only count books published on or after this year
        #[arg(long)]
        year_min: Option<i32>,
        /// Only count books published on or before this year
        #[arg(long)]
        year_max: Option<i32>,
    },
}

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
struct Config {
    /// `[resolver]` section.
    #[serde(default)]
    resolver: ResolverConfig,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            let config: Config = toml::from_str(&raw)
                .with_context(|| format!("parsing config file {}", path.display()))?;
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

#[derive(Debug, Serialize)]
struct CountRow {
    key: String,
    count: usize,
}

#[derive(Debug, Serialize)]
struct RetroReport {
    summary: Summary,
    genres: Vec<CountRow>,
    authors: Vec<CountRow>,
    countries: Vec<CountRow>,
    regions: Vec<CountRow>,
    publication_years: Vec<CountRow>,
    centuries: Vec<CountRow>,
    author_genders: Vec<CountRow>,
    author_ethnicities: Vec<CountRow>,
    fiction: Vec<CountRow>,
    finished_years: Vec<CountRow>,
    pages_by_genre: Vec<(String, u64)>,
    mean_rating_by_genre: Vec<(String, f64)>,
}

fn count_rows(books: &[leitura_core::Book], dimension: Dimension) -> Vec<CountRow> {
    count_by(books, dimension)
        .into_iter()
        .map(|(key, count)| CountRow { key, count })
        .collect()
}

/// Print `name -> code` lines and return the number of unresolved names.
/// A nonzero return maps to exit code 1 in `main`.
fn resolve_names(resolver: &Resolver, names: &[String]) -> usize {
    let mut unresolved = 0;
    for name in names {
        match resolver.resolve(name) {
            Some(code) => println!("{name} -> {code}"),
            None => {
                println!("{name} -> ?");
                unresolved += 1;
            }
        }
    }
    unresolved
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let resolver = Resolver::with_config(config.resolver)?;

    match args.command {
        Command::Resolve { names } => {
            if resolve_names(&resolver, &names) > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Validate { file } => {
            let books = read_books(&file)?;
            println!("schema OK ({} rows)", books.len());
        }
        Command::Map { file } => {
            let books = read_books(&file)?;
            let aggregated = aggregate_by_country(&books, &resolver);
            println!("{}", serde_json::to_string_pretty(&aggregated)?);
        }
        Command::Retro {
            file,
            column,
            year_min,
            year_max,
        } => {
            let mut books = read_books(&file)?;
            if year_min.is_some() || year_max.is_some() {
                books = filter_year_range(
                    &books,
                    year_min.unwrap_or(i32::MIN),
                    year_max.unwrap_or(i32::MAX),
                );
            }

            match column {
                Some(dimension) => {
                    let rows = count_rows(&books, dimension);
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                None => {
                    let report = RetroReport {
                        summary: summary(&books),
                        genres: count_rows(&books, Dimension::Genre),
                        authors: count_rows(&books, Dimension::Author),
                        countries: count_rows(&books, Dimension::Country),
                        regions: count_rows(&books, Dimension::Region),
                        publication_years: count_rows(&books, Dimension::PublicationYear),
                        centuries: count_rows(&books, Dimension::Century),
                        author_genders: count_rows(&books, Dimension::AuthorGender),
                        author_ethnicities: count_rows(&books, Dimension::AuthorEthnicity),
                        fiction: count_rows(&books, Dimension::Fiction),
                        finished_years: count_rows(&books, Dimension::FinishedYear),
                        pages_by_genre: pages_by_genre(&books),
                        mean_rating_by_genre: mean_rating_by_genre(&books),
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn retro_flags_parse() {
        let args = Args::try_parse_from([
            "leitura", "retro", "books.csv", "--column", "genre", "--year-min", "1900",
        ])
        .unwrap();
        match args.command {
            Command::Retro {
                column, year_min, ..
            } => {
                assert_eq!(column, Some(Dimension::Genre));
                assert_eq!(year_min, Some(1900));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unresolved_names_drive_the_failure_exit_code() {
        let resolver = Resolver::new();

        let names = vec!["Brasil".to_string(), "Reino Unido".to_string()];
        assert_eq!(resolve_names(&resolver, &names), 0);

        let names = vec!["Brasil".to_string(), "Atlantis".to_string()];
        assert_eq!(resolve_names(&resolver, &names), 1);
    }

    #[test]
    fn missing_config_file_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.resolver.fuzzy_cutoff, 0.6);
    }

    #[test]
    fn config_file_overrides_resolver_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[resolver]\nfuzzy_cutoff = 0.75").unwrap();

        let path = file.path().to_path_buf();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.resolver.fuzzy_cutoff, 0.75);
        assert!(config.resolver.fuzzy_enabled);
    }
}
