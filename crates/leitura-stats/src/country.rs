//! Per-country aggregation for the world map.

use std::collections::BTreeMap;

use log::warn;
use serde::Serialize;

use leitura_core::Book;
use leitura_geo::Resolver;

/// The highest-rated book within one country group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopBook {
    /// Book title.
    pub title: String,
    /// Its rating.
    pub rating: f64,
}

/// One country's slice of the reading log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryBooks {
    /// Country name as entered in the log.
    pub country: String,
    /// Resolved ISO 3166-1 alpha-3 code.
    pub code: String,
    /// Number of books from this country.
    pub books: usize,
    /// Highest-rated book, if any row in the group carries a rating.
    pub top_book: Option<TopBook>,
}

/// Group books by their raw country cell, resolve each group's name once,
/// and report count plus top-rated book per country.
///
/// Groups whose country name cannot be resolved are dropped (with a
/// `warn`), mirroring how the map view must exclude rows it cannot
/// place. Output is sorted by country name for deterministic results.
pub fn aggregate_by_country(books: &[Book], resolver: &Resolver) -> Vec<CountryBooks> {
    let mut groups: BTreeMap<&str, Vec<&Book>> = BTreeMap::new();
    for book in books {
        if book.country.is_empty() {
            continue;
        }
        groups.entry(book.country.as_str()).or_default().push(book);
    }

    let mut out = Vec::with_capacity(groups.len());
    for (country, group) in groups {
        let Some(code) = resolver.resolve(country) else {
            warn!("dropping {} book(s): unresolved country {country:?}", group.len());
            continue;
        };

        let top_book = group
            .iter()
            .filter_map(|book| book.rating.map(|rating| (book, rating)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(book, rating)| TopBook {
                title: book.title.clone(),
                rating,
            });

        out.push(CountryBooks {
            country: country.to_string(),
            code,
            books: group.len(),
            top_book,
        });
    }

    out
}
