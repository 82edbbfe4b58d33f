//! Retrospective metrics: value counts, grouped sums and means, the
//! year-range filter, and headline summary numbers.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use leitura_core::Book;

/// A breakdown dimension of the retrospective view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// By genre (`Gênero`).
    Genre,
    /// By author (`Autor`).
    Author,
    /// By country as entered (`País`), unresolved.
    Country,
    /// By world region (`Região`).
    Region,
    /// By year of publication (`Ano de Publicação`).
    PublicationYear,
    /// By century label (`Séc`).
    Century,
    /// By author gender (`Sexo Autor`).
    AuthorGender,
    /// By author ethnicity (`Etnia`).
    AuthorEthnicity,
    /// By fiction / non-fiction (`Ficção`).
    Fiction,
    /// By completion year (`Conclusão`).
    FinishedYear,
}

impl Dimension {
    /// The grouping key for one book, or `None` when the cell is blank.
    fn key(&self, book: &Book) -> Option<String> {
        let key = match self {
            Self::Genre => book.genre.clone(),
            Self::Author => book.author.clone(),
            Self::Country => book.country.clone(),
            Self::Region => book.region.clone(),
            Self::PublicationYear => {
                return book.publication_year.map(|year| year.to_string());
            }
            Self::Century => book.century.clone(),
            Self::AuthorGender => book.author_gender.clone(),
            Self::AuthorEthnicity => book.author_ethnicity.clone(),
            Self::Fiction => book.fiction.clone(),
            Self::FinishedYear => {
                return book.finished_on.map(|date| date.year().to_string());
            }
        };
        if key.is_empty() { None } else { Some(key) }
    }

    /// Year-valued dimensions are reported in chronological order rather
    /// than by descending count, matching how the original charts sorted
    /// their year axis.
    fn is_chronological(&self) -> bool {
        matches!(self, Self::PublicationYear | Self::FinishedYear)
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "genre" => Ok(Self::Genre),
            "author" => Ok(Self::Author),
            "country" => Ok(Self::Country),
            "region" => Ok(Self::Region),
            "publication_year" | "year" => Ok(Self::PublicationYear),
            "century" => Ok(Self::Century),
            "author_gender" | "gender" => Ok(Self::AuthorGender),
            "author_ethnicity" | "ethnicity" => Ok(Self::AuthorEthnicity),
            "fiction" => Ok(Self::Fiction),
            "finished_year" | "finished" => Ok(Self::FinishedYear),
            other => Err(format!("unknown dimension: {other}")),
        }
    }
}

/// Value counts along one dimension. Year-valued dimensions come out in
/// chronological order; everything else is highest count first, with
/// ties broken on the key so output is deterministic. Rows with a blank
/// cell are skipped.
pub fn count_by(books: &[Book], dimension: Dimension) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for book in books {
        if let Some(key) = dimension.key(book) {
            *counts.entry(key).or_default() += 1;
        }
    }

    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    if dimension.is_chronological() {
        out.sort_by_key(|(key, _)| key.parse::<i64>().unwrap_or(i64::MAX));
    } else {
        out.sort_by(|(key_a, count_a), (key_b, count_b)| {
            count_b.cmp(count_a).then_with(|| key_a.cmp(key_b))
        });
    }
    out
}

/// Total pages read per genre, alphabetical by genre.
pub fn pages_by_genre(books: &[Book]) -> Vec<(String, u64)> {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    for book in books {
        if book.genre.is_empty() {
            continue;
        }
        if let Some(pages) = book.pages {
            *totals.entry(book.genre.clone()).or_default() += u64::from(pages);
        }
    }
    totals.into_iter().collect()
}

/// Mean rating per genre, alphabetical by genre. Unrated books do not
/// count toward the mean.
pub fn mean_rating_by_genre(books: &[Book]) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for book in books {
        if book.genre.is_empty() {
            continue;
        }
        if let Some(rating) = book.rating {
            let entry = sums.entry(book.genre.clone()).or_insert((0.0, 0));
            entry.0 += rating;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(genre, (sum, count))| (genre, sum / count as f64))
        .collect()
}

/// Books whose publication year falls within `min..=max`. Books without
/// a year are excluded, matching the original slider behavior.
pub fn filter_year_range(books: &[Book], min: i32, max: i32) -> Vec<Book> {
    books
        .iter()
        .filter(|book| {
            book.publication_year
                .is_some_and(|year| (min..=max).contains(&year))
        })
        .cloned()
        .collect()
}

/// Headline numbers for the whole log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of books.
    pub books: usize,
    /// Total pages across books with a page count.
    pub total_pages: u64,
    /// Mean page count (over books with a page count).
    pub mean_pages: Option<f64>,
    /// Mean rating (over rated books).
    pub mean_rating: Option<f64>,
}

/// Compute the headline summary.
pub fn summary(books: &[Book]) -> Summary {
    let page_counts: Vec<u64> = books
        .iter()
        .filter_map(|book| book.pages.map(u64::from))
        .collect();
    let ratings: Vec<f64> = books.iter().filter_map(|book| book.rating).collect();

    let total_pages: u64 = page_counts.iter().sum();
    let mean_pages = if page_counts.is_empty() {
        None
    } else {
        Some(total_pages as f64 / page_counts.len() as f64)
    };
    let mean_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    Summary {
        books: books.len(),
        total_pages,
        mean_pages,
        mean_rating,
    }
}
