//! CSV reading and lenient cell parsing.

use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use log::{debug, warn};
use serde::Deserialize;

use leitura_core::{Book, Result};

use crate::schema::validate_headers;

/// One raw CSV row, fields exactly as the spreadsheet names them.
///
/// Everything is read as a string first; numeric and date coercion is a
/// separate, lenient step so one malformed cell degrades to `None`
/// instead of aborting the whole load.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "ID", default)]
    id: String,
    #[serde(rename = "Título", default)]
    title: String,
    #[serde(rename = "Gênero", default)]
    genre: String,
    #[serde(rename = "Ficção", default)]
    fiction: String,
    #[serde(rename = "País", default)]
    country: String,
    #[serde(rename = "Região", default)]
    region: String,
    #[serde(rename = "Autor", default)]
    author: String,
    #[serde(rename = "Editora", default)]
    publisher: String,
    #[serde(rename = "Ano de Publicação", default)]
    publication_year: String,
    #[serde(rename = "Séc", default)]
    century: String,
    #[serde(rename = "Sexo Autor", default)]
    author_gender: String,
    #[serde(rename = "Etnia", default)]
    author_ethnicity: String,
    #[serde(rename = "Páginas", default)]
    pages: String,
    #[serde(rename = "Conclusão", default)]
    finished_on: String,
    #[serde(rename = "Nota", default)]
    rating: String,
}

impl RawRecord {
    fn into_book(self, row: usize) -> Book {
        Book {
            id: parse_int(&self.id, row, "ID"),
            title: self.title.trim().to_string(),
            genre: self.genre.trim().to_string(),
            fiction: self.fiction.trim().to_string(),
            country: self.country.trim().to_string(),
            region: self.region.trim().to_string(),
            author: self.author.trim().to_string(),
            publisher: self.publisher.trim().to_string(),
            publication_year: parse_int(&self.publication_year, row, "Ano de Publicação"),
            century: self.century.trim().to_string(),
            author_gender: self.author_gender.trim().to_string(),
            author_ethnicity: self.author_ethnicity.trim().to_string(),
            pages: parse_int(&self.pages, row, "Páginas"),
            finished_on: parse_date(&self.finished_on, row),
            rating: parse_rating(&self.rating, row),
        }
    }
}

fn parse_int<T: std::str::FromStr>(cell: &str, row: usize, column: &str) -> Option<T> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    match cell.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("row {row}: unparseable {column} value {cell:?}, treating as blank");
            None
        }
    }
}

/// Ratings come in both decimal-point and Brazilian decimal-comma forms
/// ("9.5" and "9,5").
fn parse_rating(cell: &str, row: usize) -> Option<f64> {
    let cell = cell.trim().replace(',', ".");
    if cell.is_empty() {
        return None;
    }
    match cell.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("row {row}: unparseable Nota value {cell:?}, treating as blank");
            None
        }
    }
}

/// Completion dates appear as dd/mm/yyyy in the export; ISO dates are
/// accepted as well since re-saved files sometimes carry them.
fn parse_date(cell: &str, row: usize) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    for format in ["%d/%m/%Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(cell, format) {
            return Some(date);
        }
    }
    warn!("row {row}: unparseable Conclusão value {cell:?}, treating as blank");
    None
}

/// Read books from any CSV source.
///
/// Validates the header schema first; row cells are then coerced
/// leniently (see [`RawRecord`]).
pub fn read_books_from_reader<R: io::Read>(reader: R) -> Result<Vec<Book>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    validate_headers(csv_reader.headers()?)?;

    let mut books = Vec::new();
    for (index, record) in csv_reader.deserialize::<RawRecord>().enumerate() {
        // Header is line 1, first data row line 2.
        let row = index + 2;
        books.push(record?.into_book(row));
    }

    debug!("loaded {} books", books.len());
    Ok(books)
}

/// Read books from a CSV file on disk.
pub fn read_books<P: AsRef<Path>>(path: P) -> Result<Vec<Book>> {
    let file = File::open(path.as_ref())?;
    read_books_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "ID,Título,Gênero,Ficção,País,Região,Autor,Editora,Ano de Publicação,Séc,Sexo Autor,Etnia,Páginas,Conclusão,Nota";

    fn csv_with_rows(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out
    }

    #[test]
    fn reads_a_complete_row() {
        let data = csv_with_rows(&[
            "1,Dom Casmurro,Romance,Sim,Brasil,América do Sul,Machado de Assis,Garnier,1899,XIX,M,Negro,256,12/03/2024,9.5",
        ]);
        let books = read_books_from_reader(data.as_bytes()).unwrap();
        assert_eq!(books.len(), 1);

        let book = &books[0];
        assert_eq!(book.id, Some(1));
        assert_eq!(book.title, "Dom Casmurro");
        assert_eq!(book.country, "Brasil");
        assert_eq!(book.publication_year, Some(1899));
        assert_eq!(book.pages, Some(256));
        assert_eq!(book.finished_on, NaiveDate::from_ymd_opt(2024, 3, 12));
        assert_eq!(book.rating, Some(9.5));
    }

    #[test]
    fn blank_and_malformed_cells_become_none() {
        let data = csv_with_rows(&[
            ",A Hora da Estrela,Romance,Sim,Brasil,,Clarice Lispector,,n/a,XX,F,,,,",
        ]);
        let books = read_books_from_reader(data.as_bytes()).unwrap();
        let book = &books[0];
        assert_eq!(book.id, None);
        assert_eq!(book.publication_year, None);
        assert_eq!(book.pages, None);
        assert_eq!(book.finished_on, None);
        assert_eq!(book.rating, None);
    }

    #[test]
    fn decimal_comma_ratings_parse() {
        let data = csv_with_rows(&[
            "2,Ensaio Sobre a Cegueira,Romance,Sim,Portugal,Europa,José Saramago,Caminho,1995,XX,M,Branco,310,01/07/2023,\"8,5\"",
        ]);
        let books = read_books_from_reader(data.as_bytes()).unwrap();
        assert_eq!(books[0].rating, Some(8.5));
    }

    #[test]
    fn iso_dates_are_accepted() {
        let data = csv_with_rows(&[
            "3,Kafka à Beira-Mar,Romance,Sim,Japão,Ásia,Haruki Murakami,Alfaguara,2002,XXI,M,Asiático,576,2023-11-30,9",
        ]);
        let books = read_books_from_reader(data.as_bytes()).unwrap();
        assert_eq!(
            books[0].finished_on,
            NaiveDate::from_ymd_opt(2023, 11, 30)
        );
    }

    #[test]
    fn missing_columns_fail_before_any_row_parsing() {
        let data = "ID,Título,Gênero\n1,Dom Casmurro,Romance\n";
        let err = read_books_from_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("País"));
        assert!(err.to_string().contains("Nota"));
    }

    #[test]
    fn reads_from_a_file_on_disk() {
        let data = csv_with_rows(&[
            "4,Pedro Páramo,Romance,Sim,México,América do Norte,Juan Rulfo,FCE,1955,XX,M,Latino,128,05/02/2024,8",
        ]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(data.as_bytes()).unwrap();

        let books = read_books(file.path()).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].country, "México");
    }
}
