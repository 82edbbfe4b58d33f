//! The `Book` record: one finished book from the reading log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single row of the reading log, after ingestion and type coercion.
///
/// Free-text fields keep the user's original spelling (including accents);
/// the country resolver handles normalization on its side. Numeric fields
/// are optional because blank cells are common in hand-maintained
/// spreadsheets and must not abort ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Row identifier from the spreadsheet (`ID`).
    pub id: Option<u32>,
    /// Book title (`Título`).
    pub title: String,
    /// Genre (`Gênero`).
    pub genre: String,
    /// Fiction / non-fiction marker (`Ficção`), kept as entered.
    pub fiction: String,
    /// Country of publication (`País`), free text in Portuguese.
    pub country: String,
    /// World region (`Região`).
    pub region: String,
    /// Author name (`Autor`).
    pub author: String,
    /// Publisher (`Editora`).
    pub publisher: String,
    /// Year of publication (`Ano de Publicação`).
    pub publication_year: Option<i32>,
    /// Century label (`Séc`), kept as entered (e.g. "XIX").
    pub century: String,
    /// Author gender (`Sexo Autor`).
    pub author_gender: String,
    /// Author ethnicity (`Etnia`).
    pub author_ethnicity: String,
    /// Page count (`Páginas`).
    pub pages: Option<u32>,
    /// Completion date (`Conclusão`).
    pub finished_on: Option<NaiveDate>,
    /// Rating (`Nota`), on the log's own scale.
    pub rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_optional_fields_as_null() {
        let book = Book {
            id: None,
            title: "Dom Casmurro".to_string(),
            genre: "Romance".to_string(),
            fiction: "Sim".to_string(),
            country: "Brasil".to_string(),
            region: "América do Sul".to_string(),
            author: "Machado de Assis".to_string(),
            publisher: "Garnier".to_string(),
            publication_year: Some(1899),
            century: "XIX".to_string(),
            author_gender: "M".to_string(),
            author_ethnicity: "Negro".to_string(),
            pages: None,
            finished_on: None,
            rating: Some(9.5),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["title"], "Dom Casmurro");
        assert!(json["pages"].is_null());
        assert!(json["finished_on"].is_null());
    }
}
