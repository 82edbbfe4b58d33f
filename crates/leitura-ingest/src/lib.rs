//! Reading-log ingestion.
//!
//! Loads the CSV export of the reading-log spreadsheet (the `DB` sheet)
//! into typed [`Book`](leitura_core::Book) records. The header schema is
//! validated once, up front, producing a single error that lists every
//! missing column; individual cells are parsed leniently so a blank page
//! count or rating does not abort the load.
//!
//! # Example
//!
//! ```rust
//! use leitura_ingest::read_books_from_reader;
//!
//! let csv = "\
//! ID,Título,Gênero,Ficção,País,Região,Autor,Editora,Ano de Publicação,Séc,Sexo Autor,Etnia,Páginas,Conclusão,Nota
//! 1,Dom Casmurro,Romance,Sim,Brasil,América do Sul,Machado de Assis,Garnier,1899,XIX,M,Negro,256,12/03/2024,9.5
//! ";
//!
//! let books = read_books_from_reader(csv.as_bytes()).unwrap();
//! assert_eq!(books.len(), 1);
//! assert_eq!(books[0].country, "Brasil");
//! assert_eq!(books[0].pages, Some(256));
//! ```

pub mod reader;
pub mod schema;

pub use reader::{read_books, read_books_from_reader};
pub use schema::{validate_headers, REQUIRED_COLUMNS};
