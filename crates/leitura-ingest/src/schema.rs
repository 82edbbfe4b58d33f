//! Header schema for the reading-log export.

use csv::StringRecord;

use leitura_core::{Error, Result};

/// Columns the export must carry, with the spreadsheet's original names.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "ID",
    "Título",
    "Gênero",
    "Ficção",
    "País",
    "Região",
    "Autor",
    "Editora",
    "Ano de Publicação",
    "Séc",
    "Sexo Autor",
    "Etnia",
    "Páginas",
    "Conclusão",
    "Nota",
];

/// Check the header row against [`REQUIRED_COLUMNS`].
///
/// Returns [`Error::MissingColumns`] naming every absent column in schema
/// order, so a caller reports the whole problem at once instead of
/// failing column-by-column. Extra columns are allowed and ignored.
pub fn validate_headers(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|header| header.trim() == **required))
        .map(|required| (*required).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::missing_columns(missing))
    }
}
