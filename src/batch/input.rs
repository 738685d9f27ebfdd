//! Input table loading.

use std::io::Read;
use std::path::Path;

use crate::error_handling::InputError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One (label, website) pair from the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub label: String,
    pub website: String,
}

impl InputRow {
    pub fn new(label: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            website: website.into(),
        }
    }
}

/// Loads every row of a CSV file into memory.
///
/// The file must exist and have a `.csv` extension. A leading UTF-8 BOM is
/// ignored and invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// Returns `InputError` if the file is missing, is not a CSV, has an unnamed
/// header column, lacks a required column, or cannot be read.
pub fn read_rows(
    path: &Path,
    title_column: &str,
    website_column: &str,
) -> Result<Vec<InputRow>, InputError> {
    if !path.is_file() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(InputError::NotCsv(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    let text = String::from_utf8_lossy(bytes);
    parse_rows(text.as_bytes(), title_column, website_column)
}

/// Parses CSV rows from any reader.
///
/// Rows may be ragged; a missing cell reads as empty. Labels and websites are
/// trimmed.
pub fn parse_rows<R: Read>(
    reader: R,
    title_column: &str,
    website_column: &str,
) -> Result<Vec<InputRow>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(InputError::MissingHeader);
    }
    if let Some(position) = headers.iter().position(|h| h.trim().is_empty()) {
        return Err(InputError::UnnamedColumn(position + 1));
    }

    let column_index = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| InputError::MissingColumn(name.to_string()))
    };
    let title_index = column_index(title_column)?;
    let website_index = column_index(website_column)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(InputRow::new(
            record.get(title_index).unwrap_or_default().trim(),
            record.get(website_index).unwrap_or_default().trim(),
        ));
    }
    log::debug!("Loaded {} input rows", rows.len());
    Ok(rows)
}
