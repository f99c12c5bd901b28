// Celulares POA - core/ingest.rs
//
// Ingestion boundary: one uploaded file in, one normalized ReportTable out.
//
// Dispatch is by file extension: spreadsheet extensions go through calamine,
// everything else is treated as comma-separated text with a header row.
// Any parse failure is returned as a typed IngestError; the caller surfaces
// a single user-visible message and skips all downstream rendering.

use crate::core::model::ReportTable;
use crate::util::constants::{SPREADSHEET_EXTENSIONS, UTF8_BOM};
use crate::util::error::IngestError;
use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};
use sha2::{Digest, Sha256};
use std::io::Cursor;

/// True if the declared file name carries a spreadsheet extension.
pub fn is_spreadsheet(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    SPREADSHEET_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// SHA-256 content fingerprint, hex-encoded.
///
/// Keys the single-entry parse cache: re-selecting a file with identical
/// content must not incur a second parse.
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Parse an uploaded file into a normalized ReportTable.
///
/// `file_name` is the declared name (used only for dispatch and error
/// context); `bytes` is the full file content.
pub fn load_table(bytes: &[u8], file_name: &str) -> Result<ReportTable, IngestError> {
    let table = if is_spreadsheet(file_name) {
        load_spreadsheet(bytes, file_name)?
    } else {
        load_csv(bytes, file_name)?
    };

    tracing::info!(
        file = file_name,
        rows = table.row_count(),
        columns = table.column_count(),
        "Loaded report table"
    );
    Ok(table)
}

/// Parse comma-separated text with a header row. A leading UTF-8 BOM
/// (present on our own exports) is stripped before parsing.
fn load_csv(bytes: &[u8], file_name: &str) -> Result<ReportTable, IngestError> {
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::Csv {
            file: file_name.to_string(),
            source: e,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        return Err(IngestError::MissingHeader {
            file: file_name.to_string(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Csv {
            file: file_name.to_string(),
            source: e,
        })?;
        rows.push(
            record
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(ReportTable::new(headers, rows))
}

/// Decode the first worksheet of a spreadsheet. The first row is the
/// header; typed cells are stringified, empty and error cells become
/// missing values.
fn load_spreadsheet(bytes: &[u8], file_name: &str) -> Result<ReportTable, IngestError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|e| IngestError::Spreadsheet {
            file: file_name.to_string(),
            reason: e.to_string(),
        })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            file: file_name.to_string(),
        })?
        .map_err(|e| IngestError::Spreadsheet {
            file: file_name.to_string(),
            reason: e.to_string(),
        })?;

    let mut row_iter = range.rows();
    let headers: Vec<String> = match row_iter.next() {
        Some(header_row) => header_row
            .iter()
            .map(|c| DataType::as_string(c).unwrap_or_else(|| c.to_string()))
            .collect(),
        None => {
            return Err(IngestError::MissingHeader {
                file: file_name.to_string(),
            })
        }
    };

    if headers.is_empty() {
        return Err(IngestError::MissingHeader {
            file: file_name.to_string(),
        });
    }

    let rows: Vec<Vec<Option<String>>> = row_iter
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(ReportTable::new(headers, rows))
}

/// Stringify a typed spreadsheet cell. Empty and error cells are missing.
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        other => DataType::as_string(other).or_else(|| Some(other.to_string())),
    }
}
