// Celulares POA - core/export.rs
//
// CSV export of a filtered report table.
// Core layer: writes to any Write trait object.

use crate::core::model::ReportTable;
use crate::util::constants::UTF8_BOM;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export a table to CSV: UTF-8 with a byte-order marker, normalized
/// column names as the header, one row per record, no index column.
///
/// Returns the number of data rows written. Exporting an empty table is
/// a caller bug (the UI suppresses the action) and returns an error.
pub fn export_csv<W: Write>(
    table: &ReportTable,
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    if table.row_count() == 0 {
        return Err(ExportError::NothingToExport);
    }

    // BOM first, so spreadsheet tools detect the encoding.
    writer.write_all(UTF8_BOM).map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(table.columns())
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for row in table.rows() {
        csv_writer
            .write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}
