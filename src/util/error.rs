// Celulares POA - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Ingestion errors
// ---------------------------------------------------------------------------

/// Errors raised at the ingestion boundary. All of these surface as a
/// single user-visible message; no partial table is ever produced.
#[derive(Debug)]
pub enum IngestError {
    /// CSV content could not be parsed.
    Csv { file: String, source: csv::Error },

    /// Spreadsheet content could not be decoded.
    Spreadsheet { file: String, reason: String },

    /// The spreadsheet contains no worksheets.
    NoWorksheet { file: String },

    /// The file has no header row, so no columns can be named.
    MissingHeader { file: String },

    /// I/O error while reading the uploaded file.
    Io { file: String, source: io::Error },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv { file, source } => {
                write!(f, "'{file}': cannot parse as CSV: {source}")
            }
            Self::Spreadsheet { file, reason } => {
                write!(f, "'{file}': cannot decode spreadsheet: {reason}")
            }
            Self::NoWorksheet { file } => {
                write!(f, "'{file}': spreadsheet has no worksheets")
            }
            Self::MissingHeader { file } => {
                write!(f, "'{file}': no header row found, cannot name columns")
            }
            Self::Io { file, source } => {
                write!(f, "'{file}': I/O error: {source}")
            }
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// Export was requested for an empty filtered result.
    /// The UI disables the action, so reaching this is a caller bug.
    NothingToExport,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::NothingToExport => {
                write!(f, "Nothing to export: the filtered result is empty")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::NothingToExport => None,
        }
    }
}
