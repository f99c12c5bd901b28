// Celulares POA - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;

// =============================================================================
// Column name normalization
// =============================================================================

/// Normalize a column label: trim surrounding whitespace, uppercase, and
/// replace internal spaces with underscores.
///
/// Applied exactly once, inside `ReportTable::new`. Idempotent: normalizing
/// an already-normalized label yields the same label, so downstream code may
/// call it defensively on user-facing strings without changing meaning.
pub fn normalize_column_name(label: &str) -> String {
    label.trim().to_uppercase().replace(' ', "_")
}

// =============================================================================
// Report Table (normalised output of ingestion)
// =============================================================================

/// The in-memory tabular representation of one uploaded dataset.
///
/// Immutable after construction for the lifetime of one uploaded file:
/// views derive row-index lists or filtered copies, never mutate the
/// source table. Missing cells are `None`.
#[derive(Debug, Clone)]
pub struct ReportTable {
    /// Normalized column labels, in source order.
    columns: Vec<String>,

    /// Row-major cell data. Every row has exactly `columns.len()` cells.
    rows: Vec<Vec<Option<String>>>,
}

impl ReportTable {
    /// Build a table from raw column labels and row data.
    ///
    /// Column labels are normalized here and nowhere else. Rows shorter
    /// than the header are padded with missing cells; longer rows are
    /// truncated to the header width.
    pub fn new(raw_columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let columns: Vec<String> = raw_columns
            .iter()
            .map(|c| normalize_column_name(c))
            .collect();
        let width = columns.len();

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Normalized column labels in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in source order.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Schema-aware column accessor. Returns `None` when the column is
    /// absent so each view checks presence exactly once.
    pub fn column(&self, name: &str) -> Option<ColumnRef<'_>> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|idx| ColumnRef { table: self, idx })
    }

    /// A single cell, `None` if the cell is missing or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }

    /// Derive a new table containing only the given rows (by index),
    /// preserving order. Out-of-range indices are skipped.
    pub fn select_rows(&self, indices: &[usize]) -> ReportTable {
        ReportTable {
            columns: self.columns.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
        }
    }
}

/// Borrowed view of one column of a `ReportTable`.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRef<'a> {
    table: &'a ReportTable,
    idx: usize,
}

impl<'a> ColumnRef<'a> {
    /// The column's normalized name.
    pub fn name(&self) -> &'a str {
        &self.table.columns[self.idx]
    }

    /// Iterate the column's cells in row order. Missing cells yield `None`.
    pub fn values(&self) -> impl Iterator<Item = Option<&'a str>> + 'a {
        let idx = self.idx;
        self.table
            .rows
            .iter()
            .map(move |row| row.get(idx).and_then(|c| c.as_deref()))
    }

    /// The cell in the given row.
    pub fn value(&self, row: usize) -> Option<&'a str> {
        self.table.cell(row, self.idx)
    }
}

// =============================================================================
// Overview (output of the overview metrics view)
// =============================================================================

/// Scalar summaries for the overview tab. Counts whose backing column is
/// absent are `None` and render as a placeholder.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    /// Total number of reports (rows).
    pub rows: usize,

    /// Number of columns.
    pub columns: usize,

    /// Distinct non-missing brand values, if the brand column exists.
    pub distinct_brands: Option<usize>,

    /// Distinct non-missing station values, if the station column exists.
    pub distinct_stations: Option<usize>,
}
