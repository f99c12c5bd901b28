// Celulares POA - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Celulares POA";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Known columns (normalized names)
// =============================================================================

/// Phone brand column. Optional; every feature referencing it degrades
/// gracefully when absent.
pub const COL_BRAND: &str = "MARCA_OBJETO";

/// Police station column. Optional.
pub const COL_STATION: &str = "NOME_DELEGACIA";

/// Numeric per-report phone count column. Optional.
pub const COL_QUANTITY: &str = "QUANTIDADE_OBJETO";

// =============================================================================
// View limits
// =============================================================================

/// Number of rows shown in the overview preview table.
pub const PREVIEW_ROWS: usize = 10;

/// Number of entries shown in each frequency bar chart.
pub const CHART_TOP_N: usize = 10;

/// Maximum number of rows rendered in the raw data table. The export always
/// contains all filtered rows; only the on-screen table is capped.
pub const MAX_TABLE_ROWS: usize = 1_000;

// =============================================================================
// Selector sentinels (no filter applied for that dimension)
// =============================================================================

/// "All" sentinel for the brand selector on the drill-down tab.
pub const ALL_BRANDS: &str = "Todas as Marcas";

/// "All" sentinel for the station selector on the drill-down tab.
pub const ALL_STATIONS: &str = "Todas as Delegacias";

/// "All" sentinel for both filters on the raw data tab.
pub const ALL: &str = "Todas";

// =============================================================================
// Export
// =============================================================================

/// Fixed file name offered by the export save dialog.
pub const EXPORT_FILE_NAME: &str = "celulares_subtraidos_poa.csv";

/// UTF-8 byte-order marker prepended to exports for spreadsheet-tool
/// compatibility.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

// =============================================================================
// Ingestion
// =============================================================================

/// File extensions parsed as spreadsheets. Everything else is treated as
/// comma-separated text.
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "xlsb"];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Placeholder shown by metrics whose backing column is absent.
pub const NOT_AVAILABLE: &str = "N/D";
