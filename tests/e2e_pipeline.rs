// Celulares POA - tests/e2e_pipeline.rs
//
// End-to-end tests for the ingest → stats → filter → export pipeline.
//
// These tests exercise real fixture files on disk — a genuine .xlsx
// archive and CSV exports — through the same code paths the GUI uses:
// no mocks, no stubs. This covers the full path from an uploaded file
// to a normalized ReportTable, derived views, and a CSV download that
// round-trips back through ingestion.

use celulares_poa::app::state::AppState;
use celulares_poa::core::export::export_csv;
use celulares_poa::core::ingest::{fingerprint, load_table};
use celulares_poa::core::model::ReportTable;
use celulares_poa::core::stats::{
    drill_summary, matching_rows, overview, selector_options, value_counts_top, RowFilter,
};
use celulares_poa::util::error::IngestError;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a fixture through the real ingestion boundary.
fn load_fixture(name: &str) -> ReportTable {
    let bytes = fs::read(fixture(name)).expect("read fixture");
    load_table(&bytes, name).expect("fixture should load")
}

// =============================================================================
// Ingestion E2E
// =============================================================================

/// The CSV fixture loads with normalized column names.
#[test]
fn e2e_csv_fixture_loads_and_normalizes() {
    let table = load_fixture("sample.csv");
    assert_eq!(
        table.columns(),
        &["MARCA_OBJETO", "NOME_DELEGACIA", "QUANTIDADE_OBJETO"]
    );
    assert_eq!(table.row_count(), 4);
}

/// The XLSX fixture decodes through calamine and yields the same table
/// shape as the CSV twin.
#[test]
fn e2e_xlsx_fixture_matches_csv_twin() {
    let from_xlsx = load_fixture("sample.xlsx");
    let from_csv = load_fixture("sample.csv");

    assert_eq!(from_xlsx.columns(), from_csv.columns());
    assert_eq!(from_xlsx.row_count(), from_csv.row_count());
    assert_eq!(from_xlsx.cell(0, 0), Some("Samsung"));
    assert_eq!(from_xlsx.cell(2, 1), Some("A"));
    // Numeric spreadsheet cells are stringified.
    assert_eq!(from_xlsx.cell(1, 2), Some("2"));
}

/// A file with an unsupported structure produces a single ingest error
/// and no table.
#[test]
fn e2e_unsupported_structure_is_a_load_failure() {
    let result = load_table(b"definitely not a zip archive", "quebrado.xlsx");
    assert!(matches!(result, Err(IngestError::Spreadsheet { .. })));
}

/// The GUI state surfaces a load failure as a user-visible message and
/// renders no data.
#[test]
fn e2e_load_failure_surfaces_one_error_and_no_table() {
    let mut state = AppState::new(false);
    state.load_file(b"definitely not a zip archive", "quebrado.xlsx");
    assert!(state.table.is_none());
    let error = state.load_error.expect("load error should be visible");
    assert!(error.contains("Erro ao carregar"));
}

/// Identical uploaded content is fingerprint-cached, not re-parsed.
#[test]
fn e2e_identical_upload_hits_the_parse_cache() {
    let bytes = fs::read(fixture("sample.csv")).unwrap();
    assert_eq!(fingerprint(&bytes), fingerprint(&bytes));

    let mut state = AppState::new(false);
    state.load_file(&bytes, "sample.csv");
    state.raw_filter.brand = Some("Samsung".to_string());
    state.load_file(&bytes, "sample.csv");
    // Cache hit: the table and all selections survive untouched.
    assert_eq!(state.raw_filter.brand.as_deref(), Some("Samsung"));
    assert_eq!(state.table.unwrap().row_count(), 4);
}

// =============================================================================
// Derived views E2E
// =============================================================================

/// Overview metrics over the fixture data.
#[test]
fn e2e_overview_metrics() {
    let table = load_fixture("sample.csv");
    let ov = overview(&table);
    assert_eq!(ov.rows, 4);
    assert_eq!(ov.columns, 3);
    assert_eq!(ov.distinct_brands, Some(3));
    assert_eq!(ov.distinct_stations, Some(2));
}

/// Brand frequencies: Samsung:2, then the two singletons in first-seen
/// order (Apple before Motorola).
#[test]
fn e2e_brand_frequencies_are_deterministic() {
    let table = load_fixture("sample.csv");
    let counts = value_counts_top(&table, "MARCA_OBJETO", 10);
    assert_eq!(
        counts,
        vec![
            ("Samsung".to_string(), 2),
            ("Apple".to_string(), 1),
            ("Motorola".to_string(), 1),
        ]
    );
}

/// Filtering by NOME_DELEGACIA = A narrows to 3 rows; the quantity sum
/// and percentage are recomputed from the narrowed rows.
#[test]
fn e2e_station_drilldown() {
    let table = load_fixture("sample.csv");
    let filter = RowFilter {
        station: Some("A".to_string()),
        ..Default::default()
    };
    let indices = matching_rows(&table, &filter);
    assert_eq!(indices.len(), 3);

    let summary = drill_summary(&table, &indices);
    assert_eq!(summary.quantity_total, Some(5.0)); // 1 + 3 + 1
    let pct = summary.percent_of_total.expect("non-empty table");
    assert!((pct - 75.0).abs() < 0.01);
}

/// Selecting the "all" sentinel for both filters returns the full table.
#[test]
fn e2e_all_sentinels_return_everything() {
    let table = load_fixture("sample.csv");
    let indices = matching_rows(&table, &RowFilter::default());
    assert_eq!(indices.len(), table.row_count());
}

/// A table missing NOME_DELEGACIA: the station metric is unavailable and
/// the station selector has no options, without raising.
#[test]
fn e2e_missing_station_column_degrades_gracefully() {
    let table = load_fixture("sem_delegacia.csv");
    let ov = overview(&table);
    assert_eq!(ov.distinct_stations, None);
    assert!(selector_options(&table, "NOME_DELEGACIA").is_empty());
    assert!(value_counts_top(&table, "NOME_DELEGACIA", 10).is_empty());

    // A station filter left over from another table is simply skipped.
    let filter = RowFilter {
        station: Some("A".to_string()),
        ..Default::default()
    };
    assert_eq!(matching_rows(&table, &filter).len(), table.row_count());
}

// =============================================================================
// Export E2E
// =============================================================================

/// Export a filtered subset to disk and re-parse it: same rows, same
/// normalized columns, BOM ignored.
#[test]
fn e2e_export_round_trip() {
    let table = load_fixture("sample.csv");
    let filter = RowFilter {
        brand: Some("Samsung".to_string()),
        ..Default::default()
    };
    let indices = matching_rows(&table, &filter);
    let filtered = table.select_rows(&indices);

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("celulares_subtraidos_poa.csv");
    let file = fs::File::create(&dest).unwrap();
    let written = export_csv(&filtered, file, &dest).unwrap();
    assert_eq!(written, 2);

    let bytes = fs::read(&dest).unwrap();
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]), "export must carry a UTF-8 BOM");

    let reparsed = load_table(&bytes, "celulares_subtraidos_poa.csv").unwrap();
    assert_eq!(reparsed.columns(), filtered.columns());
    assert_eq!(reparsed.row_count(), filtered.row_count());
    for row in 0..filtered.row_count() {
        for col in 0..filtered.column_count() {
            assert_eq!(reparsed.cell(row, col), filtered.cell(row, col));
        }
    }
}

/// The raw-data export filters compose with AND over the full table.
#[test]
fn e2e_and_composed_export_filters() {
    let table = load_fixture("sample.csv");
    let filter = RowFilter {
        brand: Some("Samsung".to_string()),
        station: Some("B".to_string()),
    };
    let indices = matching_rows(&table, &filter);
    assert_eq!(indices.len(), 1);

    let filtered = table.select_rows(&indices);
    assert_eq!(filtered.cell(0, 0), Some("Samsung"));
    assert_eq!(filtered.cell(0, 1), Some("B"));
}
