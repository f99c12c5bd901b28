// Celulares POA - app/state.rs
//
// Application state management. Holds the loaded report table, per-tab
// selector state, the load cache, and the status message.
// Owned by the eframe::App implementation.

use crate::core::ingest;
use crate::core::model::ReportTable;
use crate::core::stats::RowFilter;

/// The four presentation surfaces over the loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Charts,
    Drilldown,
    RawData,
}

impl Tab {
    /// All tabs in display order.
    pub fn all() -> &'static [Tab] {
        &[Tab::Overview, Tab::Charts, Tab::Drilldown, Tab::RawData]
    }

    /// Tab label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Visão Geral",
            Tab::Charts => "Análises",
            Tab::Drilldown => "Celulares",
            Tab::RawData => "Dados Brutos",
        }
    }
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// The loaded report table (None until a file loads successfully).
    pub table: Option<ReportTable>,

    /// Declared name of the loaded file.
    pub source_name: Option<String>,

    /// Content fingerprint of the loaded file. Single-entry parse cache:
    /// re-selecting identical content skips the parse, and any new upload
    /// replaces this wholesale.
    fingerprint: Option<String>,

    /// User-visible message from the last failed load, shown as a banner.
    /// Cleared by the next successful load.
    pub load_error: Option<String>,

    /// Currently selected tab.
    pub active_tab: Tab,

    /// Drill-down brand selection (None = "all" sentinel).
    pub drill_brand: Option<String>,

    /// Drill-down station selection (None = "all" sentinel).
    pub drill_station: Option<String>,

    /// Raw-data tab filter. Independent of the drill-down selections.
    pub raw_filter: RowFilter,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state.
    pub fn new(debug_mode: bool) -> Self {
        Self {
            status_message: "Pronto. Abra um arquivo .xlsx ou .csv para começar.".to_string(),
            debug_mode,
            ..Default::default()
        }
    }

    /// Ingest an uploaded file, replacing any prior table.
    ///
    /// Identical content (by fingerprint) is not re-parsed. On failure the
    /// prior table is discarded and a user-visible error is recorded; the
    /// user recovers by selecting another file.
    pub fn load_file(&mut self, bytes: &[u8], file_name: &str) {
        let fp = ingest::fingerprint(bytes);
        if self.table.is_some() && self.fingerprint.as_deref() == Some(fp.as_str()) {
            tracing::debug!(file = file_name, "Identical content already loaded; skipping parse");
            self.status_message = format!("'{file_name}' já está carregado.");
            return;
        }

        match ingest::load_table(bytes, file_name) {
            Ok(table) => {
                self.status_message = format!(
                    "Dados carregados com sucesso: {} registros de '{}'.",
                    table.row_count(),
                    file_name
                );
                self.table = Some(table);
                self.source_name = Some(file_name.to_string());
                self.fingerprint = Some(fp);
                self.load_error = None;
                self.reset_selections();
            }
            Err(e) => {
                tracing::warn!(file = file_name, error = %e, "Load failed");
                self.table = None;
                self.source_name = None;
                self.fingerprint = None;
                self.load_error = Some(format!("Erro ao carregar: {e}"));
                self.status_message = format!("Falha ao carregar '{file_name}'.");
                self.reset_selections();
            }
        }
    }

    /// Reset all selector and filter state to the "all" sentinels.
    /// Called whenever the table is replaced, since selections from the
    /// previous table may not exist in the new one.
    fn reset_selections(&mut self) {
        self.drill_brand = None;
        self.drill_station = None;
        self.raw_filter = RowFilter::default();
    }

    /// Drill-down tab filter built from the current selector state.
    pub fn drill_filter(&self) -> RowFilter {
        RowFilter {
            brand: self.drill_brand.clone(),
            station: self.drill_station.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &[u8] = b"MARCA_OBJETO,NOME_DELEGACIA\nSamsung,A\nApple,B\n";

    #[test]
    fn test_load_file_sets_table_and_status() {
        let mut state = AppState::new(false);
        state.load_file(CSV, "dados.csv");
        assert!(state.table.is_some());
        assert!(state.load_error.is_none());
        assert!(state.status_message.contains("2 registros"));
    }

    #[test]
    fn test_identical_content_is_not_reparsed() {
        let mut state = AppState::new(false);
        state.load_file(CSV, "dados.csv");
        state.drill_brand = Some("Samsung".to_string());

        // Same bytes again: cache hit, selections survive.
        state.load_file(CSV, "dados.csv");
        assert_eq!(state.drill_brand.as_deref(), Some("Samsung"));
    }

    #[test]
    fn test_new_upload_replaces_table_and_resets_selections() {
        let mut state = AppState::new(false);
        state.load_file(CSV, "dados.csv");
        state.drill_brand = Some("Samsung".to_string());

        state.load_file(b"MARCA_OBJETO\nMotorola\n", "outros.csv");
        assert_eq!(state.table.as_ref().unwrap().row_count(), 1);
        assert_eq!(state.drill_brand, None);
    }

    #[test]
    fn test_failed_load_discards_table_and_sets_error() {
        let mut state = AppState::new(false);
        state.load_file(CSV, "dados.csv");
        state.load_file(b"not a spreadsheet", "quebrado.xlsx");
        assert!(state.table.is_none());
        assert!(state.load_error.is_some());

        // A failed load is not cached: retrying the good file parses again.
        state.load_file(CSV, "dados.csv");
        assert!(state.table.is_some());
        assert!(state.load_error.is_none());
    }
}
