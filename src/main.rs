// Celulares POA - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Optional data file load from the command line
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use celulares_poa::app;
pub use celulares_poa::core;
pub use celulares_poa::ui;
pub use celulares_poa::util;

use clap::Parser;
use std::path::PathBuf;

/// Celulares POA - interactive dashboard for stolen-phone police reports.
///
/// Open a spreadsheet (.xlsx/.xls) or CSV export of report data to browse
/// summary metrics, brand/station breakdowns, interactive filters, and a
/// filtered CSV export.
#[derive(Parser, Debug)]
#[command(name = "celulares-poa", version, about)]
struct Cli {
    /// Data file to load at startup (opens the file dialog if omitted).
    path: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Celulares POA starting"
    );

    // Create application state
    let mut state = app::state::AppState::new(cli.debug);

    // If a data file was provided on the CLI, load it before launch so the
    // first frame already shows the table (or the load error banner).
    if let Some(ref path) = cli.path {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("arquivo")
            .to_string();
        match std::fs::read(path) {
            Ok(bytes) => state.load_file(&bytes, &file_name),
            Err(e) => {
                let err = util::error::IngestError::Io {
                    file: file_name.clone(),
                    source: e,
                };
                tracing::warn!(path = %path.display(), error = %err, "Cannot read CLI data file");
                state.load_error = Some(format!("Erro ao carregar: {err}"));
                state.status_message = format!("Não foi possível ler '{file_name}'.");
            }
        }
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{} — Celulares Subtraídos",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::DashboardApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: failed to launch the Celulares POA GUI: {e}");
        std::process::exit(1);
    }
}
