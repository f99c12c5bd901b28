// Celulares POA - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the menu bar, status bar, tab strip, and the four
// presentation panels over the shared report table.

use crate::app::state::{AppState, Tab};
use crate::core::stats;
use crate::ui;

/// The dashboard application.
pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Open the native file dialog and ingest the selected file.
    fn open_file_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Planilhas e CSV", &["xlsx", "xls", "csv"])
            .add_filter("Todos os arquivos", &["*"])
            .pick_file();

        let Some(path) = picked else { return };

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("arquivo")
            .to_string();

        match std::fs::read(&path) {
            Ok(bytes) => self.state.load_file(&bytes, &file_name),
            Err(e) => {
                let err = crate::util::error::IngestError::Io {
                    file: file_name.clone(),
                    source: e,
                };
                tracing::warn!(path = %path.display(), error = %err, "Cannot read selected file");
                self.state.load_error = Some(format!("Erro ao carregar: {err}"));
                self.state.status_message = format!("Não foi possível ler '{file_name}'.");
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Arquivo", |ui| {
                    if ui.button("Abrir arquivo\u{2026}").clicked() {
                        self.open_file_dialog();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Sair").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Exibir", |ui| {
                    let has_table = self.state.table.is_some();
                    ui.add_enabled_ui(has_table, |ui| {
                        if ui.button("Copiar resumo (JSON)").clicked() {
                            if let Some(ref table) = self.state.table {
                                let overview = stats::overview(table);
                                match serde_json::to_string_pretty(&overview) {
                                    Ok(json) => {
                                        ctx.copy_text(json);
                                        self.state.status_message =
                                            "Resumo copiado para a área de transferência."
                                                .to_string();
                                    }
                                    Err(e) => {
                                        self.state.status_message =
                                            format!("Falha ao serializar o resumo: {e}");
                                    }
                                }
                            }
                            ui.close_menu();
                        }
                    });
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.table.is_some() {
                    ui.label(
                        egui::RichText::new("\u{25cf}")
                            .color(ui::theme::SUCCESS_TEXT)
                            .small(),
                    );
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(ref table) = self.state.table {
                        let total = table.row_count();
                        if self.state.active_tab == Tab::RawData {
                            let filtered =
                                stats::matching_rows(table, &self.state.raw_filter).len();
                            ui.label(format!("{filtered}/{total} registros"));
                        } else {
                            ui.label(format!("{total} registros"));
                        }
                        if let Some(ref name) = self.state.source_name {
                            ui.separator();
                            ui.label(egui::RichText::new(name.as_str()).weak());
                        }
                    }
                });
            });
        });

        // Central panel: error banner, tab strip, active view.
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref error) = self.state.load_error {
                ui.label(
                    egui::RichText::new(error)
                        .color(ui::theme::ERROR_TEXT)
                        .strong(),
                );
                ui.separator();
            }

            if self.state.table.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        "Nenhum dado carregado.\nAbra um arquivo Excel (.xlsx) ou CSV \
                         via Arquivo \u{2192} Abrir arquivo para começar a análise.",
                    );
                });
                return;
            }

            ui.horizontal(|ui| {
                for tab in Tab::all() {
                    let selected = self.state.active_tab == *tab;
                    if ui.selectable_label(selected, tab.label()).clicked() {
                        self.state.active_tab = *tab;
                    }
                }
            });
            ui.separator();

            match self.state.active_tab {
                Tab::Overview => {
                    if let Some(ref table) = self.state.table {
                        ui::panels::overview::render(ui, table);
                    }
                }
                Tab::Charts => {
                    if let Some(ref table) = self.state.table {
                        ui::panels::charts::render(ui, table);
                    }
                }
                Tab::Drilldown => ui::panels::drilldown::render(ui, &mut self.state),
                Tab::RawData => ui::panels::raw_data::render(ui, &mut self.state),
            }
        });
    }
}
