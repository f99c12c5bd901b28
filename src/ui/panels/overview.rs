// Celulares POA - ui/panels/overview.rs
//
// Overview tab: four scalar metrics and a preview of the first rows.
// Pure presentation over core::stats::overview.

use crate::core::model::ReportTable;
use crate::core::stats;
use crate::ui::theme;
use crate::util::constants::{NOT_AVAILABLE, PREVIEW_ROWS};

/// Render the overview tab.
pub fn render(ui: &mut egui::Ui, table: &ReportTable) {
    ui.heading("Visão Geral dos Dados");
    ui.add_space(4.0);

    let overview = stats::overview(table);

    egui::Grid::new("overview_metrics")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("Total de Ocorrências:");
            ui.strong(overview.rows.to_string());
            ui.end_row();

            ui.label("Número de Colunas:");
            ui.strong(overview.columns.to_string());
            ui.end_row();

            ui.label("Marcas Diferentes:");
            metric_or_placeholder(ui, overview.distinct_brands);
            ui.end_row();

            ui.label("Delegacias:");
            metric_or_placeholder(ui, overview.distinct_stations);
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.separator();
    ui.strong("Primeiros Registros");

    let preview = table.row_count().min(PREVIEW_ROWS);
    if preview == 0 {
        ui.label("A tabela está vazia.");
        return;
    }

    egui::ScrollArea::both()
        .id_salt("overview_preview")
        .auto_shrink([false, true])
        .max_height(320.0)
        .show(ui, |ui| {
            egui::Grid::new("overview_preview_grid")
                .striped(true)
                .spacing([12.0, 3.0])
                .show(ui, |ui| {
                    for column in table.columns() {
                        ui.strong(column.as_str());
                    }
                    ui.end_row();

                    for row in 0..preview {
                        for col in 0..table.column_count() {
                            let text = table.cell(row, col).unwrap_or("");
                            ui.label(
                                egui::RichText::new(text)
                                    .monospace()
                                    .size(theme::TABLE_FONT_SIZE),
                            );
                        }
                        ui.end_row();
                    }
                });
        });
}

/// Render an optional metric, falling back to the "not available"
/// placeholder when the backing column is absent.
fn metric_or_placeholder(ui: &mut egui::Ui, value: Option<usize>) {
    match value {
        Some(v) => {
            ui.strong(v.to_string());
        }
        None => {
            ui.label(egui::RichText::new(NOT_AVAILABLE).weak());
        }
    }
}
