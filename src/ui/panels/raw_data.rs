// Celulares POA - ui/panels/raw_data.rs
//
// Raw data tab: the same two categorical filters as the drill-down tab,
// AND-composed and applied to a fresh view of the full table (the two
// tabs are independent), with the filtered table rendered and offered as
// a CSV download.
//
// The on-screen table is capped at MAX_TABLE_ROWS; the export always
// contains every filtered row.

use crate::app::state::AppState;
use crate::core::{export, stats};
use crate::ui::theme;
use crate::util::constants::{
    ALL, COL_BRAND, COL_STATION, EXPORT_FILE_NAME, MAX_TABLE_ROWS,
};

/// Render the raw data / export tab.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(table) = state.table.as_ref() else {
        return;
    };

    ui.heading("Dados Brutos e Exportação");
    ui.add_space(4.0);
    ui.strong("Filtros Avançados");

    let mut filter = state.raw_filter.clone();

    ui.horizontal(|ui| {
        if table.column(COL_STATION).is_some() {
            let options = stats::selector_options(table, COL_STATION);
            filter_combo(ui, "Filtrar por delegacia:", &options, &mut filter.station);
        }
        if table.column(COL_BRAND).is_some() {
            let options = stats::selector_options(table, COL_BRAND);
            filter_combo(ui, "Filtrar por marca:", &options, &mut filter.brand);
        }
    });

    let indices = stats::matching_rows(table, &filter);

    ui.add_space(8.0);
    ui.separator();
    ui.strong(format!("Dados Filtrados ({} registros)", indices.len()));

    if indices.is_empty() {
        ui.label("Nenhum registro corresponde aos filtros atuais.");
    } else {
        let shown = indices.len().min(MAX_TABLE_ROWS);

        egui::ScrollArea::both()
            .id_salt("raw_data_table")
            .auto_shrink([false, true])
            .max_height((ui.available_height() - 48.0).max(120.0))
            .show(ui, |ui| {
                egui::Grid::new("raw_data_grid")
                    .striped(true)
                    .spacing([12.0, 3.0])
                    .show(ui, |ui| {
                        for column in table.columns() {
                            ui.strong(column.as_str());
                        }
                        ui.end_row();

                        for &row in &indices[..shown] {
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

                if indices.len() > shown {
                    ui.label(
                        egui::RichText::new(format!(
                            "... e mais {} registros (a exportação inclui todos)",
                            indices.len() - shown
                        ))
                        .weak()
                        .small()
                        .italics(),
                    );
                }
            });
    }

    ui.add_space(6.0);

    // Download: offered only when the filtered result is non-empty.
    let export_clicked = ui
        .add_enabled(
            !indices.is_empty(),
            egui::Button::new("Baixar dados filtrados (CSV)"),
        )
        .clicked();

    if export_clicked {
        if let Some(dest) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(EXPORT_FILE_NAME)
            .save_file()
        {
            let filtered = table.select_rows(&indices);
            match std::fs::File::create(&dest) {
                Ok(f) => match export::export_csv(&filtered, f, &dest) {
                    Ok(n) => {
                        tracing::info!(rows = n, path = %dest.display(), "Exported filtered table");
                        state.status_message =
                            format!("Exportados {n} registros para '{}'.", dest.display());
                    }
                    Err(e) => {
                        state.status_message = format!("Falha na exportação: {e}");
                    }
                },
                Err(e) => {
                    state.status_message = format!("Não foi possível criar o arquivo: {e}");
                }
            }
        }
    }

    state.raw_filter = filter;
}

/// One labelled ComboBox with the raw tab's plain "Todas" sentinel.
fn filter_combo(
    ui: &mut egui::Ui,
    label: &str,
    options: &[String],
    selection: &mut Option<String>,
) {
    let mut current = selection.clone().unwrap_or_else(|| ALL.to_string());

    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(current.clone())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut current, ALL.to_string(), ALL);
            for option in options {
                ui.selectable_value(&mut current, option.clone(), option.as_str());
            }
        });

    *selection = if current == ALL { None } else { Some(current) };
}
