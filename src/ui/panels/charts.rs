// Celulares POA - ui/panels/charts.rs
//
// Analytics tab: top-10 frequency bar charts for brand and station.
//
// Bars are drawn with the egui painter (filled rects over allocated
// space), each annotated with its exact count. A chart whose backing
// column is absent renders a placeholder instead.

use crate::core::model::ReportTable;
use crate::core::stats;
use crate::ui::theme;
use crate::util::constants::{CHART_TOP_N, COL_BRAND, COL_STATION};

/// Render the analytics tab.
pub fn render(ui: &mut egui::Ui, table: &ReportTable) {
    ui.heading("Análises e Estatísticas");
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("charts_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            chart_section(
                ui,
                table,
                COL_BRAND,
                "Marcas de Celulares Mais Furtadas",
                theme::BRAND_BAR,
            );

            ui.add_space(12.0);
            ui.separator();

            chart_section(
                ui,
                table,
                COL_STATION,
                "Distribuição por Delegacia",
                theme::STATION_BAR,
            );
        });
}

/// One titled chart over a categorical column, or a placeholder when the
/// column is absent from the loaded table.
fn chart_section(
    ui: &mut egui::Ui,
    table: &ReportTable,
    column: &str,
    title: &str,
    colour: egui::Color32,
) {
    ui.strong(title);

    if table.column(column).is_none() {
        ui.label(
            egui::RichText::new(format!("Coluna {column} não encontrada no arquivo."))
                .weak()
                .italics(),
        );
        return;
    }

    let counts = stats::value_counts_top(table, column, CHART_TOP_N);
    if counts.is_empty() {
        ui.label(egui::RichText::new("Sem valores para exibir.").weak());
        return;
    }

    bar_chart(ui, &counts, colour);
}

/// Horizontal bar chart: one row per entry, bar width proportional to the
/// count relative to the maximum, exact count printed after each bar.
fn bar_chart(ui: &mut egui::Ui, counts: &[(String, usize)], colour: egui::Color32) {
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(1) as f32;

    for (value, count) in counts {
        ui.horizontal(|ui| {
            ui.add_sized(
                [theme::BAR_LABEL_WIDTH, theme::BAR_HEIGHT],
                egui::Label::new(
                    egui::RichText::new(value.as_str())
                        .monospace()
                        .size(theme::TABLE_FONT_SIZE),
                )
                .truncate(),
            );

            let bar_area = ui.available_width() - theme::BAR_COUNT_WIDTH;
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(bar_area.max(40.0), theme::BAR_HEIGHT),
                egui::Sense::hover(),
            );
            let width = (*count as f32 / max) * rect.width();
            let bar = egui::Rect::from_min_size(
                rect.min + egui::vec2(0.0, 3.0),
                egui::vec2(width.max(2.0), theme::BAR_HEIGHT - 6.0),
            );
            ui.painter().rect_filled(bar, 2.0, colour);
            response.on_hover_text(format!("{value}: {count}"));

            ui.label(egui::RichText::new(count.to_string()).strong());
        });
    }
}
