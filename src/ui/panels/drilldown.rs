// Celulares POA - ui/panels/drilldown.rs
//
// Drill-down tab: two independent single-value selectors (brand, station)
// narrowing the table, with row count / quantity sum / percentage
// recomputed from the narrowed rows.
//
// Selector option lists are sorted, de-duplicated, non-missing distinct
// values prefixed with the "all" sentinel. A selector whose column is
// absent is omitted entirely.

use crate::app::state::AppState;
use crate::core::stats;
use crate::util::constants::{ALL_BRANDS, ALL_STATIONS, COL_BRAND, COL_STATION};

/// Render the drill-down tab.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(table) = state.table.as_ref() else {
        return;
    };

    ui.heading("Análise Detalhada de Celulares");
    ui.add_space(4.0);

    let has_brand = table.column(COL_BRAND).is_some();
    let has_station = table.column(COL_STATION).is_some();

    if !has_brand && !has_station {
        ui.label(
            egui::RichText::new(
                "O arquivo não contém as colunas MARCA_OBJETO ou NOME_DELEGACIA.",
            )
            .weak()
            .italics(),
        );
        return;
    }

    ui.strong("Filtros para Análise");

    let mut brand = state.drill_brand.clone();
    let mut station = state.drill_station.clone();

    ui.horizontal(|ui| {
        if has_brand {
            let options = stats::selector_options(table, COL_BRAND);
            selector(ui, "Marca:", ALL_BRANDS, &options, &mut brand);
        }
        if has_station {
            let options = stats::selector_options(table, COL_STATION);
            selector(ui, "Delegacia:", ALL_STATIONS, &options, &mut station);
        }
    });

    // Narrow and recompute.
    let filter = stats::RowFilter {
        brand: brand.clone(),
        station: station.clone(),
    };
    let indices = stats::matching_rows(table, &filter);
    let summary = stats::drill_summary(table, &indices);

    ui.add_space(8.0);
    ui.separator();
    ui.strong("Estatísticas dos Dados Filtrados");

    egui::Grid::new("drilldown_stats")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("Registros Encontrados:");
            ui.strong(summary.rows.to_string());
            ui.end_row();

            if let Some(total) = summary.quantity_total {
                ui.label("Total de Celulares:");
                ui.strong(format_quantity(total));
                ui.end_row();
            }

            if let Some(pct) = summary.percent_of_total {
                ui.label("Percentual do Total:");
                ui.strong(format!("{pct:.1}%"));
                ui.end_row();
            }
        });

    state.drill_brand = brand;
    state.drill_station = station;
}

/// One labelled ComboBox over `options` with an "all" sentinel on top.
/// `selection` is None while the sentinel is chosen.
fn selector(
    ui: &mut egui::Ui,
    label: &str,
    sentinel: &str,
    options: &[String],
    selection: &mut Option<String>,
) {
    let mut current = selection.clone().unwrap_or_else(|| sentinel.to_string());

    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(current.clone())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut current, sentinel.to_string(), sentinel);
            for option in options {
                ui.selectable_value(&mut current, option.clone(), option.as_str());
            }
        });

    *selection = if current == sentinel {
        None
    } else {
        Some(current)
    };
}

/// Quantity totals come from integer-valued cells in practice; print them
/// without a trailing ".0" but keep fractional sums readable.
fn format_quantity(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{}", total as i64)
    } else {
        format!("{total:.1}")
    }
}
