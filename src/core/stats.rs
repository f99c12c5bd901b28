// Celulares POA - core/stats.rs
//
// Aggregations and the categorical filter engine.
// Both active filters are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Overview, ReportTable};
use crate::util::constants::{COL_BRAND, COL_QUANTITY, COL_STATION};
use std::collections::HashMap;

/// Compute the overview metrics: row count, column count, and distinct
/// counts for the brand and station columns (None when absent).
pub fn overview(table: &ReportTable) -> Overview {
    Overview {
        rows: table.row_count(),
        columns: table.column_count(),
        distinct_brands: distinct_count(table, COL_BRAND),
        distinct_stations: distinct_count(table, COL_STATION),
    }
}

/// Count of distinct non-missing values in a column, or None if the
/// column is absent.
pub fn distinct_count(table: &ReportTable, column: &str) -> Option<usize> {
    let col = table.column(column)?;
    let mut seen: Vec<&str> = col.values().flatten().collect();
    seen.sort_unstable();
    seen.dedup();
    Some(seen.len())
}

/// Frequency of each distinct non-missing value in a column, top `n` by
/// descending count.
///
/// Tie-break for equal frequencies: first-seen order in the source table,
/// so the output is deterministic and reproducible.
pub fn value_counts_top(table: &ReportTable, column: &str, n: usize) -> Vec<(String, usize)> {
    let Some(col) = table.column(column) else {
        return Vec::new();
    };

    // value -> (count, first-seen row index)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (row, value) in col.values().enumerate() {
        let Some(value) = value else { continue };
        let entry = counts.entry(value).or_insert((0, row));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, seen_a)), (_, (count_b, seen_b))| {
        count_b.cmp(count_a).then(seen_a.cmp(seen_b))
    });
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(value, (count, _))| (value.to_string(), count))
        .collect()
}

/// Sorted, de-duplicated, non-missing distinct values of a column.
/// Used to build selector option lists (the "all" sentinel is prepended
/// by the view layer). Empty when the column is absent.
pub fn selector_options(table: &ReportTable, column: &str) -> Vec<String> {
    let Some(col) = table.column(column) else {
        return Vec::new();
    };
    let mut values: Vec<String> = col.values().flatten().map(str::to_string).collect();
    values.sort();
    values.dedup();
    values
}

// =============================================================================
// Categorical row filter
// =============================================================================

/// Equality filter over the two categorical dimensions. Active fields are
/// AND-combined when applied; `None` means "all" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    /// Brand the row must match exactly (None = no brand filter).
    pub brand: Option<String>,

    /// Station the row must match exactly (None = no station filter).
    pub station: Option<String>,
}

impl RowFilter {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.station.is_none()
    }
}

/// Apply the filter to the table, returning indices of matching rows.
///
/// Returns a Vec of indices into the table's rows. This avoids copying
/// rows until a filtered copy is actually needed (e.g. for export).
/// A predicate whose column is absent from the table is skipped.
pub fn matching_rows(table: &ReportTable, filter: &RowFilter) -> Vec<usize> {
    if filter.is_empty() {
        return (0..table.row_count()).collect();
    }

    let brand_col = if filter.brand.is_some() {
        table.column(COL_BRAND)
    } else {
        None
    };
    let station_col = if filter.station.is_some() {
        table.column(COL_STATION)
    } else {
        None
    };

    (0..table.row_count())
        .filter(|&row| {
            if let (Some(want), Some(col)) = (filter.brand.as_deref(), brand_col) {
                if col.value(row) != Some(want) {
                    return false;
                }
            }
            if let (Some(want), Some(col)) = (filter.station.as_deref(), station_col) {
                if col.value(row) != Some(want) {
                    return false;
                }
            }
            true
        })
        .collect()
}

// =============================================================================
// Drill-down summary
// =============================================================================

/// Statistics recomputed after narrowing the table on the drill-down tab.
#[derive(Debug, Clone, PartialEq)]
pub struct DrillSummary {
    /// Number of rows surviving the filter.
    pub rows: usize,

    /// Sum of the numeric quantity column over the surviving rows.
    /// None when the column is absent. Non-numeric cells are skipped.
    pub quantity_total: Option<f64>,

    /// Surviving rows as a percentage of the full table. None when the
    /// table is empty (never divides by zero).
    pub percent_of_total: Option<f64>,
}

/// Compute the drill-down summary for a set of surviving row indices.
pub fn drill_summary(table: &ReportTable, indices: &[usize]) -> DrillSummary {
    let quantity_total = table.column(COL_QUANTITY).map(|col| {
        indices
            .iter()
            .filter_map(|&row| col.value(row))
            .filter_map(|cell| cell.trim().parse::<f64>().ok())
            .sum()
    });

    let total = table.row_count();
    let percent_of_total = if total > 0 {
        Some((indices.len() as f64 / total as f64) * 100.0)
    } else {
        None
    };

    DrillSummary {
        rows: indices.len(),
        quantity_total,
        percent_of_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ReportTable;

    /// Table with MARCA_OBJETO = [Samsung, Samsung, Apple] and
    /// NOME_DELEGACIA = [A, B, A].
    fn sample_table() -> ReportTable {
        ReportTable::new(
            vec![
                "MARCA_OBJETO".to_string(),
                "NOME_DELEGACIA".to_string(),
                "QUANTIDADE_OBJETO".to_string(),
            ],
            vec![
                vec![
                    Some("Samsung".to_string()),
                    Some("A".to_string()),
                    Some("1".to_string()),
                ],
                vec![
                    Some("Samsung".to_string()),
                    Some("B".to_string()),
                    Some("2".to_string()),
                ],
                vec![
                    Some("Apple".to_string()),
                    Some("A".to_string()),
                    Some("3".to_string()),
                ],
            ],
        )
    }

    #[test]
    fn test_overview_counts() {
        let table = sample_table();
        let ov = overview(&table);
        assert_eq!(ov.rows, 3);
        assert_eq!(ov.columns, 3);
        assert_eq!(ov.distinct_brands, Some(2));
        assert_eq!(ov.distinct_stations, Some(2));
    }

    #[test]
    fn test_overview_missing_column_is_none() {
        let table = ReportTable::new(vec!["MARCA_OBJETO".to_string()], vec![]);
        let ov = overview(&table);
        assert_eq!(ov.distinct_brands, Some(0));
        assert_eq!(ov.distinct_stations, None);
    }

    #[test]
    fn test_value_counts_top_orders_by_frequency() {
        let table = sample_table();
        let counts = value_counts_top(&table, "MARCA_OBJETO", 10);
        assert_eq!(
            counts,
            vec![("Samsung".to_string(), 2), ("Apple".to_string(), 1)]
        );
    }

    #[test]
    fn test_value_counts_ties_break_by_first_seen() {
        let table = ReportTable::new(
            vec!["MARCA_OBJETO".to_string()],
            vec![
                vec![Some("Motorola".to_string())],
                vec![Some("Apple".to_string())],
                vec![Some("Motorola".to_string())],
                vec![Some("Apple".to_string())],
            ],
        );
        let counts = value_counts_top(&table, "MARCA_OBJETO", 10);
        assert_eq!(
            counts,
            vec![("Motorola".to_string(), 2), ("Apple".to_string(), 2)]
        );
    }

    #[test]
    fn test_value_counts_caps_at_n_and_skips_missing() {
        let mut rows = Vec::new();
        for i in 0..12 {
            rows.push(vec![Some(format!("Marca{i:02}"))]);
        }
        rows.push(vec![None]);
        let table = ReportTable::new(vec!["MARCA_OBJETO".to_string()], rows);

        let counts = value_counts_top(&table, "MARCA_OBJETO", 10);
        assert_eq!(counts.len(), 10);
        let total: usize = counts.iter().map(|(_, c)| c).sum();
        assert!(total <= 12);
    }

    #[test]
    fn test_value_counts_absent_column_is_empty() {
        let table = ReportTable::new(vec!["OUTRA".to_string()], vec![]);
        assert!(value_counts_top(&table, "MARCA_OBJETO", 10).is_empty());
    }

    #[test]
    fn test_selector_options_sorted_and_deduped() {
        let table = sample_table();
        assert_eq!(
            selector_options(&table, "MARCA_OBJETO"),
            vec!["Apple".to_string(), "Samsung".to_string()]
        );
        assert_eq!(
            selector_options(&table, "NOME_DELEGACIA"),
            vec!["A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn test_empty_filter_returns_all_rows() {
        let table = sample_table();
        let rows = matching_rows(&table, &RowFilter::default());
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_station_filter() {
        let table = sample_table();
        let filter = RowFilter {
            station: Some("A".to_string()),
            ..Default::default()
        };
        assert_eq!(matching_rows(&table, &filter), vec![0, 2]);
    }

    #[test]
    fn test_combined_filters_are_and_composed() {
        let table = sample_table();
        let filter = RowFilter {
            brand: Some("Samsung".to_string()),
            station: Some("A".to_string()),
        };
        assert_eq!(matching_rows(&table, &filter), vec![0]);
    }

    #[test]
    fn test_filter_on_absent_column_is_skipped() {
        let table = ReportTable::new(
            vec!["MARCA_OBJETO".to_string()],
            vec![vec![Some("Samsung".to_string())]],
        );
        let filter = RowFilter {
            station: Some("A".to_string()),
            ..Default::default()
        };
        assert_eq!(matching_rows(&table, &filter), vec![0]);
    }

    #[test]
    fn test_drill_summary_sums_quantity_and_percentage() {
        let table = sample_table();
        let filter = RowFilter {
            station: Some("A".to_string()),
            ..Default::default()
        };
        let indices = matching_rows(&table, &filter);
        let summary = drill_summary(&table, &indices);
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.quantity_total, Some(4.0));
        let pct = summary.percent_of_total.unwrap();
        assert!((pct - 66.666).abs() < 0.1);
    }

    #[test]
    fn test_drill_summary_empty_table_has_no_percentage() {
        let table = ReportTable::new(vec!["MARCA_OBJETO".to_string()], vec![]);
        let summary = drill_summary(&table, &[]);
        assert_eq!(summary.rows, 0);
        assert_eq!(summary.percent_of_total, None);
    }

    #[test]
    fn test_drill_summary_skips_non_numeric_quantities() {
        let table = ReportTable::new(
            vec!["QUANTIDADE_OBJETO".to_string()],
            vec![
                vec![Some("2".to_string())],
                vec![Some("abc".to_string())],
                vec![None],
            ],
        );
        let summary = drill_summary(&table, &[0, 1, 2]);
        assert_eq!(summary.quantity_total, Some(2.0));
    }
}
