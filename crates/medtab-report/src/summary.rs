//! Data views behind the summary charts.
//!
//! These helpers work on the canonical table whether it is still in memory
//! (typed cells) or freshly reloaded from CSV (textual cells).

use std::collections::BTreeMap;

use anyhow::Result;

use medtab_model::{CellValue, Table, columns};

fn cell_as_f64(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(value) => Some(*value),
        CellValue::Text(value) => value.trim().parse::<f64>().ok(),
        CellValue::Missing => None,
    }
}

/// Numeric values of one column, missing and non-numeric cells skipped.
pub fn numeric_column(table: &Table, column: &str) -> Result<Vec<f64>> {
    let cells = table.column_cells(column)?;
    Ok(cells.into_iter().filter_map(cell_as_f64).collect())
}

/// Per-category row counts for one textual column, sorted by category.
pub fn category_counts(table: &Table, column: &str) -> Result<Vec<(String, usize)>> {
    let cells = table.column_cells(column)?;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for cell in cells {
        if let Some(value) = cell.as_text() {
            *counts.entry(value.to_string()).or_default() += 1;
        }
    }
    Ok(counts.into_iter().collect())
}

/// Re-splits canonical `BloodPressure` strings into (systolic, diastolic).
///
/// Cells without a `/` (the `Normal` sentinel, or anything missing) are
/// skipped. This split exists only as a chart byproduct; it is not part of
/// the stored canonical schema.
pub fn split_blood_pressure(table: &Table) -> Result<Vec<(i64, i64)>> {
    let cells = table.column_cells(columns::BLOOD_PRESSURE)?;
    let mut pairs = Vec::new();
    for cell in cells {
        let Some(value) = cell.as_text() else {
            continue;
        };
        let Some((systolic, diastolic)) = value.split_once('/') else {
            continue;
        };
        if let (Ok(systolic), Ok(diastolic)) =
            (systolic.trim().parse::<i64>(), diastolic.trim().parse::<i64>())
        {
            pairs.push((systolic, diastolic));
        }
    }
    Ok(pairs)
}
