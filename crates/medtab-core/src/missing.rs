//! Table-wide missing-value resolution.
//!
//! Runs after the column-local stages: Temperature nulls are filled with the
//! column mean computed before any fill, BloodPressure nulls with the
//! `Normal` sentinel, MedicalNotes nulls with `No medical information`.
//! The notes sentinel here is intentionally distinct from the column-local
//! stage's `No notes available`.

use anyhow::Result;
use tracing::debug;

use medtab_model::{CellValue, Table, columns};

/// Sentinel for blood pressure readings that could not be parsed.
pub const NORMAL_BP_SENTINEL: &str = "Normal";

/// Sentinel for notes still missing at the table-wide pass.
pub const NO_INFORMATION_SENTINEL: &str = "No medical information";

pub fn resolve_missing_values(table: &mut Table) -> Result<()> {
    fill_temperature_mean(table)?;
    fill_missing_with(table, columns::BLOOD_PRESSURE, NORMAL_BP_SENTINEL)?;
    fill_missing_with(table, columns::MEDICAL_NOTES, NO_INFORMATION_SENTINEL)?;
    Ok(())
}

fn fill_temperature_mean(table: &mut Table) -> Result<()> {
    let idx = table.column_index(columns::TEMPERATURE)?;
    let mut sum = 0.0;
    let mut count = 0usize;
    for row in &table.rows {
        if let Some(value) = row[idx].as_f64() {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        // Degenerate all-missing column: nothing to average, leave as-is.
        debug!("temperature column has no numeric values, skipping mean fill");
        return Ok(());
    }
    let mean = sum / count as f64;
    let mut filled = 0usize;
    for row in &mut table.rows {
        if row[idx].is_missing() {
            row[idx] = CellValue::Number(mean);
            filled += 1;
        }
    }
    debug!(mean, filled, "filled missing temperatures with column mean");
    Ok(())
}

fn fill_missing_with(table: &mut Table, column: &str, sentinel: &str) -> Result<()> {
    let idx = table.column_index(column)?;
    let mut filled = 0usize;
    for row in &mut table.rows {
        if row[idx].is_missing() {
            row[idx] = CellValue::Text(sentinel.to_string());
            filled += 1;
        }
    }
    debug!(column, sentinel, filled, "filled missing cells");
    Ok(())
}
