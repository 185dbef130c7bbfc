//! Duplicate visit removal.

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::debug;

use medtab_model::{Table, columns};

/// Drops rows whose `(PatientID, VisitDate)` pair has already appeared.
///
/// Stable: the first occurrence in row order survives. Missing cells render
/// as the empty string inside the composite key and participate in dedup
/// like any other value.
pub fn drop_duplicate_visits(table: &mut Table) -> Result<()> {
    let pid = table.column_index(columns::PATIENT_ID)?;
    let date = table.column_index(columns::VISIT_DATE)?;

    let mut seen = BTreeSet::new();
    let keep: Vec<bool> = table
        .rows
        .iter()
        .map(|row| {
            let key = format!(
                "{}|{}",
                row[pid].to_output_string().trim(),
                row[date].to_output_string().trim()
            );
            seen.insert(key)
        })
        .collect();

    let before = table.height();
    table.retain_rows(&keep);
    debug!(dropped = before - table.height(), "removed duplicate visits");
    Ok(())
}
