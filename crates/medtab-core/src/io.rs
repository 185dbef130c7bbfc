//! Dataset load/save.
//!
//! The only fatal error in the whole engine lives here: a missing input file
//! is reported before any pipeline work starts. Everything downstream is
//! total over whatever the CSV contained.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use medtab_model::{CellValue, MedTabError, Table};

/// Reads a delimited dataset into a table.
///
/// Cells are trimmed; empty cells become [`CellValue::Missing`]. Fails with
/// [`MedTabError::InputNotFound`] when the path does not exist.
pub fn load_dataset(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(MedTabError::InputNotFound(path.to_path_buf()).into());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("reading header of {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let width = headers.len();
    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.with_context(|| format!("reading record from {}", path.display()))?;
        let mut row = Vec::with_capacity(width);
        for idx in 0..width {
            let value = record.get(idx).unwrap_or("").trim();
            row.push(if value.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(value.to_string())
            });
        }
        table.push_row(row);
    }

    info!(rows = table.height(), path = %path.display(), "dataset loaded");
    Ok(table)
}

/// Writes a table as CSV, creating parent directories as needed.
///
/// `Missing` serializes as the empty string.
pub fn save_dataset(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.to_output_string()))?;
    }
    writer.flush()?;
    info!(rows = table.height(), path = %path.display(), "dataset saved");
    Ok(())
}
