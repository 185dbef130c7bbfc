use crate::error::{MedTabError, Result};
use crate::schema::columns;

/// A single cell in a tabular dataset.
///
/// CSV ingestion only ever produces `Text` and `Missing`; `Number` arises
/// from in-memory generation and from cleaning stages that coerce a column
/// to numeric form.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// String form used when the cell is written back out.
    ///
    /// `Missing` serializes as the empty string; whole-valued numbers drop
    /// the trailing `.0` so ages and counts read as integers.
    pub fn to_output_string(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => format_numeric(*value),
            Self::Missing => String::new(),
        }
    }
}

pub(crate) fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// An in-memory table: named columns plus positionally indexed rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// A table with the fixed patient-visit schema and no rows.
    pub fn with_schema() -> Self {
        Self::new(columns::ALL.iter().map(|c| (*c).to_string()).collect())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| MedTabError::MissingColumn(name.to_string()))
    }

    pub fn cell(&self, row: usize, name: &str) -> Result<&CellValue> {
        let idx = self.column_index(name)?;
        Ok(&self.rows[row][idx])
    }

    /// Applies a pure transform to every cell of one column.
    pub fn map_column<F>(&mut self, name: &str, transform: F) -> Result<()>
    where
        F: Fn(&CellValue) -> CellValue,
    {
        let idx = self.column_index(name)?;
        for row in &mut self.rows {
            row[idx] = transform(&row[idx]);
        }
        Ok(())
    }

    /// Keeps only the rows whose position in `keep` is true.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.rows.len());
        let mut mask = keep.iter();
        self.rows.retain(|_| *mask.next().unwrap_or(&true));
    }

    /// Borrowed view of one column's cells in row order.
    pub fn column_cells(&self, name: &str) -> Result<Vec<&CellValue>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| &row[idx]).collect())
    }
}
