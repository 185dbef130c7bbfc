//! The ordered cleaning pipeline.
//!
//! Ten stages in fixed order: eight column-local transforms, then the
//! table-wide missing-value resolution, then deduplication. Each stage fully
//! owns the table before the next one runs; per-cell failures never abort the
//! pipeline, they degrade to nulls or sentinels inside the transforms.

use anyhow::Result;
use tracing::debug;

use medtab_model::{CellValue, Table, columns};

use crate::columns::{
    clean_age, clean_blood_pressure, clean_gender, clean_insurance, clean_medical_notes,
    clean_patient_id, clean_temperature, clean_visit_date,
};
use crate::dedupe::drop_duplicate_visits;
use crate::missing::resolve_missing_values;

/// A single stage of the cleaning pipeline.
pub trait CleaningStep {
    /// Transforms the table in place.
    fn apply(&self, table: &mut Table) -> Result<()>;

    /// Name used in stage-level logging.
    fn step_name(&self) -> &str;
}

/// A column-local stage: one pure, total transform mapped over one column.
struct ColumnStep {
    name: &'static str,
    column: &'static str,
    transform: fn(&CellValue) -> CellValue,
}

impl CleaningStep for ColumnStep {
    fn apply(&self, table: &mut Table) -> Result<()> {
        table.map_column(self.column, self.transform)?;
        Ok(())
    }

    fn step_name(&self) -> &str {
        self.name
    }
}

struct MissingValueStep;

impl CleaningStep for MissingValueStep {
    fn apply(&self, table: &mut Table) -> Result<()> {
        resolve_missing_values(table)
    }

    fn step_name(&self) -> &str {
        "missing_values"
    }
}

struct DedupStep;

impl CleaningStep for DedupStep {
    fn apply(&self, table: &mut Table) -> Result<()> {
        drop_duplicate_visits(table)
    }

    fn step_name(&self) -> &str {
        "dedup_visits"
    }
}

/// An ordered list of cleaning stages.
pub struct CleaningPipeline {
    steps: Vec<Box<dyn CleaningStep>>,
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl CleaningPipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(mut self, step: Box<dyn CleaningStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Executes every stage in order.
    pub fn execute(&self, table: &mut Table) -> Result<()> {
        for step in &self.steps {
            step.apply(table)?;
            debug!(step = step.step_name(), rows = table.height(), "stage done");
        }
        Ok(())
    }

    /// Stage names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.step_name()).collect()
    }
}

/// Builds the standard ten-stage pipeline.
pub fn build_default_pipeline() -> CleaningPipeline {
    CleaningPipeline::new()
        .add_step(Box::new(ColumnStep {
            name: "patient_id",
            column: columns::PATIENT_ID,
            transform: clean_patient_id,
        }))
        .add_step(Box::new(ColumnStep {
            name: "visit_date",
            column: columns::VISIT_DATE,
            transform: clean_visit_date,
        }))
        .add_step(Box::new(ColumnStep {
            name: "age",
            column: columns::AGE,
            transform: clean_age,
        }))
        .add_step(Box::new(ColumnStep {
            name: "gender",
            column: columns::GENDER,
            transform: clean_gender,
        }))
        .add_step(Box::new(ColumnStep {
            name: "insurance",
            column: columns::INSURANCE,
            transform: clean_insurance,
        }))
        .add_step(Box::new(ColumnStep {
            name: "medical_notes",
            column: columns::MEDICAL_NOTES,
            transform: clean_medical_notes,
        }))
        .add_step(Box::new(ColumnStep {
            name: "temperature",
            column: columns::TEMPERATURE,
            transform: clean_temperature,
        }))
        .add_step(Box::new(ColumnStep {
            name: "blood_pressure",
            column: columns::BLOOD_PRESSURE,
            transform: clean_blood_pressure,
        }))
        .add_step(Box::new(MissingValueStep))
        .add_step(Box::new(DedupStep))
}

/// Runs the default pipeline over a raw table.
pub fn clean_table(table: &mut Table) -> Result<()> {
    build_default_pipeline().execute(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(table: &Table, values: &[(&str, CellValue)]) -> Vec<CellValue> {
        let mut row: Vec<CellValue> = (0..table.width()).map(|_| CellValue::Missing).collect();
        for (column, value) in values {
            row[table.column_index(column).unwrap()] = value.clone();
        }
        row
    }

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn default_pipeline_has_ten_stages_in_order() {
        let pipeline = build_default_pipeline();
        let names = pipeline.step_names();
        assert_eq!(
            names,
            vec![
                "patient_id",
                "visit_date",
                "age",
                "gender",
                "insurance",
                "medical_notes",
                "temperature",
                "blood_pressure",
                "missing_values",
                "dedup_visits",
            ]
        );
    }

    #[test]
    fn end_to_end_example_row() {
        let mut table = Table::with_schema();
        let row = raw_row(
            &table,
            &[
                (columns::PATIENT_ID, text("p1")),
                (columns::VISIT_DATE, text("15/03/2021")),
                (columns::AGE, CellValue::Number(150.0)),
                (columns::GENDER, text("f")),
                (columns::INSURANCE, text("N/A")),
                (columns::MEDICAL_NOTES, text("  ")),
                (columns::TEMPERATURE, text("37.2°C")),
                (columns::BLOOD_PRESSURE, text("120-80")),
            ],
        );
        table.push_row(row);

        clean_table(&mut table).unwrap();

        assert_eq!(table.height(), 1);
        assert_eq!(*table.cell(0, columns::PATIENT_ID).unwrap(), text("P1"));
        assert_eq!(
            *table.cell(0, columns::VISIT_DATE).unwrap(),
            text("2021-03-15")
        );
        assert_eq!(*table.cell(0, columns::AGE).unwrap(), CellValue::Missing);
        assert_eq!(*table.cell(0, columns::GENDER).unwrap(), text("Female"));
        assert_eq!(*table.cell(0, columns::INSURANCE).unwrap(), text("Unknown"));
        assert_eq!(
            *table.cell(0, columns::MEDICAL_NOTES).unwrap(),
            text("No notes available")
        );
        assert_eq!(
            *table.cell(0, columns::TEMPERATURE).unwrap(),
            CellValue::Number(37.2)
        );
        assert_eq!(
            *table.cell(0, columns::BLOOD_PRESSURE).unwrap(),
            text("120/80")
        );
    }

    #[test]
    fn incomplete_bp_reading_ends_up_normal() {
        let mut table = Table::with_schema();
        let row = raw_row(
            &table,
            &[
                (columns::PATIENT_ID, text("P2")),
                (columns::VISIT_DATE, text("2021-01-01")),
                (columns::BLOOD_PRESSURE, text("150")),
                (columns::TEMPERATURE, text("37.0")),
            ],
        );
        table.push_row(row);

        clean_table(&mut table).unwrap();
        assert_eq!(
            *table.cell(0, columns::BLOOD_PRESSURE).unwrap(),
            text("Normal")
        );
    }

    #[test]
    fn pipeline_is_idempotent() {
        let mut table = Table::with_schema();
        for (pid, date, gender, bp) in [
            ("p1", "15/03/2021", "f", "120-80"),
            ("P2", "2021-01-01", "MALE", "150"),
            ("pat-9", "March 2, 2019", "", "110 over 70"),
            ("p1", "15/03/2021", "m", "130/85"),
        ] {
            let row = raw_row(
                &table,
                &[
                    (columns::PATIENT_ID, text(pid)),
                    (columns::VISIT_DATE, text(date)),
                    (columns::GENDER, text(gender)),
                    (columns::BLOOD_PRESSURE, text(bp)),
                    (columns::TEMPERATURE, text("38.5°C")),
                    (columns::AGE, CellValue::Number(40.0)),
                ],
            );
            table.push_row(row);
        }

        clean_table(&mut table).unwrap();
        let once = table.clone();
        clean_table(&mut table).unwrap();
        assert_eq!(table, once);
    }

    #[test]
    fn duplicate_pair_after_normalization_is_dropped() {
        // Same visit rendered in two different date formats: normalization
        // makes them collide, dedup keeps the first.
        let mut table = Table::with_schema();
        for date in ["15/03/2021", "2021-03-15"] {
            let row = raw_row(
                &table,
                &[
                    (columns::PATIENT_ID, text("P1")),
                    (columns::VISIT_DATE, text(date)),
                    (columns::TEMPERATURE, text("37.0")),
                ],
            );
            table.push_row(row);
        }
        clean_table(&mut table).unwrap();
        assert_eq!(table.height(), 1);
    }
}
