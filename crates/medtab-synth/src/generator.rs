//! Synthetic patient-visit dataset generator.
//!
//! Every field is rendered through one of a small, explicitly enumerated menu
//! of format variants so the downstream cleaning pipeline has every code path
//! exercised. On top of the per-field variants the generator injects missing
//! cells, re-dated duplicate rows, and a final shuffle.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use medtab_model::{CellValue, Table, columns};

/// File name of the raw dataset inside the output directory.
pub const DATASET_FILE_NAME: &str = "complex_medical_data.csv";

/// The six calendar renderings a `VisitDate` cell may use.
///
/// Each entry is a `chrono` format string; the cleaner must round-trip every
/// one of them back to ISO form.
pub const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%Y/%m/%d",
    "%d-%b-%Y",
    "%B %d, %Y",
];

const ANCHOR_DATE: (i32, u32, u32) = (2020, 1, 1);
const DUPLICATE_ROWS: usize = 50;
const MISSING_CELL_PROBABILITY: f64 = 0.1;

const GENDER_POOL: [&str; 10] = [
    "M", "F", "Male", "Female", "m", "f", "MALE", "FEMALE", "Other", "",
];
const INSURANCE_POOL: [&str; 6] = ["Private", "Medicare", "Medicaid", "None", "", "N/A"];
const CONDITIONS: [&str; 5] = ["Hypertension", "Diabetes", "Asthma", "COPD", "Arthritis"];
const SYMPTOMS: [&str; 5] = ["fever", "cough", "fatigue", "pain", "nausea"];
const MEDICATIONS: [&str; 4] = ["Aspirin", "Lisinopril", "Metformin", "Ventolin"];
const LAB_OUTCOMES: [&str; 3] = ["Positive", "Negative", "Inconclusive"];

fn patient_id_padded(rng: &mut StdRng) -> String {
    format!("P{:04}", rng.random_range(0..=9999))
}

fn patient_id_dashed(rng: &mut StdRng) -> String {
    format!("PAT-{}", rng.random_range(0..=999))
}

fn patient_id_underscored(rng: &mut StdRng) -> String {
    format!("PATIENT_{}", rng.random_range(0..=999))
}

fn patient_id_hospital(rng: &mut StdRng) -> String {
    format!(
        "H{}-{}",
        rng.random_range(0..=99),
        rng.random_range(0..=9999)
    )
}

const PATIENT_ID_VARIANTS: [fn(&mut StdRng) -> String; 4] = [
    patient_id_padded,
    patient_id_dashed,
    patient_id_underscored,
    patient_id_hospital,
];

fn temp_celsius_symbol(t: f64) -> String {
    format!("{t:.1}°C")
}

fn temp_fahrenheit_symbol(t: f64) -> String {
    format!("{:.1}°F", t * 9.0 / 5.0 + 32.0)
}

fn temp_bare(t: f64) -> String {
    format!("{t:.1}")
}

fn temp_celsius_suffix(t: f64) -> String {
    format!("{t:.1} C")
}

fn temp_fahrenheit_suffix(t: f64) -> String {
    format!("{:.1} F", t * 9.0 / 5.0 + 32.0)
}

const TEMPERATURE_VARIANTS: [fn(f64) -> String; 5] = [
    temp_celsius_symbol,
    temp_fahrenheit_symbol,
    temp_bare,
    temp_celsius_suffix,
    temp_fahrenheit_suffix,
];

fn bp_slash(sys: i64, dia: i64) -> String {
    format!("{sys}/{dia}")
}

fn bp_dash(sys: i64, dia: i64) -> String {
    format!("{sys}-{dia}")
}

fn bp_backslash(sys: i64, dia: i64) -> String {
    format!("{sys}\\{dia}")
}

fn bp_over(sys: i64, dia: i64) -> String {
    format!("{sys} over {dia}")
}

// Incomplete reading: systolic only.
fn bp_systolic_only(sys: i64, _dia: i64) -> String {
    format!("{sys}")
}

const BLOOD_PRESSURE_VARIANTS: [fn(i64, i64) -> String; 5] =
    [bp_slash, bp_dash, bp_backslash, bp_over, bp_systolic_only];

/// Generator for a deliberately messy patient-visit dataset.
pub struct SyntheticDataGenerator {
    n_records: usize,
    output_dir: PathBuf,
    rng: StdRng,
}

impl SyntheticDataGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new(n_records: usize, output_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::build(n_records, output_dir.into(), StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed for reproducible output.
    pub fn with_seed(n_records: usize, output_dir: impl Into<PathBuf>, seed: u64) -> Result<Self> {
        Self::build(n_records, output_dir.into(), StdRng::seed_from_u64(seed))
    }

    fn build(n_records: usize, output_dir: PathBuf, rng: StdRng) -> Result<Self> {
        ensure!(n_records > 0, "n_records must be a positive integer");
        Ok(Self {
            n_records,
            output_dir,
            rng,
        })
    }

    fn generate_patient_id(&mut self) -> String {
        let variant = PATIENT_ID_VARIANTS[self.rng.random_range(0..PATIENT_ID_VARIANTS.len())];
        variant(&mut self.rng)
    }

    fn generate_visit_date(&mut self) -> String {
        let (year, month, day) = ANCHOR_DATE;
        let anchor = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
        let offset: i64 = self.rng.random_range(-1000..=500);
        let date = if offset >= 0 {
            anchor
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(anchor)
        } else {
            anchor
                .checked_sub_days(Days::new(offset.unsigned_abs()))
                .unwrap_or(anchor)
        };
        let format = DATE_FORMATS[self.rng.random_range(0..DATE_FORMATS.len())];
        date.format(format).to_string()
    }

    fn generate_age(&mut self) -> CellValue {
        // Range deliberately extends below zero to exercise the clamp rule.
        CellValue::Number(self.rng.random_range(-10..120) as f64)
    }

    fn generate_temperature(&mut self) -> String {
        let celsius: f64 = self.rng.random_range(35.5..40.5);
        let variant = TEMPERATURE_VARIANTS[self.rng.random_range(0..TEMPERATURE_VARIANTS.len())];
        variant(celsius)
    }

    fn generate_blood_pressure(&mut self) -> String {
        let systolic: i64 = self.rng.random_range(90..=180);
        let diastolic: i64 = self.rng.random_range(60..=100);
        let variant =
            BLOOD_PRESSURE_VARIANTS[self.rng.random_range(0..BLOOD_PRESSURE_VARIANTS.len())];
        variant(systolic, diastolic)
    }

    fn generate_medical_notes(&mut self) -> String {
        let condition = *CONDITIONS.choose(&mut self.rng).unwrap_or(&CONDITIONS[0]);
        let symptom = *SYMPTOMS.choose(&mut self.rng).unwrap_or(&SYMPTOMS[0]);
        let medication = *MEDICATIONS
            .choose(&mut self.rng)
            .unwrap_or(&MEDICATIONS[0]);
        match self.rng.random_range(0..5) {
            0 => format!("Patient presents with {symptom}. Diagnosed with {condition}."),
            1 => format!("Prescribed {medication} for {condition}"),
            2 => format!("{} - {symptom} observed", condition.to_uppercase()),
            3 => format!("History of {condition}; new symptoms: {symptom}"),
            _ => String::new(),
        }
    }

    fn generate_lab_result(&mut self) -> CellValue {
        match self.rng.random_range(0..6) {
            0 => CellValue::Number(self.rng.random_range(0.0..10.0)),
            1 => CellValue::Text(format!("{:.2}", self.rng.random_range(0.0..10.0))),
            2 => CellValue::Text(
                (*LAB_OUTCOMES.choose(&mut self.rng).unwrap_or(&LAB_OUTCOMES[0])).to_string(),
            ),
            3 => CellValue::Text(format!("{}%", self.rng.random_range(0..=100))),
            4 => CellValue::Text(format!("< {:.1}", self.rng.random_range(0.0..5.0))),
            _ => CellValue::Text(format!("> {:.1}", self.rng.random_range(5.0..10.0))),
        }
    }

    fn generate_row(&mut self) -> Vec<CellValue> {
        vec![
            CellValue::Text(self.generate_patient_id()),
            CellValue::Text(self.generate_visit_date()),
            self.generate_age(),
            CellValue::Text(
                (*GENDER_POOL.choose(&mut self.rng).unwrap_or(&"")).to_string(),
            ),
            CellValue::Text(
                (*INSURANCE_POOL.choose(&mut self.rng).unwrap_or(&"")).to_string(),
            ),
            CellValue::Text(self.generate_medical_notes()),
            CellValue::Text(self.generate_temperature()),
            CellValue::Text(self.generate_blood_pressure()),
            self.generate_lab_result(),
            self.generate_lab_result(),
            self.generate_lab_result(),
            self.generate_lab_result(),
        ]
    }

    /// Generates the full raw table: `n_records` rows plus re-dated
    /// duplicates, with missing cells injected and row order shuffled.
    pub fn generate(&mut self) -> Table {
        let mut table = Table::with_schema();
        for _ in 0..self.n_records {
            let row = self.generate_row();
            table.push_row(row);
        }

        self.inject_missing_cells(&mut table);
        self.append_redated_duplicates(&mut table);
        table.rows.shuffle(&mut self.rng);

        debug!(
            rows = table.height(),
            columns = table.width(),
            "generated raw dataset"
        );
        table
    }

    fn inject_missing_cells(&mut self, table: &mut Table) {
        let mut injected = 0usize;
        for row in &mut table.rows {
            for cell in row.iter_mut() {
                if self.rng.random_bool(MISSING_CELL_PROBABILITY) {
                    *cell = CellValue::Missing;
                    injected += 1;
                }
            }
        }
        debug!(cells = injected, "injected missing values");
    }

    fn append_redated_duplicates(&mut self, table: &mut Table) {
        let amount = DUPLICATE_ROWS.min(table.height());
        let date_idx = match table.column_index(columns::VISIT_DATE) {
            Ok(idx) => idx,
            Err(_) => return,
        };
        let picks = rand::seq::index::sample(&mut self.rng, table.height(), amount);
        let mut duplicates = Vec::with_capacity(amount);
        for idx in picks {
            let mut row = table.rows[idx].clone();
            row[date_idx] = CellValue::Text(self.generate_visit_date());
            duplicates.push(row);
        }
        table.rows.extend(duplicates);
    }

    /// Generates the dataset and writes it as CSV under the output directory.
    ///
    /// Returns the path of the written file.
    pub fn write_dataset(&mut self) -> Result<PathBuf> {
        let table = self.generate();
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("creating output dir {}", self.output_dir.display()))?;
        let path = self.output_dir.join(DATASET_FILE_NAME);
        write_csv(&table, &path)?;
        info!(rows = table.height(), path = %path.display(), "raw dataset written");
        Ok(path)
    }
}

fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.to_output_string()))?;
    }
    writer.flush()?;
    Ok(())
}
