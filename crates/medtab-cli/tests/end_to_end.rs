//! Full generate-then-clean runs against the canonical-table invariants.

use std::collections::BTreeSet;

use medtab_cli::cli::{CleanArgs, GenerateArgs};
use medtab_cli::pipeline::{run_clean, run_generate};
use medtab_model::{CellValue, columns};

#[test]
fn generate_then_clean_satisfies_canonical_invariants() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = run_generate(&GenerateArgs {
        n_records: 200,
        output_dir: dir.path().join("data"),
        seed: Some(11),
    })
    .unwrap();

    let output_file = dir.path().join("cleaned").join("cleaned_data.csv");
    let plot_dir = dir.path().join("cleaned").join("plots");
    let table = run_clean(&CleanArgs {
        input_file: raw_path,
        output_file: output_file.clone(),
        plot_dir: plot_dir.clone(),
    })
    .unwrap();

    assert!(table.height() > 0);
    assert!(table.height() <= 250);

    let pid = table.column_index(columns::PATIENT_ID).unwrap();
    let date = table.column_index(columns::VISIT_DATE).unwrap();
    let age = table.column_index(columns::AGE).unwrap();
    let gender = table.column_index(columns::GENDER).unwrap();
    let insurance = table.column_index(columns::INSURANCE).unwrap();
    let notes = table.column_index(columns::MEDICAL_NOTES).unwrap();
    let temperature = table.column_index(columns::TEMPERATURE).unwrap();
    let bp = table.column_index(columns::BLOOD_PRESSURE).unwrap();

    let mut seen_visits = BTreeSet::new();
    for row in &table.rows {
        let key = format!(
            "{}|{}",
            row[pid].to_output_string(),
            row[date].to_output_string()
        );
        assert!(seen_visits.insert(key), "duplicate visit survived dedup");

        match &row[age] {
            CellValue::Missing => {}
            CellValue::Number(value) => {
                assert!((0.0..=120.0).contains(value), "age {value} out of range")
            }
            other => panic!("unexpected age cell {other:?}"),
        }

        let gender_value = row[gender].as_text().expect("gender must be text");
        assert!(
            ["Male", "Female", "Other"].contains(&gender_value),
            "gender {gender_value:?}"
        );

        let insurance_value = row[insurance].as_text().expect("insurance must be text");
        assert!(!insurance_value.is_empty());
        assert_ne!(insurance_value, "N/A");

        let notes_value = row[notes].as_text().expect("notes must be text");
        assert!(!notes_value.trim().is_empty());

        assert!(
            row[temperature].as_f64().is_some(),
            "temperature must be imputed"
        );

        let bp_value = row[bp].as_text().expect("blood pressure must be text");
        assert!(
            bp_value == "Normal" || bp_value.split('/').count() == 2,
            "blood pressure {bp_value:?}"
        );
    }

    assert!(output_file.exists());
    for chart in medtab_report::CHART_FILES {
        assert!(plot_dir.join(chart).exists(), "missing chart {chart}");
    }
}

#[test]
fn clean_reports_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_clean(&CleanArgs {
        input_file: dir.path().join("nope.csv"),
        output_file: dir.path().join("out.csv"),
        plot_dir: dir.path().join("plots"),
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("not found"));
}
