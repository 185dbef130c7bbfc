pub mod columns;
pub mod datetime;
pub mod dedupe;
pub mod io;
pub mod missing;
pub mod pipeline;

pub use columns::{
    clean_age, clean_blood_pressure, clean_gender, clean_insurance, clean_medical_notes,
    clean_patient_id, clean_temperature, clean_visit_date,
};
pub use datetime::{parse_flexible_date, to_iso_date};
pub use dedupe::drop_duplicate_visits;
pub use io::{load_dataset, save_dataset};
pub use missing::resolve_missing_values;
pub use pipeline::{CleaningPipeline, CleaningStep, build_default_pipeline, clean_table};
