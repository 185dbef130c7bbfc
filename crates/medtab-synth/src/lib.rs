pub mod generator;

pub use generator::{DATASET_FILE_NAME, DATE_FORMATS, SyntheticDataGenerator};
