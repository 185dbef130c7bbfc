use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MedTabError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input dataset not found: {0}")]
    InputNotFound(PathBuf),
    #[error("column not found: {0}")]
    MissingColumn(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, MedTabError>;
