//! Error types for loading and rendering

use thiserror::Error;

/// Errors that can occur while loading tables or rendering figures
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("malformed input schema in {input}: missing column(s) {}", .missing.join(", "))]
    MalformedSchema { input: String, missing: Vec<String> },

    #[error("malformed input schema in {input}: duplicate column {column:?}")]
    DuplicateColumn { input: String, column: String },

    #[error("short row in {input} at row {row}: expected {expected} field(s), found {found}")]
    ShortRow {
        input: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid weight {value:?} in {input} at row {row}")]
    InvalidWeight { input: String, row: usize, value: String },

    #[error("invalid value {value:?} in {input} at row {row}, column {column}")]
    InvalidValue {
        input: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("invalid {name} {value:?}: expected a number")]
    InvalidParameter { name: String, value: String },

    #[error("invalid threshold {0}: must be a finite number")]
    InvalidThreshold(f64),

    #[error("invalid rescale maximum {0}: must be a finite number greater than 1")]
    InvalidRescaleMax(f64),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
