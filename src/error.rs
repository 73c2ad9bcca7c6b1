use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the salary dataset. Fatal for the session: nothing is rendered
/// from a dataset that did not load completely.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("dataset {path} line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("dataset {path} contains no records")]
    Empty { path: PathBuf },
}

/// Rejected dashboard request (bad JSON or unknown filter values).
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid request body: {0}")]
    Body(#[from] serde_json::Error),
    #[error("Invalid query parameter '{name}': '{value}'")]
    Query { name: &'static str, value: String },
}
