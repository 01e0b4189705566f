use std::path::PathBuf;

use thiserror::Error;

use super::ValidationError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read job file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing CSV data in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Error parsing CSV data at line {line}: missing required field '{field}'.")]
    MissingField { line: u64, field: &'static str },
    #[error("Error parsing CSV data at line {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: ValidationError,
    },
    #[error("Error parsing CSV data at line {line}: malformed header entry '{entry}'. Expected 'key=value'.")]
    MalformedHeader { line: u64, entry: String },
    #[error("Job file '{path}' contains no jobs.")]
    EmptyFile { path: PathBuf },
    #[error("Invalid job: {source}")]
    InvalidJob {
        #[source]
        source: ValidationError,
    },
    #[error("Failed to read interactive input: {source}")]
    Prompt {
        #[source]
        source: std::io::Error,
    },
    #[error("Interactive input ended before the {field} was entered.")]
    PromptClosed { field: &'static str },
    #[error("{field} cannot be empty.")]
    PromptEmpty { field: &'static str },
}
