use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A dataset file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV row or header could not be decoded.
    #[error("Failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column the loader depends on is absent from the header row.
    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A timestamp string did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// The user kept answering with values outside the allowed set.
    #[error("No valid {field} after {attempts} attempts")]
    RetriesExhausted { field: &'static str, attempts: u32 },

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("Input closed while waiting for {0}")]
    InputClosed(&'static str),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
