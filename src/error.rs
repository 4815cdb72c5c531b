//! Error types for the regulation extractor.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Input document does not exist.
    #[error("input file '{}' was not found", .0.display())]
    InputNotFound(PathBuf),

    /// Output path has an extension no writer handles.
    #[error("output file '{}' must be either a .json or a .csv file", .0.display())]
    UnsupportedOutput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A summarization backend failed on a section.
    #[error("summarization failed: {0}")]
    Summarize(String),
}

pub type Result<T> = std::result::Result<T, Error>;
