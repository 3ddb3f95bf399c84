use std::path::PathBuf;
use thiserror::Error;

use crate::readers::InputFormat;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Unsupported file format: {0}. Use .csv or .json.")]
    UnsupportedFormat(String),

    #[error("Invalid input format: {0}")]
    Format(String),

    #[error("Malformed {format} input: {message}")]
    Parse {
        format: InputFormat,
        message: String,
    },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid threshold: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Coarse classification of a [`FilterError`], independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    UnsupportedFormat,
    Format,
    Parse,
    Io,
    Output,
    Config,
    Validation,
}

impl FilterError {
    pub fn parse(format: InputFormat, message: impl Into<String>) -> Self {
        FilterError::Parse {
            format,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FilterError::MissingInput(_) => ErrorKind::MissingInput,
            FilterError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            FilterError::Format(_) => ErrorKind::Format,
            FilterError::Parse { .. } => ErrorKind::Parse,
            FilterError::Io(_) => ErrorKind::Io,
            FilterError::Csv(_) => ErrorKind::Output,
            FilterError::Config(_) => ErrorKind::Config,
            FilterError::Validation(_) => ErrorKind::Validation,
        }
    }
}
