pub mod csv_reader;
pub mod json_reader;

pub use csv_reader::CsvReader;
pub use json_reader::JsonReader;

use crate::error::{FilterError, Result};
use crate::models::Table;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Infer the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            other => Err(FilterError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputFormat::Csv => "CSV",
            InputFormat::Json => "JSON",
        })
    }
}

/// Read a whole table from `source` in the given format.
pub fn load<R: Read>(source: R, format: InputFormat) -> Result<Table> {
    match format {
        InputFormat::Csv => CsvReader::new().read(source),
        InputFormat::Json => JsonReader::new().read(source),
    }
}

/// Open `path` and load it, inferring the format from the extension unless
/// one is given.
pub fn load_path(path: &Path, format: Option<InputFormat>) -> Result<Table> {
    if !path.exists() {
        return Err(FilterError::MissingInput(path.to_path_buf()));
    }

    let format = match format {
        Some(format) => format,
        None => InputFormat::from_path(path)?,
    };

    debug!("Loading {} input from {}", format, path.display());
    let file = File::open(path)?;
    load(BufReader::new(file), format)
}
