use crate::error::{FilterError, Result};
use crate::models::{Record, Table};
use crate::readers::InputFormat;
use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

/// Reads comma-separated text whose first line names the fields.
///
/// A row shorter than the header yields a record without its trailing
/// fields; a row longer than the header is malformed.
pub struct CsvReader;

impl CsvReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read<R: Read>(&self, source: R) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let fields: Vec<String> = reader
            .headers()
            .map_err(|e| parse_error(&e))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        if fields.is_empty() {
            return Err(FilterError::Format("CSV has no headers".to_string()));
        }

        let mut records = Vec::new();
        let mut short_rows = 0;
        for row in reader.records() {
            let row = row.map_err(|e| parse_error(&e))?;

            if row.len() > fields.len() {
                let line = row.position().map_or(0, |pos| pos.line());
                return Err(FilterError::parse(
                    InputFormat::Csv,
                    format!(
                        "line {}: found record with {} fields, but the header has {} fields",
                        line,
                        row.len(),
                        fields.len()
                    ),
                ));
            }
            if row.len() < fields.len() {
                short_rows += 1;
            }

            let record = Record::from_pairs(fields.iter().map(String::as_str).zip(row.iter()));
            records.push(record);
        }

        debug!(
            "Read {} CSV records with {} fields ({} short rows)",
            records.len(),
            fields.len(),
            short_rows
        );

        Ok(Table::new(fields, records))
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_error(err: &csv::Error) -> FilterError {
    FilterError::parse(InputFormat::Csv, err.to_string())
}
