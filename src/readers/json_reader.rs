use crate::error::{FilterError, Result};
use crate::models::{Record, Table};
use crate::readers::InputFormat;
use serde_json::Value as JsonValue;
use std::io::Read;
use tracing::debug;

/// Reads a JSON array of flat objects, e.g.
///
/// ```json
/// [
///   { "STATION": "USW1", "TMAX": 75, "PRCP": 0.05 },
///   { "STATION": "USW1", "TMAX": 60, "PRCP": 0.2 }
/// ]
/// ```
///
/// The field order is taken from the keys of the first object.
pub struct JsonReader;

impl JsonReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read<R: Read>(&self, mut source: R) -> Result<Table> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;

        let root: JsonValue = serde_json::from_slice(&bytes).map_err(|e| {
            if e.is_io() {
                FilterError::Io(e.into())
            } else {
                FilterError::parse(InputFormat::Json, e.to_string())
            }
        })?;

        let JsonValue::Array(items) = root else {
            return Err(FilterError::Format(
                "JSON must be a list of records".to_string(),
            ));
        };

        let mut fields = Vec::new();
        let mut records = Vec::with_capacity(items.len());

        for (i, item) in items.into_iter().enumerate() {
            let JsonValue::Object(obj) = item else {
                return Err(FilterError::Format(format!(
                    "JSON element {i} is not an object"
                )));
            };

            if i == 0 {
                fields = obj.keys().cloned().collect();
            }
            records.push(Record::from_pairs(obj));
        }

        debug!(
            "Read {} JSON records with {} fields",
            records.len(),
            fields.len()
        );

        Ok(Table::new(fields, records))
    }
}

impl Default for JsonReader {
    fn default() -> Self {
        Self::new()
    }
}
