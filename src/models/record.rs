use serde_json::{Number, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use thiserror::Error;

/// A single cell as read from the input source.
///
/// CSV input only ever produces `Text`; JSON input keeps the scalar kind it
/// was written with so numbers are not round-tripped through strings.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
    Nested(Value),
}

/// Why a present value could not be used as a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    #[error("empty value")]
    Empty,
    #[error("'{0}' is not a number")]
    NotNumeric(String),
    #[error("null value")]
    Null,
    #[error("value is an array or object")]
    NotScalar,
}

impl FieldValue {
    /// Coerce the value to a float.
    ///
    /// Text is trimmed before parsing, booleans count as 1.0 / 0.0, and a NaN
    /// result is rejected the same way as unparsable text.
    pub fn to_number(&self) -> Result<f64, CoercionError> {
        let number = match self {
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(CoercionError::Empty);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| CoercionError::NotNumeric(s.clone()))?
            }
            FieldValue::Number(n) => n
                .as_f64()
                .ok_or_else(|| CoercionError::NotNumeric(n.to_string()))?,
            FieldValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            FieldValue::Null => return Err(CoercionError::Null),
            FieldValue::Nested(_) => return Err(CoercionError::NotScalar),
        };

        if number.is_nan() {
            return Err(CoercionError::NotNumeric(self.render().into_owned()));
        }
        Ok(number)
    }

    /// Text form used when writing a CSV cell.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            FieldValue::Null => Cow::Borrowed(""),
            FieldValue::Nested(v) => Cow::Owned(v.to_string()),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => FieldValue::Number(n),
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Null => FieldValue::Null,
            other => FieldValue::Nested(other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// One row of input, keyed by field name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    values: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.insert(key, value);
        }
        record
    }

    /// Later inserts for the same field replace earlier ones.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    /// Look up a field; `None` means the field is absent from this record.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Records plus the field order they were read with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub fields: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(fields: Vec<String>, records: Vec<Record>) -> Self {
        Self { fields, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
