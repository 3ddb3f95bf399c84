use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::Result;

/// Inclusive lower bound on a single numeric field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Threshold {
    #[validate(length(min = 1))]
    pub field: String,

    #[validate(custom(function = "validate_finite"))]
    pub min: f64,
}

fn validate_finite(value: f64) -> std::result::Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

impl Threshold {
    pub fn new(field: impl Into<String>, min: f64) -> Self {
        Self {
            field: field.into(),
            min,
        }
    }
}

/// The set of thresholds applied to every record, at most one per field.
#[derive(Debug, Clone, PartialEq, Default, Validate)]
pub struct ThresholdSpec {
    #[validate(nested)]
    bounds: Vec<Threshold>,
}

impl ThresholdSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, min: f64) -> Self {
        self.set(Threshold::new(field, min));
        self
    }

    /// Add a threshold, replacing any existing bound on the same field.
    pub fn set(&mut self, threshold: Threshold) {
        match self.bounds.iter_mut().find(|t| t.field == threshold.field) {
            Some(existing) => existing.min = threshold.min,
            None => self.bounds.push(threshold),
        }
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.bounds.iter().find(|t| t.field == field).map(|t| t.min)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Threshold> {
        self.bounds.iter()
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Validate every bound and hand the spec back on success.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

impl FromIterator<Threshold> for ThresholdSpec {
    fn from_iter<I: IntoIterator<Item = Threshold>>(iter: I) -> Self {
        let mut spec = ThresholdSpec::new();
        for threshold in iter {
            spec.set(threshold);
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing_field() {
        let spec = ThresholdSpec::new()
            .with("TMAX", 70.0)
            .with("PRCP", 0.1)
            .with("TMAX", 80.0);

        assert_eq!(spec.len(), 2);
        assert_eq!(spec.get("TMAX"), Some(80.0));
        assert_eq!(spec.get("PRCP"), Some(0.1));
        assert_eq!(spec.get("TMIN"), None);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let spec: ThresholdSpec = vec![Threshold::new("PRCP", 0.1), Threshold::new("TMAX", 70.0)]
            .into_iter()
            .collect();

        let fields: Vec<&str> = spec.iter().map(|t| t.field.as_str()).collect();
        assert_eq!(fields, vec!["PRCP", "TMAX"]);
    }

    #[test]
    fn test_validation() {
        assert!(ThresholdSpec::new().validated().is_ok());
        assert!(ThresholdSpec::new().with("TMAX", -40.0).validated().is_ok());
        assert!(ThresholdSpec::new().with("", 1.0).validated().is_err());
        assert!(ThresholdSpec::new().with("TMAX", f64::NAN).validated().is_err());
        assert!(ThresholdSpec::new()
            .with("TMAX", f64::INFINITY)
            .validated()
            .is_err());
    }
}
