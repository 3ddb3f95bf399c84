use crate::models::{CoercionError, Record, Table, ThresholdSpec};
use tracing::debug;

/// Why a record was dropped by [`RecordFilter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    MissingField { field: String },
    NotNumeric { field: String, reason: CoercionError },
    BelowThreshold { field: String, value: f64, min: f64 },
}

/// Per-reason counts of dropped records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionTally {
    pub missing_field: usize,
    pub not_numeric: usize,
    pub below_threshold: usize,
}

impl RejectionTally {
    fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::MissingField { .. } => self.missing_field += 1,
            Rejection::NotNumeric { .. } => self.not_numeric += 1,
            Rejection::BelowThreshold { .. } => self.below_threshold += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.missing_field + self.not_numeric + self.below_threshold
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    pub records: Vec<Record>,
    pub read_count: usize,
    pub written_count: usize,
    pub rejections: RejectionTally,
}

impl FilterResult {
    pub fn summary(&self) -> String {
        summarize(self.read_count, self.written_count)
    }
}

/// Keeps records whose thresholded fields are all numeric and at or above
/// their minimum.
pub struct RecordFilter {
    thresholds: ThresholdSpec,
}

impl RecordFilter {
    pub fn new(thresholds: ThresholdSpec) -> Self {
        Self { thresholds }
    }

    /// Check one record against every threshold, stopping at the first failure.
    pub fn evaluate(&self, record: &Record) -> Result<(), Rejection> {
        for threshold in self.thresholds.iter() {
            let field = &threshold.field;

            let value = record.get(field).ok_or_else(|| Rejection::MissingField {
                field: field.clone(),
            })?;

            let number = value.to_number().map_err(|reason| Rejection::NotNumeric {
                field: field.clone(),
                reason,
            })?;

            if number < threshold.min {
                return Err(Rejection::BelowThreshold {
                    field: field.clone(),
                    value: number,
                    min: threshold.min,
                });
            }
        }
        Ok(())
    }

    pub fn accepts(&self, record: &Record) -> bool {
        self.evaluate(record).is_ok()
    }

    /// Return the passing records in their original order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|r| self.accepts(r))
            .cloned()
            .collect()
    }

    /// Filter a loaded table, consuming it.
    pub fn run(&self, records: Vec<Record>) -> FilterResult {
        let read_count = records.len();
        let mut rejections = RejectionTally::default();
        let mut kept = Vec::with_capacity(read_count);

        for record in records {
            match self.evaluate(&record) {
                Ok(()) => kept.push(record),
                Err(rejection) => rejections.record(&rejection),
            }
        }

        debug!(
            "Filtered {} records: kept {}, dropped {} (missing={}, non-numeric={}, below={})",
            read_count,
            kept.len(),
            rejections.total(),
            rejections.missing_field,
            rejections.not_numeric,
            rejections.below_threshold
        );

        FilterResult {
            written_count: kept.len(),
            records: kept,
            read_count,
            rejections,
        }
    }

    pub fn run_table(&self, table: Table) -> (Vec<String>, FilterResult) {
        let Table { fields, records } = table;
        (fields, self.run(records))
    }
}

/// One-line human readable report of a run.
pub fn summarize(read_count: usize, written_count: usize) -> String {
    format!(
        "Done. Read {} records, wrote {} records.",
        read_count, written_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn weather(tmax: &str, prcp: &str) -> Record {
        Record::from_pairs([("TMAX", tmax), ("PRCP", prcp)])
    }

    fn sample() -> Vec<Record> {
        vec![
            weather("75", "0.05"),
            weather("60", "0.2"),
            weather("", "0.5"),
            weather("82", "T"),
            weather("70", "0.1"),
            Record::from_pairs([("PRCP", "0.3")]),
        ]
    }

    #[test]
    fn test_temperature_threshold() {
        let filter = RecordFilter::new(ThresholdSpec::new().with("TMAX", 70.0));
        let result = filter.run(vec![weather("75", "0.05"), weather("60", "0.2")]);

        assert_eq!(result.records, vec![weather("75", "0.05")]);
        assert_eq!(result.read_count, 2);
        assert_eq!(result.written_count, 1);
    }

    #[test]
    fn test_precipitation_threshold() {
        let filter = RecordFilter::new(ThresholdSpec::new().with("PRCP", 0.1));
        let result = filter.run(vec![weather("75", "0.05"), weather("60", "0.2")]);

        assert_eq!(result.records, vec![weather("60", "0.2")]);
        assert_eq!(result.read_count, 2);
        assert_eq!(result.written_count, 1);
    }

    #[test]
    fn test_bound_is_inclusive() {
        let filter = RecordFilter::new(ThresholdSpec::new().with("TMAX", 70.0));
        assert!(filter.accepts(&weather("70", "0")));
        assert!(filter.accepts(&weather("70.0", "0")));
        assert!(!filter.accepts(&weather("69.99", "0")));
    }

    #[test]
    fn test_blank_or_missing_field_is_dropped() {
        let filter = RecordFilter::new(ThresholdSpec::new().with("TMAX", 70.0));

        assert!(matches!(
            filter.evaluate(&weather("", "0.5")),
            Err(Rejection::NotNumeric {
                reason: CoercionError::Empty,
                ..
            })
        ));
        assert_eq!(
            filter.evaluate(&Record::from_pairs([("PRCP", "0.3")])),
            Err(Rejection::MissingField {
                field: "TMAX".to_string()
            })
        );
    }

    #[test]
    fn test_non_numeric_value_excludes_even_when_other_thresholds_pass() {
        let filter = RecordFilter::new(ThresholdSpec::new().with("TMAX", 70.0).with("PRCP", 0.0));
        assert!(!filter.accepts(&weather("82", "T")));
        assert!(!filter.accepts(&weather("abc", "1.0")));
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let records = sample();
        let filter = RecordFilter::new(ThresholdSpec::new());

        assert_eq!(filter.apply(&records), records);
    }

    #[test]
    fn test_apply_is_idempotent_and_order_preserving() {
        let records = sample();
        let filter = RecordFilter::new(ThresholdSpec::new().with("TMAX", 65.0).with("PRCP", 0.05));

        let once = filter.apply(&records);
        let twice = filter.apply(&once);

        assert_eq!(once, vec![weather("75", "0.05"), weather("70", "0.1")]);
        assert_eq!(twice, once);
        assert!(once.len() <= records.len());
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let records = sample();
        let before = records.clone();
        let filter = RecordFilter::new(ThresholdSpec::new().with("TMAX", 100.0));

        assert!(filter.apply(&records).is_empty());
        assert_eq!(records, before);
    }

    #[test]
    fn test_rejection_tally() {
        let filter = RecordFilter::new(ThresholdSpec::new().with("TMAX", 70.0));
        let result = filter.run(sample());

        assert_eq!(result.written_count, 3);
        assert_eq!(
            result.rejections,
            RejectionTally {
                missing_field: 1,
                not_numeric: 1,
                below_threshold: 1,
            }
        );
        assert_eq!(
            result.read_count,
            result.written_count + result.rejections.total()
        );
    }

    #[test]
    fn test_json_scalars() {
        let records = vec![
            Record::from_pairs([("TMAX", FieldValue::from(json!(75)))]),
            Record::from_pairs([("TMAX", FieldValue::from(json!(null)))]),
            Record::from_pairs([("TMAX", FieldValue::from(json!("71.5")))]),
            Record::from_pairs([("TMAX", FieldValue::from(json!([80])))]),
        ];
        let filter = RecordFilter::new(ThresholdSpec::new().with("TMAX", 70.0));

        let kept = filter.apply(&records);
        assert_eq!(kept, vec![records[0].clone(), records[2].clone()]);
    }

    #[test]
    fn test_run_table_keeps_fields() {
        let table = Table::new(
            vec!["TMAX".to_string(), "PRCP".to_string()],
            vec![weather("75", "0.05")],
        );
        let (fields, result) = RecordFilter::new(ThresholdSpec::new()).run_table(table);

        assert_eq!(fields, vec!["TMAX", "PRCP"]);
        assert_eq!(result.written_count, 1);
    }

    #[test]
    fn test_summarize() {
        assert_eq!(summarize(2, 1), "Done. Read 2 records, wrote 1 records.");
        assert_eq!(summarize(0, 0), "Done. Read 0 records, wrote 0 records.");
    }
}
