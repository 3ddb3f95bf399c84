pub mod record;
pub mod threshold;

pub use record::{CoercionError, FieldValue, Record, Table};
pub use threshold::{Threshold, ThresholdSpec};
