pub mod record_filter;

pub use record_filter::{summarize, FilterResult, RecordFilter, Rejection, RejectionTally};
