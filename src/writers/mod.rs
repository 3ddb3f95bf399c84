pub mod csv_writer;
pub mod run_log;

pub use csv_writer::{write_csv_file, write_records};
pub use run_log::{append_run_log, format_log_entry};
