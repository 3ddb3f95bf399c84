use crate::error::Result;
use chrono::{Local, NaiveDateTime};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Format one run log line, e.g.
/// `2024-07-15T09:30:00.000000 | records_read=2 | records_written=1`.
pub fn format_log_entry(timestamp: NaiveDateTime, read_count: usize, written_count: usize) -> String {
    format!(
        "{} | records_read={} | records_written={}",
        timestamp.format("%Y-%m-%dT%H:%M:%S%.6f"),
        read_count,
        written_count
    )
}

/// Append a line for this run to `path`, creating the file if needed.
pub fn append_run_log(path: &Path, read_count: usize, written_count: usize) -> Result<()> {
    let entry = format_log_entry(Local::now().naive_local(), read_count, written_count);

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", entry)?;

    debug!("Appended run log entry to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_format_log_entry() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 7, 15)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 125)
            .unwrap();

        assert_eq!(
            format_log_entry(timestamp, 2, 1),
            "2024-07-15T09:30:00.000125 | records_read=2 | records_written=1"
        );
    }

    #[test]
    fn test_append_never_truncates() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("weather_filter.log");
        std::fs::write(&path, "existing line\n")?;

        append_run_log(&path, 2, 1)?;
        append_run_log(&path, 5, 0)?;

        let contents = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "existing line");
        assert!(lines[1].ends_with(" | records_read=2 | records_written=1"));
        assert!(lines[2].ends_with(" | records_read=5 | records_written=0"));
        assert!(NaiveDateTime::parse_from_str(
            lines[1].split(" | ").next().unwrap(),
            "%Y-%m-%dT%H:%M:%S%.f"
        )
        .is_ok());

        Ok(())
    }
}
