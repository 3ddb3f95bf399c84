use crate::cli::args::Cli;
use crate::error::Result;
use crate::models::{Threshold, ThresholdSpec};
use crate::processors::{FilterResult, RecordFilter};
use crate::readers::load_path;
use crate::settings::FilterSettings;
use crate::utils::constants::{PRCP_FIELD, TMAX_FIELD};
use crate::utils::init_tracing;
use crate::writers::{append_run_log, write_csv_file};
use tracing::info;

/// Counts reported back to the caller after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub read_count: usize,
    pub written_count: usize,
}

pub fn run(cli: Cli) -> Result<RunReport> {
    init_tracing(cli.verbose);

    let settings = FilterSettings::load(cli.config.as_deref())?;
    let thresholds = build_thresholds(&cli, &settings)?;
    let log_file = cli.log_file.clone().unwrap_or(settings.log_file);

    for threshold in thresholds.iter() {
        info!("Threshold: {} >= {}", threshold.field, threshold.min);
    }

    // Input is fully read before the output file is touched.
    let table = load_path(&cli.input, cli.format)?;
    info!(
        "Loaded {} records from {}",
        table.len(),
        cli.input.display()
    );

    let filter = RecordFilter::new(thresholds);
    let (fields, result) = filter.run_table(table);

    write_csv_file(&cli.output_csv, &result.records, &fields)?;
    append_run_log(&log_file, result.read_count, result.written_count)?;

    println!("{}", result.summary());

    Ok(report(&result))
}

/// Settings file thresholds first, then `--min` entries, then the dedicated
/// TMAX / PRCP flags; later entries win for the same field.
fn build_thresholds(cli: &Cli, settings: &FilterSettings) -> Result<ThresholdSpec> {
    let mut spec = settings.threshold_spec();

    for threshold in &cli.thresholds {
        spec.set(threshold.clone());
    }
    if let Some(min) = cli.temp_threshold_max {
        spec.set(Threshold::new(TMAX_FIELD, min));
    }
    if let Some(min) = cli.prcp_min {
        spec.set(Threshold::new(PRCP_FIELD, min));
    }

    spec.validated()
}

fn report(result: &FilterResult) -> RunReport {
    RunReport {
        read_count: result.read_count,
        written_count: result.written_count,
    }
}
