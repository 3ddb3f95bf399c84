use crate::models::Threshold;
use crate::readers::InputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "weather-filter")]
#[command(
    about = "Filter weather station CSV or JSON data by maximum daily temperature and/or precipitation thresholds"
)]
#[command(version)]
pub struct Cli {
    #[arg(help = "Path to input CSV or JSON file containing weather data")]
    pub input: PathBuf,

    #[arg(help = "Path to output CSV file for filtered results")]
    pub output_csv: PathBuf,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Minimum daily maximum temperature (TMAX) required for a record to be included"
    )]
    pub temp_threshold_max: Option<f64>,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Minimum precipitation (PRCP) required for a record to be included"
    )]
    pub prcp_min: Option<f64>,

    #[arg(
        long = "min",
        value_name = "FIELD=VALUE",
        value_parser = parse_threshold,
        help = "Minimum value for any numeric field; may be repeated"
    )]
    pub thresholds: Vec<Threshold>,

    #[arg(long, value_enum, help = "Input format [default: inferred from extension]")]
    pub format: Option<InputFormat>,

    #[arg(long, help = "Path to log file [default: weather_filter.log]")]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Settings file with log_file and [[thresholds]] entries")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}

fn parse_threshold(s: &str) -> Result<Threshold, String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{s}'"))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{s}'"));
    }

    let min = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;

    Ok(Threshold::new(field, min))
}
