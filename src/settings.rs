use crate::error::Result;
use crate::models::{Threshold, ThresholdSpec};
use crate::utils::constants::{DEFAULT_LOG_FILE, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

/// Run settings that may come from a config file or the environment.
///
/// Thresholds are listed as tables so field names keep their case:
///
/// ```toml
/// log_file = "logs/weather_filter.log"
///
/// [[thresholds]]
/// field = "TMAX"
/// min = 70.0
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FilterSettings {
    pub log_file: PathBuf,

    #[serde(default)]
    #[validate(nested)]
    pub thresholds: Vec<Threshold>,
}

impl FilterSettings {
    /// Layer built-in defaults, the optional settings file and
    /// `WEATHER_FILTER_*` environment variables, in that order.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().set_default(
            "log_file",
            DEFAULT_LOG_FILE.to_string(),
        )?;

        if let Some(path) = config_file {
            debug!("Reading settings from {}", path.display());
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        let settings: FilterSettings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn threshold_spec(&self) -> ThresholdSpec {
        self.thresholds.iter().cloned().collect()
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            thresholds: Vec::new(),
        }
    }
}
