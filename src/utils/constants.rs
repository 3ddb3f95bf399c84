/// Field names used by the dedicated threshold flags
pub const TMAX_FIELD: &str = "TMAX";
pub const PRCP_FIELD: &str = "PRCP";

/// File names
pub const DEFAULT_LOG_FILE: &str = "weather_filter.log";

/// Environment variable prefix for settings, e.g. `WEATHER_FILTER_LOG_FILE`
pub const ENV_PREFIX: &str = "WEATHER_FILTER";
