use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub dashboard: DashboardConfig,
    pub queries: QueryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Number of cities kept by the "Top Cities by Sales" section
    pub top_n: usize,
    /// Number of most recent storage snapshots plotted
    pub storage_days: usize,
    /// Row cap for the access history table
    pub access_history_limit: usize,
    /// Query groups with this many executions or fewer are hidden from the performance table
    pub min_query_count: usize,
    /// Directory read by the JSON data source of the demo binary
    pub data_dir: String,
}

/// Opaque query texts handed to the data source. `{start}` and `{end}` are
/// replaced with the bounds of the selected time window.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    pub shift_sales: String,
    pub metering_history: String,
    pub storage_usage: String,
    pub query_history: String,
    pub login_history: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                log_dir: "logs".to_string(),
                stdout_level: "info".to_string(),
                file_level: "debug".to_string(),
            },
            dashboard: DashboardConfig {
                top_n: 10,
                storage_days: 30,
                access_history_limit: 1000,
                min_query_count: 10,
                data_dir: "data".to_string(),
            },
            queries: QueryConfig {
                shift_sales: "aerofleet.analytics.shift_sales_v".to_string(),
                metering_history: "metering_history".to_string(),
                storage_usage: "storage_usage".to_string(),
                query_history: "query_history".to_string(),
                login_history: "login_history".to_string(),
            },
        }
    }
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path =
        env::var("WAREHOUSE_DASH_CONFIG").unwrap_or_else(|_| "config".to_string());
    let defaults = Settings::default();

    let settings: Settings = config::Config::builder()
        .set_default("logging.log_dir", defaults.logging.log_dir)?
        .set_default("logging.stdout_level", defaults.logging.stdout_level)?
        .set_default("logging.file_level", defaults.logging.file_level)?
        .set_default("dashboard.top_n", defaults.dashboard.top_n as i64)?
        .set_default("dashboard.storage_days", defaults.dashboard.storage_days as i64)?
        .set_default(
            "dashboard.access_history_limit",
            defaults.dashboard.access_history_limit as i64,
        )?
        .set_default(
            "dashboard.min_query_count",
            defaults.dashboard.min_query_count as i64,
        )?
        .set_default("dashboard.data_dir", defaults.dashboard.data_dir)?
        .set_default("queries.shift_sales", defaults.queries.shift_sales)?
        .set_default("queries.metering_history", defaults.queries.metering_history)?
        .set_default("queries.storage_usage", defaults.queries.storage_usage)?
        .set_default("queries.query_history", defaults.queries.query_history)?
        .set_default("queries.login_history", defaults.queries.login_history)?
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(config::Environment::with_prefix("WAREHOUSE_DASH").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
