use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_USER_AGENT, INE_BASE_URL, MUNICIPALITY_VARIABLE_ID,
    POPULATION_TABLE_ID, TARGET_DATE,
};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Resolved configuration with all values filled in (no Options).
///
/// Every field has a default, so an empty TOML file is a valid configuration.
/// Unknown keys are rejected to catch typos.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Root of the INE Tempus JSON API
    pub base_url: String,
    /// Population table queried for demographics
    pub table_id: String,
    /// Variable of `table_id` that identifies municipalities
    pub municipality_variable_id: String,
    /// Reference date sent with table queries (`YYYYMMDD`); empty to omit
    pub target_date: String,
    /// Timeout for the municipality catalog request
    pub catalog_timeout_ms: u64,
    /// Timeout for the table data request
    pub data_timeout_ms: u64,
    /// Maximum number of retry attempts for failed gateway requests
    pub max_retries: u32,
    /// Initial delay in milliseconds before the first retry
    pub retry_initial_delay_ms: u64,
    /// Maximum delay in milliseconds between retries
    pub retry_max_delay_ms: u64,
    /// User-Agent header sent to the statistics service
    pub user_agent: String,
    /// Address the HTTP server listens on
    pub bind_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: INE_BASE_URL.to_string(),
            table_id: POPULATION_TABLE_ID.to_string(),
            municipality_variable_id: MUNICIPALITY_VARIABLE_ID.to_string(),
            target_date: TARGET_DATE.to_string(),
            catalog_timeout_ms: 10_000,
            data_timeout_ms: 30_000,
            max_retries: 1,
            retry_initial_delay_ms: 250,
            retry_max_delay_ms: 2_000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read and `InvalidInput` if the TOML
    /// is malformed, contains unknown keys, or fails [`AppConfig::validate`].
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks timeouts, the base URL and the bind address.
    pub fn validate(&self) -> AppResult<()> {
        if self.catalog_timeout_ms == 0 || self.data_timeout_ms == 0 {
            return Err(AppError::InvalidInput(
                "Timeouts must be greater than 0".into(),
            ));
        }
        Url::parse(&self.base_url)?;
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        self.bind_address.parse().map_err(|e| {
            AppError::InvalidInput(format!(
                "Invalid bind address '{}': {e}",
                self.bind_address
            ))
        })
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog_timeout_ms)
    }

    pub fn data_timeout(&self) -> Duration {
        Duration::from_millis(self.data_timeout_ms)
    }

    /// The date hint for table queries, if one is configured.
    pub fn date_hint(&self) -> Option<&str> {
        let date = self.target_date.trim();
        (!date.is_empty()).then_some(date)
    }
}
