//! Runtime configuration for the command-line tool.
//!
//! Values come from the environment (after `.env` is loaded by `main`);
//! command-line flags override them. The calculation core reads none of it.

use crate::models::SortOrder;
use crate::output::OutputFormat;
use std::error::Error;
use std::path::PathBuf;

pub const ENV_LOG_CONFIG: &str = "SUBNET_VLSM_LOG_CONFIG";
pub const ENV_FORMAT: &str = "SUBNET_VLSM_FORMAT";
pub const ENV_SORT: &str = "SUBNET_VLSM_SORT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file.
    pub log_config: PathBuf,
    /// Default output format.
    pub format: OutputFormat,
    /// Default listing order for VLSM plans.
    pub sort: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            format: OutputFormat::default(),
            sort: SortOrder::default(),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format
                .parse::<OutputFormat>()
                .map_err(|e| format!("{ENV_FORMAT}: {e}"))?;
        }
        if let Some(sort) = lookup(ENV_SORT) {
            config.sort = sort.parse::<SortOrder>().map_err(|e| format!("{ENV_SORT}: {e}"))?;
        }

        Ok(config)
    }
}
