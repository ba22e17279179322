use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::path::PathConfig;

pub mod logging;
pub mod path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub path: PathConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Defaults, overridden by environment variables.
    pub fn new() -> Self {
        Config {
            path: PathConfig::new(),
            logging: LoggingConfig::new(),
        }
    }

    /// Load a JSON config file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

/// Reads an environment variable, logging and ignoring values that don't parse.
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {key}={raw:?}: invalid value");
            None
        }
    }
}
