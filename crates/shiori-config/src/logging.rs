use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

fn default_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `info,shiori_path=debug`
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            filter: std::env::var("LOG_FILTER").unwrap_or(defaults.filter),
            json: crate::env_parse("LOG_JSON").unwrap_or(defaults.json),
        }
    }
}

/// Installs a global `tracing` subscriber. Returns `false`, leaving the
/// existing one in place, if a subscriber is already set.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?}: {e}, using {:?}", config.filter, default_filter());
        EnvFilter::new(default_filter())
    });
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test in this crate that installs a subscriber.
    #[test]
    fn test_init_once() {
        let config = LoggingConfig {
            filter: "not a [valid filter".to_string(),
            json: false,
        };
        assert!(init(&config));
        assert!(!init(&LoggingConfig::default()));
        assert!(!init(&LoggingConfig {
            json: true,
            ..LoggingConfig::default()
        }));
    }

    #[test]
    fn test_json_flag_from_file() {
        let config: LoggingConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert_eq!(config.filter, "info");
        assert!(config.json);
    }
}
