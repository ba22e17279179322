use std::path::Path;

use crate::dictionary::JMdict;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to parse {source_name}: {error}")]
    Parse {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("Failed to read {path}: {error}")]
    Read {
        path: String,
        #[source]
        error: std::io::Error,
    },
}

/// Reads jmdict-simplified documents into the typed model.
pub struct JMdictLoader;

impl JMdictLoader {
    pub fn from_json(json: &str) -> Result<JMdict, LoadError> {
        Self::parse(json, "<string>")
    }

    pub fn load_from_file(path: &Path) -> Result<JMdict, LoadError> {
        let name = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|error| LoadError::Read {
            path: name.clone(),
            error,
        })?;
        Self::parse(&json, &name)
    }

    fn parse(json: &str, source_name: &str) -> Result<JMdict, LoadError> {
        let dict = JMdict::from_json(json).map_err(|error| LoadError::Parse {
            source_name: source_name.to_string(),
            error,
        })?;
        tracing::info!(
            "Loaded {} entries from {source_name} (JMdict {}, {})",
            dict.entry_count(),
            dict.version,
            dict.dict_date
        );
        Ok(dict)
    }
}
