use serde::{Deserialize, Serialize};
use shiori_path::{PathStyle, Separator};

use crate::env_parse;

/// How checked paths are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// `"."` or `"/"`. Anything else fails to load.
    #[serde(default)]
    pub separator: Separator,
    /// Insert a literal `model` segment after the first one
    #[serde(default)]
    pub insert_marker: bool,
}

impl PathConfig {
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            separator: env_parse("PATH_SEPARATOR").unwrap_or(defaults.separator),
            insert_marker: env_parse("PATH_INSERT_MARKER").unwrap_or(defaults.insert_marker),
        }
    }

    pub fn style(&self) -> PathStyle {
        PathStyle::new(self.separator, self.insert_marker)
    }
}
