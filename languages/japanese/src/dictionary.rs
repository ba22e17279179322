use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Word;

/// A jmdict-simplified document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JMdict {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub common_only: bool,
    #[serde(default)]
    pub dict_date: String,
    #[serde(default)]
    pub dict_revisions: Vec<String>,
    /// Tag abbreviation to description
    #[serde(default)]
    pub tags: HashMap<String, String>,
    pub words: Vec<Word>,
}

impl JMdict {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn entry_count(&self) -> usize {
        self.words.len()
    }
}
