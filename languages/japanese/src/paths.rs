//! Field paths handed to indexing code, checked against [`Word`] at compile time.

use serde::Serialize;
use shiori_config::path::PathConfig;
use shiori_path::{CheckedPath, PathStyle, path};

use crate::model::{Sense, Word};

pub const SENSE: CheckedPath = path!(Word => Sense; sense, 10);
pub const GLOSS_LANG: CheckedPath = path!(Word => String; sense, 10, gloss, 40, lang);
pub const GLOSS_TEXT: CheckedPath = path!(Word => String; sense, 10, gloss, 40, text);
pub const KANJI_TEXT: CheckedPath = path!(Word => String; kanji, 0, text);
pub const KANA_TEXT: CheckedPath = path!(Word => String; kana, 0, text);
pub const SOURCE_TEXT: CheckedPath =
    path!(Word => Option<String>; sense, 10, languageSource, 0, text);
pub const RELATED_TERM: CheckedPath = path!(Word => String; sense, 10, related, 0, 0);

/// Rendered path strings, one per indexed property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPaths {
    pub sense: String,
    pub lang: String,
    pub gloss_text: String,
    pub kanji_text: String,
    pub kana_text: String,
    pub source_text: String,
    pub related_term: String,
}

impl IndexPaths {
    pub fn new(style: PathStyle) -> Self {
        Self {
            sense: SENSE.render(style),
            lang: GLOSS_LANG.render(style),
            gloss_text: GLOSS_TEXT.render(style),
            kanji_text: KANJI_TEXT.render(style),
            kana_text: KANA_TEXT.render(style),
            source_text: SOURCE_TEXT.render(style),
            related_term: RELATED_TERM.render(style),
        }
    }

    pub fn from_config(config: &PathConfig) -> Self {
        Self::new(config.style())
    }
}

impl Default for IndexPaths {
    fn default() -> Self {
        Self::new(PathStyle::CANONICAL)
    }
}
