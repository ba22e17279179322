//! Typed jmdict-simplified 3.0.1 word records.
//!
//! Field wire names are camelCase and come straight from the format, so the
//! derived [`Schema`] shapes use the same names as the JSON.

use serde::{Deserialize, Serialize};
use shiori_path::Schema;

/// Tag abbreviation, resolved through [`crate::JMdict::tags`].
pub type Tag = String;

/// A dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Schema)]
pub struct Word {
    pub id: String,
    pub kanji: Vec<Kanji>,
    pub kana: Vec<Kana>,
    pub sense: Vec<Sense>,
}

/// Orthographic (kanji) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Schema)]
pub struct Kanji {
    pub common: bool,
    pub text: String,
    pub tags: Vec<Tag>,
}

/// Reading (kana) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Schema)]
#[serde(rename_all = "camelCase")]
pub struct Kana {
    pub common: bool,
    pub text: String,
    pub tags: Vec<Tag>,
    /// Kanji texts this reading belongs to, `"*"` for all of them
    pub applies_to_kanji: Vec<String>,
}

impl Kana {
    pub fn applies_to(&self, kanji: &str) -> bool {
        self.applies_to_kanji.iter().any(|k| k == "*" || k == kanji)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Schema)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
    pub part_of_speech: Vec<Tag>,
    pub applies_to_kanji: Vec<String>,
    pub applies_to_kana: Vec<String>,
    pub related: Vec<Xref>,
    pub antonym: Vec<Xref>,
    pub field: Vec<Tag>,
    pub dialect: Vec<Tag>,
    pub misc: Vec<Tag>,
    pub info: Vec<String>,
    pub language_source: Vec<Source>,
    pub gloss: Vec<Gloss>,
}

/// Cross-reference to another entry, serialized as a 1 to 3 element array.
///
/// Each arity is its own variant; the JSON never has trailing nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Schema)]
#[serde(untagged)]
pub enum Xref {
    /// `[kanji, kana, senseIndex]`
    KanjiKanaSense(String, String, u32),
    /// `[kanjiOrKana, senseIndex]`
    TermSense(String, u32),
    /// `[kanjiOrKana]`
    Term([String; 1]),
}

impl Xref {
    /// Kanji or kana text of the referenced entry.
    pub fn term(&self) -> &str {
        match self {
            Xref::KanjiKanaSense(term, _, _) | Xref::TermSense(term, _) => term,
            Xref::Term([term]) => term,
        }
    }

    pub fn reading(&self) -> Option<&str> {
        match self {
            Xref::KanjiKanaSense(_, kana, _) => Some(kana.as_str()),
            _ => None,
        }
    }

    /// One-based sense number in the referenced entry.
    pub fn sense_index(&self) -> Option<u32> {
        match self {
            Xref::KanjiKanaSense(_, _, index) | Xref::TermSense(_, index) => Some(*index),
            Xref::Term(_) => None,
        }
    }
}

/// Language-source annotation (loanword origin).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Schema)]
pub struct Source {
    pub lang: String,
    pub full: bool,
    pub wasei: bool,
    /// Absent is not the same as empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Schema)]
pub struct Gloss {
    pub lang: String,
    pub text: String,
}
