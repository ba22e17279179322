use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Literal segment inserted after the first one when
/// [`PathStyle::insert_marker`] is set.
pub const MARKER: &str = "model";

/// Serialized as the character itself, `"."` or `"/"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separator {
    /// `sense.10.gloss`
    #[default]
    #[serde(rename = ".")]
    Dot,
    /// `sense/10/gloss`
    #[serde(rename = "/")]
    Slash,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported path separator {0:?}, expected '.' or '/'")]
pub struct InvalidSeparator(pub String);

impl Separator {
    pub const fn as_char(self) -> char {
        match self {
            Separator::Dot => '.',
            Separator::Slash => '/',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Separator::Dot),
            '/' => Some(Separator::Slash),
            _ => None,
        }
    }
}

impl FromStr for Separator {
    type Err = InvalidSeparator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Separator::from_char), chars.next()) {
            (Some(separator), None) => Ok(separator),
            _ => Err(InvalidSeparator(s.to_string())),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// How a checked path is rendered into a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathStyle {
    pub separator: Separator,
    /// Insert [`MARKER`] after the first segment: `sense/model/10`.
    pub insert_marker: bool,
}

impl PathStyle {
    /// `sense.10.gloss.40.lang`
    pub const CANONICAL: Self = Self {
        separator: Separator::Dot,
        insert_marker: false,
    };

    /// `sense/model/10/gloss/40/lang`
    pub const MODEL: Self = Self {
        separator: Separator::Slash,
        insert_marker: true,
    };

    pub const fn new(separator: Separator, insert_marker: bool) -> Self {
        Self {
            separator,
            insert_marker,
        }
    }

    pub fn join(&self, tokens: &[Token]) -> String {
        let separator = self.separator.as_char();
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(&token.to_string());
            if i == 0 && self.insert_marker {
                out.push(separator);
                out.push_str(MARKER);
            }
        }
        out
    }

    /// Splits a rendered path back into its segments, dropping the marker.
    pub fn split<'a>(&self, path: &'a str) -> Vec<&'a str> {
        let mut segments: Vec<&str> = path.split(self.separator.as_char()).collect();
        if self.insert_marker && segments.get(1) == Some(&MARKER) {
            segments.remove(1);
        }
        segments
    }
}
