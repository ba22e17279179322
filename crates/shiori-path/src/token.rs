use std::fmt;

/// One accessor in a path: a record field name or a positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Field(&'static str),
    /// Only its presence matters when walking a sequence; tuples also use
    /// its value.
    Index(usize),
}

impl From<&'static str> for Token {
    fn from(field: &'static str) -> Self {
        Token::Field(field)
    }
}

impl From<usize> for Token {
    fn from(index: usize) -> Self {
        Token::Index(index)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Field(name) => f.write_str(name),
            Token::Index(index) => write!(f, "{index}"),
        }
    }
}
