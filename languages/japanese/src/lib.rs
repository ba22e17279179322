pub mod dictionary;
pub mod loader;
pub mod model;
pub mod paths;

#[cfg(test)]
mod tests;

pub use dictionary::JMdict;
pub use loader::{JMdictLoader, LoadError};
pub use model::{Gloss, Kana, Kanji, Sense, Source, Tag, Word, Xref};
pub use paths::IndexPaths;
