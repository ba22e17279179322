//! Schema-checked path strings.
//!
//! A path such as `sense.10.gloss.40.lang` is written as tokens against a
//! schema root type. The tokens are resolved through the root's [`Shape`]
//! and compared, exactly, with the shape of an expected type. Only a match
//! produces a string; [`path!`] does this during compilation.

extern crate self as shiori_path;

pub mod builder;
pub mod error;
mod macros;
pub mod resolver;
pub mod schema;
pub mod shape;
pub mod style;
pub mod token;

#[cfg(test)]
mod tests;

pub use builder::{CheckedPath, PathBuilder};
pub use error::PathError;
pub use resolver::{Cursor, MAX_DEPTH, check, check_schema, resolve};
pub use schema::Schema;
pub use shape::{Field, Record, Shape, ShapeKind};
pub use shiori_path_macros::Schema;
pub use style::{InvalidSeparator, MARKER, PathStyle, Separator};
pub use token::Token;
