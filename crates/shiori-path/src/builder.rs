use std::fmt;
use std::marker::PhantomData;

use crate::error::PathError;
use crate::resolver::{self, check_schema};
use crate::schema::Schema;
use crate::shape::Shape;
use crate::style::PathStyle;
use crate::token::Token;

/// A path proven to resolve to an exact shape inside some schema root.
///
/// Constructed by [`crate::path!`], which runs the check during compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedPath {
    tokens: &'static [Token],
    shape: &'static Shape,
}

impl CheckedPath {
    /// Checks `tokens` against root `R`, expecting `E`.
    ///
    /// # Panics
    ///
    /// Panics if the path is rejected. In a `const` initializer, which is
    /// how [`crate::path!`] calls it, that panic is a compile error.
    pub const fn new<R: Schema, E: Schema>(tokens: &'static [Token]) -> Self {
        match check_schema::<R, E>(tokens) {
            Ok(shape) => Self { tokens, shape },
            Err(error) => error.reject(),
        }
    }

    /// Like [`CheckedPath::new`], but reports the rejection instead of panicking.
    pub const fn try_new<R: Schema, E: Schema>(tokens: &'static [Token]) -> Result<Self, PathError> {
        match check_schema::<R, E>(tokens) {
            Ok(shape) => Ok(Self { tokens, shape }),
            Err(error) => Err(error),
        }
    }

    pub const fn tokens(&self) -> &'static [Token] {
        self.tokens
    }

    /// The shape the path resolves to.
    pub const fn shape(&self) -> &'static Shape {
        self.shape
    }

    pub fn render(&self, style: PathStyle) -> String {
        style.join(self.tokens)
    }
}

impl fmt::Display for CheckedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(PathStyle::CANONICAL))
    }
}

/// Builds path strings rooted at schema `R`, rendered in one [`PathStyle`].
pub struct PathBuilder<R> {
    style: PathStyle,
    _root: PhantomData<fn() -> R>,
}

impl<R: Schema> PathBuilder<R> {
    pub fn new() -> Self {
        Self::with_style(PathStyle::default())
    }

    pub fn with_style(style: PathStyle) -> Self {
        Self {
            style,
            _root: PhantomData,
        }
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Shape reached by `tokens`, without an expectation.
    pub fn resolve(&self, tokens: &[Token]) -> Result<&'static Shape, PathError> {
        resolver::resolve(R::SHAPE, tokens)
    }

    /// Returns the rendered path only if `tokens` resolve to exactly `E`.
    pub fn build<E: Schema>(&self, tokens: &[Token]) -> Result<String, PathError> {
        match check_schema::<R, E>(tokens) {
            Ok(_) => Ok(self.style.join(tokens)),
            Err(error) => {
                tracing::debug!(
                    path = %PathStyle::CANONICAL.join(tokens),
                    %error,
                    "Rejected path"
                );
                Err(error)
            }
        }
    }

    pub fn render(&self, path: &CheckedPath) -> String {
        path.render(self.style)
    }
}

impl<R: Schema> Default for PathBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for PathBuilder<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for PathBuilder<R> {}

impl<R> fmt::Debug for PathBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathBuilder")
            .field("root", &std::any::type_name::<R>())
            .field("style", &self.style)
            .finish()
    }
}
