//! Walks a token sequence through a schema shape.
//!
//! Everything here is `const fn`, so the same code runs inside `path!`
//! during compilation and in [`crate::PathBuilder`] at run time.

use crate::error::PathError;
use crate::schema::Schema;
use crate::shape::{Shape, ShapeKind};
use crate::token::Token;

/// Maximum number of tokens in a path.
pub const MAX_DEPTH: usize = 5;

/// Resolution state: the shape reached so far and how many tokens were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    shape: &'static Shape,
    depth: usize,
}

impl Cursor {
    pub const fn new(root: &'static Shape) -> Self {
        Self {
            shape: root,
            depth: 0,
        }
    }

    pub const fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Number of tokens applied so far.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Applies one token. A cursor already at [`MAX_DEPTH`] takes no more.
    pub const fn step(self, token: Token) -> Result<Self, PathError> {
        let step = self.depth;
        if step >= MAX_DEPTH {
            return Err(PathError::PathTooDeep {
                depth: step + 1,
                max: MAX_DEPTH,
            });
        }
        let next = match token {
            Token::Field(field) => match *self.shape {
                Shape::Record(record) => match record.field(field) {
                    Some(found) => found.shape,
                    None => {
                        return Err(PathError::UnknownField {
                            step,
                            field,
                            record: record.name,
                        });
                    }
                },
                _ => {
                    return Err(PathError::FieldAgainstNonRecord {
                        step,
                        field,
                        found: self.shape.kind(),
                    });
                }
            },
            Token::Index(index) => match index_into(self.shape, index, step) {
                Ok(shape) => shape,
                Err(error) => return Err(error),
            },
        };
        Ok(Self {
            shape: next,
            depth: step + 1,
        })
    }
}

const fn index_into(shape: &'static Shape, index: usize, step: usize) -> Result<&'static Shape, PathError> {
    match *shape {
        Shape::Seq(element) => Ok(element),
        Shape::Tuple(elements) => {
            if index < elements.len() {
                Ok(elements[index])
            } else {
                Err(PathError::IndexOutOfBounds {
                    step,
                    index,
                    len: elements.len(),
                })
            }
        }
        Shape::Union(alternatives) => index_into_union(alternatives, index, step),
        _ => Err(PathError::IndexAgainstNonSequence {
            step,
            index,
            found: shape.kind(),
        }),
    }
}

/// Every alternative must have the position and all must agree on its shape.
const fn index_into_union(
    alternatives: &'static [&'static Shape],
    index: usize,
    step: usize,
) -> Result<&'static Shape, PathError> {
    let mut agreed: Option<&'static Shape> = None;
    let mut i = 0;
    while i < alternatives.len() {
        let shape = match index_into(alternatives[i], index, step) {
            Ok(shape) => shape,
            Err(error) => return Err(error),
        };
        let current = agreed;
        match current {
            Some(previous) if !previous.same(shape) => {
                return Err(PathError::AmbiguousIndex { step, index });
            }
            Some(_) => {}
            None => agreed = Some(shape),
        }
        i += 1;
    }
    match agreed {
        Some(shape) => Ok(shape),
        None => Err(PathError::IndexAgainstNonSequence {
            step,
            index,
            found: ShapeKind::Union,
        }),
    }
}

/// Resolves `tokens` against `root`.
///
/// An unresolvable path is an `Err`, never a shape, so it can not be
/// mistaken for a match later.
pub const fn resolve(root: &'static Shape, tokens: &[Token]) -> Result<&'static Shape, PathError> {
    if tokens.is_empty() {
        return Err(PathError::EmptyPath);
    }
    if tokens.len() > MAX_DEPTH {
        return Err(PathError::PathTooDeep {
            depth: tokens.len(),
            max: MAX_DEPTH,
        });
    }

    let mut cursor = Cursor::new(root);
    let mut i = 0;
    while i < tokens.len() {
        cursor = match cursor.step(tokens[i]) {
            Ok(next) => next,
            Err(error) => return Err(error),
        };
        i += 1;
    }
    Ok(cursor.shape)
}

/// Resolves `tokens` and requires the result to be exactly `expected`.
pub const fn check(
    root: &'static Shape,
    expected: &'static Shape,
    tokens: &[Token],
) -> Result<&'static Shape, PathError> {
    match resolve(root, tokens) {
        Ok(found) if found.same(expected) => Ok(found),
        Ok(found) => Err(PathError::TypeMismatch { expected, found }),
        Err(error) => Err(error),
    }
}

/// [`check`] with the root and expected shapes taken from schema types.
pub const fn check_schema<R: Schema, E: Schema>(tokens: &[Token]) -> Result<&'static Shape, PathError> {
    check(R::SHAPE, E::SHAPE, tokens)
}
