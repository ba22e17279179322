use crate::shape::{Shape, ShapeKind};

/// Why a path was rejected.
///
/// `step` is the zero-based position of the token that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("Path is empty")]
    EmptyPath,

    #[error("Path has {depth} segments, at most {max} are supported")]
    PathTooDeep { depth: usize, max: usize },

    #[error("Step {step}: `{record}` has no field `{field}`")]
    UnknownField {
        step: usize,
        field: &'static str,
        record: &'static str,
    },

    #[error("Step {step}: index {index} applied to {found}, which is not a sequence")]
    IndexAgainstNonSequence {
        step: usize,
        index: usize,
        found: ShapeKind,
    },

    #[error("Step {step}: field `{field}` applied to {found}, which is not a record")]
    FieldAgainstNonRecord {
        step: usize,
        field: &'static str,
        found: ShapeKind,
    },

    #[error("Step {step}: index {index} is out of bounds for a tuple of length {len}")]
    IndexOutOfBounds { step: usize, index: usize, len: usize },

    #[error("Step {step}: index {index} resolves to different types across alternatives")]
    AmbiguousIndex { step: usize, index: usize },

    #[error("Path resolves to `{found}`, expected `{expected}`")]
    TypeMismatch {
        expected: &'static Shape,
        found: &'static Shape,
    },
}

impl PathError {
    /// Zero-based position of the failing token, if the failure is tied to one.
    pub const fn step(&self) -> Option<usize> {
        match *self {
            PathError::UnknownField { step, .. }
            | PathError::IndexAgainstNonSequence { step, .. }
            | PathError::FieldAgainstNonRecord { step, .. }
            | PathError::IndexOutOfBounds { step, .. }
            | PathError::AmbiguousIndex { step, .. } => Some(step),
            PathError::EmptyPath | PathError::PathTooDeep { .. } | PathError::TypeMismatch { .. } => {
                None
            }
        }
    }

    /// Aborts constant evaluation. Inside a `const` item this surfaces as a
    /// compile error naming the rejection.
    pub const fn reject(self) -> ! {
        match self {
            PathError::EmptyPath => panic!("invalid path: EmptyPath"),
            PathError::PathTooDeep { .. } => panic!("invalid path: PathTooDeep"),
            PathError::UnknownField { .. } => panic!("invalid path: UnknownField"),
            PathError::IndexAgainstNonSequence { .. } => {
                panic!("invalid path: IndexAgainstNonSequence")
            }
            PathError::FieldAgainstNonRecord { .. } => {
                panic!("invalid path: FieldAgainstNonRecord")
            }
            PathError::IndexOutOfBounds { .. } => panic!("invalid path: IndexOutOfBounds"),
            PathError::AmbiguousIndex { .. } => panic!("invalid path: AmbiguousIndex"),
            PathError::TypeMismatch { .. } => panic!("invalid path: TypeMismatch"),
        }
    }
}
