use super::fixture::{Deep, Entry, Gloss, Sense, Xref};
use crate::{Cursor, MAX_DEPTH, PathError, Schema, Shape, ShapeKind, check, resolve};

use crate::Token::{Field, Index};

#[test]
fn test_cursor_walks_each_step() {
    let cursor = Cursor::new(Entry::SHAPE);
    assert_eq!(cursor.depth(), 0);
    assert_eq!(cursor.shape(), Entry::SHAPE);

    let cursor = cursor.step(Field("sense")).unwrap();
    assert_eq!(cursor.depth(), 1);
    assert_eq!(cursor.shape(), <Vec<Sense>>::SHAPE);

    let cursor = cursor.step(Index(40)).unwrap();
    assert_eq!(cursor.shape(), Sense::SHAPE);

    let cursor = cursor.step(Field("gloss")).unwrap();
    assert_eq!(cursor.shape(), <Vec<Gloss>>::SHAPE);

    let cursor = cursor.step(Index(10)).unwrap();
    assert_eq!(cursor.shape(), Gloss::SHAPE);

    let cursor = cursor.step(Field("lang")).unwrap();
    assert_eq!(cursor.depth(), 5);
    assert_eq!(cursor.shape(), &Shape::Str);
}

#[test]
fn test_index_value_does_not_matter_for_sequences() {
    let a = resolve(Entry::SHAPE, &[Field("sense"), Index(0)]);
    let b = resolve(Entry::SHAPE, &[Field("sense"), Index(usize::MAX)]);
    assert_eq!(a, b);
    assert_eq!(a, Ok(Sense::SHAPE));
}

#[test]
fn test_unknown_field_reports_step() {
    let tokens = [Field("sense"), Index(40), Field("gloss"), Index(10), Field("language")];
    assert_eq!(
        resolve(Entry::SHAPE, &tokens),
        Err(PathError::UnknownField {
            step: 4,
            field: "language",
            record: "Gloss",
        })
    );

    let err = resolve(Entry::SHAPE, &[Field("senses")]).unwrap_err();
    assert_eq!(err.step(), Some(0));
}

#[test]
fn test_wire_names_are_used() {
    assert!(resolve(Entry::SHAPE, &[Field("sense"), Index(0), Field("partOfSpeech")]).is_ok());
    assert_eq!(
        resolve(Entry::SHAPE, &[Field("sense"), Index(0), Field("part_of_speech")]),
        Err(PathError::UnknownField {
            step: 2,
            field: "part_of_speech",
            record: "Sense",
        })
    );
}

#[test]
fn test_index_against_record() {
    assert_eq!(
        resolve(Entry::SHAPE, &[Index(0)]),
        Err(PathError::IndexAgainstNonSequence {
            step: 0,
            index: 0,
            found: ShapeKind::Record,
        })
    );
    assert_eq!(
        resolve(Entry::SHAPE, &[Field("sense"), Index(1), Index(2)]),
        Err(PathError::IndexAgainstNonSequence {
            step: 2,
            index: 2,
            found: ShapeKind::Record,
        })
    );
}

#[test]
fn test_index_against_leaf() {
    assert_eq!(
        resolve(Entry::SHAPE, &[Field("id"), Index(0)]),
        Err(PathError::IndexAgainstNonSequence {
            step: 1,
            index: 0,
            found: ShapeKind::Str,
        })
    );
}

#[test]
fn test_field_against_non_record() {
    assert_eq!(
        resolve(Entry::SHAPE, &[Field("sense"), Field("gloss")]),
        Err(PathError::FieldAgainstNonRecord {
            step: 1,
            field: "gloss",
            found: ShapeKind::Seq,
        })
    );
    assert_eq!(
        resolve(Entry::SHAPE, &[Field("id"), Field("text")]),
        Err(PathError::FieldAgainstNonRecord {
            step: 1,
            field: "text",
            found: ShapeKind::Str,
        })
    );
}

#[test]
fn test_empty_path() {
    assert_eq!(resolve(Entry::SHAPE, &[]), Err(PathError::EmptyPath));
}

#[test]
fn test_too_deep_even_if_resolvable() {
    let tokens = [Field("levels"), Index(0), Index(0), Index(0), Index(0), Index(0)];
    assert_eq!(
        resolve(Deep::SHAPE, &tokens),
        Err(PathError::PathTooDeep { depth: 6, max: 5 })
    );
    assert_eq!(resolve(Deep::SHAPE, &tokens[..5]), Ok(<Vec<String>>::SHAPE));

    // Length is checked before the first step.
    let invalid = [Index(0), Index(0), Index(0), Index(0), Index(0), Index(0)];
    assert_eq!(
        resolve(Entry::SHAPE, &invalid),
        Err(PathError::PathTooDeep { depth: 6, max: 5 })
    );
}

#[test]
fn test_cursor_stops_at_max_depth() {
    let mut cursor = Cursor::new(Deep::SHAPE);
    for token in [Field("levels"), Index(0), Index(0), Index(0), Index(0)] {
        cursor = cursor.step(token).unwrap();
    }
    assert_eq!(cursor.depth(), MAX_DEPTH);
    assert_eq!(cursor.shape(), <Vec<String>>::SHAPE);

    // The next level exists in the schema but is out of reach.
    assert_eq!(
        cursor.step(Index(0)),
        Err(PathError::PathTooDeep { depth: 6, max: 5 })
    );
}

#[test]
fn test_tuple_alternatives() {
    let head = [Field("sense"), Index(0), Field("related"), Index(3)];
    assert_eq!(resolve(Entry::SHAPE, &head), Ok(Xref::SHAPE));

    // Every alternative starts with a string.
    let first = [Field("sense"), Index(0), Field("related"), Index(3), Index(0)];
    assert_eq!(resolve(Entry::SHAPE, &first), Ok(&Shape::Str));

    // string in one alternative, int in another
    let second = [Field("sense"), Index(0), Field("related"), Index(3), Index(1)];
    assert_eq!(
        resolve(Entry::SHAPE, &second),
        Err(PathError::AmbiguousIndex { step: 4, index: 1 })
    );

    let third = [Field("sense"), Index(0), Field("related"), Index(3), Index(2)];
    assert_eq!(
        resolve(Entry::SHAPE, &third),
        Err(PathError::IndexOutOfBounds {
            step: 4,
            index: 2,
            len: 2,
        })
    );
}

#[test]
fn test_field_against_union() {
    let tokens = [Field("sense"), Index(0), Field("related"), Index(0), Field("text")];
    assert_eq!(
        resolve(Entry::SHAPE, &tokens),
        Err(PathError::FieldAgainstNonRecord {
            step: 4,
            field: "text",
            found: ShapeKind::Union,
        })
    );
}

#[test]
fn test_check_requires_exact_shape() {
    let lang = [Field("sense"), Index(40), Field("gloss"), Index(10), Field("lang")];
    assert_eq!(check(Entry::SHAPE, String::SHAPE, &lang), Ok(String::SHAPE));

    let sense = [Field("sense"), Index(10)];
    assert_eq!(
        check(Entry::SHAPE, String::SHAPE, &sense),
        Err(PathError::TypeMismatch {
            expected: String::SHAPE,
            found: Sense::SHAPE,
        })
    );
}

#[test]
fn test_optional_is_not_its_inner_type() {
    let text = [Field("sense"), Index(0), Field("languageSource"), Index(0), Field("text")];
    assert_eq!(
        check(Entry::SHAPE, String::SHAPE, &text),
        Err(PathError::TypeMismatch {
            expected: String::SHAPE,
            found: <Option<String>>::SHAPE,
        })
    );
    assert!(check(Entry::SHAPE, <Option<String>>::SHAPE, &text).is_ok());
}

#[test]
fn test_unresolved_never_matches() {
    // Whatever the expectation, a failed resolution stays a failure.
    let missing = [Field("nothing")];
    for expected in [String::SHAPE, Entry::SHAPE, <Vec<Sense>>::SHAPE, &Shape::Bool] {
        assert!(matches!(
            check(Entry::SHAPE, expected, &missing),
            Err(PathError::UnknownField { .. })
        ));
    }
}

#[test]
fn test_resolution_in_const_context() {
    const LANG: Result<&Shape, PathError> = resolve(
        Entry::SHAPE,
        &[Field("sense"), Index(1), Field("gloss"), Index(2), Field("lang")],
    );
    assert_eq!(LANG, Ok(&Shape::Str));
}

#[test]
fn test_error_messages() {
    let err = PathError::UnknownField {
        step: 4,
        field: "language",
        record: "Gloss",
    };
    assert_eq!(err.to_string(), "Step 4: `Gloss` has no field `language`");

    let err = PathError::TypeMismatch {
        expected: String::SHAPE,
        found: Sense::SHAPE,
    };
    assert_eq!(err.to_string(), "Path resolves to `Sense`, expected `string`");

    let err = PathError::PathTooDeep { depth: 6, max: 5 };
    assert_eq!(err.to_string(), "Path has 6 segments, at most 5 are supported");
    assert_eq!(err.step(), None);
}
