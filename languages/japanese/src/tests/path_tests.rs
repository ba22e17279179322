use shiori_config::path::PathConfig;
use shiori_path::Token::{Field, Index};
use shiori_path::{PathBuilder, PathError, PathStyle, Schema, Separator, ShapeKind};

use crate::model::{Gloss, Sense, Word};
use crate::paths::{self, IndexPaths};

#[test]
fn test_index_paths_canonical() {
    let paths = IndexPaths::default();
    assert_eq!(paths.sense, "sense.10");
    assert_eq!(paths.lang, "sense.10.gloss.40.lang");
    assert_eq!(paths.gloss_text, "sense.10.gloss.40.text");
    assert_eq!(paths.kanji_text, "kanji.0.text");
    assert_eq!(paths.kana_text, "kana.0.text");
    assert_eq!(paths.source_text, "sense.10.languageSource.0.text");
    assert_eq!(paths.related_term, "sense.10.related.0.0");
}

#[test]
fn test_index_paths_from_config() {
    let config = PathConfig {
        separator: Separator::Slash,
        insert_marker: true,
    };
    let paths = IndexPaths::from_config(&config);
    assert_eq!(paths.sense, "sense/model/10");
    assert_eq!(paths.lang, "sense/model/10/gloss/40/lang");
    assert_eq!(paths, IndexPaths::new(PathStyle::MODEL));
}

#[test]
fn test_checked_shapes() {
    assert_eq!(paths::SENSE.shape(), Sense::SHAPE);
    assert_eq!(paths::GLOSS_LANG.shape(), String::SHAPE);
    assert_eq!(paths::SOURCE_TEXT.shape(), <Option<String>>::SHAPE);
    assert_eq!(paths::RELATED_TERM.shape(), String::SHAPE);
}

#[test]
fn test_builder_over_word() {
    let builder = PathBuilder::<Word>::new();
    assert_eq!(builder.build::<String>(&[Field("id")]).unwrap(), "id");
    assert_eq!(builder.build::<Sense>(&[Field("sense"), Index(10)]).unwrap(), "sense.10");
    assert_eq!(
        builder
            .build::<Vec<Gloss>>(&[Field("sense"), Index(40), Field("gloss")])
            .unwrap(),
        "sense.40.gloss"
    );
    assert_eq!(
        builder
            .build::<String>(&[Field("sense"), Index(40), Field("gloss"), Index(10), Field("lang")])
            .unwrap(),
        "sense.40.gloss.10.lang"
    );
}

#[test]
fn test_builder_rejections_over_word() {
    let builder = PathBuilder::<Word>::new();

    assert_eq!(
        builder.build::<String>(&[Field("sense"), Index(10)]),
        Err(PathError::TypeMismatch {
            expected: String::SHAPE,
            found: Sense::SHAPE,
        })
    );
    assert_eq!(
        builder.build::<String>(&[Field("sense"), Index(0), Field("gloss"), Index(0), Field("language")]),
        Err(PathError::UnknownField {
            step: 4,
            field: "language",
            record: "Gloss",
        })
    );
    assert_eq!(
        builder.build::<String>(&[Field("kana"), Index(0), Index(0)]),
        Err(PathError::IndexAgainstNonSequence {
            step: 2,
            index: 0,
            found: ShapeKind::Record,
        })
    );
    assert_eq!(
        builder.build::<String>(&[
            Field("sense"),
            Index(0),
            Field("gloss"),
            Index(0),
            Field("lang"),
            Field("code"),
        ]),
        Err(PathError::PathTooDeep { depth: 6, max: 5 })
    );
}

#[test]
fn test_optional_source_text() {
    let builder = PathBuilder::<Word>::new();
    let tokens = [Field("sense"), Index(0), Field("languageSource"), Index(0), Field("text")];
    assert!(matches!(
        builder.build::<String>(&tokens),
        Err(PathError::TypeMismatch { .. })
    ));
    assert_eq!(
        builder.build::<Option<String>>(&tokens).unwrap(),
        "sense.0.languageSource.0.text"
    );
}

#[test]
fn test_xref_positions() {
    let builder = PathBuilder::<Word>::new();
    let head = [Field("sense"), Index(0), Field("antonym"), Index(0), Index(0)];
    assert_eq!(builder.build::<String>(&head).unwrap(), "sense.0.antonym.0.0");

    let sense_index = [Field("sense"), Index(0), Field("antonym"), Index(0), Index(1)];
    assert_eq!(
        builder.build::<u32>(&sense_index),
        Err(PathError::AmbiguousIndex { step: 4, index: 1 })
    );
}

#[test]
fn test_round_trip_over_word() {
    let tokens = [Field("sense"), Index(3), Field("gloss"), Index(2), Field("text")];
    for style in [PathStyle::CANONICAL, PathStyle::MODEL] {
        let built = PathBuilder::<Word>::with_style(style).build::<String>(&tokens).unwrap();
        let segments = style.split(&built);
        assert_eq!(segments, ["sense", "3", "gloss", "2", "text"]);
    }
}
