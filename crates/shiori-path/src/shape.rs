use std::fmt;

/// Structural description of a schema type.
///
/// Shapes are built in constant evaluation (see [`crate::Schema`]) and only
/// ever referenced as `&'static Shape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Str,
    Bool,
    Int,
    /// A value that may be absent. Absence is not the same as an empty value.
    Optional(&'static Shape),
    /// Variable-length, ordered, homogeneous collection.
    Seq(&'static Shape),
    /// Fixed-length, positionally typed collection.
    Tuple(&'static [&'static Shape]),
    /// Exactly one of several alternatives.
    Union(&'static [&'static Shape]),
    Record(Record),
}

/// A named record with ordered fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub name: &'static str,
    pub fields: &'static [Field],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub shape: &'static Shape,
}

/// Coarse classification of a [`Shape`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Str,
    Bool,
    Int,
    Optional,
    Seq,
    Tuple,
    Union,
    Record,
}

impl Shape {
    pub const fn kind(&self) -> ShapeKind {
        match *self {
            Shape::Str => ShapeKind::Str,
            Shape::Bool => ShapeKind::Bool,
            Shape::Int => ShapeKind::Int,
            Shape::Optional(_) => ShapeKind::Optional,
            Shape::Seq(_) => ShapeKind::Seq,
            Shape::Tuple(_) => ShapeKind::Tuple,
            Shape::Union(_) => ShapeKind::Union,
            Shape::Record(_) => ShapeKind::Record,
        }
    }

    /// Exact structural equality, usable in constant evaluation.
    ///
    /// Records compare by name and by every field, in order. There is no
    /// subtyping: `Optional(Str)` is not the same shape as `Str`.
    pub const fn same(&self, other: &Shape) -> bool {
        match (*self, *other) {
            (Shape::Str, Shape::Str) | (Shape::Bool, Shape::Bool) | (Shape::Int, Shape::Int) => {
                true
            }
            (Shape::Optional(a), Shape::Optional(b)) | (Shape::Seq(a), Shape::Seq(b)) => a.same(b),
            (Shape::Tuple(a), Shape::Tuple(b)) | (Shape::Union(a), Shape::Union(b)) => {
                all_same(a, b)
            }
            (Shape::Record(a), Shape::Record(b)) => a.same(&b),
            _ => false,
        }
    }

    /// Returns the record description if this shape is a record.
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Shape::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl Record {
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self { name, fields }
    }

    /// Looks up a field by its wire name.
    pub const fn field(&self, name: &str) -> Option<&'static Field> {
        let fields = self.fields;
        let mut i = 0;
        while i < fields.len() {
            if str_eq(fields[i].name, name) {
                return Some(&fields[i]);
            }
            i += 1;
        }
        None
    }

    pub const fn same(&self, other: &Record) -> bool {
        if !str_eq(self.name, other.name) || self.fields.len() != other.fields.len() {
            return false;
        }
        let mut i = 0;
        while i < self.fields.len() {
            let (a, b) = (self.fields[i], other.fields[i]);
            if !str_eq(a.name, b.name) || !a.shape.same(b.shape) {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl Field {
    pub const fn new(name: &'static str, shape: &'static Shape) -> Self {
        Self { name, shape }
    }
}

const fn all_same(a: &[&Shape], b: &[&Shape]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if !a[i].same(b[i]) {
            return false;
        }
        i += 1;
    }
    true
}

pub(crate) const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Str => f.write_str("string"),
            Shape::Bool => f.write_str("bool"),
            Shape::Int => f.write_str("int"),
            Shape::Optional(inner) => write!(f, "Option<{inner}>"),
            Shape::Seq(element) => write!(f, "Vec<{element}>"),
            Shape::Tuple(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
            Shape::Union(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{alternative}")?;
                }
                Ok(())
            }
            Shape::Record(record) => f.write_str(record.name),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::Str => "a string",
            ShapeKind::Bool => "a bool",
            ShapeKind::Int => "an int",
            ShapeKind::Optional => "an optional value",
            ShapeKind::Seq => "a sequence",
            ShapeKind::Tuple => "a tuple",
            ShapeKind::Union => "a union",
            ShapeKind::Record => "a record",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOSS_RECORD: Record = Record {
        name: "Gloss",
        fields: &[
            Field { name: "lang", shape: &Shape::Str },
            Field { name: "text", shape: &Shape::Str },
        ],
    };
    const GLOSS: Shape = Shape::Record(GLOSS_RECORD);

    #[test]
    fn test_same_is_exact() {
        assert!(Shape::Str.same(&Shape::Str));
        assert!(!Shape::Str.same(&Shape::Int));
        assert!(!Shape::Optional(&Shape::Str).same(&Shape::Str));
        assert!(!Shape::Str.same(&Shape::Optional(&Shape::Str)));
        assert!(Shape::Seq(&GLOSS).same(&Shape::Seq(&GLOSS)));
    }

    #[test]
    fn test_same_compares_record_fields() {
        const RENAMED: Shape = Shape::Record(Record {
            name: "Gloss",
            fields: &[
                Field { name: "language", shape: &Shape::Str },
                Field { name: "text", shape: &Shape::Str },
            ],
        });
        assert!(!GLOSS.same(&RENAMED));
        assert!(GLOSS.same(&GLOSS));
    }

    #[test]
    fn test_record_field_lookup() {
        let record = GLOSS_RECORD;
        assert!(GLOSS.as_record().is_some());
        assert!(Shape::Str.as_record().is_none());
        assert_eq!(record.field("text").map(|f| f.name), Some("text"));
        assert!(record.field("txt").is_none());
        assert!(record.field("").is_none());
    }

    #[test]
    fn test_display() {
        let xref = Shape::Union(&[
            &Shape::Tuple(&[&Shape::Str, &Shape::Int]),
            &Shape::Tuple(&[&Shape::Str]),
        ]);
        assert_eq!(xref.to_string(), "(string, int) | (string)");
        assert_eq!(Shape::Seq(&GLOSS).to_string(), "Vec<Gloss>");
        assert_eq!(Shape::Optional(&Shape::Str).to_string(), "Option<string>");
    }
}
