use crate::shape::Shape;

/// A Rust type with a statically known [`Shape`].
///
/// Usually derived with `#[derive(Schema)]`, which honors serde's
/// `rename_all`, `rename`, `skip` and `untagged` attributes so that field
/// names in the shape are the wire names.
pub trait Schema {
    const SHAPE: &'static Shape;
}

macro_rules! leaf {
    ($shape:expr => $($ty:ty),+) => {
        $(
            impl Schema for $ty {
                const SHAPE: &'static Shape = &$shape;
            }
        )+
    };
}

leaf!(Shape::Str => String, &'static str, char);
leaf!(Shape::Bool => bool);
leaf!(Shape::Int => u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<T: Schema> Schema for Vec<T> {
    const SHAPE: &'static Shape = &Shape::Seq(T::SHAPE);
}

impl<T: Schema> Schema for Option<T> {
    const SHAPE: &'static Shape = &Shape::Optional(T::SHAPE);
}

impl<T: Schema> Schema for Box<T> {
    const SHAPE: &'static Shape = T::SHAPE;
}

/// Element shapes of fixed-length types, kept in their own constant so each
/// borrow is the tail of a constant initializer.
trait Elements {
    const ELEMENTS: &'static [&'static Shape];
}

impl<T: Schema, const N: usize> Elements for [T; N] {
    const ELEMENTS: &'static [&'static Shape] = &[T::SHAPE; N];
}

impl<T: Schema, const N: usize> Schema for [T; N] {
    const SHAPE: &'static Shape = &Shape::Tuple(<Self as Elements>::ELEMENTS);
}

macro_rules! tuple {
    ($($name:ident),+) => {
        impl<$($name: Schema),+> Elements for ($($name,)+) {
            const ELEMENTS: &'static [&'static Shape] = &[$($name::SHAPE),+];
        }

        impl<$($name: Schema),+> Schema for ($($name,)+) {
            const SHAPE: &'static Shape = &Shape::Tuple(<Self as Elements>::ELEMENTS);
        }
    };
}

tuple!(A);
tuple!(A, B);
tuple!(A, B, C);
tuple!(A, B, C, D);
