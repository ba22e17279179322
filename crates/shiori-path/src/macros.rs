/// Builds a [`CheckedPath`](crate::CheckedPath) that is verified at compile time.
///
/// `path!(Root => Expected; tokens...)` where field tokens are identifiers
/// (wire names, e.g. `partOfSpeech`) and index tokens are integer literals.
///
/// ```
/// use shiori_path::{path, Schema};
///
/// #[derive(Schema)]
/// struct Gloss {
///     lang: String,
///     text: String,
/// }
///
/// #[derive(Schema)]
/// struct Sense {
///     gloss: Vec<Gloss>,
/// }
///
/// #[derive(Schema)]
/// struct Entry {
///     sense: Vec<Sense>,
/// }
///
/// let lang = path!(Entry => String; sense, 40, gloss, 10, lang);
/// assert_eq!(lang.to_string(), "sense.40.gloss.10.lang");
/// ```
///
/// A field that does not exist is a compile error:
///
/// ```compile_fail
/// use shiori_path::{path, Schema};
///
/// #[derive(Schema)]
/// struct Gloss {
///     lang: String,
/// }
///
/// let bad = path!(Gloss => String; language);
/// ```
///
/// So is a path that resolves to the wrong type:
///
/// ```compile_fail
/// use shiori_path::{path, Schema};
///
/// #[derive(Schema)]
/// struct Gloss {
///     lang: String,
/// }
///
/// #[derive(Schema)]
/// struct Entry {
///     gloss: Vec<Gloss>,
/// }
///
/// let bad = path!(Entry => String; gloss, 0);
/// ```
///
/// The compile error only names the rejection, e.g. `invalid path: UnknownField`.
/// [`CheckedPath::try_new`](crate::CheckedPath::try_new) takes the same tokens
/// and returns the full [`PathError`](crate::PathError), with the step, field
/// and record:
///
/// ```
/// use shiori_path::{CheckedPath, PathError, Schema, Token};
///
/// #[derive(Schema)]
/// struct Gloss {
///     lang: String,
/// }
///
/// let error = CheckedPath::try_new::<Gloss, String>(&[Token::Field("language")]).unwrap_err();
/// assert_eq!(
///     error,
///     PathError::UnknownField { step: 0, field: "language", record: "Gloss" }
/// );
/// assert_eq!(error.to_string(), "Step 0: `Gloss` has no field `language`");
/// ```
#[macro_export]
macro_rules! path {
    ($root:ty => $expected:ty; $($token:tt),+ $(,)?) => {{
        const TOKENS: &[$crate::Token] = &[$($crate::__path_token!($token)),+];
        const PATH: $crate::CheckedPath = $crate::CheckedPath::new::<$root, $expected>(TOKENS);
        PATH
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __path_token {
    ($field:ident) => {
        $crate::Token::Field(stringify!($field))
    };
    ($index:literal) => {
        $crate::Token::Index($index)
    };
}
