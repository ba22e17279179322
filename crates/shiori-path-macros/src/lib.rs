//! Procedural macros for shiori-path

mod attrs;
mod schema;

use proc_macro::TokenStream;

/// Derives `shiori_path::Schema`, describing the type's wire shape.
///
/// Field names follow serde: `#[serde(rename_all = "...")]` on the container
/// and `#[serde(rename = "...")]` / `#[serde(skip)]` on fields are honored.
/// `#[schema(rename = "...")]` and `#[schema(skip)]` override serde.
///
/// # Example
///
/// ```ignore
/// #[derive(Deserialize, Schema)]
/// #[serde(rename_all = "camelCase")]
/// pub struct Sense {
///     pub part_of_speech: Vec<String>,
///     pub gloss: Vec<Gloss>,
/// }
/// ```
///
/// This will generate a record shape named `Sense` with the fields
/// `partOfSpeech` and `gloss`.
///
/// - Structs with named fields become records.
/// - Newtype structs take the shape of their field, tuple structs become tuples.
/// - `#[serde(untagged)]` enums become unions of their variants.
/// - Enums with only unit variants are strings.
#[proc_macro_derive(Schema, attributes(schema, serde))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    schema::derive_schema_impl(input)
}
