//! Parsing of the serde and schema attributes that affect a shape

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr};

/// serde's `rename_all` rules
#[derive(Clone, Copy, Default)]
pub enum RenameRule {
    #[default]
    None,
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "PascalCase" => Self::Pascal,
            "camelCase" => Self::Camel,
            "snake_case" => Self::Snake,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            other => {
                return Err(syn::Error::new(lit.span(), format!("unsupported rename rule `{other}`")));
            }
        })
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            Self::None => name.to_string(),
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
            Self::Pascal => name.to_upper_camel_case(),
            Self::Camel => name.to_lower_camel_case(),
            Self::Snake => name.to_snake_case(),
            Self::ScreamingSnake => name.to_shouty_snake_case(),
            Self::Kebab => name.to_kebab_case(),
        }
    }
}

/// Attributes on the struct or enum itself
#[derive(Default)]
pub struct ContainerAttrs {
    pub rename: Option<String>,
    pub rename_all: RenameRule,
    pub untagged: bool,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for_each_meta(attrs, |meta, strict| {
            if meta.path.is_ident("rename") {
                if meta.input.peek(syn::Token![=]) {
                    out.rename = Some(string_value(&meta)?);
                } else {
                    skip(&meta)?;
                }
            } else if meta.path.is_ident("rename_all") {
                if meta.input.peek(syn::Token![=]) {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename_all = RenameRule::parse(&lit)?;
                } else {
                    skip(&meta)?;
                }
            } else if meta.path.is_ident("untagged") {
                out.untagged = true;
            } else if strict {
                return Err(meta.error("unsupported schema attribute"));
            } else {
                skip(&meta)?;
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Attributes on a single field
#[derive(Default)]
pub struct FieldAttrs {
    pub rename: Option<String>,
    pub skip: bool,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for_each_meta(attrs, |meta, strict| {
            if meta.path.is_ident("rename") {
                if meta.input.peek(syn::Token![=]) {
                    out.rename = Some(string_value(&meta)?);
                } else {
                    skip(&meta)?;
                }
            } else if meta.path.is_ident("skip") {
                out.skip = true;
            } else if strict {
                return Err(meta.error("unsupported schema attribute"));
            } else {
                skip(&meta)?;
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Visits every `#[serde(...)]` item, then every `#[schema(...)]` item, so
/// schema attributes win. `strict` is set for schema attributes.
fn for_each_meta(
    attrs: &[Attribute],
    mut visit: impl FnMut(ParseNestedMeta<'_>, bool) -> syn::Result<()>,
) -> syn::Result<()> {
    for (name, strict) in [("serde", false), ("schema", true)] {
        for attr in attrs.iter().filter(|attr| attr.path().is_ident(name)) {
            attr.parse_nested_meta(|meta| visit(meta, strict))?;
        }
    }
    Ok(())
}

fn string_value(meta: &ParseNestedMeta<'_>) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}

/// Consumes an attribute item we don't care about: `key`, `key = value` or `key(...)`.
fn skip(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        let _: proc_macro2::TokenStream = content.parse()?;
    }
    Ok(())
}
