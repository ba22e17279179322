//! Schema derive macro implementation

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, parse_macro_input};

use crate::attrs::{ContainerAttrs, FieldAttrs};

/// Implementation of the Schema derive macro
pub fn derive_schema_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Schema cannot be derived for generic types",
        ));
    }

    let container = ContainerAttrs::parse(&input.attrs)?;
    let ident = &input.ident;

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(_) => record(ident, &container, &data.fields),
            Fields::Unnamed(fields) => {
                let types = fields.unnamed.iter().map(|field| &field.ty);
                let shape = positional(types.collect());
                Ok(implement(ident, quote! {}, shape))
            }
            Fields::Unit => Err(syn::Error::new_spanned(
                ident,
                "Schema cannot be derived for unit structs",
            )),
        },
        Data::Enum(data) => union(ident, &container, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            ident,
            "Schema cannot be derived for unions",
        )),
    }
}

/// Named fields become a record shape, in declaration order.
fn record(ident: &Ident, container: &ContainerAttrs, fields: &Fields) -> syn::Result<TokenStream2> {
    let name = container
        .rename
        .clone()
        .unwrap_or_else(|| ident.to_string());

    let mut entries = Vec::new();
    for field in fields {
        let attrs = FieldAttrs::parse(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let wire = attrs.rename.unwrap_or_else(|| {
            let raw = field_ident.to_string();
            let raw = raw.strip_prefix("r#").unwrap_or(&raw);
            container.rename_all.apply(raw)
        });
        let ty = &field.ty;
        entries.push(quote! {
            ::shiori_path::Field::new(#wire, <#ty as ::shiori_path::Schema>::SHAPE)
        });
    }

    let items = quote! {
        const FIELDS: &[::shiori_path::Field] = &[#(#entries),*];
    };
    let shape = quote! {
        &::shiori_path::Shape::Record(::shiori_path::Record::new(#name, FIELDS))
    };
    Ok(implement(ident, items, shape))
}

/// Untagged enums are unions of their variants; unit-only enums are strings.
fn union(ident: &Ident, container: &ContainerAttrs, data: &DataEnum) -> syn::Result<TokenStream2> {
    if data.variants.iter().all(|variant| matches!(variant.fields, Fields::Unit)) {
        return Ok(implement(ident, quote! {}, quote! { &::shiori_path::Shape::Str }));
    }

    if !container.untagged {
        return Err(syn::Error::new_spanned(
            ident,
            "Schema can only be derived for unit-only or #[serde(untagged)] enums",
        ));
    }

    let mut alternatives = Vec::new();
    for variant in &data.variants {
        if FieldAttrs::parse(&variant.attrs)?.skip {
            continue;
        }
        match &variant.fields {
            Fields::Unnamed(fields) => {
                let types = fields.unnamed.iter().map(|field| &field.ty);
                alternatives.push(positional(types.collect()));
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "untagged Schema variants must have unnamed fields",
                ));
            }
        }
    }

    let items = quote! {
        const ALTERNATIVES: &[&::shiori_path::Shape] = &[#(#alternatives),*];
    };
    Ok(implement(
        ident,
        items,
        quote! { &::shiori_path::Shape::Union(ALTERNATIVES) },
    ))
}

/// Shape of positional fields: a single field is transparent, several form a tuple.
fn positional(types: Vec<&syn::Type>) -> TokenStream2 {
    match types.as_slice() {
        [single] => quote! { <#single as ::shiori_path::Schema>::SHAPE },
        many => quote! { <(#(#many,)*) as ::shiori_path::Schema>::SHAPE },
    }
}

/// Wraps helper constants and the impl in an anonymous const so the helpers
/// don't leak into the caller's namespace.
fn implement(ident: &Ident, items: TokenStream2, shape: TokenStream2) -> TokenStream2 {
    quote! {
        const _: () = {
            #items

            impl ::shiori_path::Schema for #ident {
                const SHAPE: &'static ::shiori_path::Shape = #shape;
            }
        };
    }
}
