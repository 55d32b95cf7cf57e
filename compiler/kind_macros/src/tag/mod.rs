//! Shared validation for the tag attributes.

use kind_ir::MAX_ARITY;
use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;
use syn::{GenericParam, Generics, Item};

pub use kind_ir::Tag;

/// Check the tagged item and return it unchanged.
pub fn expand(tag: Tag, attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    if !attr.is_empty() {
        return Err(syn::Error::new_spanned(
            attr,
            format!("`{tag}` takes no arguments"),
        ));
    }

    let item: Item = syn::parse2(item)?;
    let generics = match &item {
        Item::Struct(item) => &item.generics,
        Item::Enum(item) => &item.generics,
        Item::Union(item) => &item.generics,
        Item::Trait(item) => &item.generics,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                format!("`{tag}` can only be applied to a struct, enum, union or trait"),
            ));
        }
    };
    check_generics(tag, generics, &item)?;
    Ok(item.into_token_stream())
}

fn check_generics(tag: Tag, generics: &Generics, item: &Item) -> syn::Result<()> {
    for param in &generics.params {
        match param {
            GenericParam::Type(_) => {}
            GenericParam::Lifetime(lt) => {
                return Err(syn::Error::new_spanned(
                    lt,
                    "lifetime parameters are not supported by the kind encoding",
                ));
            }
            GenericParam::Const(c) => {
                return Err(syn::Error::new_spanned(
                    c,
                    "const parameters are not supported by the kind encoding",
                ));
            }
        }
    }
    if let Some(extra) = generics.params.iter().nth(MAX_ARITY) {
        return Err(syn::Error::new_spanned(
            extra,
            format!(
                "`{tag}` supports at most {MAX_ARITY} type parameters, found {}",
                generics.params.len()
            ),
        ));
    }
    if tag == Tag::HigherKind && generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            item,
            "`#[higher_kind]` needs at least one type parameter",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
