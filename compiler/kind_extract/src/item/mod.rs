//! Conversion of one parsed item into declaration metadata.

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{Attribute, GenericParam, Generics, Ident, Item, Type, WherePredicate};

use kind_ir::{DeclarationMetadata, ElementKind, QualifiedName, SourceLocation, Tag, TypeParameter};

use crate::ExtractError;

/// Where the items being visited live.
pub(crate) struct Scope<'a> {
    pub package: &'a QualifiedName,
    pub file: &'a str,
}

impl Scope<'_> {
    pub(crate) fn location(&self, span: Span) -> SourceLocation {
        let start = span.start();
        let line = u32::try_from(start.line).unwrap_or(u32::MAX);
        let column = u32::try_from(start.column + 1).unwrap_or(u32::MAX);
        SourceLocation::new(self.file, line, column)
    }
}

/// Metadata for `item` if it carries a tag attribute.
///
/// Tag attributes are matched by the last segment of their path, so both
/// `#[typeclass]` and `#[kind_macros::typeclass]` count.
pub(crate) fn tagged_declaration(
    item: &Item,
    scope: &Scope<'_>,
) -> Option<Result<DeclarationMetadata, ExtractError>> {
    let (attrs, ident, element, generics) = parts(item)?;
    let tags = tag_paths(attrs);
    if tags.is_empty() {
        return None;
    }

    let name = scope.package.child(ident.unraw().to_string());
    let type_parameters = match type_parameters(&name, element, generics, scope) {
        Ok(params) => params,
        Err(e) => return Some(Err(e)),
    };
    tracing::trace!(declaration = %name, %element, "found tagged declaration");
    Some(Ok(DeclarationMetadata {
        package: scope.package.clone(),
        name,
        element,
        tags,
        type_parameters,
        location: Some(scope.location(ident.span())),
    }))
}

fn parts(item: &Item) -> Option<(&[Attribute], &Ident, ElementKind, Option<&Generics>)> {
    Some(match item {
        Item::Struct(i) => (&i.attrs[..], &i.ident, ElementKind::Struct, Some(&i.generics)),
        Item::Enum(i) => (&i.attrs[..], &i.ident, ElementKind::Enum, Some(&i.generics)),
        Item::Union(i) => (&i.attrs[..], &i.ident, ElementKind::Union, Some(&i.generics)),
        Item::Trait(i) => (&i.attrs[..], &i.ident, ElementKind::Trait, Some(&i.generics)),
        Item::Type(i) => (&i.attrs[..], &i.ident, ElementKind::TypeAlias, Some(&i.generics)),
        Item::Fn(i) => (
            &i.attrs[..],
            &i.sig.ident,
            ElementKind::Function,
            Some(&i.sig.generics),
        ),
        Item::Const(i) => (&i.attrs[..], &i.ident, ElementKind::Const, None),
        Item::Static(i) => (&i.attrs[..], &i.ident, ElementKind::Static, None),
        Item::Mod(i) => (&i.attrs[..], &i.ident, ElementKind::Module, None),
        _ => return None,
    })
}

fn tag_paths(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .map(|attr| {
            attr.path()
                .segments
                .iter()
                .map(|s| s.ident.to_string())
                .collect::<Vec<_>>()
                .join("::")
        })
        .filter(|path| Tag::from_path(path).is_some())
        .collect()
}

/// Type parameters in declaration order, with inline and `where` bounds.
///
/// Lifetime and const parameters are errors on types and traits. On other
/// elements they are skipped; the generators reject those elements anyway.
fn type_parameters(
    name: &QualifiedName,
    element: ElementKind,
    generics: Option<&Generics>,
    scope: &Scope<'_>,
) -> Result<Vec<TypeParameter>, ExtractError> {
    let Some(generics) = generics else {
        return Ok(Vec::new());
    };
    let strict = element.declaration_kind().is_some();

    let mut params = Vec::new();
    for param in &generics.params {
        match param {
            GenericParam::Type(tp) => {
                let mut bounds: Vec<String> = Vec::new();
                if !tp.bounds.is_empty() {
                    bounds.push(render_tokens(tp.bounds.to_token_stream()));
                }
                bounds.extend(where_bounds(generics, &tp.ident));
                let param = TypeParameter::new(tp.ident.unraw().to_string());
                params.push(if bounds.is_empty() {
                    param
                } else {
                    param.with_bounds(bounds.join(" + "))
                });
            }
            GenericParam::Lifetime(lt) if strict => {
                return Err(ExtractError::UnsupportedGeneric {
                    declaration: name.to_path(),
                    param: format!("'{}", lt.lifetime.ident),
                    kind: "lifetime",
                    location: scope.location(lt.lifetime.apostrophe),
                });
            }
            GenericParam::Const(c) if strict => {
                return Err(ExtractError::UnsupportedGeneric {
                    declaration: name.to_path(),
                    param: c.ident.to_string(),
                    kind: "const",
                    location: scope.location(c.ident.span()),
                });
            }
            GenericParam::Lifetime(_) | GenericParam::Const(_) => {}
        }
    }
    Ok(params)
}

/// Bounds from `where T: ...` predicates on exactly this parameter.
fn where_bounds(generics: &Generics, param: &Ident) -> Vec<String> {
    let Some(clause) = &generics.where_clause else {
        return Vec::new();
    };
    clause
        .predicates
        .iter()
        .filter_map(|pred| match pred {
            WherePredicate::Type(pt) if pt.lifetimes.is_none() && is_param(&pt.bounded_ty, param) => {
                Some(render_tokens(pt.bounds.to_token_stream()))
            }
            _ => None,
        })
        .filter(|b| !b.is_empty())
        .collect()
}

fn is_param(ty: &Type, param: &Ident) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident(param))
}

/// Token text with the spacing `Display` inserts around punctuation removed.
pub(crate) fn render_tokens(tokens: TokenStream) -> String {
    let mut text = tokens.to_string();
    for (from, to) in [
        (" :: ", "::"),
        (":: ", "::"),
        (" ::", "::"),
        (" <", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" ,", ","),
        ("( ", "("),
        (" )", ")"),
        ("? ", "?"),
        ("& ", "&"),
    ] {
        text = text.replace(from, to);
    }
    // `Fn (A)` but not `= (A, B)`.
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let call = c == ' '
            && chars.peek() == Some(&'(')
            && out.ends_with(|p: char| p.is_alphanumeric() || p == '_');
        if !call {
            out.push(c);
        }
    }
    out
}
