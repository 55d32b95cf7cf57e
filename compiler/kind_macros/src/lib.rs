//! Tag attributes for the kind encoding.
//!
//! `#[higher_kind]` and `#[typeclass]` mark declarations for `kindc`. The
//! attributes themselves generate nothing: `kindc extract` finds tagged
//! items in the source tree and `kindc generate` writes the glue. At
//! compile time the attributes only check that they sit on something the
//! generators can handle, and hand the item back unchanged.
//!
//! ```text
//! #[higher_kind]
//! pub struct Pair<A: Clone, B>(A, B);
//!
//! #[typeclass]
//! pub trait Semigroup<T> {
//!     fn combine(&self, a: T, b: T) -> T;
//! }
//! ```

mod tag;

use proc_macro::TokenStream;

/// Mark a struct, enum, union or trait for the witness encoding.
///
/// The item must declare between one and five type parameters and no
/// lifetime or const parameters.
#[proc_macro_attribute]
pub fn higher_kind(attr: TokenStream, item: TokenStream) -> TokenStream {
    tag::expand(tag::Tag::HigherKind, attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Mark a struct, enum, union or trait for instance lookup generation.
///
/// At most five type parameters; lifetime and const parameters are not
/// supported.
#[proc_macro_attribute]
pub fn typeclass(attr: TokenStream, item: TokenStream) -> TokenStream {
    tag::expand(tag::Tag::Typeclass, attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
