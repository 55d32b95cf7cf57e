use super::*;
use quote::quote;

fn error(tag: Tag, attr: TokenStream2, item: TokenStream2) -> String {
    expand(tag, attr, item).unwrap_err().to_string()
}

#[test]
fn item_is_returned_unchanged() {
    let item = quote! {
        pub struct Pair<A: Clone, B>(A, B);
    };
    let out = expand(Tag::HigherKind, TokenStream2::new(), item.clone()).unwrap();
    assert_eq!(out.to_string(), item.to_string());
}

#[test]
fn accepts_all_type_declarations() {
    for item in [
        quote! { enum Either<L, R> { Left(L), Right(R) } },
        quote! { union Raw<T: Copy> { value: T, bits: u64 } },
        quote! { trait Functor<F> {} },
    ] {
        assert!(expand(Tag::HigherKind, TokenStream2::new(), item).is_ok());
    }
}

#[test]
fn rejects_functions() {
    let msg = error(Tag::Typeclass, TokenStream2::new(), quote! { fn show() {} });
    assert_eq!(
        msg,
        "`#[typeclass]` can only be applied to a struct, enum, union or trait"
    );
}

#[test]
fn rejects_arguments() {
    let msg = error(
        Tag::HigherKind,
        quote! { arity = 2 },
        quote! { struct Box<T>(T); },
    );
    assert_eq!(msg, "`#[higher_kind]` takes no arguments");
}

#[test]
fn higher_kind_needs_a_parameter() {
    let msg = error(Tag::HigherKind, TokenStream2::new(), quote! { struct Unit; });
    assert_eq!(msg, "`#[higher_kind]` needs at least one type parameter");
    assert!(expand(Tag::Typeclass, TokenStream2::new(), quote! { trait Marker {} }).is_ok());
}

#[test]
fn rejects_lifetimes_and_consts() {
    let msg = error(
        Tag::HigherKind,
        TokenStream2::new(),
        quote! { struct View<'a, T>(&'a T); },
    );
    assert!(msg.starts_with("lifetime parameters"));

    let msg = error(
        Tag::Typeclass,
        TokenStream2::new(),
        quote! { trait Sized<const N: usize> {} },
    );
    assert!(msg.starts_with("const parameters"));
}

#[test]
fn arity_ceiling_is_enforced() {
    let wide = quote! { struct Wide<A, B, C, D, E, F>(A, B, C, D, E, F); };
    for tag in Tag::ALL.iter().copied() {
        let msg = error(tag, TokenStream2::new(), wide.clone());
        assert_eq!(
            msg,
            format!("`{tag}` supports at most 5 type parameters, found 6")
        );
    }

    let widest = quote! { trait Fold5<A, B, C, D, E> {} };
    assert!(expand(Tag::Typeclass, TokenStream2::new(), widest).is_ok());
}
