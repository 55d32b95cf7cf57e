use super::lookup::{generate, lookup_fn_name, register_fn_name};
use super::*;
use kind_ir::{DeclarationKind, ElementKind, TypeParameter};
use pretty_assertions::assert_eq;

fn meta(name: &str, element: ElementKind, params: &[&str]) -> DeclarationMetadata {
    let name = QualifiedName::parse(name).unwrap();
    let package =
        QualifiedName::from_segments(name.segments()[..name.segments().len() - 1].to_vec());
    DeclarationMetadata {
        package,
        name,
        element,
        tags: vec!["typeclass".to_owned()],
        type_parameters: params.iter().map(|p| TypeParameter::new(*p)).collect(),
        location: None,
    }
}

fn config() -> GeneratorConfig {
    GeneratorConfig::new("out")
}

#[test]
fn function_names() {
    assert_eq!(lookup_fn_name("Semigroup"), "semigroup");
    assert_eq!(lookup_fn_name("MonadError"), "monad_error");
    assert_eq!(lookup_fn_name("Type"), "r#type");
    assert_eq!(register_fn_name("MonadError"), "register_monad_error");
    assert_eq!(register_fn_name("Type"), "register_type");
}

#[test]
fn scanner_records_in_order() {
    let mut scanner = TypeclassScanner::new();
    assert!(scanner.is_empty());
    scanner
        .record(&meta("demo::Functor", ElementKind::Trait, &["F"]))
        .unwrap();
    scanner
        .record(&meta("demo::Monoid", ElementKind::Trait, &["T"]))
        .unwrap();
    assert_eq!(scanner.len(), 2);
    let names: Vec<&str> = scanner.recorded().iter().map(|d| d.simple_name()).collect();
    assert_eq!(names, ["Functor", "Monoid"]);
}

#[test]
fn scanner_rejects_duplicates() {
    let mut scanner = TypeclassScanner::new();
    let functor = meta("demo::Functor", ElementKind::Trait, &["F"]);
    scanner.record(&functor).unwrap();
    assert_eq!(
        scanner.record(&functor),
        Err(StructuralError::Duplicate {
            declaration: "demo::Functor".to_owned(),
            tag: Tag::Typeclass,
        })
    );
    assert_eq!(scanner.len(), 1);
}

#[test]
fn scanner_rejects_lookup_name_clash_in_package() {
    let mut scanner = TypeclassScanner::new();
    scanner
        .record(&meta("demo::HTTPClient", ElementKind::Trait, &["T"]))
        .unwrap();
    let err = scanner
        .record(&meta("demo::HttpClient", ElementKind::Trait, &["T"]))
        .unwrap_err();
    assert_eq!(
        err,
        StructuralError::LookupNameClash {
            declaration: "demo::HttpClient".to_owned(),
            first: "demo::HTTPClient".to_owned(),
            function: "http_client".to_owned(),
        }
    );
    assert_eq!(err.code(), kind_diagnostic::ErrorCode::E2006);
    assert_eq!(scanner.len(), 1);

    // Same lookup name in another package is fine.
    scanner
        .record(&meta("other::HttpClient", ElementKind::Trait, &["T"]))
        .unwrap();
    assert_eq!(scanner.len(), 2);
}

#[test]
fn scanner_rejects_non_types() {
    let mut scanner = TypeclassScanner::new();
    let err = scanner
        .record(&meta("demo::CONST", ElementKind::Const, &[]))
        .unwrap_err();
    assert_eq!(err.code(), kind_diagnostic::ErrorCode::E2003);
    assert!(scanner.is_empty());
}

#[test]
fn finish_generates_whole_batch() {
    let mut scanner = TypeclassScanner::new();
    scanner
        .record(&meta("demo::Show", ElementKind::Trait, &["T"]))
        .unwrap();
    scanner
        .record(&meta(
            "demo::Huge",
            ElementKind::Trait,
            &["A", "B", "C", "D", "E", "F"],
        ))
        .unwrap();
    scanner
        .record(&meta("demo::Marker", ElementKind::Trait, &[]))
        .unwrap();

    let results = scanner.finish(&config());
    assert_eq!(results.len(), 3);
    assert!(results[0].result.is_ok());
    assert!(matches!(
        results[1].result,
        Err(StructuralError::ArityAboveCeiling { arity: 6, .. })
    ));
    assert_eq!(results[1].declaration.simple_name(), "Huge");
    assert!(results[2].result.is_ok());
}

#[test]
fn zero_parameter_interface() {
    let decl = AnnotatedDeclaration::from_metadata(&meta("demo::Marker", ElementKind::Trait, &[]))
        .unwrap();
    let file = generate(&decl, &config()).unwrap();
    assert_eq!(
        file.blocks()[0],
        "/// Resolve the registered [`Marker`] instance for the given type arguments.\n\
         ///\n\
         /// `I` is the type the instance was registered as.\n\
         pub fn marker<I>() -> ::core::result::Result<::kind_rt::Instance<I>, ::kind_rt::ResolveError>\n\
         where\n    \
         I: Marker + Send + Sync + 'static,\n\
         {\n    \
         ::kind_rt::instance(::kind_rt::InstanceDescriptor::reified::<()>(\"demo::Marker\"))\n\
         }"
    );
}

#[test]
fn class_lookup_requires_thread_safe_instance() {
    let decl = AnnotatedDeclaration {
        package: QualifiedName::parse("demo").unwrap(),
        name: QualifiedName::parse("demo::Codec").unwrap(),
        kind: DeclarationKind::Class,
        type_parameters: vec![TypeParameter::new("T").with_bounds("Clone")],
        location: None,
    };
    let file = generate(&decl, &config()).unwrap();
    let lookup = &file.blocks()[0];
    assert!(lookup.contains(
        "pub fn codec<T: Clone + 'static>() -> ::core::result::Result<::kind_rt::Instance<Codec<T>>, ::kind_rt::ResolveError>\nwhere\n    Codec<T>: Send + Sync,\n{"
    ));
    assert!(lookup.contains("reified::<(T,)>(\"demo::Codec\")"));
}

#[test]
fn register_uses_same_descriptor() {
    let decl = AnnotatedDeclaration::from_metadata(&meta(
        "demo::Bifunctor",
        ElementKind::Trait,
        &["F", "G"],
    ))
    .unwrap();
    let file = generate(&decl, &config()).unwrap();
    let descriptor = "::kind_rt::InstanceDescriptor::reified::<(F, G)>(\"demo::Bifunctor\")";
    assert!(file.blocks()[0].contains(descriptor));
    assert!(file.blocks()[1].contains(&format!(
        "::kind_rt::register_instance({descriptor}, instance)"
    )));
    assert!(file.blocks()[1].contains(
        "pub fn register_bifunctor<F: 'static, G: 'static, I>(instance: ::kind_rt::Instance<I>) -> bool\nwhere\n    I: Bifunctor<F, G> + Send + Sync + 'static,\n{"
    ));
}

#[test]
fn interface_lookup_never_uses_trait_objects() {
    let decl = AnnotatedDeclaration::from_metadata(&meta("demo::Functor", ElementKind::Trait, &["F"]))
        .unwrap();
    let file = generate(&decl, &config()).unwrap();
    for block in file.blocks() {
        assert!(!block.contains("dyn "), "{block}");
    }
    assert!(file.blocks()[0].contains(
        "pub fn functor<F: 'static, I>() -> ::core::result::Result<::kind_rt::Instance<I>, ::kind_rt::ResolveError>\nwhere\n    I: Functor<F> + Send + Sync + 'static,\n{"
    ));
}

#[test]
fn implementor_parameter_avoids_declared_names() {
    let decl = AnnotatedDeclaration::from_metadata(&meta("demo::Index", ElementKind::Trait, &["I"]))
        .unwrap();
    let file = generate(&decl, &config()).unwrap();
    assert!(file.blocks()[0].contains("pub fn index<I: 'static, I0>()"));
    assert!(file.blocks()[0].contains("    I0: Index<I> + Send + Sync + 'static,"));
}
