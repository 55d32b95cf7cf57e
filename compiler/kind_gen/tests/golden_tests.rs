//! Golden tests for generated files.
//!
//! Each declaration goes through the full pipeline (metadata archive,
//! reader, session, emitter) and the file on disk is compared byte for byte
//! with a checked-in expectation under `tests/golden/`. The same golden
//! files are compiled by the runtime crate's integration tests.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::fs;

use kind_gen::{GenerationSession, GeneratorConfig};
use kind_ir::{
    read_archive, ArchiveBuilder, DeclarationMetadata, ElementKind, QualifiedName, SourceLocation,
    TypeParameter,
};
use pretty_assertions::assert_eq;

fn declaration(
    name: &str,
    element: ElementKind,
    tag: &str,
    params: Vec<TypeParameter>,
    line: u32,
) -> DeclarationMetadata {
    let name = QualifiedName::parse(name).unwrap();
    let package =
        QualifiedName::from_segments(name.segments()[..name.segments().len() - 1].to_vec());
    DeclarationMetadata {
        package,
        name,
        element,
        tags: vec![tag.to_owned()],
        type_parameters: params,
        location: Some(SourceLocation::new("src/lib.rs", line, 1)),
    }
}

fn scenario() -> Vec<DeclarationMetadata> {
    vec![
        declaration(
            "demo::data::Box",
            ElementKind::Struct,
            "higher_kind",
            vec![TypeParameter::new("T")],
            4,
        ),
        declaration(
            "demo::data::Pair",
            ElementKind::Struct,
            "higher_kind",
            vec![
                TypeParameter::new("A").with_bounds("Clone"),
                TypeParameter::new("B"),
            ],
            9,
        ),
        declaration(
            "demo::algebra::Semigroup",
            ElementKind::Trait,
            "typeclass",
            vec![TypeParameter::new("T")],
            15,
        ),
        declaration(
            "demo::tc::Functor",
            ElementKind::Trait,
            "typeclass",
            vec![TypeParameter::new("F")],
            20,
        ),
    ]
}

/// Round-trip the scenario through an archive, then generate.
fn generate_into(dir: &std::path::Path) -> kind_gen::GenerationReport {
    let mut builder = ArchiveBuilder::new("demo");
    for decl in &scenario() {
        builder.add(decl);
    }
    let bytes = builder.finish().unwrap();
    let contents = read_archive(&bytes).unwrap();
    assert_eq!(contents.declarations, scenario());

    let mut session = GenerationSession::new(GeneratorConfig::new(dir));
    session.process_round(&contents.declarations);
    session.finish()
}

#[test]
fn golden_box() {
    let dir = tempfile::tempdir().unwrap();
    let report = generate_into(dir.path());
    assert!(report.succeeded(), "{:?}", report.diagnostics);

    let generated =
        fs::read_to_string(dir.path().join("higher_kind/higher_kind.demo.data.Box.rs")).unwrap();
    assert_eq!(generated, include_str!("golden/higher_kind.demo.data.Box.rs"));
}

#[test]
fn golden_pair() {
    let dir = tempfile::tempdir().unwrap();
    generate_into(dir.path());

    let generated =
        fs::read_to_string(dir.path().join("higher_kind/higher_kind.demo.data.Pair.rs")).unwrap();
    assert_eq!(generated, include_str!("golden/higher_kind.demo.data.Pair.rs"));
}

#[test]
fn golden_semigroup() {
    let dir = tempfile::tempdir().unwrap();
    generate_into(dir.path());

    let generated = fs::read_to_string(
        dir.path()
            .join("typeclass/typeclass.demo.algebra.Semigroup.rs"),
    )
    .unwrap();
    assert_eq!(
        generated,
        include_str!("golden/typeclass.demo.algebra.Semigroup.rs")
    );
}

#[test]
fn golden_functor() {
    let dir = tempfile::tempdir().unwrap();
    generate_into(dir.path());

    let generated =
        fs::read_to_string(dir.path().join("typeclass/typeclass.demo.tc.Functor.rs")).unwrap();
    assert_eq!(generated, include_str!("golden/typeclass.demo.tc.Functor.rs"));
}

#[test]
fn only_expected_files_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let report = generate_into(dir.path());

    let mut names: Vec<String> = report
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "higher_kind.demo.data.Box.rs",
            "higher_kind.demo.data.Pair.rs",
            "typeclass.demo.algebra.Semigroup.rs",
            "typeclass.demo.tc.Functor.rs",
        ]
    );
}
