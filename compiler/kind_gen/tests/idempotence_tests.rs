//! Repeated generation over unchanged metadata.
//!
//! A second invocation must produce byte-identical files and leave them
//! untouched on disk.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::fs;
use std::path::Path;

use kind_gen::{GenerationReport, GenerationSession, GeneratorConfig};
use kind_ir::{DeclarationMetadata, ElementKind, QualifiedName, TypeParameter};
use pretty_assertions::assert_eq;

fn declaration(name: &str, element: ElementKind, tag: &str, params: &[&str]) -> DeclarationMetadata {
    let name = QualifiedName::parse(name).unwrap();
    let package =
        QualifiedName::from_segments(name.segments()[..name.segments().len() - 1].to_vec());
    DeclarationMetadata {
        package,
        name,
        element,
        tags: vec![tag.to_owned()],
        type_parameters: params.iter().map(|p| TypeParameter::new(*p)).collect(),
        location: None,
    }
}

fn round() -> Vec<DeclarationMetadata> {
    vec![
        declaration("app::Option", ElementKind::Enum, "higher_kind", &["T"]),
        declaration("app::Either", ElementKind::Enum, "higher_kind", &["L", "R"]),
        declaration("app::Tri", ElementKind::Struct, "higher_kind", &["A", "B", "C"]),
        declaration("app::Functor", ElementKind::Trait, "typeclass", &["F"]),
        declaration("app::Marker", ElementKind::Trait, "typeclass", &[]),
    ]
}

fn run(root: &Path) -> GenerationReport {
    let mut session = GenerationSession::new(GeneratorConfig::new(root));
    session.process_round(&round());
    session.finish()
}

fn snapshot(report: &GenerationReport) -> Vec<(String, String)> {
    let mut files: Vec<(String, String)> = report
        .produced()
        .map(|path| {
            (
                path.display().to_string(),
                fs::read_to_string(path).unwrap(),
            )
        })
        .collect();
    files.sort();
    files
}

#[test]
fn second_run_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = run(dir.path());
    assert!(first.succeeded());
    assert_eq!(first.written.len(), 5);
    let before = snapshot(&first);

    let second = run(dir.path());
    assert!(second.written.is_empty());
    assert_eq!(second.unchanged.len(), 5);
    assert_eq!(snapshot(&second), before);
}

#[test]
fn unchanged_files_keep_their_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let first = run(dir.path());
    let path = &first.written[0];
    let modified = fs::metadata(path).unwrap().modified().unwrap();

    run(dir.path());
    assert_eq!(fs::metadata(path).unwrap().modified().unwrap(), modified);
}

#[test]
fn separate_roots_do_not_interfere() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let left = snapshot(&run(a.path()));
    let right = snapshot(&run(b.path()));

    let contents = |files: &[(String, String)]| -> Vec<String> {
        files.iter().map(|(_, text)| text.clone()).collect()
    };
    assert_eq!(contents(&left), contents(&right));
}
