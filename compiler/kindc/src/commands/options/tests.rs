use std::path::PathBuf;

use kind_diagnostic::emitter::ColorMode;
use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn generate_collects_archives_and_output() {
    let opts = parse_generate_args(&args(&["a.kmda", "-o", "out", "b.kmda"])).unwrap();
    assert_eq!(
        opts.archives,
        vec![PathBuf::from("a.kmda"), PathBuf::from("b.kmda")]
    );
    assert_eq!(opts.output, PathBuf::from("out"));
    assert_eq!(opts.runtime, None);
    assert!(!opts.prune);
    assert_eq!(opts.report, OutputOptions::default());
}

#[test]
fn generate_flags() {
    let opts = parse_generate_args(&args(&[
        "a.kmda",
        "-o",
        "out",
        "--runtime=crate::rt",
        "--prune",
        "--format=json",
        "--color=never",
    ]))
    .unwrap();
    assert_eq!(opts.runtime.as_deref(), Some("crate::rt"));
    assert!(opts.prune);
    assert_eq!(opts.report.format, OutputFormat::Json);
    assert_eq!(opts.report.color, ColorMode::Never);
}

#[test]
fn generate_requires_archives_and_output() {
    assert!(parse_generate_args(&args(&["-o", "out"])).is_err());
    assert!(parse_generate_args(&args(&["a.kmda"])).is_err());
    assert!(parse_generate_args(&args(&["a.kmda", "-o"])).is_err());
}

#[test]
fn generate_rejects_bad_values() {
    let err = parse_generate_args(&args(&["a.kmda", "-o", "out", "--format=xml"])).unwrap_err();
    assert!(err.contains("xml"), "{err}");
    let err = parse_generate_args(&args(&["a.kmda", "-o", "out", "--verbose"])).unwrap_err();
    assert_eq!(err, "unknown option '--verbose'");
    assert!(parse_generate_args(&args(&["a.kmda", "-o", "out", "--runtime="])).is_err());
}

#[test]
fn extract_with_explicit_crate() {
    let opts = parse_extract_args(&args(&["src", "--crate=my-lib"])).unwrap();
    assert_eq!(opts.src_dir, PathBuf::from("src"));
    assert_eq!(opts.crate_name, "my-lib");
    assert_eq!(opts.output, PathBuf::from("my-lib.kmda"));
}

#[test]
fn extract_infers_crate_from_parent_dir() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("widgets").join("src");
    std::fs::create_dir_all(&src).unwrap();
    let src_arg = src.to_string_lossy().into_owned();

    let opts = parse_extract_args(&args(&[&src_arg, "-o", "w.kmda"])).unwrap();
    assert_eq!(opts.crate_name, "widgets");
    assert_eq!(opts.output, PathBuf::from("w.kmda"));
}

#[test]
fn extract_rejects_extra_arguments() {
    assert!(parse_extract_args(&args(&[])).is_err());
    assert!(parse_extract_args(&args(&["src", "other", "--crate=x"])).is_err());
    assert!(parse_extract_args(&args(&["src", "--crate="])).is_err());
}
