//! Command tests: extract, generate and dump on a scratch crate.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use kind_diagnostic::emitter::ColorMode;
use kind_diagnostic::ErrorCode;
use kind_ir::read_archive;
use kindc::commands::{
    format_archive, load_archives, run_extract, run_generate, ExtractOptions, GenerateOptions,
    OutputFormat, OutputOptions,
};
use pretty_assertions::assert_eq;

const LIB: &str = "\
pub mod data;

#[kind_macros::typeclass]
pub trait Show<T> {
    fn show(&self, value: &T) -> String;
}
";

const DATA: &str = "\
#[kind_macros::higher_kind]
pub struct Wrapper<T>(pub T);
";

fn quiet() -> OutputOptions {
    OutputOptions {
        format: OutputFormat::Human,
        color: ColorMode::Never,
    }
}

fn scratch_crate(root: &Path) -> PathBuf {
    let src = root.join("demo").join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("lib.rs"), LIB).unwrap();
    fs::write(src.join("data.rs"), DATA).unwrap();
    src
}

fn extract(root: &Path) -> PathBuf {
    let archive = root.join("demo.kmda");
    let options = ExtractOptions {
        src_dir: scratch_crate(root),
        crate_name: "demo".to_owned(),
        output: archive.clone(),
        report: quiet(),
    };
    assert!(run_extract(&options));
    archive
}

fn generate_options(archives: Vec<PathBuf>, output: PathBuf) -> GenerateOptions {
    GenerateOptions {
        archives,
        output,
        runtime: None,
        prune: false,
        report: quiet(),
    }
}

#[test]
fn extract_writes_readable_archive() {
    let dir = tempfile::tempdir().unwrap();
    let archive = extract(dir.path());

    let contents = read_archive(&fs::read(archive).unwrap()).unwrap();
    let src = dir.path().join("demo").join("src");
    let expected = format!(
        "crate demo (2 declarations)\n  \
         struct demo::data::Wrapper<T> #[kind_macros::higher_kind] at {}:2:12\n  \
         trait demo::Show<T> #[kind_macros::typeclass] at {}:4:11\n",
        src.join("data.rs").display(),
        src.join("lib.rs").display(),
    );
    assert_eq!(format_archive(&contents), expected);
}

#[test]
fn generate_from_extracted_archive() {
    let dir = tempfile::tempdir().unwrap();
    let archive = extract(dir.path());
    let out = dir.path().join("generated");

    assert!(run_generate(&generate_options(vec![archive], out.clone())));

    let witness = out.join("higher_kind").join("higher_kind.demo.data.Wrapper.rs");
    let lookup = out.join("typeclass").join("typeclass.demo.Show.rs");
    assert!(fs::read_to_string(witness).unwrap().contains("pub enum WrapperHK {}"));
    assert!(fs::read_to_string(lookup)
        .unwrap()
        .contains("pub fn show<T: 'static, I>()"));
}

#[test]
fn custom_runtime_path_reaches_generated_code() {
    let dir = tempfile::tempdir().unwrap();
    let archive = extract(dir.path());
    let out = dir.path().join("generated");

    let mut options = generate_options(vec![archive], out.clone());
    options.runtime = Some("crate::rt".to_owned());
    assert!(run_generate(&options));

    let lookup = fs::read_to_string(out.join("typeclass").join("typeclass.demo.Show.rs")).unwrap();
    assert!(lookup.contains("crate::rt::instance("));
    assert!(!lookup.contains("::kind_rt"));
}

#[test]
fn broken_archive_aborts_before_generation() {
    let dir = tempfile::tempdir().unwrap();
    let good = extract(dir.path());
    let bad = dir.path().join("bad.kmda");
    fs::write(&bad, b"not an archive").unwrap();
    let missing = dir.path().join("missing.kmda");
    let out = dir.path().join("generated");

    let errors = load_archives(&[good.clone(), bad.clone(), missing]).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|d| d.code == ErrorCode::E1001 || d.code == ErrorCode::E1002));

    assert!(!run_generate(&generate_options(vec![good, bad], out.clone())));
    assert!(!out.exists());
}

#[test]
fn binary_reports_unknown_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_kindc"))
        .arg("frobnicate")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown command: frobnicate"));
}

#[test]
fn binary_explains_error_codes() {
    let output = Command::new(env!("CARGO_BIN_EXE_kindc"))
        .args(["--explain", "E2002"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("# E2002"));

    let output = Command::new(env!("CARGO_BIN_EXE_kindc"))
        .args(["--explain", "E0000"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
