//! The `dump` command: print what an archive records.

use std::fmt::Write;
use std::path::Path;

use kind_gen::metadata_diagnostic;
use kind_ir::{read_archive, ArchiveContents, DeclarationMetadata};

use super::{emit_diagnostics, OutputOptions};

/// One line per declaration, in archive order.
pub fn format_archive(contents: &ArchiveContents) -> String {
    let mut out = String::new();
    let count = contents.declarations.len();
    let _ = writeln!(
        out,
        "crate {} ({count} declaration{})",
        contents.crate_name,
        if count == 1 { "" } else { "s" }
    );
    for decl in &contents.declarations {
        let _ = write!(out, "  {} {}", decl.element, decl.name);
        write_type_parameters(&mut out, decl);
        for tag in &decl.tags {
            let _ = write!(out, " #[{tag}]");
        }
        if let Some(location) = &decl.location {
            let _ = write!(out, " at {location}");
        }
        out.push('\n');
    }
    out
}

fn write_type_parameters(out: &mut String, decl: &DeclarationMetadata) {
    if decl.type_parameters.is_empty() {
        return;
    }
    out.push('<');
    for (i, param) in decl.type_parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&param.name);
        if let Some(bounds) = &param.bounds {
            let _ = write!(out, ": {bounds}");
        }
    }
    out.push('>');
}

/// Read `path` and print its contents to stdout.
pub fn dump_archive(path: &Path) -> bool {
    let origin = path.display().to_string();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: cannot read '{origin}': {e}");
            return false;
        }
    };
    match read_archive(&bytes) {
        Ok(contents) => {
            print!("{}", format_archive(&contents));
            true
        }
        Err(error) => {
            emit_diagnostics(
                &[metadata_diagnostic(&origin, &error)],
                None,
                &OutputOptions::default(),
            );
            false
        }
    }
}
