//! The `generate` command: metadata archives to generated sources.

use std::path::PathBuf;

use kind_diagnostic::{Diagnostic, DiagnosticConfig, ErrorCode};
use kind_gen::{metadata_diagnostic, GenerationSession, GeneratorConfig};
use kind_ir::{read_archive, ArchiveContents};

use super::{emit_diagnostics, GenerateOptions, OutputFormat};

/// Read and validate every archive before anything is generated.
///
/// All failures are collected so one run reports every broken archive.
pub fn load_archives(paths: &[PathBuf]) -> Result<Vec<ArchiveContents>, Vec<Diagnostic>> {
    let mut loaded = Vec::with_capacity(paths.len());
    let mut errors = Vec::new();
    for path in paths {
        let origin = path.display().to_string();
        match std::fs::read(path) {
            Ok(bytes) => match read_archive(&bytes) {
                Ok(contents) => loaded.push(contents),
                Err(error) => errors.push(metadata_diagnostic(&origin, &error)),
            },
            Err(e) => errors.push(
                Diagnostic::error(ErrorCode::E1001)
                    .with_message(format!("{origin}: cannot read archive: {e}"))
                    .with_note("no files were generated; metadata errors abort the whole pass"),
            ),
        }
    }
    if errors.is_empty() {
        Ok(loaded)
    } else {
        Err(errors)
    }
}

/// Generate sources for every tagged declaration in the given archives.
///
/// Each archive is one compilation round; typeclass output is written once
/// all rounds are in.
#[tracing::instrument(level = "debug", skip_all, fields(archives = options.archives.len()))]
pub fn run_generate(options: &GenerateOptions) -> bool {
    let archives = match load_archives(&options.archives) {
        Ok(archives) => archives,
        Err(diagnostics) => {
            emit_diagnostics(&diagnostics, None, &options.report);
            return false;
        }
    };

    let mut config = GeneratorConfig::new(options.output.clone()).with_prune_stale(options.prune);
    if let Some(runtime) = &options.runtime {
        config = config.with_runtime_path(runtime.clone());
    }
    let diagnostic_config = DiagnosticConfig::default();
    let error_limit = diagnostic_config.error_limit;
    let mut session = GenerationSession::with_diagnostic_config(config, diagnostic_config);
    for archive in &archives {
        tracing::debug!(
            crate_name = %archive.crate_name,
            declarations = archive.declarations.len(),
            "round"
        );
        session.process_round(&archive.declarations);
    }
    let report = session.finish();

    if !report.diagnostics.is_empty() || report.limit_reached {
        emit_diagnostics(
            &report.diagnostics,
            report.limit_reached.then_some(error_limit),
            &options.report,
        );
    }
    if options.report.format == OutputFormat::Human {
        eprintln!(
            "generated {} file{} ({} unchanged, {} removed) in {}",
            report.written.len(),
            if report.written.len() == 1 { "" } else { "s" },
            report.unchanged.len(),
            report.removed.len(),
            options.output.display()
        );
    }
    report.succeeded()
}
