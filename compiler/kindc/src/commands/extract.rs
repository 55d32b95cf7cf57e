//! The `extract` command: source tree to metadata archive.

use kind_diagnostic::{Diagnostic, ErrorCode};
use kind_extract::extract_crate;

use super::{emit_diagnostics, ExtractOptions};

/// Extract tagged declarations and write the archive.
///
/// Declarations that could be recovered are written even when other items
/// failed; the command still fails in that case.
pub fn run_extract(options: &ExtractOptions) -> bool {
    let extraction = extract_crate(&options.src_dir, &options.crate_name);
    let mut diagnostics: Vec<Diagnostic> = extraction.diagnostics().collect();

    match extraction.to_archive() {
        Ok(bytes) => {
            if let Err(e) = std::fs::write(&options.output, bytes) {
                diagnostics.push(
                    Diagnostic::error(ErrorCode::E9001)
                        .with_message(format!(
                            "cannot write archive '{}': {e}",
                            options.output.display()
                        )),
                );
            } else {
                tracing::debug!(
                    path = %options.output.display(),
                    declarations = extraction.declarations.len(),
                    "archive written"
                );
            }
        }
        Err(error) => {
            diagnostics.push(
                Diagnostic::error(ErrorCode::E9001)
                    .with_message(format!("cannot encode archive: {error}")),
            );
        }
    }

    let failed = diagnostics.iter().any(Diagnostic::is_error);
    if !diagnostics.is_empty() {
        emit_diagnostics(&diagnostics, None, &options.report);
    }
    if !failed {
        eprintln!(
            "extracted {} declaration{} from crate '{}' into {}",
            extraction.declarations.len(),
            if extraction.declarations.len() == 1 { "" } else { "s" },
            extraction.crate_name,
            options.output.display()
        );
    }
    !failed
}
