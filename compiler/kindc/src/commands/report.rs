//! Diagnostic output for all commands.

use std::io::{self, IsTerminal};

use kind_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use kind_diagnostic::queue::too_many_errors;
use kind_diagnostic::Diagnostic;

use super::{OutputFormat, OutputOptions};

/// Print diagnostics in the requested format.
///
/// `dropped_after` is the error limit when later errors were dropped; a
/// final E9002 says so.
pub fn emit_diagnostics(
    diagnostics: &[Diagnostic],
    dropped_after: Option<usize>,
    options: &OutputOptions,
) {
    let mut all = diagnostics.to_vec();
    if let Some(limit) = dropped_after {
        all.push(too_many_errors(limit));
    }
    let errors = all.iter().filter(|d| d.is_error()).count();
    let warnings = all.iter().filter(|d| d.is_warning()).count();

    match options.format {
        OutputFormat::Human => {
            let is_tty = io::stderr().is_terminal();
            let mut emitter = TerminalEmitter::stderr(options.color, is_tty);
            emitter.emit_all(&all);
            emitter.finish(errors, warnings);
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(io::stdout());
            emitter.emit_all(&all);
            emitter.finish(errors, warnings);
        }
    }
}
