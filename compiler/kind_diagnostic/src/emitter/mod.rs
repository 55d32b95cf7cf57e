//! Diagnostic output formats.
//!
//! `kindc` prints diagnostics either for a person ([`TerminalEmitter`], on
//! stderr) or for build tooling ([`JsonEmitter`], a single array on stdout).

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// One output format for a batch of diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Close the batch and flush the writer.
    ///
    /// The counts cover everything passed to `emit`.
    fn finish(&mut self, error_count: usize, warning_count: usize);
}
