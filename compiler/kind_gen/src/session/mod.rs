//! Generation Session
//!
//! One session is one generator invocation. It owns the per-invocation
//! state: the typeclass accumulator, the set of declarations already
//! generated, the files produced so far and the diagnostic queue. A new
//! session always starts empty, and `finish` consumes it, so nothing leaks
//! from one invocation into the next.
//!
//! # Failure handling
//!
//! - Structural errors skip the declaration and fail the invocation.
//! - Emission errors affect only the declaration being written.
//! - In both cases any earlier output for that declaration is removed.

use std::path::PathBuf;

use rustc_hash::FxHashSet;

use kind_diagnostic::{
    Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode, ErrorGuaranteed,
};
use kind_ir::{DeclarationMetadata, QualifiedName, SourceLocation, Tag};

use crate::emit::{FileEmitter, WriteOutcome};
use crate::typeclass::TypeclassScanner;
use crate::{higher_kind, GeneratedFile, GeneratorConfig, StructuralError};

/// State of one generation invocation.
pub struct GenerationSession {
    config: GeneratorConfig,
    emitter: FileEmitter,
    scanner: TypeclassScanner,
    higher_kinds: FxHashSet<QualifiedName>,
    produced: FxHashSet<PathBuf>,
    written: Vec<PathBuf>,
    unchanged: Vec<PathBuf>,
    removed: Vec<PathBuf>,
    diagnostics: DiagnosticQueue,
    rounds: usize,
    tagged: usize,
}

impl GenerationSession {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_diagnostic_config(config, DiagnosticConfig::default())
    }

    pub fn with_diagnostic_config(config: GeneratorConfig, diagnostics: DiagnosticConfig) -> Self {
        GenerationSession {
            emitter: FileEmitter::new(config.output_root.clone()),
            config,
            scanner: TypeclassScanner::new(),
            higher_kinds: FxHashSet::default(),
            produced: FxHashSet::default(),
            written: Vec::new(),
            unchanged: Vec::new(),
            removed: Vec::new(),
            diagnostics: DiagnosticQueue::with_config(diagnostics),
            rounds: 0,
            tagged: 0,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Visit one round of declarations.
    ///
    /// Higher-kinded declarations are generated and written immediately;
    /// typeclass declarations are only recorded until [`finish`].
    ///
    /// [`finish`]: GenerationSession::finish
    #[tracing::instrument(level = "debug", skip_all, fields(round = self.rounds, declarations = round.len()))]
    pub fn process_round(&mut self, round: &[DeclarationMetadata]) {
        self.rounds += 1;
        for meta in round {
            for tag in meta.unknown_tags() {
                tracing::trace!(declaration = %meta.name, tag, "ignoring unknown tag");
            }
            if meta.has_tag(Tag::HigherKind) {
                self.tagged += 1;
                self.higher_kind(meta);
            }
            if meta.has_tag(Tag::Typeclass) {
                self.tagged += 1;
                if let Err(error) = self.scanner.record(meta) {
                    self.structural(Tag::Typeclass, &meta.name, meta.location.as_ref(), &error);
                }
            }
        }
    }

    /// Typeclass declarations recorded so far.
    pub fn pending_typeclasses(&self) -> usize {
        self.scanner.len()
    }

    /// Emit the recorded typeclasses, prune if configured, and report.
    #[tracing::instrument(level = "debug", skip_all, fields(typeclasses = self.scanner.len()))]
    pub fn finish(mut self) -> GenerationReport {
        let scanner = std::mem::take(&mut self.scanner);
        for scanned in scanner.finish(&self.config) {
            let decl = scanned.declaration;
            match scanned.result {
                Ok(file) => self.emit(&file, decl.location.as_ref()),
                Err(error) => {
                    self.structural(Tag::Typeclass, &decl.name, decl.location.as_ref(), &error);
                }
            }
        }

        if self.config.prune_stale {
            for &tag in Tag::ALL {
                match self.emitter.prune(tag, &self.produced) {
                    Ok(pruned) => self.removed.extend(pruned),
                    Err(error) => {
                        self.diagnostics.add(error.to_diagnostic(None));
                    }
                }
            }
        }

        if self.tagged == 0 {
            self.diagnostics.add(
                Diagnostic::warning(ErrorCode::W1001)
                    .with_message("no declarations tagged `#[higher_kind]` or `#[typeclass]` were found")
                    .with_note("nothing was generated"),
            );
        }

        let error_count = self.diagnostics.error_count();
        let warning_count = self.diagnostics.warning_count();
        let limit_reached = self.diagnostics.limit_reached();
        tracing::debug!(
            written = self.written.len(),
            unchanged = self.unchanged.len(),
            removed = self.removed.len(),
            error_count,
            "generation finished"
        );
        GenerationReport {
            written: self.written,
            unchanged: self.unchanged,
            removed: self.removed,
            diagnostics: self.diagnostics.flush(),
            error_count,
            warning_count,
            limit_reached,
        }
    }

    fn higher_kind(&mut self, meta: &DeclarationMetadata) {
        let location = meta.location.as_ref();
        if !self.higher_kinds.insert(meta.name.clone()) {
            let error = StructuralError::Duplicate {
                declaration: meta.name.to_path(),
                tag: Tag::HigherKind,
            };
            // The first occurrence keeps its file.
            self.diagnostics.add(error.to_diagnostic(location));
            return;
        }
        match higher_kind::generate_from_metadata(meta, &self.config) {
            Ok(file) => self.emit(&file, location),
            Err(error) => self.structural(Tag::HigherKind, &meta.name, location, &error),
        }
    }

    fn emit(&mut self, file: &GeneratedFile, location: Option<&SourceLocation>) {
        match self.emitter.write(file) {
            Ok((path, outcome)) => {
                self.produced.insert(path.clone());
                match outcome {
                    WriteOutcome::Written => self.written.push(path),
                    WriteOutcome::Unchanged => self.unchanged.push(path),
                }
            }
            Err(error) => {
                self.diagnostics.add(error.to_diagnostic(location));
                self.remove_output(file.tag(), file.declaration(), location);
            }
        }
    }

    fn structural(
        &mut self,
        tag: Tag,
        name: &QualifiedName,
        location: Option<&SourceLocation>,
        error: &StructuralError,
    ) {
        tracing::debug!(declaration = %name, code = %error.code(), "declaration skipped");
        self.diagnostics.add(error.to_diagnostic(location));
        if !matches!(error, StructuralError::Duplicate { .. }) {
            self.remove_output(tag, name, location);
        }
    }

    fn remove_output(&mut self, tag: Tag, name: &QualifiedName, location: Option<&SourceLocation>) {
        match self.emitter.remove(tag, name) {
            Ok(Some(path)) => self.removed.push(path),
            Ok(None) => {}
            Err(error) => {
                self.diagnostics.add(error.to_diagnostic(location));
            }
        }
    }
}

/// Outcome of one generation invocation.
#[derive(Debug)]
pub struct GenerationReport {
    /// Files created or rewritten.
    pub written: Vec<PathBuf>,
    /// Files whose contents were already current.
    pub unchanged: Vec<PathBuf>,
    /// Outputs of failed declarations and pruned stale files.
    pub removed: Vec<PathBuf>,
    /// Sorted by location.
    pub diagnostics: Vec<Diagnostic>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Later errors were dropped by the diagnostic limit.
    pub limit_reached: bool,
}

impl GenerationReport {
    /// Whether generation for the whole invocation succeeded.
    pub fn succeeded(&self) -> bool {
        self.error_count == 0
    }

    /// Proof that an error was reported, if generation failed.
    pub fn error_guaranteed(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Every file this invocation produced, written or unchanged.
    pub fn produced(&self) -> impl Iterator<Item = &PathBuf> {
        self.written.iter().chain(&self.unchanged)
    }
}
