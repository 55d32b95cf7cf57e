//! Diagnostic system for generator and extractor errors.
//!
//! Every user-visible problem carries:
//! - An error code for searchability and `--explain`
//! - A clear message (what went wrong)
//! - A primary location (the offending declaration)
//! - Notes and suggestions (why, and how to fix it)
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type provides type-level proof that at least one
//! error was emitted. A generation pass that fails returns one, so a failed
//! build can never be reported without a diagnostic explaining it.
//!
//! ```text
//! queue.add(diagnostic);
//! let guarantee = queue.has_errors();
//! fn generate() -> Result<GenerationReport, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
