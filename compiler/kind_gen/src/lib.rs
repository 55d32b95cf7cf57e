//! Code generators for the kind encoding.
//!
//! Input is declaration metadata read from compiled archives
//! ([`kind_ir::read_archive`]); output is one Rust source file per tagged
//! declaration and tag:
//!
//! - `#[higher_kind]`: witness marker, kind aliases and a narrowing accessor
//!   ([`higher_kind`])
//! - `#[typeclass]`: instance lookup and registration functions
//!   ([`typeclass`])
//!
//! A [`GenerationSession`] drives one invocation across compilation rounds
//! and writes through a [`FileEmitter`].

mod config;
pub mod emit;
mod error;
pub mod higher_kind;
mod narrow;
mod render;
pub mod session;
pub mod typeclass;
mod validate;

pub use config::{GeneratorConfig, DEFAULT_RUNTIME_PATH};
pub use emit::{FileEmitter, WriteOutcome};
pub use error::{metadata_diagnostic, EmitError, StructuralError};
pub use higher_kind::WitnessNames;
pub use render::{file_name, relative_path, GeneratedFile};
pub use session::{GenerationReport, GenerationSession};
pub use typeclass::TypeclassScanner;
