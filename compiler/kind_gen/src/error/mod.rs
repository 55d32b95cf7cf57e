//! Generator error types and their diagnostics.
//!
//! Three families, handled differently by a generation session:
//! - [`MetadataError`]: fatal for the whole pass (see [`metadata_diagnostic`])
//! - [`StructuralError`]: the declaration is skipped, the pass fails
//! - [`EmitError`]: fatal for the affected declaration only

use std::io;
use std::path::PathBuf;

use kind_diagnostic::{Diagnostic, ErrorCode};
use kind_ir::{ElementKind, MetadataError, SourceLocation, Tag, MAX_ARITY};

/// A declaration the encoding cannot represent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("`{declaration}` must have at least one type parameter to derive a kind encoding")]
    NoTypeParameters { declaration: String },

    #[error("`{declaration}` has {arity} type parameters; the kind encoding supports at most {ceiling}")]
    ArityAboveCeiling {
        declaration: String,
        arity: usize,
        ceiling: usize,
    },

    #[error("{tag} can only be applied to a struct, enum, union or trait, but `{declaration}` is a {element}")]
    NotClassOrInterface {
        declaration: String,
        element: ElementKind,
        tag: Tag,
    },

    #[error("{what} `{name}` of `{declaration}` is not a valid Rust identifier")]
    InvalidIdentifier {
        declaration: String,
        what: &'static str,
        name: String,
    },

    #[error("`{declaration}` is tagged {tag} more than once")]
    Duplicate { declaration: String, tag: Tag },

    #[error("typeclass `{declaration}` would resolve through `{function}()`, already generated for `{first}`")]
    LookupNameClash {
        declaration: String,
        first: String,
        function: String,
    },
}

impl StructuralError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StructuralError::NoTypeParameters { .. } => ErrorCode::E2001,
            StructuralError::ArityAboveCeiling { .. } => ErrorCode::E2002,
            StructuralError::NotClassOrInterface { .. } => ErrorCode::E2003,
            StructuralError::InvalidIdentifier { .. } => ErrorCode::E2004,
            StructuralError::Duplicate { .. } => ErrorCode::E2005,
            StructuralError::LookupNameClash { .. } => ErrorCode::E2006,
        }
    }

    /// Build the diagnostic, anchored at the declaration when known.
    pub fn to_diagnostic(&self, location: Option<&SourceLocation>) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label_at(location, "declared here");
        match self {
            StructuralError::NoTypeParameters { .. } => diag
                .with_note("the encoding represents this declaration applied to its type parameters")
                .with_suggestion("add a type parameter or remove `#[higher_kind]`"),
            StructuralError::ArityAboveCeiling { .. } => diag
                .with_note(format!(
                    "the widest runtime alias is `Kind{MAX_ARITY}`; nothing was generated for this declaration"
                ))
                .with_suggestion("group type parameters into a tuple or a helper struct"),
            StructuralError::NotClassOrInterface { .. } => {
                diag.with_suggestion("move the attribute to the type it was meant for")
            }
            StructuralError::InvalidIdentifier { .. } => diag,
            StructuralError::Duplicate { .. } => {
                diag.with_note("only the first occurrence was generated")
            }
            StructuralError::LookupNameClash { .. } => diag
                .with_note("lookup names are the simple name in lower_snake_case")
                .with_suggestion("rename one of the typeclasses"),
        }
    }
}

/// A generated file could not be written or removed.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("cannot create output directory `{}`: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write generated file `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot remove stale generated file `{}`: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EmitError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EmitError::CreateDir { .. } => ErrorCode::E3001,
            EmitError::Write { .. } => ErrorCode::E3002,
            EmitError::Remove { .. } => ErrorCode::E3003,
        }
    }

    pub fn to_diagnostic(&self, location: Option<&SourceLocation>) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label_at(location, "generated from this declaration")
    }
}

/// Diagnostic for an archive that could not be read.
///
/// `origin` names the archive (usually its path).
pub fn metadata_diagnostic(origin: &str, error: &MetadataError) -> Diagnostic {
    let code = match error {
        MetadataError::Decode(_) => ErrorCode::E1001,
        MetadataError::BadMagic { .. } | MetadataError::UnsupportedVersion { .. } => {
            ErrorCode::E1002
        }
        MetadataError::DanglingString { .. } => ErrorCode::E1003,
        MetadataError::InvalidName { .. } => ErrorCode::E1004,
        MetadataError::UnknownElement { .. } => ErrorCode::E1005,
        MetadataError::InconsistentTypeParameters { .. } => ErrorCode::E1006,
        // Only the writer produces this one.
        MetadataError::Encode(_) => ErrorCode::E9001,
    };
    Diagnostic::error(code)
        .with_message(format!("{origin}: {error}"))
        .with_note("no files were generated; metadata errors abort the whole pass")
}
