//! Extraction errors.

use std::io;
use std::path::PathBuf;

use kind_diagnostic::{Diagnostic, ErrorCode};
use kind_ir::SourceLocation;

/// A problem found while reading a source tree.
///
/// None of these stop extraction: the affected file or declaration is
/// skipped and the rest of the tree is still read.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no `lib.rs` or `main.rs` in `{}`", dir.display())]
    NoCrateRoot { dir: PathBuf },

    #[error("cannot parse `{}`: {message}", location.file)]
    Parse {
        location: SourceLocation,
        message: String,
    },

    #[error("{kind} parameter `{param}` of `{declaration}` is not supported by the kind encoding")]
    UnsupportedGeneric {
        declaration: String,
        param: String,
        kind: &'static str,
        location: SourceLocation,
    },
}

impl ExtractError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExtractError::Read { .. } | ExtractError::NoCrateRoot { .. } => ErrorCode::E4001,
            ExtractError::Parse { .. } => ErrorCode::E4002,
            ExtractError::UnsupportedGeneric { .. } => ErrorCode::E4003,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            ExtractError::Parse { location, .. }
            | ExtractError::UnsupportedGeneric { location, .. } => Some(location),
            ExtractError::Read { .. } | ExtractError::NoCrateRoot { .. } => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ExtractError::Parse { location, .. } => diag
                .with_label(location.clone(), "syntax error")
                .with_note("declarations in this file were not extracted"),
            ExtractError::UnsupportedGeneric { location, .. } => diag
                .with_label(location.clone(), "unsupported parameter")
                .with_note("the kind encoding only abstracts over type parameters")
                .with_suggestion("remove the parameter or the tag"),
            ExtractError::Read { .. } | ExtractError::NoCrateRoot { .. } => diag,
        }
    }
}
