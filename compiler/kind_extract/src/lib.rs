//! Metadata extraction from Rust sources.
//!
//! Finds every item tagged `#[higher_kind]` or `#[typeclass]` in a crate's
//! source tree and records it as [`DeclarationMetadata`], ready to be
//! written to a metadata archive for `kindc generate`.
//!
//! Extraction reads sources without compiling them. Module paths come from
//! the file layout and inline `mod` blocks; `#[path]` attributes and
//! `cfg`-gated modules are not evaluated.

mod error;
mod item;
mod walk;

use std::path::Path;

use kind_diagnostic::Diagnostic;
use kind_ir::{ArchiveBuilder, DeclarationMetadata, MetadataError};

pub use error::ExtractError;

/// Everything found in one crate.
#[derive(Debug)]
pub struct Extraction {
    pub crate_name: String,
    /// In source order, depth-first through modules.
    pub declarations: Vec<DeclarationMetadata>,
    pub errors: Vec<ExtractError>,
}

impl Extraction {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic> + '_ {
        self.errors.iter().map(ExtractError::to_diagnostic)
    }

    /// Encode the declarations as a metadata archive.
    pub fn to_archive(&self) -> Result<Vec<u8>, MetadataError> {
        let mut builder = ArchiveBuilder::new(self.crate_name.clone());
        for decl in &self.declarations {
            builder.add(decl);
        }
        builder.finish()
    }
}

/// Extract tagged declarations from the crate whose sources are in `src_dir`.
///
/// `crate_name` becomes the first segment of every qualified name; `-` is
/// normalised to `_` as cargo does.
#[tracing::instrument(level = "debug", skip_all, fields(crate_name = %crate_name, dir = %src_dir.display()))]
pub fn extract_crate(src_dir: &Path, crate_name: &str) -> Extraction {
    let crate_name = crate_name.replace('-', "_");
    let mut walker = walk::Walker::new();
    walker.walk_crate(src_dir, &crate_name);
    tracing::debug!(
        declarations = walker.declarations.len(),
        errors = walker.errors.len(),
        "extraction finished"
    );
    Extraction {
        crate_name,
        declarations: walker.declarations,
        errors: walker.errors,
    }
}
