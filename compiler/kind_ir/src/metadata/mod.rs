//! Binary declaration metadata.
//!
//! A metadata archive is the compiled form the generators read
//! declarations from. It is a bincode-encoded [`MetadataArchive`]: a small
//! header, a string table, and one [`RawDeclaration`] per tagged item. All
//! names inside a record are indices into the string table, so an archive
//! can be read without any source text.

mod builder;
mod reader;

use serde::{Deserialize, Serialize};

pub use builder::ArchiveBuilder;
pub use reader::{read_archive, ArchiveContents, MetadataReader};

/// First four bytes of every archive.
pub const ARCHIVE_MAGIC: [u8; 4] = *b"KMDA";

/// Current archive format version.
pub const ARCHIVE_VERSION: u32 = 1;

/// Index into [`MetadataArchive::strings`].
pub type StringIndex = u32;

/// On-disk archive layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataArchive {
    pub magic: [u8; 4],
    pub version: u32,
    pub crate_name: String,
    pub strings: Vec<String>,
    pub declarations: Vec<RawDeclaration>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDeclaration {
    /// Fully-qualified name in internal form (`demo/data/Box`).
    pub name: StringIndex,
    pub package: StringIndex,
    pub element: u8,
    pub tags: Vec<StringIndex>,
    /// Stored in arbitrary order; `declared_index` is authoritative.
    pub type_parameters: Vec<RawTypeParameter>,
    pub location: Option<RawLocation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTypeParameter {
    pub name: StringIndex,
    pub declared_index: u32,
    pub bounds: Option<StringIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLocation {
    pub file: StringIndex,
    pub line: u32,
    pub column: u32,
}

/// Serialize an archive to bytes.
pub fn encode_archive(archive: &MetadataArchive) -> Result<Vec<u8>, MetadataError> {
    bincode::serialize(archive).map_err(|e| MetadataError::Encode(e.to_string()))
}

/// Errors reading or writing metadata archives.
///
/// Every variant is fatal for a generation pass: without a trustworthy
/// declaration shape nothing downstream can proceed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("metadata archive could not be decoded: {0}")]
    Decode(String),

    #[error("metadata archive could not be encoded: {0}")]
    Encode(String),

    #[error("not a metadata archive (magic bytes {found:?})")]
    BadMagic { found: [u8; 4] },

    #[error("unsupported metadata archive version {found} (expected {ARCHIVE_VERSION})")]
    UnsupportedVersion { found: u32 },

    #[error("string index {index} is out of range (table has {len} entries)")]
    DanglingString { index: StringIndex, len: usize },

    #[error("invalid {what} `{text}`")]
    InvalidName { what: &'static str, text: String },

    #[error("unknown element kind code {code} for `{declaration}`")]
    UnknownElement { code: u8, declaration: String },

    #[error(
        "type parameter indices of `{declaration}` are not a permutation of 0..{}: {indices:?}",
        indices.len()
    )]
    InconsistentTypeParameters {
        declaration: String,
        indices: Vec<u32>,
    },
}
