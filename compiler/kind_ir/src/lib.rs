//! Kind IR - Declaration Metadata Types
//!
//! This crate contains the data model shared by every stage of kind
//! encoding generation:
//! - Qualified names recovered from compiled metadata
//! - Identifier rules for names that end up in generated Rust code
//! - Declarations as read from metadata (`DeclarationMetadata`) and as
//!   accepted by a generator (`AnnotatedDeclaration`)
//! - The binary metadata archive format, its reader and its builder
//!
//! # Design Philosophy
//!
//! Generators never look at source text. Everything they know about a
//! declaration comes from a metadata archive, so declarations from
//! dependencies whose sources are unavailable are handled the same way as
//! local ones.

mod decl;
pub mod ident;
pub mod metadata;
mod name;

pub use decl::{
    AnnotatedDeclaration, DeclarationKind, DeclarationMetadata, ElementKind, SourceLocation, Tag,
    TypeParameter,
};
pub use metadata::{read_archive, ArchiveBuilder, ArchiveContents, MetadataError, MetadataReader};
pub use name::QualifiedName;

/// Largest number of type parameters the kind encoding supports.
///
/// Matches the widest `KindN` alias and `TypeArgs` tuple provided by the
/// runtime crate. Both generators enforce it.
pub const MAX_ARITY: usize = 5;
