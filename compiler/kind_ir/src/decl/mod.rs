//! Declarations as read from metadata and as accepted by generators.
//!
//! `DeclarationMetadata` is what the metadata reader recovers for any
//! tagged element. `AnnotatedDeclaration` is the narrower view a generator
//! works with: only classes and interfaces qualify.

use std::fmt;

use crate::QualifiedName;

/// The kind of element a metadata record describes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ElementKind {
    Struct,
    Enum,
    Union,
    Trait,
    TypeAlias,
    Function,
    Const,
    Static,
    Module,
}

impl ElementKind {
    /// All element kinds, in code order.
    pub const ALL: &'static [ElementKind] = &[
        ElementKind::Struct,
        ElementKind::Enum,
        ElementKind::Union,
        ElementKind::Trait,
        ElementKind::TypeAlias,
        ElementKind::Function,
        ElementKind::Const,
        ElementKind::Static,
        ElementKind::Module,
    ];

    /// The byte stored in metadata archives.
    pub fn code(self) -> u8 {
        match self {
            ElementKind::Struct => 0,
            ElementKind::Enum => 1,
            ElementKind::Union => 2,
            ElementKind::Trait => 3,
            ElementKind::TypeAlias => 4,
            ElementKind::Function => 5,
            ElementKind::Const => 6,
            ElementKind::Static => 7,
            ElementKind::Module => 8,
        }
    }

    /// Decode an archive byte.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// The generator-level kind, if this element can be tagged at all.
    ///
    /// Data types (struct, enum, union) are classes; traits are interfaces.
    pub fn declaration_kind(self) -> Option<DeclarationKind> {
        match self {
            ElementKind::Struct | ElementKind::Enum | ElementKind::Union => {
                Some(DeclarationKind::Class)
            }
            ElementKind::Trait => Some(DeclarationKind::Interface),
            ElementKind::TypeAlias
            | ElementKind::Function
            | ElementKind::Const
            | ElementKind::Static
            | ElementKind::Module => None,
        }
    }

    /// Source keyword used in messages.
    pub fn keyword(self) -> &'static str {
        match self {
            ElementKind::Struct => "struct",
            ElementKind::Enum => "enum",
            ElementKind::Union => "union",
            ElementKind::Trait => "trait",
            ElementKind::TypeAlias => "type alias",
            ElementKind::Function => "fn",
            ElementKind::Const => "const",
            ElementKind::Static => "static",
            ElementKind::Module => "mod",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Class or interface.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclarationKind {
    Class,
    Interface,
}

/// The two declaration-level tags the generators react to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub enum Tag {
    /// `#[higher_kind]`: derive the witness encoding.
    HigherKind,
    /// `#[typeclass]`: derive instance lookup functions.
    Typeclass,
}

impl Tag {
    pub const ALL: &'static [Tag] = &[Tag::HigherKind, Tag::Typeclass];

    /// Simple name of the tag, also used for output directories and file names.
    pub fn name(self) -> &'static str {
        match self {
            Tag::HigherKind => "higher_kind",
            Tag::Typeclass => "typeclass",
        }
    }

    /// Resolve a tag from an attribute path (`typeclass`, `kind_macros::typeclass`).
    pub fn from_path(path: &str) -> Option<Self> {
        let last = path.rsplit("::").next().unwrap_or(path).trim();
        Self::ALL.iter().copied().find(|tag| tag.name() == last)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#[{}]", self.name())
    }
}

/// A type parameter with its original name and optional bound text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParameter {
    pub name: String,
    /// Bound as written after the colon (`Clone + Send`), if any.
    pub bounds: Option<String>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        TypeParameter {
            name: name.into(),
            bounds: None,
        }
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: impl Into<String>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }
}

/// Where a declaration was defined.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct SourceLocation {
    pub file: String,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        SourceLocation {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Everything the metadata reader recovers about one declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeclarationMetadata {
    pub package: QualifiedName,
    pub name: QualifiedName,
    pub element: ElementKind,
    /// Tag paths exactly as recorded; unknown tags are kept.
    pub tags: Vec<String>,
    /// In declaration order.
    pub type_parameters: Vec<TypeParameter>,
    pub location: Option<SourceLocation>,
}

impl DeclarationMetadata {
    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    /// Whether `tag` is among the recorded tags.
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.iter().any(|t| Tag::from_path(t) == Some(tag))
    }

    /// Recorded tags that do not name a known tag.
    pub fn unknown_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|t| Tag::from_path(t).is_none())
    }
}

/// A tagged class or interface, ready for a generator.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnnotatedDeclaration {
    pub package: QualifiedName,
    pub name: QualifiedName,
    pub kind: DeclarationKind,
    /// In declaration order.
    pub type_parameters: Vec<TypeParameter>,
    pub location: Option<SourceLocation>,
}

impl AnnotatedDeclaration {
    /// Narrow metadata to a class or interface.
    ///
    /// Returns the offending element kind for anything else.
    pub fn from_metadata(meta: &DeclarationMetadata) -> Result<Self, ElementKind> {
        let kind = meta.element.declaration_kind().ok_or(meta.element)?;
        Ok(AnnotatedDeclaration {
            package: meta.package.clone(),
            name: meta.name.clone(),
            kind,
            type_parameters: meta.type_parameters.clone(),
            location: meta.location.clone(),
        })
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    /// Number of type parameters.
    pub fn arity(&self) -> usize {
        self.type_parameters.len()
    }
}
