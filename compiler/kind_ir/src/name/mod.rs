//! Qualified names recovered from compiled metadata.
//!
//! Metadata stores names in an internal form whose separators depend on the
//! producer (`demo/data/Box`, `demo.data.Outer$Inner`, `demo::data::Box`).
//! `QualifiedName` normalises all of them into plain path segments.

use std::fmt;

/// Separators accepted between path segments in internal names.
const SEGMENT_SEPARATORS: [char; 3] = ['/', '.', '$'];

/// A path of name segments, e.g. `demo::data::Box`.
///
/// The empty path denotes the crate root and is only meaningful as a
/// package.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Default)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    /// The crate root (no segments).
    pub fn root() -> Self {
        QualifiedName::default()
    }

    /// Parse an internal-form name.
    ///
    /// Returns `None` when any segment is empty (`demo//Box`, `demo.`),
    /// except for the empty string itself which parses to the root.
    pub fn parse(internal: &str) -> Option<Self> {
        if internal.is_empty() {
            return Some(Self::root());
        }
        let normalized = internal.replace("::", "/");
        let segments: Vec<String> = normalized
            .split(SEGMENT_SEPARATORS)
            .map(str::to_owned)
            .collect();
        if segments.iter().any(String::is_empty) {
            return None;
        }
        Some(QualifiedName { segments })
    }

    /// Build from already-split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QualifiedName {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// All segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment, or `""` for the root.
    pub fn simple_name(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Whether this is the crate root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether `prefix` is a (non-strict) leading part of this name.
    pub fn starts_with(&self, prefix: &QualifiedName) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Rust path form: `demo::data::Box`.
    pub fn to_path(&self) -> String {
        self.segments.join("::")
    }

    /// Internal form used inside metadata archives: `demo/data/Box`.
    pub fn to_internal(&self) -> String {
        self.segments.join("/")
    }

    /// Dotted form used in generated file names: `demo.data.Box`.
    ///
    /// Rust identifiers never contain `.`, so distinct names always map to
    /// distinct stems.
    pub fn to_file_stem(&self) -> String {
        self.segments.join(".")
    }

    /// Append one segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        QualifiedName { segments }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "crate")
        } else {
            write!(f, "{}", self.to_path())
        }
    }
}
