//! Error codes for all generator diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E2001`) with the first digit
//! indicating the stage that reports it. Used for `--explain` lookups and
//! documentation.

use std::fmt;

/// Error codes for all generator diagnostics.
///
/// Format: E#### where first digit indicates stage:
/// - E1xxx: Metadata errors (fatal for the whole pass)
/// - E2xxx: Structural errors (the declaration is skipped)
/// - E3xxx: Emission errors (fatal for one declaration)
/// - E4xxx: Source extraction errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Metadata Errors (E1xxx)
    /// Metadata archive could not be decoded
    E1001,
    /// Bad archive magic or unsupported version
    E1002,
    /// Dangling string table reference
    E1003,
    /// Invalid declaration or package name
    E1004,
    /// Unknown element kind
    E1005,
    /// Inconsistent type parameter indices
    E1006,

    // Structural Errors (E2xxx)
    /// Higher-kinded declaration without type parameters
    E2001,
    /// Arity above the supported ceiling
    E2002,
    /// Tagged element is neither a class nor an interface
    E2003,
    /// Name is not a valid Rust identifier
    E2004,
    /// Declaration tagged more than once
    E2005,
    /// Two typeclasses in one package share a lookup function name
    E2006,

    // Emission Errors (E3xxx)
    /// Cannot create output directory
    E3001,
    /// Cannot write generated file
    E3002,
    /// Cannot remove stale generated file
    E3003,

    // Extraction Errors (E4xxx)
    /// Unreadable source file
    E4001,
    /// Unparsable source file
    E4002,
    /// Unsupported generic parameter
    E4003,

    // Internal Errors (E9xxx)
    /// Internal generator error
    E9001,
    /// Too many errors
    E9002,

    // Warnings (W1xxx)
    /// No tagged declarations found
    W1001,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E4001,
        ErrorCode::E4002,
        ErrorCode::E4003,
        ErrorCode::E9001,
        ErrorCode::E9002,
        ErrorCode::W1001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            // Metadata
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            // Structural
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            // Emission
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            // Extraction
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E4003 => "E4003",
            // Internal
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
            // Warnings
            ErrorCode::W1001 => "W1001",
        }
    }

    /// Check if this is a metadata error (E1xxx range).
    pub fn is_metadata_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
        )
    }

    /// Check if this is a structural error (E2xxx range).
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001
                | ErrorCode::E2002
                | ErrorCode::E2003
                | ErrorCode::E2004
                | ErrorCode::E2005
                | ErrorCode::E2006
        )
    }

    /// Check if this is an emission error (E3xxx range).
    pub fn is_emission_error(&self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::E3002 | ErrorCode::E3003)
    }

    /// Check if this is a source extraction error (E4xxx range).
    pub fn is_extraction_error(&self) -> bool {
        matches!(self, ErrorCode::E4001 | ErrorCode::E4002 | ErrorCode::E4003)
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W1001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"` or `"w1001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
