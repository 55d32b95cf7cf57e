//! Proof that an error diagnostic was emitted.

use std::fmt;

/// Zero-sized witness that at least one error was reported.
///
/// Only the diagnostic queue can mint one, so holding an `ErrorGuaranteed`
/// means the user has been (or will be) told what went wrong.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Mint a guarantee from an error count that was already reported.
    ///
    /// Returns `None` when no errors were counted.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error(s) emitted")
    }
}
