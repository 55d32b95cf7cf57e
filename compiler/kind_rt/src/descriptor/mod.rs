//! Instance descriptors: the keys of the instance registry.

use std::fmt;

use crate::{TypeArgs, TypeToken};

/// A declaration identity plus the ordered tokens of its type arguments.
///
/// Equality is structural: two descriptors are equal iff their identities
/// and their full token sequences are equal, no matter which constructor
/// built them. Reordering the tokens yields a different descriptor.
///
/// The identity is the declaration's fully-qualified path
/// (`demo::algebra::Semigroup`). Paths are the same in every crate that
/// sees the declaration, so descriptors built in independently compiled
/// crates agree.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct InstanceDescriptor {
    identity: String,
    arguments: Vec<TypeToken>,
}

impl InstanceDescriptor {
    /// Build a descriptor from an explicit token list.
    pub fn new(identity: impl Into<String>, arguments: Vec<TypeToken>) -> Self {
        InstanceDescriptor {
            identity: identity.into(),
            arguments,
        }
    }

    /// Build a descriptor from statically known type arguments.
    ///
    /// `reified::<(A, B)>("p::Tc")` equals
    /// `new("p::Tc", vec![TypeToken::of::<A>(), TypeToken::of::<B>()])`.
    pub fn reified<Args: TypeArgs>(identity: impl Into<String>) -> Self {
        Self::new(identity, Args::tokens())
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn arguments(&self) -> &[TypeToken] {
        &self.arguments
    }

    /// Number of type arguments.
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

impl fmt::Display for InstanceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identity)?;
        if self.arguments.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(">")
    }
}

#[cfg(test)]
mod tests;
