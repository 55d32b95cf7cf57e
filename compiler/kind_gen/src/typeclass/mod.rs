//! Typeclass Metadata Scanner and Instance Lookup Generator.
//!
//! Generation is two-pass. While rounds are being processed every
//! declaration tagged `#[typeclass]` is recorded by a [`TypeclassScanner`];
//! nothing is emitted. Once the last round is in, the whole recorded batch
//! goes to [`lookup::generate_batch`], when the type parameter metadata of
//! every participant is known.

pub mod lookup;

use rustc_hash::{FxHashMap, FxHashSet};

use kind_ir::{AnnotatedDeclaration, DeclarationMetadata, QualifiedName, Tag};

use crate::{validate, GeneratedFile, GeneratorConfig, StructuralError};

/// Accumulates typeclass declarations for one generation invocation.
///
/// A scanner is created empty at the start of an invocation and consumed
/// by [`TypeclassScanner::finish`], so nothing carries over between runs.
#[derive(Debug, Default)]
pub struct TypeclassScanner {
    recorded: Vec<AnnotatedDeclaration>,
    seen: FxHashSet<QualifiedName>,
    /// Lookup function name per package, mapped to the declaration that took it.
    lookups: FxHashMap<(QualifiedName, String), QualifiedName>,
}

impl TypeclassScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tagged declaration.
    ///
    /// The element must be a class or interface with valid names. A
    /// declaration already recorded, or one whose lookup function name is
    /// already taken in its package, is rejected and the first kept.
    pub fn record(&mut self, meta: &DeclarationMetadata) -> Result<(), StructuralError> {
        let decl = validate::annotated(meta, Tag::Typeclass)?;
        if self.seen.contains(&decl.name) {
            return Err(StructuralError::Duplicate {
                declaration: decl.name.to_path(),
                tag: Tag::Typeclass,
            });
        }
        let function = lookup::lookup_fn_name(decl.simple_name());
        let key = (decl.package.clone(), function);
        if let Some(first) = self.lookups.get(&key) {
            return Err(StructuralError::LookupNameClash {
                declaration: decl.name.to_path(),
                first: first.to_path(),
                function: key.1,
            });
        }
        self.lookups.insert(key, decl.name.clone());
        self.seen.insert(decl.name.clone());
        tracing::trace!(declaration = %decl.name, "recorded typeclass");
        self.recorded.push(decl);
        Ok(())
    }

    /// Declarations recorded so far, in visiting order.
    pub fn recorded(&self) -> &[AnnotatedDeclaration] {
        &self.recorded
    }

    pub fn len(&self) -> usize {
        self.recorded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded.is_empty()
    }

    /// Second pass: generate every recorded declaration in one batch.
    pub fn finish(self, config: &GeneratorConfig) -> Vec<ScannedTypeclass> {
        let results = lookup::generate_batch(&self.recorded, config);
        self.recorded
            .into_iter()
            .zip(results)
            .map(|(declaration, result)| ScannedTypeclass {
                declaration,
                result,
            })
            .collect()
    }
}

/// Outcome of the second pass for one declaration.
#[derive(Debug)]
pub struct ScannedTypeclass {
    pub declaration: AnnotatedDeclaration,
    pub result: Result<GeneratedFile, StructuralError>,
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
