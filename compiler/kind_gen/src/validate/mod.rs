//! Checks shared by both generators.

use kind_ir::ident::is_valid_identifier;
use kind_ir::{AnnotatedDeclaration, DeclarationMetadata, Tag, MAX_ARITY};

use crate::StructuralError;

/// Narrow tagged metadata to a class or interface with usable names.
pub(crate) fn annotated(
    meta: &DeclarationMetadata,
    tag: Tag,
) -> Result<AnnotatedDeclaration, StructuralError> {
    let decl = AnnotatedDeclaration::from_metadata(meta).map_err(|element| {
        StructuralError::NotClassOrInterface {
            declaration: meta.name.to_path(),
            element,
            tag,
        }
    })?;

    if !is_valid_identifier(decl.simple_name()) {
        return Err(StructuralError::InvalidIdentifier {
            declaration: decl.name.to_path(),
            what: "declaration name",
            name: decl.simple_name().to_owned(),
        });
    }
    if let Some(param) = decl
        .type_parameters
        .iter()
        .find(|p| !is_valid_identifier(&p.name))
    {
        return Err(StructuralError::InvalidIdentifier {
            declaration: decl.name.to_path(),
            what: "type parameter",
            name: param.name.clone(),
        });
    }
    Ok(decl)
}

/// Enforce `min..=MAX_ARITY` type parameters.
pub(crate) fn arity(decl: &AnnotatedDeclaration, min: usize) -> Result<(), StructuralError> {
    let arity = decl.arity();
    if arity < min {
        return Err(StructuralError::NoTypeParameters {
            declaration: decl.name.to_path(),
        });
    }
    if arity > MAX_ARITY {
        return Err(StructuralError::ArityAboveCeiling {
            declaration: decl.name.to_path(),
            arity,
            ceiling: MAX_ARITY,
        });
    }
    Ok(())
}
