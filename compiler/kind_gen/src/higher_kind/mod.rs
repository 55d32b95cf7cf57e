//! Witness & Kind Alias Generator.
//!
//! For a declaration `Pair<A, B>` tagged `#[higher_kind]` this produces:
//! - the witness marker `PairHK`, an uninhabited enum
//! - the full alias `PairKind<A, B> = Kind2<PairHK, A, B>`
//! - one partial alias per proper prefix: `PairPartialKind1<A> = Kind<PairHK, A>`
//! - the narrowing accessor, an `unsafe` extension trait on the full alias
//!
//! Because `KindN` nests (`Kind2<F, A, B> = Kind<Kind<F, A>, B>`), the
//! partial alias fixing the first `k` parameters is exactly the witness of
//! parameter `k + 1`. Each prefix length gives a distinct type.

use std::fmt::Write;

use kind_ir::{AnnotatedDeclaration, DeclarationMetadata, Tag};

use crate::render::{join_names, kind_alias_name, param_names, GeneratedFile};
use crate::{narrow, validate, GeneratorConfig, StructuralError};

/// Names of the items generated for one declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessNames {
    pub marker: String,
    pub kind_alias: String,
    pub narrow_trait: String,
    base: String,
}

impl WitnessNames {
    pub fn new(simple_name: &str) -> Self {
        WitnessNames {
            marker: format!("{simple_name}HK"),
            kind_alias: format!("{simple_name}Kind"),
            narrow_trait: format!("{simple_name}Narrow"),
            base: simple_name.to_owned(),
        }
    }

    /// Partial alias fixing the first `fixed` parameters.
    pub fn partial_alias(&self, fixed: usize) -> String {
        format!("{}PartialKind{fixed}", self.base)
    }
}

/// Validate tagged metadata and generate its file.
pub fn generate_from_metadata(
    meta: &DeclarationMetadata,
    config: &GeneratorConfig,
) -> Result<GeneratedFile, StructuralError> {
    let decl = validate::annotated(meta, Tag::HigherKind)?;
    generate(&decl, config)
}

/// Generate the witness encoding for one declaration.
///
/// Fails for zero type parameters and above the arity ceiling; no partial
/// output is produced in either case.
#[tracing::instrument(level = "debug", skip_all, fields(declaration = %decl.name))]
pub fn generate(
    decl: &AnnotatedDeclaration,
    config: &GeneratorConfig,
) -> Result<GeneratedFile, StructuralError> {
    validate::arity(decl, 1)?;

    let names = WitnessNames::new(decl.simple_name());
    let runtime = config.runtime_path.as_str();
    let mut file = GeneratedFile::new(Tag::HigherKind, decl);

    file.push_block(marker(decl, &names));
    file.push_block(full_alias(decl, &names, runtime));
    for fixed in 1..decl.arity() {
        file.push_block(partial_alias(decl, &names, runtime, fixed));
    }
    for block in narrow::accessor(decl, &names) {
        file.push_block(block);
    }

    tracing::debug!(
        arity = decl.arity(),
        blocks = file.blocks().len(),
        "generated witness encoding"
    );
    Ok(file)
}

fn marker(decl: &AnnotatedDeclaration, names: &WitnessNames) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "/// Witness marker for [`{}`] in the kind encoding.",
        decl.simple_name()
    );
    let _ = write!(out, "pub enum {} {{}}", names.marker);
    out
}

fn full_alias(decl: &AnnotatedDeclaration, names: &WitnessNames, runtime: &str) -> String {
    let params = &decl.type_parameters;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "/// [`{}`] applied to all of its type parameters.",
        decl.simple_name()
    );
    let _ = write!(
        out,
        "pub type {}{} = {}<{}, {}>;",
        names.kind_alias,
        param_names(params),
        kind_alias_name(runtime, params.len()),
        names.marker,
        join_names(params)
    );
    out
}

fn partial_alias(
    decl: &AnnotatedDeclaration,
    names: &WitnessNames,
    runtime: &str,
    fixed: usize,
) -> String {
    let prefix = &decl.type_parameters[..fixed];
    let fixed_list = prefix
        .iter()
        .map(|p| format!("`{}`", p.name))
        .collect::<Vec<_>>()
        .join(", ");
    let mut out = String::new();
    let _ = writeln!(
        out,
        "/// [`{}`] partially applied to {fixed_list}.",
        decl.simple_name()
    );
    let _ = write!(
        out,
        "pub type {}{} = {}<{}, {}>;",
        names.partial_alias(fixed),
        param_names(prefix),
        kind_alias_name(runtime, fixed),
        names.marker,
        join_names(prefix)
    );
    out
}
