//! Instance Lookup Generator.

use std::fmt::Write;

use kind_ir::ident::{escape_keyword, to_lower_snake};
use kind_ir::{AnnotatedDeclaration, DeclarationKind, Tag};

use crate::render::{applied, implementor_param, param_decls_static, param_tuple, GeneratedFile};
use crate::{validate, GeneratorConfig, StructuralError};

/// Name of the lookup function: lower snake case, keywords escaped.
///
/// `Semigroup` gives `semigroup`, `MonadError` gives `monad_error`.
pub fn lookup_fn_name(simple_name: &str) -> String {
    escape_keyword(&to_lower_snake(simple_name))
}

/// Name of the registration function: `register_semigroup`.
pub fn register_fn_name(simple_name: &str) -> String {
    format!("register_{}", to_lower_snake(simple_name))
}

/// Generate every declaration of a batch, in order.
#[tracing::instrument(level = "debug", skip_all, fields(count = decls.len()))]
pub fn generate_batch(
    decls: &[AnnotatedDeclaration],
    config: &GeneratorConfig,
) -> Vec<Result<GeneratedFile, StructuralError>> {
    decls.iter().map(|decl| generate(decl, config)).collect()
}

/// Generate the lookup and registration functions for one declaration.
///
/// Both build the same descriptor: the declaration's `::` path plus one
/// token per type parameter, in the declaration's own parameter order.
pub fn generate(
    decl: &AnnotatedDeclaration,
    config: &GeneratorConfig,
) -> Result<GeneratedFile, StructuralError> {
    validate::arity(decl, 0)?;

    let runtime = config.runtime_path.as_str();
    let simple = decl.simple_name();
    let shape = InstanceShape::of(decl);
    let instance_ty = format!("{runtime}::Instance<{}>", shape.stored);
    let descriptor = format!(
        "{runtime}::InstanceDescriptor::reified::<{}>({:?})",
        param_tuple(&decl.type_parameters),
        decl.name.to_path()
    );

    let mut lookup = String::new();
    let _ = writeln!(
        lookup,
        "/// Resolve the registered [`{simple}`] instance for the given type arguments."
    );
    if let Some(note) = &shape.implementor_doc {
        let _ = writeln!(lookup, "///");
        let _ = writeln!(lookup, "{note}");
    }
    let _ = write!(
        lookup,
        "pub fn {}{}() -> ::core::result::Result<{instance_ty}, {runtime}::ResolveError>",
        lookup_fn_name(simple),
        shape.generics
    );
    let _ = writeln!(lookup, "{}", shape.where_clause);
    let _ = writeln!(lookup, "    {runtime}::instance({descriptor})");
    let _ = write!(lookup, "}}");

    let mut register = String::new();
    let _ = writeln!(
        register,
        "/// Register a [`{simple}`] instance for the given type arguments."
    );
    let _ = writeln!(register, "///");
    let _ = writeln!(
        register,
        "/// The first registration for a set of type arguments wins; returns"
    );
    let _ = writeln!(register, "/// `false` if an instance was already registered.");
    let _ = write!(
        register,
        "pub fn {}{}(instance: {instance_ty}) -> bool",
        register_fn_name(simple),
        shape.generics
    );
    let _ = writeln!(register, "{}", shape.where_clause);
    let _ = writeln!(
        register,
        "    {runtime}::register_instance({descriptor}, instance)"
    );
    let _ = write!(register, "}}");

    let mut file = GeneratedFile::new(Tag::Typeclass, decl);
    file.push_block(lookup);
    file.push_block(register);
    tracing::debug!(declaration = %decl.name, arity = decl.arity(), "generated instance lookup");
    Ok(file)
}

/// How instances of one declaration are typed in the generated signatures.
struct InstanceShape {
    /// Generic parameter list of both functions.
    generics: String,
    /// Type inside `Instance<..>`.
    stored: String,
    /// Where clause plus the opening brace of the body.
    where_clause: String,
    implementor_doc: Option<String>,
}

impl InstanceShape {
    /// A class instance is the class itself and must be `Send + Sync` to
    /// live in the registry.
    ///
    /// An interface instance is stored as its implementing type, a generic
    /// parameter of the functions. Trait objects are not used: a typeclass
    /// over the kind encoding has generic methods and is not dyn-compatible.
    fn of(decl: &AnnotatedDeclaration) -> Self {
        let params = &decl.type_parameters;
        let declared = param_decls_static(params);
        match decl.kind {
            DeclarationKind::Class => InstanceShape {
                generics: declared,
                stored: applied(decl),
                where_clause: if decl.arity() > 0 {
                    format!("\nwhere\n    {}: Send + Sync,\n{{", applied(decl))
                } else {
                    " {".to_owned()
                },
                implementor_doc: None,
            },
            DeclarationKind::Interface => {
                let implementor = implementor_param(params);
                let generics = match declared.strip_suffix('>') {
                    Some(open) => format!("{open}, {implementor}>"),
                    None => format!("<{implementor}>"),
                };
                InstanceShape {
                    generics,
                    where_clause: format!(
                        "\nwhere\n    {implementor}: {} + Send + Sync + 'static,\n{{",
                        applied(decl)
                    ),
                    implementor_doc: Some(format!(
                        "/// `{implementor}` is the type the instance was registered as."
                    )),
                    stored: implementor,
                }
            }
        }
    }
}
