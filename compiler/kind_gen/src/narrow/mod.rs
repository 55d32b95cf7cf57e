//! Downcast Accessor Generator.
//!
//! One extension trait per higher-kinded declaration, implemented for its
//! full kind alias, with a single `unsafe fn narrow`. The accessor performs
//! no check of its own: it forwards to `Kind::narrow_unchecked`, and the
//! caller carries the obligation that the value really came from the
//! declaration. Debug builds of the runtime still assert the erased type.

use std::fmt::Write;

use kind_ir::{AnnotatedDeclaration, DeclarationKind};

use crate::higher_kind::WitnessNames;
use crate::render::{applied, implementor_param, param_decls, param_decls_static, param_names};

/// The trait block and the impl block, in that order.
///
/// A class narrows to itself. An interface narrows to the implementing type
/// the value was wrapped from, chosen by the caller.
pub(crate) fn accessor(decl: &AnnotatedDeclaration, names: &WitnessNames) -> [String; 2] {
    let params = &decl.type_parameters;
    let simple = decl.simple_name();
    let args = param_names(params);
    let (method_generics, target) = match decl.kind {
        DeclarationKind::Class => (String::new(), applied(decl)),
        DeclarationKind::Interface => {
            let implementor = implementor_param(params);
            (
                format!("<{implementor}: {} + 'static>", applied(decl)),
                implementor,
            )
        }
    };
    let signature = format!("unsafe fn narrow{method_generics}(self) -> {target}");

    let mut def = String::new();
    let _ = writeln!(
        def,
        "/// Narrowing accessor from [`{}`] back to [`{simple}`].",
        names.kind_alias
    );
    let _ = writeln!(def, "#[allow(unsafe_code)]");
    let _ = writeln!(def, "pub trait {}{} {{", names.narrow_trait, param_decls(params));
    let _ = writeln!(def, "    /// Recover the [`{simple}`] this value was wrapped from.");
    let _ = writeln!(def, "    ///");
    let _ = writeln!(def, "    /// # Safety");
    let _ = writeln!(def, "    ///");
    let _ = writeln!(
        def,
        "    /// The value must have been wrapped from a `{target}`. Nothing checks"
    );
    let _ = writeln!(def, "    /// this in release builds.");
    let _ = writeln!(def, "    {signature};");
    let _ = write!(def, "}}");

    let mut imp = String::new();
    let _ = writeln!(imp, "#[allow(unsafe_code)]");
    let _ = writeln!(
        imp,
        "impl{} {}{args} for {}{args} {{",
        param_decls_static(params),
        names.narrow_trait,
        names.kind_alias
    );
    let _ = writeln!(imp, "    {signature} {{");
    let _ = writeln!(imp, "        // SAFETY: forwarded to the caller.");
    let _ = writeln!(imp, "        unsafe {{ self.narrow_unchecked::<{target}>() }}");
    let _ = writeln!(imp, "    }}");
    let _ = write!(imp, "}}");

    [def, imp]
}
