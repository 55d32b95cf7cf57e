//! Generated file layout and the Rust syntax fragments shared by the
//! generators.
//!
//! A generated file is a comment header followed by blocks separated by one
//! blank line, ending with a single newline. Rendering is a pure function
//! of the declaration and the configuration, so unchanged input always
//! yields byte-identical output.

use std::fmt::Write;
use std::path::PathBuf;

use kind_ir::{AnnotatedDeclaration, QualifiedName, Tag, TypeParameter};

/// One generated source file, before it touches the filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    tag: Tag,
    declaration: QualifiedName,
    package: QualifiedName,
    blocks: Vec<String>,
}

impl GeneratedFile {
    pub fn new(tag: Tag, decl: &AnnotatedDeclaration) -> Self {
        GeneratedFile {
            tag,
            declaration: decl.name.clone(),
            package: decl.package.clone(),
            blocks: Vec::new(),
        }
    }

    pub fn push_block(&mut self, block: String) {
        self.blocks.push(block);
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn declaration(&self) -> &QualifiedName {
        &self.declaration
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Path relative to the output root: `<tag>/<tag>.<fq.name>.rs`.
    pub fn relative_path(&self) -> PathBuf {
        relative_path(self.tag, &self.declaration)
    }

    /// Full file contents.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "// @generated by kindc. Do not edit.");
        let _ = writeln!(out, "// source: {}", self.declaration);
        let _ = writeln!(out, "// module: {}", self.package);
        let _ = writeln!(out, "// tag: {}", self.tag.name());
        for block in &self.blocks {
            out.push('\n');
            out.push_str(block.trim_end_matches('\n'));
            out.push('\n');
        }
        out
    }
}

/// `<tag>.<fq.name>.rs`.
///
/// Rust identifiers never contain `.`, so distinct qualified names always
/// give distinct file names.
pub fn file_name(tag: Tag, name: &QualifiedName) -> String {
    format!("{}.{}.rs", tag.name(), name.to_file_stem())
}

/// `<tag>/<tag>.<fq.name>.rs`.
pub fn relative_path(tag: Tag, name: &QualifiedName) -> PathBuf {
    PathBuf::from(tag.name()).join(file_name(tag, name))
}

/// `<A, B>`, or nothing for zero parameters.
pub(crate) fn param_names(params: &[TypeParameter]) -> String {
    angle(params.iter().map(|p| p.name.clone()))
}

/// `<A: Clone, B>`: parameters with their recorded bounds.
pub(crate) fn param_decls(params: &[TypeParameter]) -> String {
    angle(params.iter().map(|p| match &p.bounds {
        Some(bounds) => format!("{}: {bounds}", p.name),
        None => p.name.clone(),
    }))
}

/// `<A: Clone + 'static, B: 'static>`.
pub(crate) fn param_decls_static(params: &[TypeParameter]) -> String {
    angle(params.iter().map(|p| match &p.bounds {
        Some(bounds) => format!("{}: {bounds} + 'static", p.name),
        None => format!("{}: 'static", p.name),
    }))
}

/// Tuple type of the parameters in order: `()`, `(T,)`, `(A, B)`.
pub(crate) fn param_tuple(params: &[TypeParameter]) -> String {
    match params {
        [] => "()".to_owned(),
        [only] => format!("({},)", only.name),
        _ => format!("({})", join_names(params)),
    }
}

/// `A, B`.
pub(crate) fn join_names(params: &[TypeParameter]) -> String {
    params
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The declaration applied to its own parameters: `Pair<A, B>`.
pub(crate) fn applied(decl: &AnnotatedDeclaration) -> String {
    format!(
        "{}{}",
        decl.simple_name(),
        param_names(&decl.type_parameters)
    )
}

/// Name for the implementing type of an interface.
///
/// Interfaces are never turned into trait objects: typeclasses over the
/// encoding have generic methods. Generated items take the implementor as
/// an extra type parameter instead, named `I` unless a declared parameter
/// already uses it.
pub(crate) fn implementor_param(params: &[TypeParameter]) -> String {
    let taken = |name: &str| params.iter().any(|p| p.name == name);
    if !taken("I") {
        return "I".to_owned();
    }
    (0usize..)
        .map(|n| format!("I{n}"))
        .find(|name| !taken(name))
        .unwrap_or_default()
}

/// `Kind`, `Kind2`, ... for the given number of arguments.
pub(crate) fn kind_alias_name(runtime: &str, arity: usize) -> String {
    if arity == 1 {
        format!("{runtime}::Kind")
    } else {
        format!("{runtime}::Kind{arity}")
    }
}

fn angle(items: impl Iterator<Item = String>) -> String {
    let items: Vec<String> = items.collect();
    if items.is_empty() {
        String::new()
    } else {
        format!("<{}>", items.join(", "))
    }
}
