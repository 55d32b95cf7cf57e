//! Source tree traversal.
//!
//! Starts at the crate root (`lib.rs`, else `main.rs`) and follows module
//! declarations the way rustc resolves them:
//!
//! - `mod foo;` in `lib.rs`, `main.rs` or `mod.rs` looks next to that file
//! - `mod foo;` in `bar.rs` looks in `bar/`
//! - either way `foo.rs` is tried before `foo/mod.rs`
//!
//! Inline `mod foo { ... }` blocks extend the module path without a file.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use syn::ext::IdentExt;
use syn::{Item, ItemMod};

use kind_ir::{DeclarationMetadata, QualifiedName};

use crate::item::{tagged_declaration, Scope};
use crate::ExtractError;

/// Accumulates declarations and errors over one crate.
pub(crate) struct Walker {
    pub declarations: Vec<DeclarationMetadata>,
    pub errors: Vec<ExtractError>,
    visited: FxHashSet<PathBuf>,
}

impl Walker {
    pub(crate) fn new() -> Self {
        Walker {
            declarations: Vec::new(),
            errors: Vec::new(),
            visited: FxHashSet::default(),
        }
    }

    /// Walk a crate rooted in `src_dir`.
    pub(crate) fn walk_crate(&mut self, src_dir: &Path, crate_name: &str) {
        let Some(root) = ["lib.rs", "main.rs"]
            .iter()
            .map(|name| src_dir.join(name))
            .find(|path| path.is_file())
        else {
            self.errors.push(ExtractError::NoCrateRoot {
                dir: src_dir.to_path_buf(),
            });
            return;
        };
        let package = QualifiedName::from_segments([crate_name]);
        self.walk_file(&root, &package, src_dir.to_path_buf());
    }

    /// Parse one module file. `child_dir` is where its `mod foo;` items live.
    fn walk_file(&mut self, path: &Path, module: &QualifiedName, child_dir: PathBuf) {
        if !self.visited.insert(path.to_path_buf()) {
            return;
        }
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(source) => {
                self.errors.push(ExtractError::Read {
                    path: path.to_path_buf(),
                    source,
                });
                return;
            }
        };
        let file_name = path.display().to_string();
        let parsed = match syn::parse_file(&source) {
            Ok(parsed) => parsed,
            Err(e) => {
                let scope = Scope {
                    package: module,
                    file: &file_name,
                };
                self.errors.push(ExtractError::Parse {
                    location: scope.location(e.span()),
                    message: e.to_string(),
                });
                return;
            }
        };
        tracing::trace!(file = %file_name, module = %module, "walking module file");
        self.walk_items(&parsed.items, module, &file_name, &child_dir);
    }

    fn walk_items(&mut self, items: &[Item], module: &QualifiedName, file: &str, child_dir: &Path) {
        let scope = Scope {
            package: module,
            file,
        };
        for item in items {
            match tagged_declaration(item, &scope) {
                Some(Ok(decl)) => self.declarations.push(decl),
                Some(Err(e)) => self.errors.push(e),
                None => {}
            }
            if let Item::Mod(m) = item {
                self.walk_mod(m, module, file, child_dir);
            }
        }
    }

    fn walk_mod(&mut self, m: &ItemMod, module: &QualifiedName, file: &str, child_dir: &Path) {
        let name = m.ident.unraw().to_string();
        let inner = module.child(name.as_str());
        match &m.content {
            Some((_, items)) => {
                self.walk_items(items, &inner, file, &child_dir.join(&name));
            }
            None => {
                let flat = child_dir.join(format!("{name}.rs"));
                let nested = child_dir.join(&name).join("mod.rs");
                let path = if !flat.is_file() && nested.is_file() {
                    nested
                } else {
                    flat
                };
                self.walk_file(&path, &inner, child_dir.join(&name));
            }
        }
    }
}
