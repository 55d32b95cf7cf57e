//! Generated file output.
//!
//! # Output Directory Structure
//!
//! ```text
//! <output_root>/
//! ├── higher_kind/
//! │   └── higher_kind.<fq.name>.rs
//! └── typeclass/
//!     └── typeclass.<fq.name>.rs
//! ```
//!
//! Files are replaced atomically: contents go to a temporary file in the
//! same directory, which is then renamed over the target. A file whose
//! contents would not change is left alone so its timestamp stays put.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use kind_ir::{QualifiedName, Tag};

use crate::render::{relative_path, GeneratedFile};
use crate::EmitError;

/// What [`FileEmitter::write`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Writes generated files under one output root.
#[derive(Clone, Debug)]
pub struct FileEmitter {
    root: PathBuf,
}

impl FileEmitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileEmitter { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a declaration's file for a tag.
    pub fn path_for(&self, tag: Tag, name: &QualifiedName) -> PathBuf {
        self.root.join(relative_path(tag, name))
    }

    /// Write one file, creating its tag directory if needed.
    pub fn write(&self, file: &GeneratedFile) -> Result<(PathBuf, WriteOutcome), EmitError> {
        let path = self.root.join(file.relative_path());
        let contents = file.render();

        if fs::read(&path).is_ok_and(|existing| existing == contents.as_bytes()) {
            tracing::trace!(path = %path.display(), "generated file unchanged");
            return Ok((path, WriteOutcome::Unchanged));
        }

        let dir = self.tag_dir(file.tag());
        fs::create_dir_all(&dir).map_err(|source| EmitError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        write_atomic(&dir, &path, contents.as_bytes()).map_err(|source| EmitError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote generated file");
        Ok((path, WriteOutcome::Written))
    }

    /// Remove a declaration's file if it exists.
    ///
    /// Returns the removed path, or `None` when there was nothing to remove.
    pub fn remove(&self, tag: Tag, name: &QualifiedName) -> Result<Option<PathBuf>, EmitError> {
        let path = self.path_for(tag, name);
        if !path.is_file() {
            return Ok(None);
        }
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed generated file");
                Ok(Some(path))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(EmitError::Remove { path, source }),
        }
    }

    /// Remove every `<tag>.*.rs` file in the tag directory that is not in
    /// `keep`.
    ///
    /// Other files in the directory are never touched. A missing directory
    /// means there is nothing to prune.
    pub fn prune(&self, tag: Tag, keep: &FxHashSet<PathBuf>) -> Result<Vec<PathBuf>, EmitError> {
        let dir = self.tag_dir(tag);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(EmitError::Remove { path: dir, source }),
        };

        let prefix = format!("{}.", tag.name());
        let mut stale: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".rs"))
            })
            .filter(|path| !keep.contains(path))
            .collect();
        stale.sort();

        for path in &stale {
            fs::remove_file(path).map_err(|source| EmitError::Remove {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "pruned stale generated file");
        }
        Ok(stale)
    }

    fn tag_dir(&self, tag: Tag) -> PathBuf {
        self.root.join(tag.name())
    }
}

fn write_atomic(dir: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
