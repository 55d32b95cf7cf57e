//! Declaration Metadata Reader.

use crate::{DeclarationMetadata, ElementKind, QualifiedName, SourceLocation, TypeParameter};

use super::{
    MetadataArchive, MetadataError, RawDeclaration, RawLocation, RawTypeParameter, StringIndex,
    ARCHIVE_MAGIC, ARCHIVE_VERSION,
};

/// Everything recovered from one archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveContents {
    pub crate_name: String,
    /// In archive order.
    pub declarations: Vec<DeclarationMetadata>,
}

/// Decode and validate an archive in one step.
pub fn read_archive(bytes: &[u8]) -> Result<ArchiveContents, MetadataError> {
    let archive: MetadataArchive =
        bincode::deserialize(bytes).map_err(|e| MetadataError::Decode(e.to_string()))?;
    let reader = MetadataReader::new(&archive)?;
    Ok(ArchiveContents {
        crate_name: archive.crate_name.clone(),
        declarations: reader.declarations()?,
    })
}

/// Resolves raw records against an archive's string table.
pub struct MetadataReader<'a> {
    archive: &'a MetadataArchive,
}

impl<'a> MetadataReader<'a> {
    /// Check the header and wrap the archive.
    pub fn new(archive: &'a MetadataArchive) -> Result<Self, MetadataError> {
        if archive.magic != ARCHIVE_MAGIC {
            return Err(MetadataError::BadMagic {
                found: archive.magic,
            });
        }
        if archive.version != ARCHIVE_VERSION {
            return Err(MetadataError::UnsupportedVersion {
                found: archive.version,
            });
        }
        Ok(MetadataReader { archive })
    }

    /// Read every declaration, failing on the first malformed record.
    #[tracing::instrument(level = "debug", skip_all, fields(crate_name = %self.archive.crate_name))]
    pub fn declarations(&self) -> Result<Vec<DeclarationMetadata>, MetadataError> {
        let decls = self
            .archive
            .declarations
            .iter()
            .map(|raw| self.declaration(raw))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = decls.len(), "read declarations");
        Ok(decls)
    }

    /// Read a single record.
    pub fn declaration(&self, raw: &RawDeclaration) -> Result<DeclarationMetadata, MetadataError> {
        let name_text = self.string(raw.name)?;
        let name = QualifiedName::parse(name_text)
            .filter(|n| !n.is_root())
            .ok_or_else(|| MetadataError::InvalidName {
                what: "declaration name",
                text: name_text.to_owned(),
            })?;

        let package_text = self.string(raw.package)?;
        let package =
            QualifiedName::parse(package_text).ok_or_else(|| MetadataError::InvalidName {
                what: "package name",
                text: package_text.to_owned(),
            })?;

        let element =
            ElementKind::from_code(raw.element).ok_or_else(|| MetadataError::UnknownElement {
                code: raw.element,
                declaration: name.to_path(),
            })?;

        let tags = raw
            .tags
            .iter()
            .map(|&idx| self.string(idx).map(str::to_owned))
            .collect::<Result<Vec<_>, _>>()?;

        let type_parameters = self.type_parameters(&name, &raw.type_parameters)?;

        let location = raw
            .location
            .as_ref()
            .map(|loc| self.location(loc))
            .transpose()?;

        Ok(DeclarationMetadata {
            package,
            name,
            element,
            tags,
            type_parameters,
            location,
        })
    }

    /// Order parameters by their declared index.
    ///
    /// The indices must be exactly `0..n`; anything else means the record
    /// cannot say which parameter comes first. Names must be distinct.
    fn type_parameters(
        &self,
        owner: &QualifiedName,
        raw: &[RawTypeParameter],
    ) -> Result<Vec<TypeParameter>, MetadataError> {
        let mut slots: Vec<Option<TypeParameter>> = vec![None; raw.len()];
        let inconsistent = || MetadataError::InconsistentTypeParameters {
            declaration: owner.to_path(),
            indices: raw.iter().map(|p| p.declared_index).collect(),
        };

        for param in raw {
            let name = self.string(param.name)?;
            if name.is_empty() {
                return Err(MetadataError::InvalidName {
                    what: "type parameter name",
                    text: String::new(),
                });
            }
            if slots.iter().flatten().any(|p| p.name == name) {
                return Err(MetadataError::InvalidName {
                    what: "duplicate type parameter name",
                    text: name.to_owned(),
                });
            }
            let bounds = param
                .bounds
                .map(|idx| self.string(idx).map(str::to_owned))
                .transpose()?
                .filter(|b| !b.trim().is_empty());

            let slot = usize::try_from(param.declared_index)
                .ok()
                .and_then(|i| slots.get_mut(i))
                .ok_or_else(inconsistent)?;
            if slot.is_some() {
                return Err(inconsistent());
            }
            *slot = Some(TypeParameter {
                name: name.to_owned(),
                bounds,
            });
        }

        // Every slot is filled: n distinct indices in 0..n.
        Ok(slots.into_iter().flatten().collect())
    }

    fn location(&self, raw: &RawLocation) -> Result<SourceLocation, MetadataError> {
        Ok(SourceLocation {
            file: self.string(raw.file)?.to_owned(),
            line: raw.line,
            column: raw.column,
        })
    }

    fn string(&self, index: StringIndex) -> Result<&'a str, MetadataError> {
        let archive = self.archive;
        usize::try_from(index)
            .ok()
            .and_then(|i| archive.strings.get(i))
            .map(String::as_str)
            .ok_or(MetadataError::DanglingString {
                index,
                len: archive.strings.len(),
            })
    }
}
