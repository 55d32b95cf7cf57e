use rustc_hash::FxHashMap;

use crate::DeclarationMetadata;

use super::{
    encode_archive, MetadataArchive, MetadataError, RawDeclaration, RawLocation, RawTypeParameter,
    StringIndex, ARCHIVE_MAGIC, ARCHIVE_VERSION,
};

/// Builds a metadata archive, interning every string once.
pub struct ArchiveBuilder {
    crate_name: String,
    strings: Vec<String>,
    lookup: FxHashMap<String, StringIndex>,
    declarations: Vec<RawDeclaration>,
}

impl ArchiveBuilder {
    pub fn new(crate_name: impl Into<String>) -> Self {
        ArchiveBuilder {
            crate_name: crate_name.into(),
            strings: Vec::new(),
            lookup: FxHashMap::default(),
            declarations: Vec::new(),
        }
    }

    /// Number of declarations added so far.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Append a declaration. Names are stored in internal form.
    pub fn add(&mut self, decl: &DeclarationMetadata) -> &mut Self {
        let name = self.intern(&decl.name.to_internal());
        let package = self.intern(&decl.package.to_internal());
        let tags = decl.tags.iter().map(|t| self.intern(t)).collect();
        let type_parameters = (0u32..)
            .zip(&decl.type_parameters)
            .map(|(declared_index, param)| RawTypeParameter {
                name: self.intern(&param.name),
                declared_index,
                bounds: param.bounds.as_deref().map(|b| self.intern(b)),
            })
            .collect();
        let location = decl.location.as_ref().map(|loc| RawLocation {
            file: self.intern(&loc.file),
            line: loc.line,
            column: loc.column,
        });

        self.declarations.push(RawDeclaration {
            name,
            package,
            element: decl.element.code(),
            tags,
            type_parameters,
            location,
        });
        self
    }

    /// The archive as a value.
    pub fn build(self) -> MetadataArchive {
        MetadataArchive {
            magic: ARCHIVE_MAGIC,
            version: ARCHIVE_VERSION,
            crate_name: self.crate_name,
            strings: self.strings,
            declarations: self.declarations,
        }
    }

    /// The archive as bytes.
    pub fn finish(self) -> Result<Vec<u8>, MetadataError> {
        encode_archive(&self.build())
    }

    fn intern(&mut self, text: &str) -> StringIndex {
        if let Some(&idx) = self.lookup.get(text) {
            return idx;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "string table never approaches u32::MAX entries"
        )]
        let idx = self.strings.len() as StringIndex;
        self.strings.push(text.to_owned());
        self.lookup.insert(text.to_owned(), idx);
        idx
    }
}
