//! The packwiz document models.
//!
//! Every document type of the format is declared here once, on a single
//! [`CatalogBuilder`]. Example documents are received as already-loaded
//! text; nothing in this module touches the file system.

mod index;
mod legacy_mod;
mod metafile;
mod pack;
pub mod shared;

use std::fmt;

use schemars::Schema;

use crate::{
    Result,
    schema::{Catalog, CatalogBuilder, ModelId},
};

pub use index::{INDEX, INDEX_FILE};
pub use legacy_mod::MOD;
pub use metafile::{METAFILE, UPDATE};
pub use pack::{COMPONENT_VERSIONS, INDEX_REF, PACK};

/// JSON Schema dialect declared by every document.
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema";

/// Pack format version written by current tools.
pub const FORMAT_VERSION: &str = "1.1.0";

const SCHEMA_BASE_URL: &str = "https://packwiz.infra.link/meta/format/v1/";

/// Text of the example documents embedded in the schemas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleDocuments {
    /// `pack.toml`
    pub pack: String,
    /// `index.toml`
    pub index: String,
    /// A metadata file (`*.pw.toml`).
    pub metafile: String,
}

/// Inputs that vary between generated schema sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefsOptions {
    /// Strict schemas pin `pack-format` to the current version.
    pub strict: bool,
    /// Pack format version for strict mode and descriptions.
    pub format_version: String,
    /// Example documents.
    pub examples: ExampleDocuments,
}

impl Default for DefsOptions {
    fn default() -> Self {
        Self {
            strict: false,
            format_version: FORMAT_VERSION.to_string(),
            examples: ExampleDocuments::default(),
        }
    }
}

impl DefsOptions {
    fn schema_id(&self, file_name: &str) -> String {
        let mode = if self.strict { "strict/" } else { "" };
        format!("{SCHEMA_BASE_URL}{mode}{file_name}")
    }
}

/// The document types of the packwiz format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// `pack.toml`, the entry point of a pack.
    Pack,
    /// `index.toml`, listing every file of the pack.
    Index,
    /// `*.pw.toml`, referencing an externally hosted file.
    Metafile,
    /// `*.pw.toml` under its older, mod-centric description.
    Mod,
}

impl DocumentKind {
    /// Documents written by default.
    pub const CURRENT: [DocumentKind; 3] =
        [DocumentKind::Pack, DocumentKind::Index, DocumentKind::Metafile];

    /// Every document, the legacy one included.
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Pack,
        DocumentKind::Index,
        DocumentKind::Metafile,
        DocumentKind::Mod,
    ];

    /// Root model of this document.
    pub fn model(&self) -> ModelId {
        match self {
            DocumentKind::Pack => PACK,
            DocumentKind::Index => INDEX,
            DocumentKind::Metafile => METAFILE,
            DocumentKind::Mod => MOD,
        }
    }

    /// Short name used for output files.
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentKind::Pack => "pack",
            DocumentKind::Index => "index",
            DocumentKind::Metafile => "meta",
            DocumentKind::Mod => "mod",
        }
    }

    /// File name of the generated schema.
    pub fn schema_file(&self) -> String {
        format!("{}.json", self.slug())
    }

    /// File name of the document the schema describes.
    pub fn document_name(&self) -> &'static str {
        match self {
            DocumentKind::Pack => "pack.toml",
            DocumentKind::Index => "index.toml",
            DocumentKind::Metafile => "meta.pw.toml",
            DocumentKind::Mod => "mod.pw.toml",
        }
    }

    /// Whether the document is only kept for older tooling.
    pub fn is_legacy(&self) -> bool {
        matches!(self, DocumentKind::Mod)
    }

    /// Looks a document up by its slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.document_name())
    }
}

/// Declares every packwiz model.
pub fn catalog(options: &DefsOptions) -> Catalog {
    let mut builder = CatalogBuilder::new();
    shared::declare(&mut builder, options);
    pack::declare(&mut builder, options);
    index::declare(&mut builder, options);
    metafile::declare(&mut builder, options);
    legacy_mod::declare(&mut builder, options);
    builder.build()
}

/// Synthesizes the schema of one document.
///
/// # Errors
///
/// Propagates synthesis errors; with the declarations in this module there
/// are none.
pub fn document_schema(kind: DocumentKind, options: &DefsOptions) -> Result<Schema> {
    catalog(options).schema_for(kind.model())
}

#[cfg(test)]
mod tests;
