//! File-system side of the generator.
//!
//! Loads the example pack, synthesizes the document schemas and writes
//! them (and their Markdown reference pages) to disk. The schema and
//! render layers never do I/O themselves; this module feeds them loaded
//! text and persists what they return.

mod examples;
mod output;


use std::{
    fs,
    path::{Path, PathBuf},
};

use schemars::{Schema, schema_for};
use tracing::{info, instrument};

use crate::{
    Result, SpecError,
    config::GeneratorConfig,
    defs::{self, DefsOptions, DocumentKind},
    render::{MarkdownRenderer, RenderOptions},
};

pub use examples::{INDEX_EXAMPLE, METAFILE_EXAMPLE, PACK_EXAMPLE, load_examples};
pub use output::to_tab_json;

/// Generates schema files and reference docs for the packwiz documents.
pub struct Generator {
    config: GeneratorConfig,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator {
    /// Creates a generator for the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Documents covered by this configuration.
    pub fn document_kinds(&self) -> Vec<DocumentKind> {
        if self.config.include_legacy {
            DocumentKind::ALL.to_vec()
        } else {
            DocumentKind::CURRENT.to_vec()
        }
    }

    /// Model inputs, with the example pack loaded from disk.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::InvalidExample` if an example document is missing
    /// or is not valid TOML.
    pub fn defs_options(&self) -> Result<DefsOptions> {
        Ok(DefsOptions {
            strict: self.config.strict,
            format_version: self.config.format_version.clone(),
            examples: load_examples(&self.config.example_pack)?,
        })
    }

    /// Synthesizes the schema of every covered document, in output order.
    ///
    /// # Errors
    ///
    /// Returns example loading and synthesis errors.
    pub fn schemas(&self) -> Result<Vec<(DocumentKind, Schema)>> {
        let catalog = defs::catalog(&self.defs_options()?);
        self.document_kinds()
            .into_iter()
            .map(|kind| Ok((kind, catalog.schema_for(kind.model())?)))
            .collect()
    }

    /// Writes one JSON schema per document, replacing the previous content
    /// of the output directory.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::IoError` if the directory cannot be recreated or
    /// a file cannot be written, plus any error from [`Generator::schemas`].
    #[instrument(skip(self), fields(dir = %self.config.schema_output_dir().display()))]
    pub fn write_schemas(&self) -> Result<Vec<PathBuf>> {
        let schemas = self.schemas()?;
        let dir = self.config.schema_output_dir();
        output::recreate_dir(&dir)?;

        let mut written = Vec::with_capacity(schemas.len());
        for (kind, schema) in &schemas {
            let path = dir.join(kind.schema_file());
            output::write_file(&path, &to_tab_json(schema)?)?;
            info!(document = %kind, path = %path.display(), "wrote schema");
            written.push(path);
        }

        Ok(written)
    }

    /// Writes one Markdown reference page per document.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::AmbiguousType` if a schema cannot be rendered and
    /// `SpecError::IoError` if a page cannot be written.
    #[instrument(skip(self), fields(dir = %self.config.docs_dir.display()))]
    pub fn write_docs(&self) -> Result<Vec<PathBuf>> {
        let renderer = MarkdownRenderer::new(self.config.render_options());
        output::ensure_dir(&self.config.docs_dir)?;

        let mut written = Vec::new();
        for (kind, schema) in self.schemas()? {
            let mut page = renderer.render(&schema)?;
            page.push('\n');

            let path = self.config.docs_dir.join(format!("{}.md", kind.slug()));
            output::write_file(&path, &page)?;
            info!(document = %kind, path = %path.display(), "wrote reference page");
            written.push(path);
        }

        Ok(written)
    }
}

/// Renders any JSON schema file to Markdown.
///
/// # Errors
///
/// Returns `SpecError::IoError` if the file cannot be read,
/// `SpecError::Json` if it is not a JSON schema and
/// `SpecError::AmbiguousType` if a node cannot be rendered.
pub fn render_schema_file(path: &Path, options: RenderOptions) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| SpecError::io(e, path))?;
    let schema: Schema = serde_json::from_str(&content)?;
    MarkdownRenderer::new(options).render(&schema)
}

/// Reference page for the generator's own configuration file.
///
/// # Errors
///
/// Returns `SpecError::AmbiguousType` if the configuration schema contains
/// a node the renderer cannot document.
pub fn config_reference(options: RenderOptions) -> Result<String> {
    MarkdownRenderer::new(options).render(&schema_for!(GeneratorConfig))
}
