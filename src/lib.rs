//! packwiz-spec - schema and reference documentation generator for the
//! packwiz modpack format.
//!
//! The format's documents (`pack.toml`, `index.toml`, `*.pw.toml`) are
//! declared once as model types with per-field metadata. From those
//! declarations the generator synthesizes a JSON schema per document and
//! renders nested, collapsible Markdown reference pages from any schema.
//!
//! # Quick Start
//!
//! ```rust
//! use packwiz_spec::{
//!     defs::{self, DefsOptions, DocumentKind},
//!     render::render_markdown,
//! };
//!
//! let schema = defs::document_schema(DocumentKind::Index, &DefsOptions::default())?;
//! let markdown = render_markdown(&schema)?;
//! assert!(markdown.contains("hash-format"));
//! # Ok::<(), packwiz_spec::SpecError>(())
//! ```

/// Core error types and result aliases.
pub mod core;

/// Field metadata, model catalog and schema synthesis.
pub mod schema;

/// Markdown rendering of schema documents.
pub mod render;

/// The packwiz document models.
pub mod defs;

/// Generator configuration.
pub mod config;

/// Example loading and output writing.
pub mod generate;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{Result, SpecError};
