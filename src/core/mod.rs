use std::{fmt, io, path::Path, path::PathBuf, result};

use thiserror::Error;

/// Error types for schema generation and rendering.
///
/// The first four variants are declaration defects found by the core while
/// synthesizing or rendering. They are deterministic and only go away once
/// the model declaration is fixed. The remaining variants come from the
/// I/O layer wrapped around the core.
#[derive(Error, Debug)]
pub enum SpecError {
    /// A field has neither a nested model nor a primitive kind declared
    #[error("no type defined for field '{field}' of model '{model}'")]
    MissingType {
        /// Model declaring the field
        model: String,
        /// The field without a kind
        field: String,
    },

    /// A schema node handed to the renderer has a list of types or no type
    #[error("unsupported definition type for '{name}' (array, or undefined)")]
    AmbiguousType {
        /// Property name or block title of the offending node
        name: String,
    },

    /// A field references a model id that was never defined
    #[error("model '{model}' referenced by '{referenced_by}' is not defined")]
    UnknownModel {
        /// The missing model id
        model: String,
        /// `model.field` that holds the reference
        referenced_by: String,
    },

    /// A model reaches itself through a chain of object references
    #[error("recursive model reference: {chain}")]
    RecursiveModel {
        /// Reference chain, rendered as `a -> b -> a`
        chain: String,
    },

    /// I/O operation error with path context
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where the I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// An example document is missing or does not parse
    #[error("invalid example '{name}': {details}")]
    InvalidExample {
        /// Example file name
        name: String,
        /// What is wrong with it
        details: String,
    },
}

/// A specialized `Result` type for generator operations.
pub type Result<T> = result::Result<T, SpecError>;

impl SpecError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => p.to_string_lossy().to_string(),
            None => "string".to_string(),
        };

        SpecError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error carrying the path that was being accessed.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        SpecError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Whether this error is a model declaration defect rather than an
    /// environment problem.
    pub fn is_declaration_defect(&self) -> bool {
        matches!(
            self,
            SpecError::MissingType { .. }
                | SpecError::AmbiguousType { .. }
                | SpecError::UnknownModel { .. }
                | SpecError::RecursiveModel { .. }
        )
    }
}
