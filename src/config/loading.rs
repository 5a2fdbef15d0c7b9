use std::{fs, path::Path};

use tracing::debug;

use super::GeneratorConfig;
use crate::{Result, SpecError};

impl GeneratorConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// A missing file is not an error: the defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::IoError` if the file exists but cannot be read and
    /// `SpecError::TomlParseError` if its content is invalid.
    pub fn load(path: &Path) -> Result<GeneratorConfig> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GeneratorConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::io(e, path))?;
        Self::from_toml(&content).map_err(|e| match e {
            SpecError::TomlParseError { details, .. } => SpecError::TomlParseError {
                location: path.to_string_lossy().to_string(),
                details,
            },
            other => other,
        })
    }

    /// Parses the configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::TomlParseError` if the text is invalid.
    pub fn from_toml(content: &str) -> Result<GeneratorConfig> {
        toml::from_str(content).map_err(|e| SpecError::toml_parse(e, None))
    }
}
