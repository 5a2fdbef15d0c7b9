//! Generator configuration.
//!
//! Settings are read from an optional TOML file; every field has a default
//! so an empty or missing file is valid. Command-line flags override the
//! loaded values.

mod loading;


use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{defs::FORMAT_VERSION, render::RenderOptions};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "packwiz-spec.toml";

/// Settings for generating schemas and reference documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Generate strict schemas, which pin `pack-format` to the current format version instead of accepting any valid version.
    pub strict: bool,

    /// Pack format version used in strict schemas and in the `pack-format` description.
    pub format_version: String,

    /// Directory the JSON schemas are written to. Strict schemas go to its `strict` subdirectory.
    pub schema_dir: PathBuf,

    /// Directory the Markdown reference pages are written to.
    pub docs_dir: PathBuf,

    /// Directory holding the example pack embedded in the schemas.
    pub example_pack: PathBuf,

    /// Also write the legacy `mod.pw.toml` schema.
    pub include_legacy: bool,

    /// Render property titles as HTML badges instead of plain text.
    pub enhanced_titles: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strict: false,
            format_version: FORMAT_VERSION.to_string(),
            schema_dir: PathBuf::from("schemas"),
            docs_dir: PathBuf::from("docs"),
            example_pack: PathBuf::from("example-pack"),
            include_legacy: false,
            enhanced_titles: true,
        }
    }
}

impl GeneratorConfig {
    /// Directory schemas are actually written to, honoring strict mode.
    pub fn schema_output_dir(&self) -> PathBuf {
        if self.strict {
            self.schema_dir.join("strict")
        } else {
            self.schema_dir.clone()
        }
    }

    /// Renderer options derived from this configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            enhanced_titles: self.enhanced_titles,
        }
    }
}
