use std::{fs, path::Path};

use tracing::debug;

use crate::{Result, SpecError, defs::ExampleDocuments};

/// Example pack file embedded as the `pack.toml` example.
pub const PACK_EXAMPLE: &str = "pack.toml";
/// Example pack file embedded as the `index.toml` example.
pub const INDEX_EXAMPLE: &str = "index.toml";
/// Example pack file embedded as the metadata file example.
pub const METAFILE_EXAMPLE: &str = "mods/borderless-mining.pw.toml";

/// Reads the example documents of an example pack.
///
/// Each file must parse as TOML so a broken example is caught before it
/// ends up inside a published schema.
///
/// # Errors
///
/// Returns `SpecError::InvalidExample` naming the first file that is
/// missing, unreadable or not valid TOML.
pub fn load_examples(dir: &Path) -> Result<ExampleDocuments> {
    Ok(ExampleDocuments {
        pack: read_example(dir, PACK_EXAMPLE)?,
        index: read_example(dir, INDEX_EXAMPLE)?,
        metafile: read_example(dir, METAFILE_EXAMPLE)?,
    })
}

fn read_example(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    let content = fs::read_to_string(&path).map_err(|e| SpecError::InvalidExample {
        name: name.to_string(),
        details: format!("cannot read {}: {e}", path.display()),
    })?;

    toml::from_str::<toml::Table>(&content).map_err(|e| SpecError::InvalidExample {
        name: name.to_string(),
        details: e.to_string(),
    })?;

    debug!(example = name, bytes = content.len(), "loaded example document");
    Ok(content)
}
