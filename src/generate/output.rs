use std::{fs, io, path::Path};

use schemars::Schema;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{Result, SpecError};

/// Serializes a schema document as tab-indented JSON, keeping the key order
/// the document was built with.
///
/// # Errors
///
/// Returns `SpecError::Json` if serialization fails.
pub fn to_tab_json(schema: &Schema) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    schema.as_value().serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| SpecError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Removes `dir` with everything in it, then recreates it empty.
pub(super) fn recreate_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(SpecError::io(e, dir)),
    }
    fs::create_dir_all(dir).map_err(|e| SpecError::io(e, dir))
}

/// Creates `dir` if needed.
pub(super) fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| SpecError::io(e, dir))
}

pub(super) fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| SpecError::io(e, path))
}
