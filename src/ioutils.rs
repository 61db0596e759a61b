use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Reads a file, mapping "not found" to `None`.
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    match std::fs::read_to_string(path.as_ref()) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(Error::IoError(err)),
    }
}

/// Read content from a reader into a string.
pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Parses a JSON object; anything else is rejected.
pub fn parse_string_to_json(
    buf: &str,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    match serde_json::from_str(buf)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(Error::Other(anyhow::anyhow!(
            "Answers must be a JSON object, got: {other}"
        ))),
    }
}

/// Pretty JSON with two-space indentation and a trailing newline.
pub fn to_pretty_json(value: &serde_json::Value) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
