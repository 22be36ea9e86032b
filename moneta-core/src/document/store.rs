use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::render::render;
use crate::MonetaError;

/// Load a target document from disk, preserving key order.
///
/// # Errors
/// Returns `Io` when the file cannot be read, `Json` when it is not valid
/// JSON, and `Data` when the top level is not an object.
pub fn read_document(path: &Path) -> Result<Map<String, Value>, MonetaError> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(MonetaError::Data(format!(
            "{} is not a JSON object",
            path.display()
        ))),
    }
}

/// Write a document through the canonical renderer, with a trailing newline.
///
/// The file is written only after the merged document is fully built in
/// memory, so a failed run never leaves a half-merged tree behind.
///
/// # Errors
/// Returns `Io` when the file cannot be written.
pub fn write_document(path: &Path, doc: &Map<String, Value>) -> Result<(), MonetaError> {
    let mut text = render(doc);
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}
