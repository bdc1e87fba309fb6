use crate::error::{FrontStripError, Result};
use std::fs;
use std::path::Path;

/// Read a whole post file as UTF-8 text with universal newlines
pub fn read_to_string(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| FrontStripError::from_read(path, e))?;
    Ok(normalize_newlines(content))
}

/// Translate `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}
