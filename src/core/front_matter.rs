//! Removal of a leading `---` delimited front matter block
//!
//! The block is treated as opaque: it is never parsed, only cut off. Only a
//! block starting at the very first byte of the document is considered, and
//! it ends at the first following line that is exactly `---` (trailing
//! whitespace allowed).

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Opening delimiter, lazy body, closing delimiter. `^` without the `m` flag
/// only matches at the start of the text.
static FRONT_MATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^---\s*\n.*?\n---\s*\n").unwrap());

/// Strips a leading front matter block from document text
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontMatterStripper;

impl FrontMatterStripper {
    pub fn new() -> Self {
        Self
    }

    /// Whether `text` starts with a complete front matter block
    pub fn has_front_matter(&self, text: &str) -> bool {
        FRONT_MATTER_RE.is_match(text)
    }

    /// Return `text` without its leading front matter block.
    ///
    /// Text without a complete block comes back unchanged.
    pub fn strip(&self, text: &str) -> String {
        match FRONT_MATTER_RE.find(text) {
            Some(block) => {
                debug!("Removing {} bytes of front matter", block.end());
                text[block.end()..].to_string()
            }
            None => text.to_string(),
        }
    }
}
