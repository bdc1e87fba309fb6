//! frontstrip: prepare a markdown post for publishing elsewhere
//!
//! Two text transformations applied in sequence:
//!
//! - a leading `---` delimited front matter block is removed without being parsed
//! - relative image paths in `![alt](path)` references are rewritten to
//!   `<base-url>/posts/<slug>/<path>`; paths starting with `http://`,
//!   `https://` or `//` are left alone
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use frontstrip::{PostTransformer, Result};
//!
//! fn main() -> Result<()> {
//!     let transformer = PostTransformer::new("my-post", "https://example.com/");
//!     let output = transformer.transform_file("content/posts/my-post/index.md")?;
//!     println!("{}", output);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`crate::core`]: the stripper, the image rewriter and their composition
//! - [`io`]: reading post files
//! - [`error`]: error types
//! - [`args`]: command line definition used by the binary

// Public API exports
pub use error::{FrontStripError, Result};

pub use crate::core::{
    is_absolute_url, normalize_base_url, FrontMatterStripper, ImageRewriter, PostTransformer,
};

pub mod args;
pub mod core;
pub mod error;
pub mod io;

/// Convenience functions for common operations
pub mod convenience {
    //! One-shot wrappers around the transformers.

    use crate::{FrontMatterStripper, ImageRewriter, PostTransformer, Result};
    use std::path::Path;

    /// Remove a leading front matter block from `text`
    pub fn strip_front_matter(text: &str) -> String {
        FrontMatterStripper::new().strip(text)
    }

    /// Rewrite relative image paths in `text` for the post `slug`
    pub fn rewrite_image_paths(text: &str, slug: &str, base_url: &str) -> String {
        ImageRewriter::new(slug, base_url).rewrite(text)
    }

    /// Read a post file, strip its front matter and rewrite its image paths
    pub fn process_file<P: AsRef<Path>>(path: P, slug: &str, base_url: &str) -> Result<String> {
        PostTransformer::new(slug, base_url).transform_file(path)
    }
}
