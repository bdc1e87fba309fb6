//! Per-post transformation: strip front matter, then rewrite image paths

use crate::core::front_matter::FrontMatterStripper;
use crate::core::images::ImageRewriter;
use crate::error::Result;
use crate::io::read_to_string;
use log::debug;
use std::path::Path;

/// Applies the front matter stripper and the image rewriter in sequence
#[derive(Debug, Clone)]
pub struct PostTransformer {
    stripper: FrontMatterStripper,
    rewriter: ImageRewriter,
}

impl PostTransformer {
    /// Create a transformer for the post identified by `slug`
    pub fn new(slug: impl Into<String>, base_url: &str) -> Self {
        let rewriter = ImageRewriter::new(slug, base_url);
        debug!(
            "Transformer for slug {:?} with base URL {:?}",
            rewriter.slug(),
            rewriter.base_url()
        );
        Self {
            stripper: FrontMatterStripper::new(),
            rewriter,
        }
    }

    pub fn slug(&self) -> &str {
        self.rewriter.slug()
    }

    /// Base URL with trailing slashes removed
    pub fn base_url(&self) -> &str {
        self.rewriter.base_url()
    }

    /// Transform document text
    pub fn transform(&self, text: &str) -> String {
        if !self.stripper.has_front_matter(text) {
            debug!("No front matter block found");
        }
        let body = self.stripper.strip(text);
        self.rewriter.rewrite(&body)
    }

    /// Read a post file and transform its contents
    pub fn transform_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        debug!("Processing file: {}", path.display());
        let content = read_to_string(path)?;
        Ok(self.transform(&content))
    }
}
