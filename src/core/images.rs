//! Rewriting of relative markdown image paths into absolute URLs
//!
//! Every `![alt](path)` occurrence whose path is relative becomes
//! `![alt](<base-url>/posts/<slug>/<path>)`. Paths are concatenated as-is:
//! no `./` or `../` collapsing and no percent-encoding.

use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Alt text and path are both lazy, so the first `)` closes the reference.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

/// Path prefixes that already denote an absolute URL
const ABSOLUTE_PREFIXES: [&str; 3] = ["http://", "https://", "//"];

/// Remove every trailing `/` from a base URL
pub fn normalize_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Whether an image path is left untouched by the rewriter
pub fn is_absolute_url(path: &str) -> bool {
    ABSOLUTE_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Rewrites relative image references for a single post
#[derive(Debug, Clone)]
pub struct ImageRewriter {
    base_url: String,
    slug: String,
}

impl ImageRewriter {
    /// Create a rewriter for `slug`. Trailing slashes on `base_url` are dropped.
    pub fn new(slug: impl Into<String>, base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url).to_string(),
            slug: slug.into(),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a relative image path
    pub fn resolve(&self, path: &str) -> String {
        format!("{}/posts/{}/{}", self.base_url, self.slug, path)
    }

    /// Rewrite all relative image references in `text`.
    ///
    /// Matching runs against the original text in a single pass, so a
    /// replacement never influences where the next reference is found.
    pub fn rewrite(&self, text: &str) -> String {
        let mut rewritten = 0usize;
        let mut kept = 0usize;

        let result = IMAGE_RE.replace_all(text, |caps: &Captures| {
            let path = &caps[2];
            if is_absolute_url(path) {
                kept += 1;
                caps[0].to_string()
            } else {
                rewritten += 1;
                format!("![{}]({})", &caps[1], self.resolve(path))
            }
        });

        debug!(
            "Image references: {} rewritten, {} already absolute",
            rewritten, kept
        );
        result.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rewriter() -> ImageRewriter {
        ImageRewriter::new("my-post", "https://example.com/")
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_base_url("https://example.com/"), "https://example.com");
        assert_eq!(normalize_base_url("https://example.com///"), "https://example.com");
        assert_eq!(normalize_base_url("/"), "");
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("http://a.com/x.png"));
        assert!(is_absolute_url("https://a.com/x.png"));
        assert!(is_absolute_url("//cdn.a.com/x.png"));
        assert!(!is_absolute_url("/images/x.png"));
        assert!(!is_absolute_url("images/x.png"));
        assert!(!is_absolute_url("ftp://a.com/x.png"));
        assert!(!is_absolute_url("HTTPS://a.com/x.png"));
    }

    #[test]
    fn test_rewrites_relative_path() {
        assert_eq!(
            rewriter().rewrite("![cat](images/cat.png)"),
            "![cat](https://example.com/posts/my-post/images/cat.png)"
        );
    }

    #[test]
    fn test_keeps_absolute_paths_verbatim() {
        let r = rewriter();
        for text in [
            "![logo](https://cdn.example.com/logo.png)",
            "![logo](http://cdn.example.com/logo.png)",
            "![ weird alt ](//cdn.example.com/logo.png)",
        ] {
            assert_eq!(r.rewrite(text), text);
        }
    }

    #[test]
    fn test_no_path_normalization() {
        let r = rewriter();
        assert_eq!(
            r.rewrite("![a](./a.png) ![b](../b.png) ![c](/c.png)"),
            "![a](https://example.com/posts/my-post/./a.png) \
             ![b](https://example.com/posts/my-post/../b.png) \
             ![c](https://example.com/posts/my-post//c.png)"
        );
    }

    #[test]
    fn test_no_percent_encoding() {
        let r = ImageRewriter::new("hello world", "https://example.com");
        assert_eq!(
            r.rewrite("![x](my image.png)"),
            "![x](https://example.com/posts/hello world/my image.png)"
        );
    }

    #[test]
    fn test_multiple_references_mixed() {
        let text = "Intro ![a](a.png) then ![b](https://x.io/b.png)\nand ![](c.gif) end";
        assert_eq!(
            rewriter().rewrite(text),
            "Intro ![a](https://example.com/posts/my-post/a.png) then ![b](https://x.io/b.png)\n\
             and ![](https://example.com/posts/my-post/c.gif) end"
        );
    }

    #[test]
    fn test_first_closing_paren_ends_reference() {
        assert_eq!(
            rewriter().rewrite("![x](a(1).png)"),
            "![x](https://example.com/posts/my-post/a(1).png)"
        );
    }

    #[test]
    fn test_empty_path_is_rewritten() {
        assert_eq!(
            rewriter().rewrite("![x]()"),
            "![x](https://example.com/posts/my-post/)"
        );
    }

    #[test]
    fn test_non_matching_text_is_unchanged() {
        let r = rewriter();
        for text in [
            "",
            "plain text",
            "[link](page.html)",
            "![broken](no-close",
            "![split\nalt](x.png)",
            "! [spaced](x.png)",
        ] {
            assert_eq!(r.rewrite(text), text);
        }
    }

    #[test]
    fn test_accessors() {
        let r = ImageRewriter::new("slug", "https://example.com//");
        assert_eq!(r.slug(), "slug");
        assert_eq!(r.base_url(), "https://example.com");
        assert_eq!(r.resolve("x.png"), "https://example.com/posts/slug/x.png");
    }
}
