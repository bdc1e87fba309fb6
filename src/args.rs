use clap::Parser;
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage line printed when the argument count is wrong
pub const USAGE: &str = "Usage: frontstrip <post-file> <post-slug> <base-url>";

/// Number of positional arguments, not counting the program name
pub const ARG_COUNT: usize = 3;

/// Strip front matter from a post and rewrite relative image paths to absolute URLs
#[derive(Parser, Debug)]
#[command(
    name = "frontstrip",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Markdown post to transform
    pub post_file: PathBuf,
    /// Identifier of the post, used as a URL path segment
    pub post_slug: String,
    /// URL prefix the post is served under; trailing slashes are ignored
    pub base_url: String,
}

impl Cli {
    /// Parse a full argv (program name first).
    ///
    /// Exactly three arguments are accepted and each is taken verbatim, so
    /// values such as `-draft` or `--` are positionals rather than flags.
    /// Returns `None` on any other count or on a non UTF-8 slug or base URL.
    pub fn parse_exact<I, T>(argv: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        if argv.len() != ARG_COUNT + 1 {
            debug!("Expected {} arguments, got {}", ARG_COUNT, argv.len().saturating_sub(1));
            return None;
        }

        // everything after `--` is positional
        argv.insert(1, OsString::from("--"));
        Self::try_parse_from(argv)
            .map_err(|e| debug!("Argument error: {}", e))
            .ok()
    }
}
