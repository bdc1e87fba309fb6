pub mod front_matter;
pub mod images;
pub mod post;

pub use front_matter::FrontMatterStripper;
pub use images::{is_absolute_url, normalize_base_url, ImageRewriter};
pub use post::PostTransformer;
