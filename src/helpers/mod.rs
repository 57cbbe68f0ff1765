//! Helper functions for listing and detail pages
//!
//! Pagination, summary truncation and the URL scheme shared by the site
//! pages and the CDN rewrite.

mod pagination;
mod text;
mod url;

pub use pagination::*;
pub use text::*;
pub use url::*;

use crate::config::SiteConfig;
use crate::content::PostMetadata;

/// Helpers bound to the site configuration
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Paginate posts with the configured page size
    pub fn paginate<'a>(&self, posts: &'a [PostMetadata]) -> Paginator<'a, PostMetadata> {
        Paginator::new(posts, self.config.per_page)
    }

    /// Truncate a summary to the configured card length
    pub fn summary(&self, text: &str) -> String {
        truncate_summary(text, self.config.summary_length)
    }

    /// Link to a post
    pub fn post_url(&self, post: &PostMetadata) -> String {
        post_url(&post.slug)
    }
}
