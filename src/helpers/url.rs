//! URL helper functions

use crate::content::heading_id;

/// Path prefix under which post pages are served
pub const POSTS_PREFIX: &str = "/posts/";

/// Link to a post detail page
///
/// # Examples
/// ```ignore
/// post_url("hello-world") // -> "/posts/hello-world"
/// ```
pub fn post_url(slug: &str) -> String {
    format!("{}{}", POSTS_PREFIX, slug)
}

/// In-page anchor for a heading, matching the id the renderer assigns.
///
/// `text` is the heading's inline markdown as extracted from the body.
pub fn heading_anchor(text: &str) -> String {
    format!("#{}", heading_id(text))
}

/// Rewrite an inbound request path the way the CDN origin-request function does.
///
/// Post pages are published as `{slug}.html` but linked without the
/// extension, so extension-less paths under `/posts/` get `.html` appended.
/// Any other path is returned unchanged.
pub fn rewrite_edge_uri(uri: &str) -> String {
    let (path, query) = match uri.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (uri, None),
    };

    let needs_extension = path.starts_with(POSTS_PREFIX)
        && path.len() > POSTS_PREFIX.len()
        && !path.ends_with('/')
        && !path.rsplit('/').next().unwrap_or_default().contains('.');

    if !needs_extension {
        return uri.to_string();
    }

    match query {
        Some(query) => format!("{}.html?{}", path, query),
        None => format!("{}.html", path),
    }
}
