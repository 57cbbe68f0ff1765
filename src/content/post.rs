//! Post models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::FrontMatter;

/// Lightweight post record used by listing pages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// Post title
    pub title: String,

    /// Short description shown on the listing card
    pub summary: String,

    /// Creation date, verbatim from the front-matter
    pub created_at: String,

    /// Free-form tags
    pub tags: Vec<String>,

    /// Cover image path or URL
    pub image: String,

    /// Slug derived from the title
    pub slug: String,

    /// Base name of the source file (what `get_post` resolves)
    pub file: String,

    /// Parsed `created_at`, the sort key
    #[serde(skip)]
    pub date: NaiveDateTime,
}

impl PostMetadata {
    /// Whether the listing link for this post resolves to its own file
    pub fn slug_matches_file(&self) -> bool {
        self.slug == self.file
    }
}

/// A single heading of a post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    /// Number of leading `#` characters, 1 to 6
    pub level: u8,
}

/// A full post for detail pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Front-matter fields
    pub data: FrontMatter,

    /// Raw markdown body without the front-matter
    pub body: String,

    /// Headings in document order
    pub headers: Vec<Heading>,
}

impl Post {
    /// Slug derived from the post title
    pub fn slug(&self) -> String {
        super::slugify(&self.data.title)
    }
}
