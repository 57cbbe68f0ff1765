//! Content module - post files, metadata and markdown processing

mod frontmatter;
mod headings;
mod markdown;
mod post;
pub mod repository;
mod slug;

pub use frontmatter::FrontMatter;
pub use headings::extract_headings;
pub use markdown::{heading_id, heading_plain_text, MarkdownRenderer};
pub use post::{Heading, Post, PostMetadata};
pub use repository::{PostRepository, SlugIssue, ValidationReport};
pub use slug::slugify;
