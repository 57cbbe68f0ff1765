//! folio: markdown post repository for a portfolio blog
//!
//! Reads front-matter and bodies of markdown posts, lists their metadata
//! newest first, loads single posts with their heading outline, and provides
//! the slug, pagination and URL helpers the site pages are built from.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

pub use content::{extract_headings, slugify, Heading, Post, PostMetadata, PostRepository};
pub use error::Error;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The main application handle
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        // Path::join keeps an absolute posts_dir as is
        let posts_dir = base_dir.join(&config.posts_dir);
        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// Post reader over the configured posts directory
    pub fn repository(&self) -> PostRepository {
        PostRepository::new(&self.posts_dir)
    }

    /// Template helpers bound to this site's configuration
    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.config.clone())
    }

    /// Markdown renderer using the configured highlighting
    pub fn renderer(&self) -> content::MarkdownRenderer {
        content::MarkdownRenderer::with_options(&self.config.highlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.posts_dir, dir.path().join("posts"));
        assert_eq!(folio.repository().posts_dir(), dir.path().join("posts"));
    }

    #[test]
    fn test_posts_dir_from_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "posts_dir: content/blog\n").unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.posts_dir, dir.path().join("content/blog"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "per_page: [not, a, number]\n").unwrap();
        assert!(Folio::new(dir.path()).is_err());
    }
}
