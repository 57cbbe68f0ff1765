//! Post repository - reads posts from the posts directory

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{extract_headings, slugify, FrontMatter, Post, PostMetadata};
use crate::error::{Error, Result};

/// File extension of post files
pub const POST_EXTENSION: &str = "md";

/// Reads posts from a single directory of markdown files.
///
/// The reader holds no state besides the directory; every call goes back to disk.
#[derive(Debug, Clone)]
pub struct PostRepository {
    posts_dir: PathBuf,
}

impl PostRepository {
    /// Create a repository over `posts_dir`
    pub fn new<P: Into<PathBuf>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    /// The directory posts are read from
    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Metadata of every post, newest first.
    ///
    /// Posts with the same date keep file-name order. The first malformed
    /// file aborts the listing; use [`PostRepository::check`] to see them all.
    pub fn list_post_metadata(&self) -> Result<Vec<PostMetadata>> {
        let mut posts = self
            .markdown_files()?
            .iter()
            .map(|path| load_metadata(path))
            .collect::<Result<Vec<_>>>()?;

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        Ok(posts)
    }

    /// Load a full post by file base name.
    ///
    /// `slug` names the file (`{slug}.md`), which is not necessarily the
    /// slugified title.
    pub fn get_post(&self, slug: &str) -> Result<Post> {
        if !is_valid_file_slug(slug) {
            return Err(Error::InvalidSlug(slug.to_string()));
        }

        let path = self.post_path(slug);
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let (data, body) = FrontMatter::parse(&path, &content)?;
        let headers = extract_headings(body);

        tracing::debug!("Loaded post {:?} with {} headings", path, headers.len());
        Ok(Post {
            data,
            body: body.to_string(),
            headers,
        })
    }

    /// Validate every post, collecting all problems instead of stopping at the first
    pub fn check(&self) -> Result<ValidationReport> {
        let files = self.markdown_files()?;
        let mut report = ValidationReport {
            scanned: files.len(),
            ..Default::default()
        };

        let mut by_slug: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        for path in files {
            match load_metadata(&path) {
                Ok(meta) => {
                    if meta.slug.is_empty() {
                        report.warnings.push(SlugIssue::Empty { file: path.clone() });
                    } else if !meta.slug_matches_file() {
                        report.warnings.push(SlugIssue::FileMismatch {
                            file: path.clone(),
                            slug: meta.slug.clone(),
                        });
                    }
                    by_slug.entry(meta.slug.clone()).or_default().push(path);
                    report.posts.push(meta);
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    report.errors.push(e);
                }
            }
        }

        for (slug, files) in by_slug {
            if files.len() > 1 && !slug.is_empty() {
                report.warnings.push(SlugIssue::Collision { slug, files });
            }
        }

        Ok(report)
    }

    /// Path of the post file for a file slug
    pub fn post_path(&self, slug: &str) -> PathBuf {
        self.posts_dir.join(format!("{}.{}", slug, POST_EXTENSION))
    }

    /// Markdown files directly inside the posts directory, in file-name order
    fn markdown_files(&self) -> Result<Vec<PathBuf>> {
        if !self.posts_dir.is_dir() {
            return Err(Error::NotFound {
                path: self.posts_dir.clone(),
            });
        }

        tracing::debug!("Scanning {:?}", self.posts_dir);

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.posts_dir).to_path_buf();
                Error::io(&path, e.into())
            })?;
            if entry.file_type().is_file() && is_markdown_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Read one post file into its listing record
fn load_metadata(path: &Path) -> Result<PostMetadata> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let (fm, _body) = FrontMatter::parse(path, &content)?;

    let date = fm.parse_created_at().ok_or_else(|| Error::InvalidDate {
        path: path.to_path_buf(),
        value: fm.created_at.clone(),
    })?;

    let file = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    Ok(PostMetadata {
        slug: slugify(&fm.title),
        title: fm.title,
        summary: fm.summary,
        created_at: fm.created_at,
        tags: fm.tags,
        image: fm.image,
        file,
        date,
    })
}

/// Check if a file is a markdown post
fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(&format!(".{}", POST_EXTENSION)))
        .unwrap_or(false)
}

/// A file slug must name a file inside the posts directory
fn is_valid_file_slug(slug: &str) -> bool {
    !slug.trim().is_empty()
        && !slug.contains(['/', '\\', '\0'])
        && slug != "."
        && slug != ".."
}

/// A slug problem found by [`PostRepository::check`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugIssue {
    /// Several posts slugify to the same slug; listing links are ambiguous
    Collision { slug: String, files: Vec<PathBuf> },
    /// The file name differs from the slugified title, so `/posts/{slug}` will not resolve
    FileMismatch { file: PathBuf, slug: String },
    /// The title slugifies to an empty string
    Empty { file: PathBuf },
}

impl fmt::Display for SlugIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugIssue::Collision { slug, files } => {
                let names: Vec<_> = files.iter().map(|p| p.display().to_string()).collect();
                write!(f, "slug {:?} is shared by {}", slug, names.join(", "))
            }
            SlugIssue::FileMismatch { file, slug } => {
                write!(
                    f,
                    "{} has title slug {:?}; rename it to {}.{} for links to resolve",
                    file.display(),
                    slug,
                    slug,
                    POST_EXTENSION
                )
            }
            SlugIssue::Empty { file } => {
                write!(f, "{} has a title with no slug characters", file.display())
            }
        }
    }
}

/// Result of validating the posts directory
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Number of markdown files examined
    pub scanned: usize,
    /// Posts that loaded, in file-name order
    pub posts: Vec<PostMetadata>,
    /// Files that failed to load
    pub errors: Vec<Error>,
    /// Slug problems in posts that did load
    pub warnings: Vec<SlugIssue>,
}

impl ValidationReport {
    /// No file failed to load
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
