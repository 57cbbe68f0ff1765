//! Error types for the post repository

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading posts
#[derive(Error, Debug)]
pub enum Error {
    /// The posts directory or a post file does not exist
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The frontmatter block is missing or malformed
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// `createdAt` could not be read as a calendar date
    #[error("invalid createdAt {value:?} in {}", path.display())]
    InvalidDate { path: PathBuf, value: String },

    /// The slug passed to `get_post` cannot name a post file
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn parse(path: &Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Map an I/O error, turning `NotFound` into [`Error::NotFound`]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let err = Error::io(
            Path::new("posts/missing.md"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        match err {
            Error::NotFound { path } => assert_eq!(path, Path::new("posts/missing.md")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_io_other_kind_stays_io() {
        let err = Error::io(
            Path::new("posts/locked.md"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_display() {
        let err = Error::InvalidDate {
            path: PathBuf::from("posts/a.md"),
            value: "yesterday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid createdAt \"yesterday\" in posts/a.md"
        );
    }
}
