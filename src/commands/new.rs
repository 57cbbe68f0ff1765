//! Create a new post

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::content::{slugify, FrontMatter};
use crate::Folio;

/// Scaffold `{posts_dir}/{slug}.md` for a new post.
///
/// The file is named after the slugified title so listing links resolve.
pub fn create_post(folio: &Folio, title: &str, summary: &str, tags: &[String]) -> Result<PathBuf> {
    let slug = slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} has no characters usable in a slug", title);
    }

    let repository = folio.repository();
    fs::create_dir_all(repository.posts_dir())?;

    let file_path = repository.post_path(&slug);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let front_matter = FrontMatter {
        title: title.to_string(),
        summary: summary.to_string(),
        created_at: chrono::Local::now().format("%Y-%m-%d").to_string(),
        tags: tags.to_vec(),
        image: String::new(),
        extra: HashMap::new(),
    };
    let yaml = serde_yaml::to_string(&front_matter)?;
    let content = format!("---\n{}---\n\n# {}\n", yaml, title);

    fs::write(&file_path, content)?;
    tracing::info!("Created {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_post_round_trips() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path = create_post(
            &folio,
            "Upload a File to S3: Signed URLs",
            "Presigned uploads",
            &["aws".to_string(), "s3".to_string()],
        )
        .unwrap();
        assert_eq!(path, folio.posts_dir.join("upload-a-file-to-s3-signed-urls.md"));

        let repo = folio.repository();
        let post = repo.get_post("upload-a-file-to-s3-signed-urls").unwrap();
        assert_eq!(post.data.title, "Upload a File to S3: Signed URLs");
        assert_eq!(post.data.tags, vec!["aws", "s3"]);
        assert_eq!(post.headers.len(), 1);

        let report = repo.check().unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        create_post(&folio, "Same Title", "", &[]).unwrap();
        assert!(create_post(&folio, "Same Title", "", &[]).is_err());
    }

    #[test]
    fn test_rejects_empty_slug() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert!(create_post(&folio, "???", "", &[]).is_err());
    }
}
