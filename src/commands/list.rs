//! List post metadata

use anyhow::Result;

use crate::content::PostMetadata;
use crate::helpers::{Helpers, Paginator};
use crate::Folio;

/// List posts newest first, optionally a single page of the listing
pub fn run(folio: &Folio, page: Option<usize>, json: bool) -> Result<()> {
    let posts = folio.repository().list_post_metadata()?;
    let helpers = folio.helpers();
    let paginator = helpers.paginate(&posts);

    let selected = match page {
        Some(index) => {
            if index >= paginator.page_count() {
                tracing::warn!(
                    "Page {} is out of range ({} pages)",
                    index,
                    paginator.page_count()
                );
            }
            paginator.page(index)
        }
        None => &posts[..],
    };

    if json {
        println!("{}", serde_json::to_string_pretty(selected)?);
        return Ok(());
    }

    print!("{}", format_listing(selected, &helpers));
    if let Some(index) = page {
        println!("{}", page_footer(&paginator, index));
    }

    Ok(())
}

/// Human-readable listing, one card per post
pub fn format_listing(posts: &[PostMetadata], helpers: &Helpers) -> String {
    let mut out = format!("Posts ({}):\n", posts.len());
    for post in posts {
        out.push_str(&format!(
            "  {} - {} [{}]\n",
            post.created_at,
            post.title,
            helpers.post_url(post)
        ));
        if !post.tags.is_empty() {
            out.push_str(&format!("      tags: {}\n", post.tags.join(", ")));
        }
        if !post.summary.is_empty() {
            out.push_str(&format!("      {}\n", helpers.summary(&post.summary)));
        }
    }
    out
}

/// Page position plus hints for the neighbouring pages
pub fn page_footer<T>(paginator: &Paginator<'_, T>, index: usize) -> String {
    let mut out = format!("Page {} of {}", index, paginator.page_count());
    if paginator.has_prev(index) {
        out.push_str(&format!("  prev: --page {}", index - 1));
    }
    if paginator.has_next(index) {
        out.push_str(&format!("  next: --page {}", index + 1));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use chrono::NaiveDate;

    fn meta(title: &str, created_at: &str, tags: &[&str], summary: &str) -> PostMetadata {
        PostMetadata {
            title: title.to_string(),
            summary: summary.to_string(),
            created_at: created_at.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: String::new(),
            slug: crate::slugify(title),
            file: crate::slugify(title),
            date: NaiveDate::parse_from_str(created_at, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_format_listing() {
        let config = SiteConfig {
            summary_length: 10,
            ..Default::default()
        };
        let helpers = Helpers::new(config);
        let posts = vec![
            meta("Deploy SPA to AWS", "2023-02-01", &["aws", "cdk"], "How to ship a single page app"),
            meta("Hello World", "2023-01-13", &[], ""),
        ];

        let out = format_listing(&posts, &helpers);
        assert_eq!(
            out,
            "Posts (2):\n  2023-02-01 - Deploy SPA to AWS [/posts/deploy-spa-to-aws]\n      tags: aws, cdk\n      How to shi...\n  2023-01-13 - Hello World [/posts/hello-world]\n"
        );
    }

    #[test]
    fn test_page_footer() {
        let items = vec![1, 2, 3, 4, 5, 6, 7];
        let paginator = Paginator::new(&items, 3);
        assert_eq!(page_footer(&paginator, 0), "Page 0 of 3  next: --page 1");
        assert_eq!(
            page_footer(&paginator, 1),
            "Page 1 of 3  prev: --page 0  next: --page 2"
        );
        assert_eq!(page_footer(&paginator, 2), "Page 2 of 3  prev: --page 1");
        assert_eq!(page_footer(&paginator, 9), "Page 9 of 3");
    }
}
