//! Show a single post

use anyhow::Result;

use crate::content::Post;
use crate::helpers::heading_anchor;
use crate::Folio;

/// Print a post with its table of contents, or its rendered HTML
pub fn run(folio: &Folio, slug: &str, html: bool, json: bool) -> Result<()> {
    let post = folio.repository().get_post(slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else if html {
        print!("{}", folio.renderer().render(&post.body)?);
    } else {
        print!("{}", format_post(&post));
    }

    Ok(())
}

/// Header, table of contents and raw body of a post
pub fn format_post(post: &Post) -> String {
    let mut out = format!("{}\n{}\n", post.data.title, post.data.created_at);
    if !post.data.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", post.data.tags.join(", ")));
    }

    if !post.headers.is_empty() {
        out.push_str("\nCONTENTS\n");
        for heading in &post.headers {
            let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
            out.push_str(&format!(
                "{}- {} ({})\n",
                indent,
                heading.text,
                heading_anchor(&heading.text)
            ));
        }
    }

    out.push('\n');
    out.push_str(&post.body);
    out
}
