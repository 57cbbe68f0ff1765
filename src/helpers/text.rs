//! Text helpers for listing cards and HTML output

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Shorten a summary to `limit` characters, appending `...` when cut
pub fn truncate_summary(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(limit).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_truncate_summary() {
        assert_eq!(truncate_summary("Hello World", 5), "Hello...");
        assert_eq!(truncate_summary("Hi", 10), "Hi");
        assert_eq!(truncate_summary("exact", 5), "exact");
        assert_eq!(truncate_summary("", 0), "");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_summary("çğıöşü", 3), "çğı...");
    }

    #[test]
    fn test_default_card_limit() {
        let long = "a".repeat(300);
        let short = truncate_summary(&long, 280);
        assert_eq!(short.chars().count(), 283);
        assert!(short.ends_with("..."));
    }
}
