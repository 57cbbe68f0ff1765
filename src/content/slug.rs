//! URL slugs derived from titles and heading text

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"[^a-z0-9_-]+").unwrap();
    static ref HYPHENS: Regex = Regex::new(r"-{2,}").unwrap();
}

/// Turn arbitrary text into a URL-safe slug.
///
/// Lowercases, replaces whitespace runs with `-`, drops everything that is
/// not an ASCII word character or `-`, collapses repeated `-` and trims `-`
/// from both ends. Non-ASCII letters are dropped, not transliterated.
///
/// # Examples
/// ```
/// assert_eq!(folio::slugify("Hello World"), "hello-world");
/// assert_eq!(folio::slugify("  Deploy SPA -- to AWS!  "), "deploy-spa-to-aws");
/// ```
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lower, "-");
    let stripped = NON_WORD.replace_all(&hyphenated, "");
    let collapsed = HYPHENS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(
            slugify("Lambda Authorizer: A Guide to Secure Your AWS API Gateway"),
            "lambda-authorizer-a-guide-to-secure-your-aws-api-gateway"
        );
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(slugify("a \t\n b"), "a-b");
        assert_eq!(slugify("   padded   "), "padded");
    }

    #[test]
    fn test_punctuation_and_hyphens() {
        assert_eq!(slugify("Mirror a website using wget!"), "mirror-a-website-using-wget");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("--leading and trailing--"), "leading-and-trailing");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
        assert_eq!(slugify("C++ & Rust"), "c-rust");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(slugify("Café Crème"), "caf-crme");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Hello World",
            "  --Upload a File to S3 -- by using Signed URL--  ",
            "Shopify product search, but with slider",
            "x_-_y",
            "Ünïcödé and ASCII",
            "tabs\tand\nnewlines",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_alphabet_for_printable_ascii() {
        let printable: String = (0x20u8..0x7f).map(char::from).collect();
        for window in printable.as_bytes().windows(7) {
            let input = std::str::from_utf8(window).unwrap();
            let slug = slugify(input);
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }
}
