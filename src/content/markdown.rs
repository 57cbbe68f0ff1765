//! Markdown rendering with syntax highlighting and heading anchors

use anyhow::{anyhow, Result};
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::slugify;
use crate::config::HighlightConfig;
use crate::helpers::html_escape;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
    default_language: String,
}

/// A heading whose inner events are held back until its id is known
struct PendingHeading<'a> {
    level: HeadingLevel,
    id: Option<CowStr<'a>>,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    events: Vec<Event<'a>>,
    text: String,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options(&HighlightConfig::default())
    }

    /// Create with custom settings
    pub fn with_options(config: &HighlightConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: config.theme.clone(),
            line_numbers: config.line_number,
            default_language: config.default_language.clone(),
        }
    }

    /// Render markdown to HTML.
    ///
    /// Headings get an `id` equal to the slug of their text so that table of
    /// contents anchors resolve.
    pub fn render(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, parser_options());

        let theme = self.theme()?;
        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;
        let mut heading: Option<PendingHeading> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|lang| lang.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref(), theme);
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }) => {
                    heading = Some(PendingHeading {
                        level,
                        id,
                        classes,
                        attrs,
                        events: Vec::new(),
                        text: String::new(),
                    });
                }
                Event::End(TagEnd::Heading(level)) => {
                    if let Some(pending) = heading.take() {
                        let id = pending
                            .id
                            .unwrap_or_else(|| CowStr::from(slugify(&pending.text)));
                        events.push(Event::Start(Tag::Heading {
                            level: pending.level,
                            id: Some(id),
                            classes: pending.classes,
                            attrs: pending.attrs,
                        }));
                        events.extend(pending.events);
                    }
                    events.push(Event::End(TagEnd::Heading(level)));
                }
                event => match heading.as_mut() {
                    Some(pending) => {
                        push_plain_text(&mut pending.text, &event);
                        pending.events.push(event);
                    }
                    None => events.push(event),
                },
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    fn theme(&self) -> Result<&Theme> {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
            .ok_or_else(|| anyhow!("No highlight themes available"))
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>, theme: &Theme) -> String {
        let lang = lang.unwrap_or(&self.default_language);

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => {
                if self.line_numbers {
                    self.add_line_numbers(&highlighted, lang)
                } else {
                    format!(
                        r#"<figure class="highlight {}">{}</figure>"#,
                        lang, highlighted
                    )
                }
            }
            Err(e) => {
                tracing::debug!("Highlighting {} failed: {}", lang, e);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang,
                    html_escape(code)
                )
            }
        }
    }

    /// Add line numbers to highlighted code
    fn add_line_numbers(&self, code: &str, lang: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();

        let gutter = (1..=lines.len())
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
            lang,
            gutter,
            lines.join("\n")
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Text a heading contributes to its id: text and inline code, no markup
fn push_plain_text(out: &mut String, event: &Event) {
    if let Event::Text(text) | Event::Code(text) = event {
        out.push_str(text);
    }
}

/// Plain text of a heading's inline markdown, as the renderer sees it.
///
/// Links keep their label, emphasis markers are dropped and entities are
/// decoded, e.g. `Read [the docs](https://example.com)` gives `Read the docs`.
pub fn heading_plain_text(inline: &str) -> String {
    // Parse as a heading so text like `1. Intro` is not read as a list
    let source = format!("# {}", inline);
    let mut text = String::new();
    for event in Parser::new_ext(&source, parser_options()) {
        push_plain_text(&mut text, &event);
    }
    text
}

/// Id the renderer gives a heading with this inline markdown
pub fn heading_id(inline: &str) -> String {
    slugify(&heading_plain_text(inline))
}
