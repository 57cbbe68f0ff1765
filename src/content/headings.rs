//! ATX heading extraction for the table of contents

use lazy_static::lazy_static;
use regex::Regex;

use super::Heading;

lazy_static! {
    /// Up to three spaces of indent, 1-6 `#`, whitespace, then the text
    static ref ATX_HEADING: Regex = Regex::new(r"^ {0,3}(#{1,6})[ \t]+(.*?)[ \t]*$").unwrap();
    /// Optional closing sequence, e.g. `## Title ##`
    static ref CLOSING_HASHES: Regex = Regex::new(r"[ \t]+#+$").unwrap();
    static ref FENCE: Regex = Regex::new(r"^ {0,3}(`{3,}|~{3,})").unwrap();
}

/// An open fenced code block: fence character and length
struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    fn closed_by(&self, line: &str) -> bool {
        let trimmed = line.trim_start_matches(' ');
        if line.len() - trimmed.len() > 3 {
            return false;
        }
        let run = trimmed.chars().take_while(|&c| c == self.marker).count();
        run >= self.len && trimmed[run..].trim().is_empty()
    }
}

/// Extract a flat, ordered list of ATX headings from a markdown body.
///
/// Lines inside fenced code blocks are skipped.
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut fence: Option<Fence> = None;

    for line in markdown.lines() {
        if let Some(open) = &fence {
            if open.closed_by(line) {
                fence = None;
            }
            continue;
        }

        if let Some(caps) = FENCE.captures(line) {
            let marker = &caps[1];
            // Backtick fences may not carry backticks in their info string
            let info = &line[caps.get(1).map_or(0, |m| m.end())..];
            if !(marker.starts_with('`') && info.contains('`')) {
                fence = Some(Fence {
                    marker: marker.chars().next().unwrap_or('`'),
                    len: marker.len(),
                });
                continue;
            }
        }

        if let Some(caps) = ATX_HEADING.captures(line) {
            let text = CLOSING_HASHES.replace(&caps[2], "");
            let text = text.trim();
            if text.is_empty() || text.chars().all(|c| c == '#') {
                continue;
            }
            headings.push(Heading {
                text: text.to_string(),
                level: caps[1].len() as u8,
            });
        }
    }

    headings
}
