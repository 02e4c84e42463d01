//! Markdown stripping for reading-time purposes.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex
//! stripping. Unlike prose-quality analysis, reading time counts
//! everything a reader actually reads: heading text, link text, list and
//! table text all stay in. Code blocks and inline code are dropped —
//! code is scanned, not read at prose speed — along with YAML
//! frontmatter and image alt text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning the text a reader would read.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(&text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Image { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            // Block boundaries become spaces so adjacent words don't fuse
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::TableCell,
            ) if skip_depth == 0 => {
                result.push(' ');
            }

            // Inline code is skipped entirely
            Event::Code(_) => {}

            _ => {}
        }
    }

    result
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text.to_string();
    }

    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text.to_string();
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder
        .strip_prefix('\n')
        .unwrap_or(remainder)
        .to_string()
}
