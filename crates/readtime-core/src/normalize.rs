//! Markup normalization.
//!
//! Reduces markup-laden content (HTML fragments with bracketed inline
//! macros, as produced by blog-style content pipelines) to plain readable
//! text suitable for word counting.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for `<script>` and `<style>` elements, contents included.
static SCRIPT_STYLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>").expect("valid regex")
});

/// Regex for a complete markup tag. Unterminated tags do not match and
/// are left in the text as-is.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("valid regex"));

/// Regex for a paired bracketed macro: `[tag]...[/tag]`, attributes allowed
/// on the opening tag. Opening and closing names are captured separately
/// because the names must agree before the pair is removed.
static PAIRED_MACRO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\[([a-z0-9_-]+)(?:\s[^\]]*)?\].*?\[/([a-z0-9_-]+)\]").expect("valid regex")
});

/// Regex for a lone bracketed macro tag: `[tag]`, `[tag attr="x"]`,
/// `[tag/]`, or a stray `[/tag]`.
static SINGLE_MACRO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[/?[a-z0-9_-]+(?:\s[^\]]*)?\]").expect("valid regex")
});

/// Regex for HTML character entities, named and numeric.
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#(x?[0-9a-fA-F]{1,7})|([a-zA-Z][a-zA-Z0-9]{1,31}));").expect("valid regex")
});

/// Regex for runs of Unicode whitespace.
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize markup-laden content to plain text.
///
/// Strips bracketed inline macros (paired forms together with their
/// enclosed content), `<script>`/`<style>` elements with their contents,
/// and structural markup tags; decodes character entities; collapses
/// whitespace runs and trims.
///
/// Total and deterministic: malformed or unterminated markup degrades
/// gracefully — whatever is recognizable is stripped, the rest stays as
/// literal text. Idempotent on text already free of markup.
#[tracing::instrument(skip_all, fields(input_len = raw.len()))]
pub fn normalize(raw: &str) -> String {
    let text = SCRIPT_STYLE_PATTERN.replace_all(raw, " ");
    let text = strip_paired_macros(&text);
    let text = SINGLE_MACRO_PATTERN.replace_all(&text, " ");
    let text = TAG_PATTERN.replace_all(&text, " ");
    let text = decode_entities(&text);
    let text = WHITESPACE_PATTERN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Remove paired macros whose opening and closing names agree.
///
/// The regex engine has no backreferences, so name agreement is checked
/// in the replacement callback; a mismatched pair is kept and its tags
/// fall through to the single-tag pass.
fn strip_paired_macros(text: &str) -> String {
    PAIRED_MACRO_PATTERN
        .replace_all(text, |caps: &Captures| {
            if caps[1].eq_ignore_ascii_case(&caps[2]) {
                " ".to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Decode named and numeric character entities.
///
/// Covers the named entities that show up in practice in exported
/// content; anything unrecognized passes through unchanged.
fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            if let Some(num) = caps.get(1) {
                decode_numeric_entity(num.as_str())
                    .map_or_else(|| caps[0].to_string(), String::from)
            } else {
                decode_named_entity(&caps[2]).map_or_else(|| caps[0].to_string(), String::from)
            }
        })
        .into_owned()
}

/// Decode `#NNN` / `#xHHH` entity bodies (the leading `#` already stripped).
fn decode_numeric_entity(body: &str) -> Option<char> {
    let code = if let Some(hex) = body.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code)
}

fn decode_named_entity(name: &str) -> Option<char> {
    // Entity names are case-sensitive per the HTML spec.
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "hellip" => '\u{2026}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        _ => return None,
    })
}
