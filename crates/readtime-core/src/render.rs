//! Output formatting.
//!
//! Builds the user-facing strings for an estimate: the pluralized minute
//! text, the accessible HTML fragment for auto-rendering, and the bare
//! text used by the shortcode path. The formatter depends on an
//! injectable string table ([`Labels`]) rather than any localization
//! machinery.

use crate::estimate::Estimate;
use crate::hooks::Hooks;

/// Default display label shown next to the minute text.
pub const DEFAULT_LABEL: &str = "Read time";

/// Inert default styling for the HTML fragment.
///
/// Purely optional: hosts may feed this to their style pipeline or skip
/// it entirely without affecting anything else in the crate.
pub const STYLESHEET: &str = "\
.readtime {
  display: inline-flex;
  align-items: baseline;
  gap: 0.35em;
}
.readtime-label {
  font-weight: 600;
}
.readtime-minutes {
  font-style: normal;
}
.readtime .screen-reader-text {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
}
";

/// String table for the formatter.
///
/// `pluralize` maps a minute count to the singular or plural form; swap
/// the fields to relabel or translate without touching the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Display label for the HTML fragment.
    pub display: String,
    /// Unit for exactly one minute ("min").
    pub minute_singular: String,
    /// Unit for any other count ("mins").
    pub minute_plural: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            display: DEFAULT_LABEL.to_string(),
            minute_singular: "min".to_string(),
            minute_plural: "mins".to_string(),
        }
    }
}

impl Labels {
    /// Pick the minute-unit form for a count. Exactly 1 is singular;
    /// everything else — including a defensive 0 — is plural.
    pub fn pluralize(&self, minutes: u32) -> &str {
        if minutes == 1 {
            &self.minute_singular
        } else {
            &self.minute_plural
        }
    }
}

/// Format a minute count as display text: "1 min", "4 mins".
pub fn minute_text(minutes: u32, labels: &Labels) -> String {
    format!("{minutes} {}", labels.pluralize(minutes))
}

/// Escape text for interpolation into an HTML context.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the estimate as an accessible HTML fragment.
///
/// The fragment carries the display label (after the label chain), the
/// emphasized minute text, and — unless disabled — a visually-hidden
/// word-count annotation. All interpolated text is escaped. The result
/// runs through the `html_output` chain before being returned.
#[tracing::instrument(skip_all, fields(minutes = estimate.minutes, words = estimate.words))]
pub fn render_html(
    estimate: &Estimate,
    labels: &Labels,
    show_word_count: bool,
    hooks: &Hooks,
) -> String {
    let label = hooks.apply_label(labels.display.clone());
    let minutes = minute_text(estimate.minutes, labels);

    let mut html = format!(
        "<span class=\"readtime\" role=\"note\" aria-label=\"Estimated reading time\">\
         <span class=\"readtime-label\">{}</span> \
         <em class=\"readtime-minutes\">{}</em>",
        escape_html(&label),
        escape_html(&minutes),
    );
    if show_word_count {
        html.push_str(&format!(
            " <span class=\"screen-reader-text\">({} words)</span>",
            estimate.words
        ));
    }
    html.push_str("</span>");

    hooks.apply_html_output(html, estimate)
}

/// Render the estimate as bare text for the shortcode path.
///
/// A non-empty `before` prefix (after trimming) is prepended with a
/// single space; no word count, no markup. The result runs through the
/// `shortcode_output` chain.
#[tracing::instrument(skip_all, fields(minutes = estimate.minutes))]
pub fn render_plain(before: &str, estimate: &Estimate, labels: &Labels, hooks: &Hooks) -> String {
    let minutes = minute_text(estimate.minutes, labels);
    let before = before.trim();
    let text = if before.is_empty() {
        minutes
    } else {
        format!("{before} {minutes}")
    };

    hooks.apply_shortcode_output(text, estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn est(minutes: u32, words: usize) -> Estimate {
        Estimate { minutes, words }
    }

    #[test]
    fn singular_minute() {
        assert_eq!(minute_text(1, &Labels::default()), "1 min");
    }

    #[test]
    fn plural_minutes() {
        assert_eq!(minute_text(2, &Labels::default()), "2 mins");
        assert_eq!(minute_text(15, &Labels::default()), "15 mins");
    }

    #[test]
    fn zero_minutes_is_plural() {
        // Unreachable through the calculator, handled anyway.
        assert_eq!(minute_text(0, &Labels::default()), "0 mins");
    }

    #[test]
    fn custom_string_table() {
        let labels = Labels {
            display: "Lesezeit".to_string(),
            minute_singular: "Minute".to_string(),
            minute_plural: "Minuten".to_string(),
        };
        assert_eq!(minute_text(1, &labels), "1 Minute");
        assert_eq!(minute_text(3, &labels), "3 Minuten");
    }

    #[test]
    fn escapes_html_specials() {
        assert_eq!(
            escape_html(r#"<b>&"x"'y'</b>"#),
            "&lt;b&gt;&amp;&quot;x&quot;&#39;y&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn html_fragment_structure() {
        let html = render_html(&est(4, 780), &Labels::default(), true, &Hooks::new());
        assert!(html.starts_with("<span class=\"readtime\""));
        assert!(html.contains("role=\"note\""));
        assert!(html.contains("<span class=\"readtime-label\">Read time</span>"));
        assert!(html.contains("<em class=\"readtime-minutes\">4 mins</em>"));
        assert!(html.contains("(780 words)"));
        assert!(html.ends_with("</span>"));
    }

    #[test]
    fn html_word_count_can_be_disabled() {
        let html = render_html(&est(4, 780), &Labels::default(), false, &Hooks::new());
        assert!(!html.contains("780"));
    }

    #[test]
    fn html_escapes_hostile_label() {
        let labels = Labels {
            display: "<script>alert(1)</script>".to_string(),
            ..Labels::default()
        };
        let html = render_html(&est(1, 10), &labels, true, &Hooks::new());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn html_label_chain_applies_before_escaping() {
        let hooks = Hooks::new().with_label(|_| "Time & effort".to_string());
        let html = render_html(&est(1, 10), &Labels::default(), true, &hooks);
        assert!(html.contains("Time &amp; effort"));
    }

    #[test]
    fn html_output_chain_has_final_say() {
        let hooks = Hooks::new().with_html_output(|_, e| format!("<!-- {} -->", e.minutes));
        let html = render_html(&est(2, 300), &Labels::default(), true, &hooks);
        assert_eq!(html, "<!-- 2 -->");
    }

    #[test]
    fn plain_without_prefix() {
        assert_eq!(
            render_plain("", &est(1, 50), &Labels::default(), &Hooks::new()),
            "1 min"
        );
    }

    #[test]
    fn plain_with_prefix_is_trimmed_and_separated() {
        assert_eq!(
            render_plain("Reading time: ", &est(1, 50), &Labels::default(), &Hooks::new()),
            "Reading time: 1 min"
        );
    }

    #[test]
    fn plain_whitespace_prefix_is_dropped() {
        assert_eq!(
            render_plain("   ", &est(2, 400), &Labels::default(), &Hooks::new()),
            "2 mins"
        );
    }

    #[test]
    fn plain_never_shows_word_count() {
        let text = render_plain("", &est(3, 550), &Labels::default(), &Hooks::new());
        assert!(!text.contains("550"));
    }

    #[test]
    fn shortcode_output_chain_has_final_say() {
        let hooks = Hooks::new().with_shortcode_output(|t, _| format!("~{t}~"));
        assert_eq!(
            render_plain("", &est(1, 10), &Labels::default(), &hooks),
            "~1 min~"
        );
    }

    #[test]
    fn stylesheet_mentions_fragment_classes() {
        assert!(STYLESHEET.contains(".readtime"));
        assert!(STYLESHEET.contains(".readtime-label"));
        assert!(STYLESHEET.contains(".screen-reader-text"));
    }
}
