//! Core library for readtime.
//!
//! Estimates reading time for a body of text: markup-laden content is
//! normalized to plain text, words are counted in a Unicode-correct way,
//! and the count is converted to a human-readable duration at a
//! configurable words-per-minute rate.
//!
//! Host integration happens through explicit extension points: every
//! overridable value (rate, estimate, label, final output, display
//! decision) is an ordered chain of pure transforms carried in a
//! [`Hooks`] value, and rendering context is threaded in as a
//! [`RenderContext`] parameter. Nothing is global, cached, or fallible
//! on the estimation path.
//!
//! # Quick Start
//!
//! ```
//! use readtime_core::{Hooks, Options, estimate, render_plain};
//!
//! let opts = Options::default();
//! let hooks = Hooks::new();
//! let est = estimate("<p>Hello [note]ignored[/note] world</p>", &opts, &hooks);
//! assert_eq!(est.words, 2);
//! assert_eq!(render_plain("", &est, &opts.labels, &hooks), "1 min");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod estimate;
pub mod gate;
pub mod hooks;
pub mod markdown;
pub mod normalize;
pub mod render;
pub mod words;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use estimate::{DEFAULT_WPM, Estimate, Options, estimate, estimate_plain, reading_rate};
pub use gate::{RenderContext, Surface, View, auto_prepend, shortcode, should_display};
pub use hooks::Hooks;
pub use normalize::normalize;
pub use render::{DEFAULT_LABEL, Labels, STYLESHEET, minute_text, render_html, render_plain};
pub use words::count_words;

#[cfg(test)]
mod tests {
    use super::*;

    // End-to-end checks spanning the whole pipeline.

    #[test]
    fn word_count_zero_iff_normalized_empty() {
        for raw in ["", "   ", "<p></p>", "[hr/]", "<p>one</p>", "x"] {
            let text = normalize(raw);
            assert_eq!(count_words(&text) == 0, text.is_empty(), "raw = {raw:?}");
        }
    }

    #[test]
    fn shortcode_scenario_fifty_word_post() {
        let body = (0..50)
            .map(|i| format!("word{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let out = shortcode(
            Some(&body),
            "Reading time: ",
            &Options::default(),
            &Hooks::new(),
        );
        assert_eq!(out, "Reading time: 1 min");
    }

    #[test]
    fn auto_render_pipeline_end_to_end() {
        let body = (0..401)
            .map(|i| format!("word{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let out = auto_prepend(
            &body,
            &RenderContext::single_public(),
            &Options::default(),
            &Hooks::new(),
        );
        assert!(out.contains("3 mins"));
        assert!(out.contains("(401 words)"));
    }

    #[test]
    fn config_feeds_the_pipeline() {
        let config = Config {
            words_per_minute: Some(100),
            ..Config::default()
        };
        let body = (0..250).map(|_| "w").collect::<Vec<_>>().join(" ");
        let est = estimate(&body, &config.options(), &Hooks::new());
        assert_eq!(est.minutes, 3);
        assert_eq!(est.words, 250);
    }
}
