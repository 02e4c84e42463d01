//! Reading-time calculation.
//!
//! Converts normalized text into a `{minutes, words}` estimate using a
//! configurable words-per-minute rate. Every operation here is total:
//! degenerate inputs get defensive floors (rate clamped to 1, minutes
//! floored at 1) instead of error values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::hooks::Hooks;
use crate::normalize::normalize;
use crate::render::Labels;
use crate::words::count_words;

/// Default reading rate in words per minute.
pub const DEFAULT_WPM: u32 = 200;

/// A computed reading-time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Estimate {
    /// Estimated reading time in whole minutes, never below 1.
    pub minutes: u32,
    /// Number of whitespace-delimited words counted.
    pub words: usize,
}

/// Per-invocation settings for the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Words-per-minute rate, before the rate chain runs over it.
    pub rate: u32,
    /// Display label and minute-text forms.
    pub labels: Labels,
    /// Include the visually-hidden word-count annotation in HTML output.
    pub show_word_count: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rate: DEFAULT_WPM,
            labels: Labels::default(),
            show_word_count: true,
        }
    }
}

/// Resolve the effective words-per-minute rate.
///
/// Runs the rate chain over the configured value, then clamps to a
/// minimum of 1 so a zero or wrapped-negative override can never divide
/// by zero. Evaluated fresh on every call — never cached — so dynamic
/// overrides take effect immediately.
pub fn reading_rate(configured: u32, hooks: &Hooks) -> u32 {
    hooks.apply_rate(configured).max(1)
}

/// Minutes needed to read `words` words at `rate` WPM: `max(1, ceil(w/r))`.
///
/// The floor of 1 is deliberate: zero-word content still reports one
/// minute rather than a "0 min" display.
pub fn minutes_for(words: usize, rate: u32) -> u32 {
    let rate = rate.max(1) as usize;
    u32::try_from(words.div_ceil(rate)).unwrap_or(u32::MAX).max(1)
}

/// Estimate reading time for markup-laden content.
///
/// Normalizes, counts words, resolves the rate through the rate chain,
/// computes minutes, and runs the result through the estimate chain.
#[tracing::instrument(skip(raw, hooks), fields(input_len = raw.len()))]
pub fn estimate(raw: &str, opts: &Options, hooks: &Hooks) -> Estimate {
    let text = normalize(raw);
    estimate_plain(&text, opts, hooks)
}

/// Estimate reading time for text that is already plain.
///
/// Same pipeline as [`estimate`] minus the markup-stripping pass; used
/// for sources normalized elsewhere (e.g. Markdown via
/// [`crate::markdown::strip_to_prose`]).
pub fn estimate_plain(text: &str, opts: &Options, hooks: &Hooks) -> Estimate {
    let words = count_words(text);
    let rate = reading_rate(opts.rate, hooks);
    let seed = Estimate {
        minutes: minutes_for(words, rate),
        words,
    };
    hooks.apply_estimate(seed)
}
