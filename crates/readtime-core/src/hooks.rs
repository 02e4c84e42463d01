//! Extension points for the estimation pipeline.
//!
//! Each named point holds an ordered chain of pure transform functions.
//! The pipeline seeds a chain with its default value and runs the stages
//! in registration order, each stage receiving the prior stage's output.
//! Hooks are injected explicitly wherever they are consumed; there is no
//! ambient registry.

use std::fmt;

use crate::estimate::Estimate;
use crate::gate::RenderContext;

type RateHook = Box<dyn Fn(u32) -> u32 + Send + Sync>;
type EstimateHook = Box<dyn Fn(Estimate) -> Estimate + Send + Sync>;
type LabelHook = Box<dyn Fn(String) -> String + Send + Sync>;
type OutputHook = Box<dyn Fn(String, &Estimate) -> String + Send + Sync>;
type DisplayHook = Box<dyn Fn(bool, &RenderContext) -> bool + Send + Sync>;

/// Registered transform chains for every extension point.
///
/// All transforms are expected to be pure; the pipeline re-evaluates them
/// on every call rather than caching their results, so a host can swap
/// behavior between invocations by supplying a different `Hooks` value.
#[derive(Default)]
pub struct Hooks {
    rate: Vec<RateHook>,
    estimate: Vec<EstimateHook>,
    label: Vec<LabelHook>,
    html_output: Vec<OutputHook>,
    shortcode_output: Vec<OutputHook>,
    display: Vec<DisplayHook>,
}

impl Hooks {
    /// Empty hook set: every chain is the identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a words-per-minute transform.
    pub fn with_rate(mut self, f: impl Fn(u32) -> u32 + Send + Sync + 'static) -> Self {
        self.rate.push(Box::new(f));
        self
    }

    /// Register a transform over the computed estimate, applied before
    /// any formatting.
    pub fn with_estimate(
        mut self,
        f: impl Fn(Estimate) -> Estimate + Send + Sync + 'static,
    ) -> Self {
        self.estimate.push(Box::new(f));
        self
    }

    /// Register a display-label transform.
    pub fn with_label(mut self, f: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.label.push(Box::new(f));
        self
    }

    /// Register a transform over the final HTML fragment.
    pub fn with_html_output(
        mut self,
        f: impl Fn(String, &Estimate) -> String + Send + Sync + 'static,
    ) -> Self {
        self.html_output.push(Box::new(f));
        self
    }

    /// Register a transform over the final shortcode text.
    pub fn with_shortcode_output(
        mut self,
        f: impl Fn(String, &Estimate) -> String + Send + Sync + 'static,
    ) -> Self {
        self.shortcode_output.push(Box::new(f));
        self
    }

    /// Register a transform over the display-gate decision.
    pub fn with_display(
        mut self,
        f: impl Fn(bool, &RenderContext) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.display.push(Box::new(f));
        self
    }

    pub(crate) fn apply_rate(&self, seed: u32) -> u32 {
        self.rate.iter().fold(seed, |value, f| f(value))
    }

    pub(crate) fn apply_estimate(&self, seed: Estimate) -> Estimate {
        self.estimate.iter().fold(seed, |value, f| f(value))
    }

    pub(crate) fn apply_label(&self, seed: String) -> String {
        self.label.iter().fold(seed, |value, f| f(value))
    }

    pub(crate) fn apply_html_output(&self, seed: String, estimate: &Estimate) -> String {
        self.html_output
            .iter()
            .fold(seed, |value, f| f(value, estimate))
    }

    pub(crate) fn apply_shortcode_output(&self, seed: String, estimate: &Estimate) -> String {
        self.shortcode_output
            .iter()
            .fold(seed, |value, f| f(value, estimate))
    }

    pub(crate) fn apply_display(&self, seed: bool, ctx: &RenderContext) -> bool {
        self.display.iter().fold(seed, |value, f| f(value, ctx))
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("rate", &self.rate.len())
            .field("estimate", &self.estimate.len())
            .field("label", &self.label.len())
            .field("html_output", &self.html_output.len())
            .field("shortcode_output", &self.shortcode_output.len())
            .field("display", &self.display.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chains_are_identity() {
        let hooks = Hooks::new();
        assert_eq!(hooks.apply_rate(200), 200);
        assert_eq!(hooks.apply_label("Read time".to_string()), "Read time");
        let est = Estimate {
            minutes: 2,
            words: 300,
        };
        assert_eq!(hooks.apply_estimate(est), est);
    }

    #[test]
    fn rate_chain_replaces_value() {
        let hooks = Hooks::new().with_rate(|_| 100);
        assert_eq!(hooks.apply_rate(200), 100);
    }

    #[test]
    fn chains_run_in_registration_order() {
        let hooks = Hooks::new().with_rate(|r| r + 10).with_rate(|r| r * 2);
        assert_eq!(hooks.apply_rate(100), 220);
    }

    #[test]
    fn output_chain_sees_estimate() {
        let hooks = Hooks::new()
            .with_shortcode_output(|text, est| format!("{text} [{} words]", est.words));
        let est = Estimate {
            minutes: 1,
            words: 42,
        };
        assert_eq!(
            hooks.apply_shortcode_output("1 min".to_string(), &est),
            "1 min [42 words]"
        );
    }

    #[test]
    fn display_chain_can_force_enable() {
        let hooks = Hooks::new().with_display(|_, _| true);
        let ctx = RenderContext::admin();
        assert!(hooks.apply_display(false, &ctx));
    }
}
