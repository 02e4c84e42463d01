//! Display gating and host-integration helpers.
//!
//! The gate decides whether the auto-rendered estimate appears for a
//! given rendering context. Context is threaded in explicitly — there is
//! no ambient "current document" lookup anywhere in this crate.

use crate::estimate::{Estimate, Options, estimate};
use crate::hooks::Hooks;
use crate::render::{STYLESHEET, render_html, render_plain};

/// Which surface of the host is rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The public-facing site.
    Public,
    /// An administrative surface.
    Admin,
}

/// What kind of view is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// A single primary-content document.
    Single,
    /// A listing or archive of documents.
    Archive,
    /// Search results.
    Search,
    /// A syndication feed.
    Feed,
    /// Anything else.
    Other,
}

/// The rendering context the gate evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Surface being rendered.
    pub surface: Surface,
    /// View kind being rendered.
    pub view: View,
    /// Whether the body being rendered is the primary content type.
    pub primary_content: bool,
}

impl RenderContext {
    /// A single primary-content document on the public surface — the one
    /// context where the default policy displays the estimate.
    pub const fn single_public() -> Self {
        Self {
            surface: Surface::Public,
            view: View::Single,
            primary_content: true,
        }
    }

    /// An administrative context.
    pub const fn admin() -> Self {
        Self {
            surface: Surface::Admin,
            view: View::Other,
            primary_content: false,
        }
    }
}

/// Decide whether the auto-rendered estimate should appear.
///
/// Default policy: only a single, primary-content document view on the
/// public surface qualifies. The decision then runs through the
/// `display` chain, which may force it either way.
pub fn should_display(ctx: &RenderContext, hooks: &Hooks) -> bool {
    let default = ctx.surface == Surface::Public && ctx.view == View::Single && ctx.primary_content;
    hooks.apply_display(default, ctx)
}

/// Prepend the rendered estimate to a content body, once, when the gate
/// allows it.
///
/// When the gate says no, the body comes back untouched and no
/// normalization or counting happens at all — the gate is evaluated
/// before the calculator on this path.
#[tracing::instrument(skip_all, fields(body_len = body.len()))]
pub fn auto_prepend(body: &str, ctx: &RenderContext, opts: &Options, hooks: &Hooks) -> String {
    if !should_display(ctx, hooks) {
        return body.to_string();
    }
    let est = estimate(body, opts, hooks);
    let fragment = render_html(&est, &opts.labels, opts.show_word_count, hooks);
    format!("{fragment}\n{body}")
}

/// Shortcode-path entry point: estimate the given document content and
/// render it as bare text with an optional `before` prefix.
///
/// Unlike the auto-render path this always computes — an explicit
/// per-use invocation is never gated. `None` content (no current
/// document in the host) yields an empty string rather than failing the
/// surrounding render.
pub fn shortcode(content: Option<&str>, before: &str, opts: &Options, hooks: &Hooks) -> String {
    let Some(content) = content else {
        return String::new();
    };
    let est = estimate(content, opts, hooks);
    render_plain(before, &est, &opts.labels, hooks)
}

/// The default stylesheet, offered only when the gate passes for the
/// given context. Hosts that do their own styling ignore this entirely.
pub fn stylesheet_for(ctx: &RenderContext, hooks: &Hooks) -> Option<&'static str> {
    should_display(ctx, hooks).then_some(STYLESHEET)
}

/// Compute the estimate for a body without rendering, honoring the gate.
///
/// Returns `None` when the gate declines, so callers can skip downstream
/// work entirely.
pub fn gated_estimate(
    body: &str,
    ctx: &RenderContext,
    opts: &Options,
    hooks: &Hooks,
) -> Option<Estimate> {
    should_display(ctx, hooks).then(|| estimate(body, opts, hooks))
}
