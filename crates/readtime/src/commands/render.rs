//! Render command — the reading-time fragment for a file.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use readtime_core::{
    Config, Estimate, Hooks, STYLESHEET, estimate, estimate_plain, markdown, render_html,
    render_plain,
};

use super::{is_markdown, read_input_file};

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// File to render an estimate for.
    pub file: Utf8PathBuf,

    /// Reading rate in words per minute.
    #[arg(long)]
    pub wpm: Option<u32>,

    /// Display label override.
    #[arg(long)]
    pub label: Option<String>,

    /// Emit bare text (shortcode style) instead of an HTML fragment.
    #[arg(long)]
    pub plain: bool,

    /// Prefix for plain output (e.g. "Reading time:").
    #[arg(long, default_value = "")]
    pub before: String,

    /// Include the default stylesheet in a <style> element.
    #[arg(long, conflicts_with = "plain")]
    pub css: bool,
}

#[derive(Serialize)]
struct RenderReport {
    output: String,
    #[serde(flatten)]
    estimate: Estimate,
}

/// Render the reading-time fragment for a file.
#[instrument(name = "cmd_render", skip_all, fields(file = %args.file, plain = args.plain))]
pub fn cmd_render(args: RenderArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, plain = args.plain, "executing render command");

    let content = read_input_file(&args.file)?;

    let mut opts = config.options();
    if let Some(wpm) = args.wpm {
        opts.rate = wpm;
    }
    if let Some(label) = args.label {
        opts.labels.display = label;
    }

    let hooks = Hooks::new();
    let est = if is_markdown(&args.file) {
        let prose = markdown::strip_to_prose(&content);
        estimate_plain(&prose, &opts, &hooks)
    } else {
        estimate(&content, &opts, &hooks)
    };

    let mut output = if args.plain {
        render_plain(&args.before, &est, &opts.labels, &hooks)
    } else {
        render_html(&est, &opts.labels, opts.show_word_count, &hooks)
    };
    if args.css {
        output = format!("<style>\n{STYLESHEET}</style>\n{output}");
    }

    if global_json {
        let report = RenderReport {
            output,
            estimate: est,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{output}");
    }

    Ok(())
}
