//! Estimate command — reading time for a file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readtime_core::{Config, Hooks, estimate, estimate_plain, markdown, render_plain};

use super::{is_markdown, read_input_file};

/// Arguments for the `estimate` subcommand.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// File to estimate.
    pub file: Utf8PathBuf,

    /// Reading rate in words per minute.
    #[arg(long)]
    pub wpm: Option<u32>,

    /// Display label override.
    #[arg(long)]
    pub label: Option<String>,

    /// Prefix for the text output (e.g. "Reading time:").
    #[arg(long, default_value = "")]
    pub before: String,
}

/// Estimate reading time for a file.
#[instrument(name = "cmd_estimate", skip_all, fields(file = %args.file))]
pub fn cmd_estimate(args: EstimateArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, wpm = ?args.wpm, "executing estimate command");

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

    if global_json {
        println!("{}", serde_json::to_string_pretty(&est)?);
    } else {
        let text = render_plain(&args.before, &est, &opts.labels, &hooks);
        println!(
            "{} {}",
            text.bold(),
            format!("({} words)", est.words).dimmed()
        );
    }

    Ok(())
}
