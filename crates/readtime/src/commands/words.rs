//! Words command — word count for a file.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use readtime_core::{count_words, markdown, normalize};

use super::{is_markdown, read_input_file};

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// File to count words in.
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct WordReport {
    words: usize,
}

/// Count the words in a file, after markup stripping.
#[instrument(name = "cmd_words", skip_all, fields(file = %args.file))]
pub fn cmd_words(args: WordsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing words command");

    let content = read_input_file(&args.file)?;

    let text = if is_markdown(&args.file) {
        markdown::strip_to_prose(&content)
    } else {
        normalize(&content)
    };
    let words = count_words(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&WordReport { words })?);
    } else {
        println!("{words}");
    }

    Ok(())
}
