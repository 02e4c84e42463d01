//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod estimate;
pub mod info;
pub mod render;
pub mod words;

/// Input size cap: 5 MiB. Prose bodies are orders of magnitude smaller;
/// anything bigger is almost certainly a mistake.
const MAX_INPUT_BYTES: u64 = 5 * 1024 * 1024;

/// Read a file and validate its size against the input cap.
///
/// Combines the file-read and size-validation steps that every command
/// needs.
pub fn read_input_file(path: &Utf8Path) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let size = metadata.len();
    if size > MAX_INPUT_BYTES {
        anyhow::bail!("input too large: {path} is {size} bytes (limit: {MAX_INPUT_BYTES} bytes)");
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Whether a path should get the Markdown pass instead of the HTML
/// normalizer.
pub fn is_markdown(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("md" | "markdown"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_extensions_detected() {
        assert!(is_markdown(Utf8Path::new("post.md")));
        assert!(is_markdown(Utf8Path::new("post.markdown")));
        assert!(!is_markdown(Utf8Path::new("post.html")));
        assert!(!is_markdown(Utf8Path::new("post")));
    }
}
