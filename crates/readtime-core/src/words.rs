//! Word counting.

/// Count whitespace-delimited words in plain text.
///
/// Splits on maximal runs of Unicode whitespace (tab, newline, NBSP, and
/// the rest of the Space_Separator category) and counts the non-empty
/// segments. Codepoint-aware, not byte-aware: a multi-byte word counts
/// once.
///
/// Scripts that do not delimit words with whitespace (unsegmented CJK,
/// Thai, ...) undercount: a run of such text is one word. That matches
/// the whitespace-segmentation contract and is a documented limitation,
/// not a bug to fix here.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
