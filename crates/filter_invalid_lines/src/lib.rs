// crates/filter_invalid_lines/src/lib.rs

use once_cell::sync::Lazy;
use regex::Regex;

use line_marker::KEEP_MARKERS;

// Matches lines consisting solely of allow-listed characters: ASCII
// letters, digits, the punctuation set +-_:;,.=/\*() plus space, tab,
// newline and carriage return.
static ALLOWED_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+\-_:;,.=/\\*() \t\n\r]*$").unwrap());

/// Result of filtering one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// The kept lines, concatenated in their original order.
    pub content: String,
    /// Number of lines dropped for containing a disallowed character.
    pub lines_removed: usize,
}

/// Returns `true` if the line survives validation.
///
/// A line whose trimmed content starts with one of the keep markers
/// ("P1"/"P2") is kept unconditionally; its content is not inspected
/// further. Every other line must consist solely of allow-listed
/// characters.
pub fn is_line_valid(line: &str) -> bool {
    let trimmed = line.trim();
    if KEEP_MARKERS.iter().any(|marker| trimmed.starts_with(marker)) {
        return true;
    }
    ALLOWED_LINE_RE.is_match(line)
}

/// Filters `content` line by line, keeping only lines that pass
/// [`is_line_valid`].
///
/// Lines keep their terminators attached, so the output is a prefix-
/// preserving subsequence of the input: no line is reordered, merged or
/// partially repaired — a line with a single disallowed character is
/// dropped whole. A final line without a trailing newline keeps that
/// shape.
pub fn filter_invalid_lines(content: &str) -> FilterOutcome {
    let mut kept = String::with_capacity(content.len());
    let mut lines_removed = 0;

    for line in content.split_inclusive('\n') {
        if is_line_valid(line) {
            kept.push_str(line);
        } else {
            lines_removed += 1;
        }
    }

    FilterOutcome {
        content: kept,
        lines_removed,
    }
}
