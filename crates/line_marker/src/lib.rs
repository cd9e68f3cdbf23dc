// crates/line_marker/src/lib.rs

//! Single home for the marker literals shared across the cleaning
//! tool-chain.

/// Prefixes that exempt a line from allow-list validation. A line whose
/// whitespace-trimmed content starts with either marker is always kept,
/// whatever characters follow.
pub const KEEP_MARKERS: [&str; 2] = ["P1", "P2"];

/// The token a file is cut at in split mode. Splitting is purely
/// textual: **any** occurrence counts, not only occurrences at the start
/// of a line.
pub const SPLIT_MARKER: &str = "P1";
