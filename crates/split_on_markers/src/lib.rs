// crates/split_on_markers/src/lib.rs

use std::path::Path;

use line_marker::SPLIT_MARKER;

/// Cuts `content` at every literal occurrence of the split marker and
/// re-prepends the marker to each retained segment, so each segment is a
/// complete file body of its own.
///
/// The leading segment is discarded when it is empty or whitespace-only
/// (the file began with the marker); a non-empty prefix before the first
/// marker is retained like any other segment. Content with no marker at
/// all yields no segments — the file has nothing to split on, and a
/// warning is logged so it does not vanish silently.
pub fn split_on_markers(content: &str) -> Vec<String> {
    if !content.contains(SPLIT_MARKER) {
        log::warn!("no '{}' marker found; produced no segments", SPLIT_MARKER);
        return Vec::new();
    }

    let mut segments = Vec::new();
    for (i, segment) in content.split(SPLIT_MARKER).enumerate() {
        if i == 0 && segment.trim().is_empty() {
            continue;
        }
        segments.push(format!("{}{}", SPLIT_MARKER, segment));
    }
    segments
}

/// Derives the output file name for the `index`-th segment (1-based) of
/// `original`: the sequence number is inserted between base name and
/// extension, e.g. `match.txt` → `match_1.txt`.
pub fn segment_file_name(original: &Path, index: usize) -> String {
    let stem = original
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("segment");
    match original.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, index, ext),
        None => format!("{}_{}", stem, index),
    }
}
