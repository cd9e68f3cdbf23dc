// crates/process_folder/src/processor.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use filter_invalid_lines::filter_invalid_lines;
use split_on_markers::{segment_file_name, split_on_markers};

/// Trait that abstracts processing of one input file into an output
/// directory.
///
/// Implementations return a mode-specific count: lines removed for the
/// cleaner, files written for the splitter.
pub trait FileProcessor {
    fn process(&self, input: &Path, output_dir: &Path) -> Result<usize>;
}

/// Reads a file as UTF-8, substituting the replacement character for
/// undecodable bytes instead of failing the whole file.
fn read_lossy(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Runs the line filter over `input` and writes the kept lines to a file
/// of the same name inside `output_dir`. Returns the number of lines
/// removed.
pub fn clean_file(input: &Path, output_dir: &Path) -> Result<usize> {
    let content = read_lossy(input)?;
    let outcome = filter_invalid_lines(&content);

    let file_name = input
        .file_name()
        .with_context(|| format!("Input path has no file name: {}", input.display()))?;
    let output_path = output_dir.join(file_name);
    fs::write(&output_path, outcome.content.as_bytes())
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    log::debug!(
        "{}: removed {} line(s)",
        input.display(),
        outcome.lines_removed
    );
    Ok(outcome.lines_removed)
}

/// Cuts `input` at marker boundaries and writes each segment as its own
/// file inside `output_dir`, numbered in original order. Returns the
/// number of files written.
pub fn split_file(input: &Path, output_dir: &Path) -> Result<usize> {
    let content = read_lossy(input)?;
    let segments = split_on_markers(&content);

    for (i, segment) in segments.iter().enumerate() {
        let output_path = output_dir.join(segment_file_name(input, i + 1));
        fs::write(&output_path, segment.as_bytes())
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
    }

    log::debug!(
        "{}: wrote {} segment file(s)",
        input.display(),
        segments.len()
    );
    Ok(segments.len())
}

/// Default cleaning processor; see [`clean_file`].
pub struct LineCleaner;

impl FileProcessor for LineCleaner {
    fn process(&self, input: &Path, output_dir: &Path) -> Result<usize> {
        clean_file(input, output_dir)
    }
}

/// Default splitting processor; see [`split_file`].
pub struct MarkerSplitter;

impl FileProcessor for MarkerSplitter {
    fn process(&self, input: &Path, output_dir: &Path) -> Result<usize> {
        split_file(input, output_dir)
    }
}
