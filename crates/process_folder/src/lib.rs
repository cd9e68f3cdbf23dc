// crates/process_folder/src/lib.rs

//! Batch orchestration: applies one of the per-file operations to every
//! regular file directly inside an input folder, isolating failures per
//! file so one unreadable file never aborts the rest of the run.

pub mod processor;

use std::path::PathBuf;

use anyhow::Result;
use walkdir::WalkDir;

pub use processor::{clean_file, split_file, FileProcessor, LineCleaner, MarkerSplitter};

/// Which operation the batch applies to each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Drop lines containing disallowed characters.
    Clean,
    /// Cut files into segments at marker boundaries.
    Split,
}

impl Mode {
    /// Returns the processor implementing this mode.
    pub fn processor(self) -> &'static dyn FileProcessor {
        match self {
            Mode::Clean => &LineCleaner,
            Mode::Split => &MarkerSplitter,
        }
    }
}

/// Explicit batch configuration: where to read, where to write, what to
/// do. Passed into the processing functions instead of living in any
/// interactive front end.
#[derive(Debug, Clone)]
pub struct FolderConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub mode: Mode,
}

/// Outcome of processing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file went through; `count` is lines removed in clean mode and
    /// files written in split mode.
    Processed { count: usize },
    /// Reading or writing this file failed; the batch carried on.
    Failed { message: String },
}

/// One file's name paired with what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: FileOutcome,
}

/// Aggregated result of one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Files processed without error.
    pub processed: usize,
    /// Files that failed to read or write.
    pub failed: usize,
    /// Sum of the per-file counts (lines removed / files written).
    pub total_count: usize,
    /// Per-file reports, in processing order.
    pub reports: Vec<FileReport>,
}

/// Runs `config.mode`'s operation over every regular file directly
/// inside `config.input_dir`; results land in `config.output_dir`.
pub fn process_folder(config: &FolderConfig) -> Result<BatchSummary> {
    process_folder_with(config.mode.processor(), config)
}

/// Like [`process_folder`], but with an explicit processor.
///
/// Subdirectories are not descended into. Files are visited in sorted
/// name order so summaries are deterministic. A failure on one file is
/// recorded in the summary and does not stop the batch; the only errors
/// returned from this function are the up-front directory checks, which
/// abort before any file is touched.
pub fn process_folder_with(
    processor: &dyn FileProcessor,
    config: &FolderConfig,
) -> Result<BatchSummary> {
    if !config.input_dir.is_dir() {
        return Err(anyhow::anyhow!(
            "Input folder does not exist: {}",
            config.input_dir.display()
        ));
    }
    if !config.output_dir.is_dir() {
        return Err(anyhow::anyhow!(
            "Output folder does not exist: {}",
            config.output_dir.display()
        ));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(&config.input_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    let mut summary = BatchSummary::default();
    for path in files {
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("<non-utf8 name>")
            .to_string();

        let outcome = match processor.process(&path, &config.output_dir) {
            Ok(count) => {
                summary.processed += 1;
                summary.total_count += count;
                FileOutcome::Processed { count }
            }
            Err(err) => {
                summary.failed += 1;
                log::warn!("Error processing {}: {:#}", file_name, err);
                FileOutcome::Failed {
                    message: format!("{:#}", err),
                }
            }
        };
        summary.reports.push(FileReport { file_name, outcome });
    }

    Ok(summary)
}
