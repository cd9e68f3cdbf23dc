// crates/clean_text/src/lib.rs

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;

use process_folder::{process_folder, BatchSummary, FileOutcome, FolderConfig, Mode};

pub mod config;
pub use config::AppConfig;

/// Runs one batch described by `config` and returns its summary.
/// This is the whole of the business logic; the binary only parses
/// arguments and prints what comes back.
pub fn run(config: &AppConfig) -> Result<BatchSummary> {
    let folder_config = FolderConfig {
        input_dir: PathBuf::from(&config.input_dir),
        output_dir: PathBuf::from(&config.output_dir),
        mode: config.mode,
    };
    process_folder(&folder_config)
}

/// Renders the end-of-run report printed by the binary: processed count,
/// the mode-specific aggregate, and one line per failed file.
pub fn format_summary(mode: Mode, summary: &BatchSummary) -> String {
    let mut out = String::new();
    out.push_str("Processing complete!\n");
    let _ = writeln!(out, "Files processed: {}", summary.processed);
    match mode {
        Mode::Clean => {
            let _ = writeln!(out, "Total lines removed: {}", summary.total_count);
        }
        Mode::Split => {
            let _ = writeln!(out, "Total files written: {}", summary.total_count);
        }
    }
    if summary.failed > 0 {
        out.push_str("Errors encountered:\n");
        for report in &summary.reports {
            if let FileOutcome::Failed { message } = &report.outcome {
                let _ = writeln!(out, "  {}: {}", report.file_name, message);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use process_folder::FileReport;

    #[test]
    fn test_format_summary_clean_mode() {
        let summary = BatchSummary {
            processed: 2,
            failed: 0,
            total_count: 5,
            reports: Vec::new(),
        };
        let text = format_summary(Mode::Clean, &summary);
        assert!(text.contains("Files processed: 2"));
        assert!(text.contains("Total lines removed: 5"));
        assert!(!text.contains("Errors encountered"));
    }

    #[test]
    fn test_format_summary_split_mode_with_errors() {
        let summary = BatchSummary {
            processed: 1,
            failed: 1,
            total_count: 3,
            reports: vec![
                FileReport {
                    file_name: "good.txt".to_string(),
                    outcome: FileOutcome::Processed { count: 3 },
                },
                FileReport {
                    file_name: "bad.txt".to_string(),
                    outcome: FileOutcome::Failed {
                        message: "permission denied".to_string(),
                    },
                },
            ],
        };
        let text = format_summary(Mode::Split, &summary);
        assert!(text.contains("Total files written: 3"));
        assert!(text.contains("Errors encountered:"));
        assert!(text.contains("  bad.txt: permission denied"));
        assert!(!text.contains("good.txt:"));
    }
}
