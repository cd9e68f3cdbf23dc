// crates/clean_text/src/config.rs

use process_folder::Mode;

/// Centralized runtime configuration parsed from the CLI. Everything the
/// run needs is carried here explicitly; nothing lives in globals.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub input_dir: String,
    pub output_dir: String,
    pub mode: Mode,
    pub verbose: bool,
}
