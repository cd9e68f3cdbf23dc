// crates/clean_text/src/main.rs

use anyhow::Result;
use clap::{Arg, Command};

use clean_text::{config::AppConfig, format_summary, run};
use process_folder::Mode;

fn main() -> Result<()> {
    let matches = Command::new("clean_text")
        .version("0.1.0")
        .about("Batch-cleans text files by dropping lines with disallowed characters, or splits them at marker boundaries")
        .arg(
            Arg::new("input")
                .long("input")
                .num_args(1)
                .required(true)
                .help("Folder whose files are processed (non-recursive)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .num_args(1)
                .required(true)
                .help("Folder the results are written into"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .num_args(1)
                .default_value("clean")
                .value_parser(["clean", "split"])
                .help("clean: drop invalid lines; split: cut files at marker boundaries"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let verbose = *matches.get_one::<bool>("verbose").unwrap();
    env_logger::Builder::from_default_env()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let mode = match matches.get_one::<String>("mode").unwrap().as_str() {
        "split" => Mode::Split,
        _ => Mode::Clean,
    };

    let config = AppConfig {
        input_dir: matches.get_one::<String>("input").unwrap().clone(),
        output_dir: matches.get_one::<String>("output").unwrap().clone(),
        mode,
        verbose,
    };

    let summary = run(&config)?;
    print!("{}", format_summary(config.mode, &summary));

    Ok(())
}
