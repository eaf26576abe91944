//! foldergen's main application entry point.
//! Parses arguments, sets up logging and runs the expansion.

use foldergen::{
    cli::{get_args, Args},
    config::Settings,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor,
    report::LogReporter,
};
use log::{debug, info};
use std::time::Instant;

/// Main application entry point.
fn main() {
    let args = get_args();

    let log_dir = (!args.no_log_file).then_some(args.log_dir.as_path());
    match init_logger(args.verbose, log_dir) {
        Ok(Some(log_file)) => debug!("Logging to '{}'.", log_file.display()),
        Ok(None) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }

    info!("Program started.");
    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads settings, creating the settings file on first run
/// 2. Applies command-line overrides
/// 3. Loads the template and rows and expands every row
/// 4. Reports the totals, timed from before the settings were read
fn run(args: Args) -> Result<()> {
    let started = Instant::now();
    let settings = Settings::load_or_create(&args.settings)?.with_overrides(
        args.creation_dir,
        args.template,
        args.csv,
    );

    processor::run(&settings, &LogReporter::new(), started)?;
    Ok(())
}
