//! Command-line interface implementation for foldergen.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_LOG_DIR, DEFAULT_SETTINGS_FILE};

/// Command-line arguments structure for foldergen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "foldergen: create folder trees from a YAML template and a CSV table of variables",
    long_about = None
)]
pub struct Args {
    /// Settings file, created with defaults when missing
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Directory the folder trees are created in (overrides the settings file)
    #[arg(long, value_name = "DIR")]
    pub creation_dir: Option<PathBuf>,

    /// Folder template (overrides the settings file)
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// CSV table of variables (overrides the settings file)
    #[arg(short, long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Directory receiving a log file per run
    #[arg(long, value_name = "DIR", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Log to the console only
    #[arg(long)]
    pub no_log_file: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
