//! Logger setup: console output plus an optional per-run log file.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;

/// Writes every log line to stderr and to the run's log file.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Path of a new log file in `log_dir`, named after the current local time.
pub fn log_file_path<P: AsRef<Path>>(log_dir: P) -> PathBuf {
    log_dir.as_ref().join(Local::now().format("log-%Y-%m-%d-%H-%M-%S.txt").to_string())
}

/// Installs the global logger.
///
/// Logs at `Info`, or `Debug` when `verbose`. With a `log_dir` the same lines
/// also go to a fresh file in that directory, whose path is returned.
pub fn init_logger(verbose: bool, log_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format(|buf, record| {
            writeln!(buf, "{} - {}", Local::now().format("%d-%b-%y %H:%M:%S"), record.args())
        });

    let log_file = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let path = log_file_path(dir);
            let file = File::create(&path)?;
            builder.target(env_logger::Target::Pipe(Box::new(Tee { file })));
            Some(path)
        }
        None => None,
    };

    builder.init();
    Ok(log_file)
}
