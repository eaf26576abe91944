//! Error handling for the foldergen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for foldergen operations.
///
/// Missing variables and false conditions are not errors: the expander
/// prunes the affected subtree and reports it. Everything in this enum
/// aborts the operation that raised it.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors while parsing YAML (template or settings)
    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// Represents errors while parsing or writing JSON settings
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors while reading or writing the variables CSV
    #[error("CSV error: {0}.")]
    CsvError(#[from] csv::Error),

    /// A `$(...)` placeholder whose contents are not of the form `kind=name`
    #[error("Malformed placeholder '$({placeholder})' in '{pattern}': {reason}.")]
    MalformedPlaceholder { placeholder: String, pattern: String, reason: String },

    /// A placeholder whose kind is neither `foldername` nor `condition`
    #[error("Unknown placeholder kind '{kind}' in '{pattern}' (expected 'foldername' or 'condition').")]
    UnknownPlaceholderKind { kind: String, pattern: String },

    /// A substitution was attempted without a value for a referenced variable
    #[error("Unresolved reference '{name}' in '{pattern}'.")]
    UnresolvedReference { name: String, pattern: String },

    /// Represents structural problems in the folder template
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during settings parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Directory creation failed while expanding the template
    #[error("Failed to create directory '{}': {source}.", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience type alias for Results with foldergen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that logs the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Logs the error message and exits with status code 1
pub fn default_error_handler(err: Error) {
    log::error!("An error occurred: {err}");
    std::process::exit(1);
}
