//! foldergen creates directory trees from a YAML folder template.
//! Folder names and inclusion conditions reference variables that come from
//! a CSV table; the template is expanded once per row.

/// Command-line interface module for the foldergen application
pub mod cli;

/// Inclusion conditions of template nodes
pub mod condition;

/// Settings handling (creation directory, template and CSV locations)
/// Supports JSON and YAML settings files
pub mod config;

/// Common constants and bootstrap defaults
pub mod constants;

/// Error types and handling for the foldergen application
pub mod error;

/// Recursive template expansion for one row
pub mod expander;

/// Console and log file setup
pub mod logger;

/// `$(kind=name)` placeholder parsing and substitution
pub mod placeholder;

/// Run orchestration
/// Combines settings, template, rows and expansion
pub mod processor;

/// Expansion event reporting
pub mod report;

/// CSV variable rows
pub mod rows;

/// Folder template parsing
pub mod template;
