//! Reporting of expansion progress.
//! The expander, the row loader and the driver never log directly; they hand
//! events to a [`Reporter`] so callers decide where they go.

use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};

/// Something that happened during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A directory was newly created
    FolderCreated { name: &'a str, parent: &'a Path },
    /// The target directory was already there
    FolderExists { path: &'a Path },
    /// A resolved folder name leaves its parent directory (absolute or `..`)
    FolderOutsideParent { name: &'a str, path: &'a Path },
    /// The node and its subtree were skipped for lack of values
    MissingVariables { node: &'a str, missing: &'a [String] },
    /// The node and its subtree were skipped by its condition
    ConditionExcluded { name: &'a str, value: &'a str },
    /// The variables CSV was read
    RowsLoaded { path: &'a Path, rows: usize, columns: usize },
    /// Template variables the CSV has no column for
    MissingColumns { columns: &'a [String] },
    /// CSV columns no template variable refers to
    ExtraColumns { columns: &'a [String] },
    /// No CSV existed; a header-only one was written
    SchemaCreated { path: &'a Path, columns: usize },
    /// Every row has been expanded
    RunFinished { folders_created: usize, elapsed: Duration },
}

/// Receiver of run events.
pub trait Reporter {
    fn report(&self, event: &Event<'_>);
}

/// Reporter forwarding events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for LogReporter {
    fn report(&self, event: &Event<'_>) {
        match event {
            Event::FolderCreated { name, parent } => {
                info!("Folder '{}' created successfully in '{}'.", name, parent.display())
            }
            Event::FolderExists { path } => {
                debug!("Folder '{}' already exists.", path.display())
            }
            Event::FolderOutsideParent { name, path } => {
                warn!("Folder name '{}' resolves outside its parent: '{}'.", name, path.display())
            }
            Event::MissingVariables { node, missing } => {
                warn!("Skipping '{}': missing values for {} in variables.", node, missing.join(", "))
            }
            Event::ConditionExcluded { name, value } => {
                debug!("Skipping '{}': condition evaluated to '{}'.", name, value)
            }
            Event::RowsLoaded { path, rows, columns } => {
                info!("Read {} rows and {} columns from '{}'.", rows, columns, path.display())
            }
            Event::MissingColumns { columns } => {
                warn!("CSV file is missing columns: {}", columns.join(", "))
            }
            Event::ExtraColumns { columns } => {
                warn!("CSV file has extra columns: {}", columns.join(", "))
            }
            Event::SchemaCreated { path, columns } => {
                info!("Created default CSV at '{}' with {} columns.", path.display(), columns)
            }
            Event::RunFinished { folders_created, elapsed } => info!(
                "Program finished. Created {} folders. Execution time: {:.3} seconds.",
                folders_created,
                elapsed.as_secs_f64()
            ),
        }
    }
}
