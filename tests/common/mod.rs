#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use foldergen::report::{Event, Reporter};
use foldergen::rows::Row;
use walkdir::WalkDir;

/// Owned copy of an expansion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Created(String),
    Exists(PathBuf),
    Missing(String, Vec<String>),
    Excluded(String, String),
    OutsideParent(String, PathBuf),
    RowsLoaded(usize, usize),
    MissingColumns(Vec<String>),
    ExtraColumns(Vec<String>),
    SchemaCreated(PathBuf, usize),
    Finished(usize),
}

#[derive(Default)]
pub struct RecordingReporter {
    pub events: RefCell<Vec<Recorded>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<Recorded> {
        self.events.borrow().clone()
    }

    pub fn missing(&self) -> Vec<Vec<String>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Recorded::Missing(_, missing) => Some(missing),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &Event<'_>) {
        let recorded = match event {
            Event::FolderCreated { name, .. } => Recorded::Created(name.to_string()),
            Event::FolderExists { path } => Recorded::Exists(path.to_path_buf()),
            Event::MissingVariables { node, missing } => {
                Recorded::Missing(node.to_string(), missing.to_vec())
            }
            Event::ConditionExcluded { name, value } => {
                Recorded::Excluded(name.to_string(), value.to_string())
            }
            Event::FolderOutsideParent { name, path } => {
                Recorded::OutsideParent(name.to_string(), path.to_path_buf())
            }
            Event::RowsLoaded { rows, columns, .. } => Recorded::RowsLoaded(*rows, *columns),
            Event::MissingColumns { columns } => Recorded::MissingColumns(columns.to_vec()),
            Event::ExtraColumns { columns } => Recorded::ExtraColumns(columns.to_vec()),
            Event::SchemaCreated { path, columns } => {
                Recorded::SchemaCreated(path.to_path_buf(), *columns)
            }
            Event::RunFinished { folders_created, .. } => Recorded::Finished(*folders_created),
        };
        self.events.borrow_mut().push(recorded);
    }
}

pub fn row(pairs: &[(&str, &str)]) -> Row {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Directories under `root`, relative to it, sorted.
pub fn dirs_under(root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    dirs.sort();
    dirs
}
