//! Template expansion.
//! Walks a [`Template`] for one row, creating every folder whose variables
//! are present and whose condition holds.

use std::fs;
use std::path::{Component, Path};

use crate::condition::{evaluate, Inclusion};
use crate::error::{Error, Result};
use crate::report::{Event, Reporter};
use crate::rows::Row;
use crate::template::{Template, TemplateNode};

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|source| Error::CreateDirectory { path: path.to_path_buf(), source })
}

/// True when joining `name` onto a parent can land outside that parent:
/// absolute names and names with `..` segments.
fn leaves_parent(name: &str) -> bool {
    Path::new(name)
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir))
}

/// Expands templates against rows, reporting what it does.
pub struct Expander<'a> {
    reporter: &'a dyn Reporter,
}

impl<'a> Expander<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Realizes `template` under `root` for one row.
    ///
    /// # Returns
    /// * `Result<usize>` - Number of directories that did not exist before
    ///
    /// # Errors
    /// * `Error::CreateDirectory` if a directory cannot be created; the rest
    ///   of the walk for this row is abandoned
    pub fn expand<P: AsRef<Path>>(&self, template: &Template, root: P, row: &Row) -> Result<usize> {
        let root = root.as_ref();
        let mut created = 0;
        for node in &template.nodes {
            created += self.expand_node(node, root, row)?;
        }
        Ok(created)
    }

    /// Realizes one node and its subtree under `parent`.
    ///
    /// A node whose name or condition needs a variable the row lacks, or whose
    /// condition is not truthy, is skipped together with all of its children.
    /// Existing directories are left untouched and not counted.
    ///
    /// Resolved names are joined onto `parent` as they are, so a row value
    /// such as `../x` or `/x` places the folder outside `parent`. That is
    /// reported as [`Event::FolderOutsideParent`] but not prevented.
    pub fn expand_node(&self, node: &TemplateNode, parent: &Path, row: &Row) -> Result<usize> {
        let missing = node.name.missing(row);
        if !missing.is_empty() {
            self.reporter
                .report(&Event::MissingVariables { node: node.name.as_str(), missing: &missing });
            return Ok(0);
        }
        let name = node.name.substitute(row)?;

        match evaluate(node.condition.as_ref(), row)? {
            Inclusion::Included => {}
            Inclusion::Excluded(value) => {
                self.reporter.report(&Event::ConditionExcluded { name: &name, value: &value });
                return Ok(0);
            }
            Inclusion::Missing(missing) => {
                self.reporter.report(&Event::MissingVariables { node: &name, missing: &missing });
                return Ok(0);
            }
        }

        let target = parent.join(&name);
        if leaves_parent(&name) {
            self.reporter.report(&Event::FolderOutsideParent { name: &name, path: &target });
        }
        let mut created = 0;
        if target.exists() {
            self.reporter.report(&Event::FolderExists { path: &target });
        } else {
            create_dir_all(&target)?;
            self.reporter.report(&Event::FolderCreated { name: &name, parent });
            created += 1;
        }

        for child in &node.children {
            created += self.expand_node(child, &target, row)?;
        }
        Ok(created)
    }
}
