//! Run orchestration: template and rows in, folder trees out.

use std::path::Path;
use std::time::{Duration, Instant};

use log::debug;

use crate::config::Settings;
use crate::error::Result;
use crate::expander::Expander;
use crate::report::{Event, Reporter};
use crate::rows::{load_rows, Row};
use crate::template::Template;

/// Totals of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub folders_created: usize,
    pub elapsed: Duration,
}

/// Expands `template` once per row, in order, and sums the directories created.
///
/// The first filesystem error ends the whole run.
pub fn expand_rows<P: AsRef<Path>>(
    template: &Template,
    root: P,
    rows: &[Row],
    reporter: &dyn Reporter,
) -> Result<usize> {
    let root = root.as_ref();
    let expander = Expander::new(reporter);
    let mut total = 0;
    for (index, row) in rows.iter().enumerate() {
        let created = expander.expand(template, root, row)?;
        debug!("Row {}: created {} folders.", index + 1, created);
        total += created;
    }
    Ok(total)
}

/// Loads the template and rows named by `settings`, bootstrapping whichever
/// is missing, and expands every row under the creation directory.
///
/// `started` is when the run began, before settings were read; the elapsed
/// time in the summary and in the final report is measured from it.
pub fn run(settings: &Settings, reporter: &dyn Reporter, started: Instant) -> Result<RunSummary> {
    let template = Template::load_or_create(&settings.template_path)?;
    let table = load_rows(&settings.csv_path, &template.variable_names(), reporter)?;
    let folders_created =
        expand_rows(&template, &settings.creation_directory, &table.rows, reporter)?;

    let elapsed = started.elapsed();
    reporter.report(&Event::RunFinished { folders_created, elapsed });
    Ok(RunSummary { rows: table.rows.len(), folders_created, elapsed })
}
