//! Variable rows read from a CSV table.
//! The header row names the variables; every following record is one
//! instance of the template.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};

use crate::error::Result;
use crate::report::{Event, Reporter};

/// Variable name to value, in column order.
pub type Row = IndexMap<String, String>;

/// Rows of a CSV table together with how its columns compare to the
/// variables a template expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowTable {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    /// Template variables with no column
    pub missing_columns: Vec<String>,
    /// Columns no template variable refers to
    pub extra_columns: Vec<String>,
}

/// Reads CSV text and checks its header against `vocabulary`.
///
/// Records shorter than the header only lack their trailing columns; the
/// expander then skips whatever depends on them.
pub fn read_rows<R: io::Read>(reader: R, vocabulary: &IndexSet<String>) -> Result<RowTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Row =
            columns.iter().cloned().zip(record.iter().map(str::to_string)).collect();
        rows.push(row);
    }

    let missing_columns =
        vocabulary.iter().filter(|name| !columns.contains(name)).cloned().collect();
    let extra_columns =
        columns.iter().filter(|column| !vocabulary.contains(*column)).cloned().collect();

    Ok(RowTable { columns, rows, missing_columns, extra_columns })
}

/// Writes a header-only CSV with one column per variable.
pub fn write_schema<P: AsRef<Path>>(path: P, vocabulary: &IndexSet<String>) -> Result<()> {
    let path = path.as_ref();
    if vocabulary.is_empty() {
        fs::write(path, "")?;
        return Ok(());
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(vocabulary)?;
    writer.flush()?;
    Ok(())
}

/// Loads rows from `path`, reporting column mismatches against `vocabulary`.
///
/// A missing file is not an error: an empty table with the template's
/// columns is written in its place and no rows are returned.
pub fn load_rows<P: AsRef<Path>>(
    path: P,
    vocabulary: &IndexSet<String>,
    reporter: &dyn Reporter,
) -> Result<RowTable> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        write_schema(path, vocabulary)?;
        reporter.report(&Event::SchemaCreated { path, columns: vocabulary.len() });
        return Ok(RowTable {
            columns: vocabulary.iter().cloned().collect(),
            ..RowTable::default()
        });
    }

    let table = read_rows(fs::File::open(path)?, vocabulary)?;
    reporter.report(&Event::RowsLoaded {
        path,
        rows: table.rows.len(),
        columns: table.columns.len(),
    });
    if !table.missing_columns.is_empty() {
        reporter.report(&Event::MissingColumns { columns: &table.missing_columns });
    }
    if !table.extra_columns.is_empty() {
        reporter.report(&Event::ExtraColumns { columns: &table.extra_columns });
    }
    Ok(table)
}
