//! CSV export functionality.
//!
//! One header row (the frozen header list) and one record per district, with
//! values in header order. Records end in CRLF and fields are quoted only
//! when necessary.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};

use crate::config::OUTPUT_EXTENSION;
use crate::error_handling::ScrapeError;
use crate::merge::ResultTable;

/// Returns `name` with its extension replaced by `.csv`.
///
/// The directory part of `name` is kept.
pub fn output_path(name: &Path) -> PathBuf {
    name.with_extension(OUTPUT_EXTENSION)
}

/// Writes `table` as CSV to any writer.
pub fn write_csv<W: Write>(table: &ResultTable, writer: W) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row.values_for(&table.headers))?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates `path` and writes `table` to it.
///
/// # Errors
///
/// Returns `ScrapeError::Export` naming the file if it cannot be created or written.
pub fn export_csv(table: &ResultTable, path: &Path) -> Result<(), ScrapeError> {
    let wrap = |source: csv::Error| ScrapeError::Export {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(|e| wrap(csv::Error::from(e)))?;
    write_csv(table, file).map_err(wrap)?;
    log::debug!("Wrote {} rows to {}", table.rows.len(), path.display());
    Ok(())
}
