//! Helpers shared across commands.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::{
    core::config::DatabaseConfig,
    output::{write_csv_file, Tabular},
    storage::FootballDatabase,
    Result,
};

/// Open the season database named by `config`.
///
/// Fails before any query runs if the file is unreachable or incomplete.
pub fn open_database(config: &DatabaseConfig) -> Result<FootballDatabase> {
    info!(path = %config.path.display(), "Connecting to database");
    FootballDatabase::open(config)
}

/// Pretty-print any serializable report as JSON.
pub fn write_json<T: Serialize, W: Write>(mut out: W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Export `rows` as CSV, confirming on `out` unless output is machine-readable.
pub fn export_csv<T: Tabular, W: Write>(
    mut out: W,
    dir: &Path,
    file_name: &str,
    rows: &[T],
    quiet: bool,
) -> Result<()> {
    let path = write_csv_file(dir, file_name, rows)?;
    info!(path = %path.display(), rows = rows.len(), "Exported CSV");
    if !quiet {
        writeln!(out, "✓ Exported {} rows to {}", rows.len(), path.display())?;
    }
    Ok(())
}
