//! CSV export with a header row

use super::Tabular;
use crate::Result;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_record<W: Write>(w: &mut W, record: &[&str]) -> io::Result<()> {
    for (i, field) in record.iter().enumerate() {
        if i > 0 {
            write!(w, ",")?;
        }
        if needs_quotes(field) {
            write!(w, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", field)?;
        }
    }
    writeln!(w)
}

/// Write the headers and every row of `rows` as comma-separated values.
pub fn write_csv<T: Tabular, W: Write>(mut w: W, rows: &[T]) -> io::Result<()> {
    write_record(&mut w, T::HEADERS)?;
    for row in rows {
        let values = row.record();
        let record: Vec<&str> = values.iter().map(String::as_str).collect();
        write_record(&mut w, &record)?;
    }
    w.flush()
}

/// Export `rows` to `dir/file_name`, creating `dir` if needed.
pub fn write_csv_file<T: Tabular>(dir: &Path, file_name: &str, rows: &[T]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    let file = fs::File::create(&path)?;
    write_csv(BufWriter::new(file), rows)?;
    Ok(path)
}
