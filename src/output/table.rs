//! Aligned plain-text tables

use super::Tabular;
use std::io::{self, Write};

/// Longest cell shown before truncation
const MAX_CELL_WIDTH: usize = 32;

/// Cut `cell` to [`MAX_CELL_WIDTH`] characters, ending clipped cells with `…`.
fn clip(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        return cell.to_string();
    }
    let mut clipped: String = cell.chars().take(MAX_CELL_WIDTH - 1).collect();
    clipped.push('…');
    clipped
}

fn as_strs(cells: &[String]) -> Vec<&str> {
    cells.iter().map(String::as_str).collect()
}

fn format_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Write `rows` under a title, one left-aligned column per header.
pub fn write_table<T: Tabular, W: Write>(mut w: W, title: &str, rows: &[T]) -> io::Result<()> {
    writeln!(w, "{}", title)?;

    if rows.is_empty() {
        writeln!(w, "(no rows)")?;
        return writeln!(w);
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.cells().iter().map(|c| clip(c)).collect())
        .collect();

    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(w, "{}", format_line(T::HEADERS, &widths))?;
    let dashes: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    writeln!(w, "{}", format_line(&as_strs(&dashes), &widths))?;
    for cells in &body {
        writeln!(w, "{}", format_line(&as_strs(cells), &widths))?;
    }
    writeln!(w)
}
