//! Club list command implementation

use std::io::Write;

use super::common::write_json;
use crate::{storage::FootballDatabase, Result};

/// Print every club name, sorted
pub fn handle_clubs<W: Write>(db: &FootballDatabase, as_json: bool, mut out: W) -> Result<()> {
    let names = db.all_team_names()?;

    if as_json {
        return write_json(out, &names);
    }

    for name in &names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
