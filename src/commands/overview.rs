//! Overview command implementation

use std::io::Write;

use super::common::write_json;
use crate::{dashboard, output::write_table, storage::FootballDatabase, Result};

/// Print the headline metrics and a standings snapshot of `top` rows.
pub fn handle_overview<W: Write>(
    db: &FootballDatabase,
    top: usize,
    as_json: bool,
    mut out: W,
) -> Result<()> {
    let overview = dashboard::overview(db, top)?;

    if as_json {
        return write_json(out, &overview);
    }

    writeln!(out, "Premier League Insights")?;
    if let Some(season) = &overview.season {
        writeln!(out, "{} Season", season)?;
    }
    writeln!(out)?;

    let (leader, leader_points) = match &overview.leader {
        Some(row) => (row.club.as_str(), row.points),
        None => ("N/A", 0),
    };
    writeln!(out, "{:<20} {}", "Total Clubs", overview.total_clubs)?;
    writeln!(out, "{:<20} {}", "League Leader", leader)?;
    writeln!(out, "{:<20} {}", "Leader's Points", leader_points)?;
    writeln!(out, "{:<20} {}", "Total Goals Scored", overview.total_goals)?;
    writeln!(out)?;

    write_table(
        &mut out,
        "Current League Standings Snapshot",
        &overview.standings_snapshot,
    )?;
    Ok(())
}
