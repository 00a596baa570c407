//! Player statistics command implementation.
//!
//! Gathers the three player rankings for an optional club filter and renders
//! them as text tables or JSON. The top goalscorers table can also be
//! exported as CSV, named after the selected club.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use super::common::{export_csv, write_json};
use crate::{
    cli::types::{filters::TeamFilter, limit::Limit},
    dashboard::{self, NationalityTotal, TOP_NATIONALITIES},
    output::write_table,
    storage::{DecisivePlayerRow, FootballDatabase, NationalityRow, TopGoalscorerRow},
    Result,
};

/// Options for the players command.
#[derive(Debug, Clone, Default)]
pub struct PlayersParams {
    pub team: TeamFilter,
    pub limit: Limit,
    pub as_json: bool,
    pub csv_dir: Option<PathBuf>,
}

/// Every player view for one filter selection
#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    pub club: Option<String>,
    pub top_goalscorers: Vec<TopGoalscorerRow>,
    pub decisive_players: Vec<DecisivePlayerRow>,
    pub nationalities: Vec<NationalityRow>,
    pub top_nationalities: Vec<NationalityTotal>,
}

/// Run the player queries for `team`, truncating rankings to `limit`.
pub fn build_player_report(
    db: &FootballDatabase,
    team: &TeamFilter,
    limit: Limit,
) -> Result<PlayerReport> {
    let top_goalscorers = db.top_goalscorers(limit, team)?;
    let decisive_players = db.most_decisive_players(limit, team)?;
    let nationalities = db.player_nationalities(team)?;
    let top_nationalities = dashboard::nationality_totals(&nationalities, TOP_NATIONALITIES);

    Ok(PlayerReport {
        club: team.club_name().map(str::to_string),
        top_goalscorers,
        decisive_players,
        nationalities,
        top_nationalities,
    })
}

/// Handle the players command
pub fn handle_players<W: Write>(
    db: &FootballDatabase,
    params: &PlayersParams,
    mut out: W,
) -> Result<()> {
    let report = build_player_report(db, &params.team, params.limit)?;

    if params.as_json {
        write_json(&mut out, &report)?;
    } else {
        writeln!(out, "Player Performance Metrics ({})", params.team)?;
        writeln!(out)?;
        write_table(&mut out, "Top Goalscorers Ranking", &report.top_goalscorers)?;
        write_table(
            &mut out,
            "Decisive Players (Goals + Assists)",
            &report.decisive_players,
        )?;
        write_table(
            &mut out,
            &format!("Top {} Nationalities", TOP_NATIONALITIES),
            &report.top_nationalities,
        )?;
    }

    if let Some(dir) = &params.csv_dir {
        export_csv(
            &mut out,
            dir,
            &dashboard::export_file_name(&params.team),
            &report.top_goalscorers,
            params.as_json,
        )?;
    }

    Ok(())
}
