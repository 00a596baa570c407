//! Team performance command implementation

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use super::common::{export_csv, write_json};
use crate::{
    dashboard::{self, TeamPerformanceRow, TEAM_TABLE_FILE_NAME},
    output::write_table,
    storage::{AttackDefenseRow, DefenseRow, FootballDatabase, StandingRow, TeamGoalsRow},
    Result,
};

/// Options for the teams command.
#[derive(Debug, Clone, Default)]
pub struct TeamsParams {
    pub as_json: bool,
    pub csv_dir: Option<PathBuf>,
}

/// Every team view plus the merged table
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub standings: Vec<StandingRow>,
    pub goals_by_team: Vec<TeamGoalsRow>,
    pub attack_vs_defense: Vec<AttackDefenseRow>,
    pub defense_ranking: Vec<DefenseRow>,
    pub team_table: Vec<TeamPerformanceRow>,
}

pub fn build_team_report(db: &FootballDatabase) -> Result<TeamReport> {
    let goals_by_team = db.total_goals_by_team()?;
    let standings = db.league_standings()?;
    let attack_vs_defense = db.attack_vs_defense_stats()?;
    let defense_ranking = db.best_defense_ranking()?;
    let team_table =
        dashboard::team_performance_table(&standings, &goals_by_team, &attack_vs_defense);

    Ok(TeamReport {
        standings,
        goals_by_team,
        attack_vs_defense,
        defense_ranking,
        team_table,
    })
}

/// Handle the teams command
pub fn handle_teams<W: Write>(
    db: &FootballDatabase,
    params: &TeamsParams,
    mut out: W,
) -> Result<()> {
    let report = build_team_report(db)?;

    if params.as_json {
        write_json(&mut out, &report)?;
    } else {
        writeln!(out, "Team Performance and Ranking")?;
        writeln!(out)?;
        write_table(&mut out, "Team League Standings", &report.standings)?;
        write_table(&mut out, "Total Goals Scored by Club", &report.goals_by_team)?;
        write_table(
            &mut out,
            "Attack vs. Defense (Avg Goals)",
            &report.attack_vs_defense,
        )?;
        write_table(
            &mut out,
            "Defense Ranking (Lowest Goals Conceded)",
            &report.defense_ranking,
        )?;
        write_table(&mut out, "Complete Team Data Table", &report.team_table)?;
    }

    if let Some(dir) = &params.csv_dir {
        export_csv(
            &mut out,
            dir,
            TEAM_TABLE_FILE_NAME,
            &report.team_table,
            params.as_json,
        )?;
    }

    Ok(())
}
