//! Derived views combining several query results.
//!
//! These are the page-level summaries of the dashboard: the overview
//! metrics, the nationality breakdown across clubs and the merged team
//! performance table. All functions here are pure apart from [`overview`],
//! which reads through the store client it is given.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::filters::TeamFilter,
    storage::{AttackDefenseRow, FootballDatabase, NationalityRow, StandingRow, TeamGoalsRow},
    Result,
};

/// Number of nationalities shown in the player breakdown
pub const TOP_NATIONALITIES: usize = 15;

pub const TEAM_TABLE_FILE_NAME: &str = "team_performance_statistics.csv";

/// Headline metrics for the overview page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub season: Option<String>,
    pub total_clubs: usize,
    /// First row of the standings; `None` when no match results exist
    pub leader: Option<StandingRow>,
    pub total_goals: i64,
    pub standings_snapshot: Vec<StandingRow>,
}

/// Player count for one nationality summed across clubs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalityTotal {
    pub nationality: Option<String>,
    pub count: i64,
}

/// One club's standings row joined with its scoring and averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPerformanceRow {
    pub club: String,
    pub points: i64,
    pub goals_scored: Option<i64>,
    pub avg_goals_for: Option<f64>,
    pub avg_goals_against: Option<f64>,
}

/// Gather the overview metrics, keeping the top `snapshot` standings rows.
pub fn overview(db: &FootballDatabase, snapshot: usize) -> Result<Overview> {
    let teams = db.all_team_names()?;
    let standings = db.league_standings()?;
    let goals = db.total_goals_by_team()?;

    Ok(Overview {
        season: db.season_label()?,
        total_clubs: teams.len(),
        leader: standings.first().cloned(),
        total_goals: goals.iter().map(|row| row.goals_scored).sum(),
        standings_snapshot: standings.into_iter().take(snapshot).collect(),
    })
}

/// Sum per-club nationality counts and keep the `top_n` largest.
///
/// Ties are ordered by nationality so the output is stable.
pub fn nationality_totals(rows: &[NationalityRow], top_n: usize) -> Vec<NationalityTotal> {
    let mut totals: BTreeMap<Option<&str>, i64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.nationality.as_deref()).or_insert(0) += row.count;
    }

    let mut totals: Vec<NationalityTotal> = totals
        .into_iter()
        .map(|(nationality, count)| NationalityTotal {
            nationality: nationality.map(str::to_string),
            count,
        })
        .collect();

    // BTreeMap iteration already orders by nationality; a stable sort keeps it
    totals.sort_by(|a, b| b.count.cmp(&a.count));
    totals.truncate(top_n);
    totals
}

/// Left-merge goals and averages onto the standings, keeping standings order.
pub fn team_performance_table(
    standings: &[StandingRow],
    goals: &[TeamGoalsRow],
    attack_defense: &[AttackDefenseRow],
) -> Vec<TeamPerformanceRow> {
    let goals: HashMap<&str, i64> = goals
        .iter()
        .map(|row| (row.club.as_str(), row.goals_scored))
        .collect();
    let averages: HashMap<&str, &AttackDefenseRow> = attack_defense
        .iter()
        .map(|row| (row.club.as_str(), row))
        .collect();

    standings
        .iter()
        .map(|standing| {
            let club = standing.club.as_str();
            let avg = averages.get(club);
            TeamPerformanceRow {
                club: standing.club.clone(),
                points: standing.points,
                goals_scored: goals.get(club).copied(),
                avg_goals_for: avg.and_then(|row| row.avg_goals_for),
                avg_goals_against: avg.and_then(|row| row.avg_goals_against),
            }
        })
        .collect()
}

/// CSV file name for a top scorers export, e.g. `top_scorers_man_city.csv`.
///
/// Anything outside `[a-z0-9_-]` becomes `_`, so the name is always a single
/// path component.
pub fn export_file_name(team: &TeamFilter) -> String {
    let slug: String = team
        .to_string()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("top_scorers_{}.csv", slug)
}
