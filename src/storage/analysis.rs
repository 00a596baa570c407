//! Team-level aggregates: goals, points and defensive record

use super::{builder::AggregateQuery, models::*, schema::FootballDatabase};
use crate::cli::types::outcome::MatchOutcome;
use crate::error::Result;
use tracing::debug;

// Match rows are per team: each fixture contributes one row for each side,
// and every aggregate below groups those rows by their own team.
const MATCH_RESULTS_JOIN: &str = r#"
    FROM team t
    JOIN "match" m ON m.team_id = t.team_id
    JOIN match_result r ON r.match_id = m.match_id"#;

impl FootballDatabase {
    /// Goals per club summed over player statistics, highest first.
    ///
    /// Clubs whose players have no statistics rows are absent.
    pub fn total_goals_by_team(&self) -> Result<Vec<TeamGoalsRow>> {
        let query = AggregateQuery::new(
            r#"SELECT t.team_name,
                      CAST(COALESCE(SUM(s."Gls"), 0) AS INTEGER) AS total_goals_scored
               FROM team t
               JOIN player p ON p.team_id = t.team_id
               JOIN player_statistics s ON s.player_id = p.player_id"#,
        )
        .group_by("t.team_name")
        .order_by("total_goals_scored DESC, t.team_name ASC");

        let rows = query.fetch(&self.conn, |row| {
            Ok(TeamGoalsRow {
                club: row.get(0)?,
                goals_scored: row.get(1)?,
            })
        })?;

        debug!(rows = rows.len(), "total_goals_by_team");
        Ok(rows)
    }

    /// League table: 3 points per win, 1 per draw, highest first
    pub fn league_standings(&self) -> Result<Vec<StandingRow>> {
        let query = AggregateQuery::new(&format!(
            "SELECT t.team_name, SUM({}) AS league_points {}",
            MatchOutcome::points_case_sql(r#"r."Result""#),
            MATCH_RESULTS_JOIN
        ))
        .group_by("t.team_name")
        .order_by("league_points DESC, t.team_name ASC");

        let rows = query.fetch(&self.conn, |row| {
            Ok(StandingRow {
                club: row.get(0)?,
                points: row.get(1)?,
            })
        })?;

        debug!(rows = rows.len(), "league_standings");
        Ok(rows)
    }

    /// Mean goals for and against per match row, by club name
    pub fn attack_vs_defense_stats(&self) -> Result<Vec<AttackDefenseRow>> {
        let query = AggregateQuery::new(&format!(
            r#"SELECT t.team_name,
                      AVG(r."GF") AS avg_goals_for,
                      AVG(r."GA") AS avg_goals_against
               {}"#,
            MATCH_RESULTS_JOIN
        ))
        .group_by("t.team_name")
        .order_by("t.team_name ASC");

        let rows = query.fetch(&self.conn, |row| {
            Ok(AttackDefenseRow {
                club: row.get(0)?,
                avg_goals_for: row.get(1)?,
                avg_goals_against: row.get(2)?,
            })
        })?;

        debug!(rows = rows.len(), "attack_vs_defense_stats");
        Ok(rows)
    }

    /// Goals conceded per club, fewest first
    pub fn best_defense_ranking(&self) -> Result<Vec<DefenseRow>> {
        let query = AggregateQuery::new(&format!(
            r#"SELECT t.team_name,
                      CAST(COALESCE(SUM(r."GA"), 0) AS INTEGER) AS total_goals_conceded
               {}"#,
            MATCH_RESULTS_JOIN
        ))
        .group_by("t.team_name")
        .order_by("total_goals_conceded ASC, t.team_name ASC");

        let rows = query.fetch(&self.conn, |row| {
            Ok(DefenseRow {
                club: row.get(0)?,
                goals_conceded: row.get(1)?,
            })
        })?;

        debug!(rows = rows.len(), "best_defense_ranking");
        Ok(rows)
    }
}
