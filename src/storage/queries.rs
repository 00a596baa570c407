//! Player rankings and lookup queries

use super::{builder::AggregateQuery, models::*, schema::FootballDatabase};
use crate::cli::types::{filters::TeamFilter, limit::Limit};
use crate::error::Result;
use tracing::{debug, warn};

const PLAYER_STATS_JOIN: &str = r#"
    FROM player p
    JOIN player_statistics s ON s.player_id = p.player_id
    JOIN team t ON p.team_id = t.team_id"#;

impl FootballDatabase {
    /// Top goalscorers, optionally for one club.
    ///
    /// Only players with at least one statistics row are ranked; the join
    /// is inner, so a player without statistics never appears with zero goals.
    pub fn top_goalscorers(
        &self,
        limit: Limit,
        team: &TeamFilter,
    ) -> Result<Vec<TopGoalscorerRow>> {
        let query = AggregateQuery::new(&format!(
            r#"SELECT p."Player", t.team_name,
                      CAST(COALESCE(SUM(s."Gls"), 0) AS INTEGER) AS total_goals
               {}"#,
            PLAYER_STATS_JOIN
        ))
        .team_filter("t.team_name", team)
        .group_by(r#"p."Player", t.team_name"#)
        .order_by(r#"total_goals DESC, p."Player" ASC"#)
        .limit(limit);

        let rows = query.fetch(&self.conn, |row| {
            Ok(TopGoalscorerRow {
                player_name: row.get(0)?,
                club: row.get(1)?,
                goals: row.get(2)?,
            })
        })?;

        debug!(%limit, %team, rows = rows.len(), "top_goalscorers");
        Ok(rows)
    }

    /// Players ranked by goals plus assists ("decisive actions").
    pub fn most_decisive_players(
        &self,
        limit: Limit,
        team: &TeamFilter,
    ) -> Result<Vec<DecisivePlayerRow>> {
        let query = AggregateQuery::new(&format!(
            r#"SELECT p."Player", t.team_name,
                      CAST(COALESCE(SUM(s."Gls"), 0) + COALESCE(SUM(s."Ast"), 0) AS INTEGER)
                          AS decisive_actions
               {}"#,
            PLAYER_STATS_JOIN
        ))
        .team_filter("t.team_name", team)
        .group_by(r#"p."Player", t.team_name"#)
        .order_by(r#"decisive_actions DESC, p."Player" ASC"#)
        .limit(limit);

        let rows = query.fetch(&self.conn, |row| {
            Ok(DecisivePlayerRow {
                player_name: row.get(0)?,
                club: row.get(1)?,
                total_decisive: row.get(2)?,
            })
        })?;

        debug!(%limit, %team, rows = rows.len(), "most_decisive_players");
        Ok(rows)
    }

    /// Player counts per (club, nationality), clubs alphabetical and the
    /// largest groups first within each club.
    pub fn player_nationalities(&self, team: &TeamFilter) -> Result<Vec<NationalityRow>> {
        let query = AggregateQuery::new(
            r#"SELECT t.team_name, p."Nation", COUNT(p.player_id) AS player_count
               FROM team t
               JOIN player p ON p.team_id = t.team_id"#,
        )
        .team_filter("t.team_name", team)
        .group_by(r#"t.team_name, p."Nation""#)
        .order_by(r#"t.team_name ASC, player_count DESC, p."Nation" ASC"#);

        let rows = query.fetch(&self.conn, |row| {
            Ok(NationalityRow {
                club: row.get(0)?,
                nationality: row.get(1)?,
                count: row.get(2)?,
            })
        })?;

        debug!(%team, rows = rows.len(), "player_nationalities");
        Ok(rows)
    }

    /// Every team name, sorted ascending
    pub fn all_team_names(&self) -> Result<Vec<String>> {
        let query = AggregateQuery::new("SELECT team_name FROM team").order_by("team_name ASC");
        let names = query.fetch(&self.conn, |row| row.get(0))?;

        debug!(rows = names.len(), "all_team_names");
        Ok(names)
    }

    /// Label of the most recent season, if the season table has any rows.
    ///
    /// A season table without `season_id` and `label` columns yields `None`
    /// rather than an error; none of the ranking queries read it.
    pub fn season_label(&self) -> Result<Option<String>> {
        let columns: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM pragma_table_info('season') WHERE name IN ('season_id', 'label')",
            [],
            |row| row.get(0),
        )?;
        if columns < 2 {
            warn!("season table lacks season_id/label columns; no season label");
            return Ok(None);
        }

        let result = self.conn.query_row(
            "SELECT label FROM season ORDER BY season_id DESC LIMIT 1",
            [],
            |row| row.get::<_, Option<String>>(0),
        );

        match result {
            Ok(label) => Ok(label),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
