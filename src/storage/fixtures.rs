//! In-memory datasets for tests
//!
//! Mirrors the layout the external loader produces so queries can be
//! exercised without a real season database.

use super::schema::FootballDatabase;
use crate::error::Result;
use rusqlite::{params, Connection};
use std::path::Path;

pub const SCHEMA_SQL: &str = r#"
CREATE TABLE season (
    season_id INTEGER PRIMARY KEY,
    label TEXT NOT NULL
);
CREATE TABLE competition (
    competition_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
CREATE TABLE team (
    team_id INTEGER PRIMARY KEY,
    team_name TEXT NOT NULL UNIQUE
);
CREATE TABLE player (
    player_id INTEGER PRIMARY KEY,
    "Player" TEXT NOT NULL,
    "Nation" TEXT,
    team_id INTEGER NOT NULL REFERENCES team(team_id)
);
CREATE TABLE "match" (
    match_id INTEGER PRIMARY KEY,
    team_id INTEGER NOT NULL REFERENCES team(team_id)
);
CREATE TABLE match_result (
    match_id INTEGER NOT NULL REFERENCES "match"(match_id),
    "Result" TEXT NOT NULL,
    "GF" INTEGER,
    "GA" INTEGER
);
CREATE TABLE player_statistics (
    player_id INTEGER NOT NULL REFERENCES player(player_id),
    "Gls" INTEGER,
    "Ast" INTEGER
);
"#;

/// Builds a season dataset row by row.
pub struct DatasetBuilder {
    conn: Connection,
}

impl DatasetBuilder {
    /// Empty dataset in memory
    pub fn new() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    /// Empty dataset written to a database file at `path`
    pub fn at_path(path: &Path) -> Result<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    pub fn season(&mut self, label: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO season (label) VALUES (?)", params![label])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn competition(&mut self, name: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO competition (name) VALUES (?)", params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn team(&mut self, name: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO team (team_name) VALUES (?)", params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn player(&mut self, team_id: i64, name: &str, nation: Option<&str>) -> Result<i64> {
        self.conn.execute(
            r#"INSERT INTO player ("Player", "Nation", team_id) VALUES (?, ?, ?)"#,
            params![name, nation, team_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn statistics(
        &mut self,
        player_id: i64,
        goals: Option<i64>,
        assists: Option<i64>,
    ) -> Result<()> {
        self.conn.execute(
            r#"INSERT INTO player_statistics (player_id, "Gls", "Ast") VALUES (?, ?, ?)"#,
            params![player_id, goals, assists],
        )?;
        Ok(())
    }

    /// One per-team match row and its result. `code` is stored verbatim.
    pub fn match_result(
        &mut self,
        team_id: i64,
        code: &str,
        goals_for: Option<i64>,
        goals_against: Option<i64>,
    ) -> Result<i64> {
        self.conn
            .execute(r#"INSERT INTO "match" (team_id) VALUES (?)"#, params![team_id])?;
        let match_id = self.conn.last_insert_rowid();
        self.conn.execute(
            r#"INSERT INTO match_result (match_id, "Result", "GF", "GA") VALUES (?, ?, ?, ?)"#,
            params![match_id, code, goals_for, goals_against],
        )?;
        Ok(match_id)
    }

    /// Run arbitrary SQL against the dataset, e.g. to break the schema
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    pub fn build(self) -> Result<FootballDatabase> {
        FootballDatabase::from_connection(self.conn)
    }

    /// Release the underlying connection, flushing a file-backed dataset
    pub fn finish(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
