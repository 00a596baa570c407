//! Database connection and schema checks

use crate::core::config::DatabaseConfig;
use crate::error::{InsightsError, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Tables the query layer reads. All are owned by the external dataset.
pub const REQUIRED_TABLES: [&str; 7] = [
    "season",
    "competition",
    "team",
    "player",
    "match",
    "match_result",
    "player_statistics",
];

/// Read-only client for the football statistics database.
///
/// Created once at startup and borrowed by every query. Construction fails if
/// the file cannot be opened or any required table is absent, so a value of
/// this type always points at a usable store.
pub struct FootballDatabase {
    pub(crate) conn: Connection,
    path: PathBuf,
}

impl FootballDatabase {
    /// Open the database described by `config` in read-only mode.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        let conn = Connection::open_with_flags(
            &config.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| InsightsError::Unavailable {
            path: config.path.clone(),
            source,
        })?;

        conn.busy_timeout(config.busy_timeout)
            .map_err(|source| InsightsError::Unavailable {
                path: config.path.clone(),
                source,
            })?;

        let db = Self {
            conn,
            path: config.path.clone(),
        };
        db.verify_schema()?;
        info!(path = %db.path.display(), "Opened football database");
        Ok(db)
    }

    /// Wrap an existing connection, checking the schema like [`open`](Self::open).
    #[cfg(any(test, feature = "test-utils"))]
    pub fn from_connection(conn: Connection) -> Result<Self> {
        let db = Self {
            conn,
            path: PathBuf::from(":memory:"),
        };
        db.verify_schema()?;
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the connection, reporting any error SQLite raises on shutdown.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| InsightsError::from(e))?;
        info!(path = %path.display(), "Closed football database");
        Ok(())
    }

    fn verify_schema(&self) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .map_err(|source| InsightsError::Unavailable {
                path: self.path.clone(),
                source,
            })?;

        for table in REQUIRED_TABLES {
            if !stmt.exists([table])? {
                return Err(InsightsError::MissingTable {
                    table: table.to_string(),
                });
            }
        }
        debug!(tables = REQUIRED_TABLES.len(), "Schema check passed");
        Ok(())
    }
}
