//! Database location and connection settings

use crate::error::{InsightsError, Result};
use crate::DATABASE_ENV_VAR;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Everything needed to open the season database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    /// How long a query waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Build a config from an optional explicit path, falling back to the
    /// environment and then the per-user data directory.
    pub fn resolve(path: Option<PathBuf>, busy_timeout_ms: u64) -> Result<Self> {
        let path = resolve_database_path(path)?;
        Ok(Self::new(path).with_busy_timeout(Duration::from_millis(busy_timeout_ms)))
    }
}

/// Path: ~/.local/share/pl-insights/football_db.sqlite (platform data dir)
pub fn default_database_path() -> Option<PathBuf> {
    dirs::data_dir().map(|base| base.join("pl-insights").join("football_db.sqlite"))
}

/// Explicit path wins, then `PL_INSIGHTS_DB`, then the default location.
pub fn resolve_database_path(path: Option<PathBuf>) -> Result<PathBuf> {
    path.or_else(|| {
        std::env::var(DATABASE_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
    .or_else(default_database_path)
    .ok_or_else(|| InsightsError::MissingDatabasePath {
        env_var: DATABASE_ENV_VAR.to_string(),
    })
}
