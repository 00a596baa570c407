//! Error types for the Premier League insights tool

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InsightsError>;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Database unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database is missing required table: {table}")]
    MissingTable { table: String },

    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] rusqlite::Error),

    #[error("Database path not provided and could not determine a default (set {env_var})")]
    MissingDatabasePath { env_var: String },

    #[error("Invalid row limit: {value}")]
    InvalidLimit { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests;
