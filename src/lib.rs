//! Premier League Insights Library
//!
//! Read-only aggregate queries over a football statistics database for one
//! season, plus the reports and renderers the `pl-insights` CLI builds on.
//!
//! ## Features
//!
//! - **Player Rankings**: Top goalscorers and most decisive players (goals + assists)
//! - **Team Aggregates**: League standings, goals scored, attack vs defense, best defense
//! - **Squad Makeup**: Player nationalities per club
//! - **Exports**: Text tables, JSON and CSV
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pl_insights::{DatabaseConfig, FootballDatabase, Limit, TeamFilter};
//!
//! # fn example() -> pl_insights::Result<()> {
//! let db = FootballDatabase::open(&DatabaseConfig::new("football_db.sqlite"))?;
//!
//! for row in db.top_goalscorers(Limit::new(10), &TeamFilter::club("Liverpool"))? {
//!     println!("{} ({}): {}", row.player_name, row.club, row.goals);
//! }
//!
//! db.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database without passing `--db` every time:
//! ```bash
//! export PL_INSIGHTS_DB=/data/football_db.sqlite
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod output;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{filters::TeamFilter, limit::Limit, outcome::MatchOutcome};
pub use crate::core::config::DatabaseConfig;
pub use error::{InsightsError, Result};
pub use storage::FootballDatabase;

pub const DATABASE_ENV_VAR: &str = "PL_INSIGHTS_DB";
