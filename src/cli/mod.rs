//! CLI argument definitions and parsing.

pub mod types;

use crate::{
    cli::types::limit::Limit, core::config::DEFAULT_BUSY_TIMEOUT_MS, error::InsightsError,
    DATABASE_ENV_VAR,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Largest `--limit` accepted on the command line
pub const MAX_PLAYER_LIMIT: u32 = 100;

/// Parse `--limit`, accepting 1 through [`MAX_PLAYER_LIMIT`].
fn parse_player_limit(s: &str) -> Result<Limit, InsightsError> {
    let limit: Limit = s.parse()?;
    if (1..=MAX_PLAYER_LIMIT).contains(&limit.as_u32()) {
        Ok(limit)
    } else {
        Err(InsightsError::InvalidLimit {
            value: s.to_string(),
        })
    }
}

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Path to the season database (or set `PL_INSIGHTS_DB`).
    #[clap(long, global = true, env = DATABASE_ENV_VAR)]
    pub db: Option<PathBuf>,

    /// Milliseconds a query waits on a locked database before failing.
    #[clap(long, global = true, default_value_t = DEFAULT_BUSY_TIMEOUT_MS)]
    pub busy_timeout_ms: u64,

    /// Log each query and its row count to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "pl-insights",
    about = "Premier League season statistics from a football database"
)]
pub struct Insights {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Headline metrics: club count, league leader and total goals.
    Overview {
        /// Number of standings rows in the snapshot.
        #[clap(long, default_value_t = 5)]
        top: usize,

        /// Output results as JSON instead of text tables.
        #[clap(long)]
        json: bool,
    },

    /// Player rankings: top goalscorers, decisive players and nationalities.
    Players {
        /// Restrict to one club (exact team name).
        #[clap(long, short)]
        team: Option<String>,

        /// Number of players to display.
        #[clap(long, short, default_value_t = Limit::default(), value_parser = parse_player_limit)]
        limit: Limit,

        /// Output results as JSON instead of text tables.
        #[clap(long)]
        json: bool,

        /// Export the top goalscorers table as CSV into this directory.
        #[clap(long, value_name = "DIR")]
        csv: Option<PathBuf>,
    },

    /// Team performance: standings, goals, attack vs defense and defense ranking.
    Teams {
        /// Output results as JSON instead of text tables.
        #[clap(long)]
        json: bool,

        /// Export the combined team table as CSV into this directory.
        #[clap(long, value_name = "DIR")]
        csv: Option<PathBuf>,
    },

    /// List every club in the dataset.
    Clubs {
        /// Output results as JSON instead of one name per line.
        #[clap(long)]
        json: bool,
    },
}
