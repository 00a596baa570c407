//! Entry point: parse CLI, open the database and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use pl_insights::{
    cli::{Commands, Insights},
    commands::{
        clubs::handle_clubs,
        common::open_database,
        overview::handle_overview,
        players::{handle_players, PlayersParams},
        teams::{handle_teams, TeamsParams},
    },
    DatabaseConfig, TeamFilter,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "pl_insights=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = Insights::parse();
    init_logging(app.global.verbose);

    let config = DatabaseConfig::resolve(app.global.db.clone(), app.global.busy_timeout_ms)?;
    let db = open_database(&config)
        .with_context(|| format!("cannot query {}", config.path.display()))?;

    let stdout = std::io::stdout();
    let out = stdout.lock();

    match app.command {
        Commands::Overview { top, json } => handle_overview(&db, top, json, out)?,

        Commands::Players {
            team,
            limit,
            json,
            csv,
        } => handle_players(
            &db,
            &PlayersParams {
                team: TeamFilter::from(team),
                limit,
                as_json: json,
                csv_dir: csv,
            },
            out,
        )?,

        Commands::Teams { json, csv } => handle_teams(
            &db,
            &TeamsParams {
                as_json: json,
                csv_dir: csv,
            },
            out,
        )?,

        Commands::Clubs { json } => handle_clubs(&db, json, out)?,
    }

    db.close()?;
    Ok(())
}
