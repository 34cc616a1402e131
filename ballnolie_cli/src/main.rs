mod commands;
mod config;
mod error;
mod output;
mod validation;

use anyhow::Result;
use balldontlie_api::{CachePolicy, Client};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "ballnolie")]
#[command(about = "Browse NBA teams, players and box scores from balldontlie")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Ask the server for fresh data and forbid any intermediate cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all teams
    Teams(commands::teams::TeamsArgs),
    /// Show one team
    Team(commands::teams::TeamArgs),
    /// Search players
    Players(commands::players::PlayersArgs),
    /// List per-game stat lines
    Stats(commands::stats::StatsArgs),
    /// Show season averages
    Averages(commands::averages::AveragesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ballnolie=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);
    let cache_policy = if cli.no_cache {
        CachePolicy::ReloadIgnoringLocalCacheData
    } else {
        CachePolicy::ReloadRevalidatingCacheData
    };

    let client = Client::with_config(config::client_config_from_env());

    match &cli.command {
        Commands::Teams(args) => commands::teams::run(args, &client, cache_policy, &format).await?,
        Commands::Team(args) => {
            commands::teams::run_one(args, &client, cache_policy, &format).await?
        }
        Commands::Players(args) => {
            commands::players::run(args, &client, cache_policy, &format).await?
        }
        Commands::Stats(args) => commands::stats::run(args, &client, cache_policy, &format).await?,
        Commands::Averages(args) => {
            commands::averages::run(args, &client, cache_policy, &format).await?
        }
    }

    Ok(())
}
