use anyhow::Result;
use balldontlie_api::types::SeasonAverage;
use balldontlie_api::{CachePolicy, Client, SeasonAveragesQuery};
use clap::Args;

use crate::output::{print_averages, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct AveragesArgs {
    /// Player ID (repeatable)
    #[arg(long = "player-id", required = true)]
    pub player_ids: Vec<u32>,

    /// Season start year, e.g. 2023. The API defaults to the current season.
    #[arg(long)]
    pub season: Option<String>,
}

pub fn build_query(args: &AveragesArgs) -> Result<SeasonAveragesQuery> {
    let mut query = SeasonAveragesQuery::default().with_player_ids(&args.player_ids);
    if let Some(season) = &args.season {
        query = query.with_season(validation::validate_season(season)?);
    }
    Ok(query)
}

/// Fetches season averages, ordered by player id.
pub async fn fetch_averages(
    client: &Client,
    query: &SeasonAveragesQuery,
    cache_policy: CachePolicy,
) -> Result<Vec<SeasonAverage>> {
    let mut averages = client.fetch_season_averages(query, cache_policy).await?.data;
    averages.sort_by_key(|a| (a.player_id, a.season));
    Ok(averages)
}

pub async fn run(
    args: &AveragesArgs,
    client: &Client,
    cache_policy: CachePolicy,
    format: &OutputFormat,
) -> Result<()> {
    let query = build_query(args)?;
    let averages = fetch_averages(client, &query, cache_policy).await?;

    let missing: Vec<u32> = args
        .player_ids
        .iter()
        .copied()
        .filter(|id| !averages.iter().any(|a| a.player_id == *id))
        .collect();
    if !missing.is_empty() {
        eprintln!("No averages for player(s): {:?}", missing);
    }

    print_averages(&averages, format)
}
