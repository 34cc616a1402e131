use anyhow::Result;
use balldontlie_api::types::PlayerStatsList;
use balldontlie_api::{CachePolicy, Client, Paginated, StatsQuery};
use clap::Args;

use crate::output::{format_page_summary, print_stats, render_chart, OutputFormat};
use crate::validation;

const CHART_WIDTH: usize = 40;

#[derive(Args)]
pub struct StatsArgs {
    /// Player ID (repeatable)
    #[arg(long = "player-id")]
    pub player_ids: Vec<u32>,

    /// Season start year, e.g. 2023 (repeatable)
    #[arg(long = "season")]
    pub seasons: Vec<String>,

    /// Only games on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Only games on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Page number
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Results per page (1-100)
    #[arg(long, default_value = "100")]
    pub per_page: u32,

    /// Also print a bar chart of one stat: pts, reb, ast, blk, fg, fg3, ft, oreb, dreb
    #[arg(long)]
    pub chart: Option<String>,
}

/// Validates the arguments and builds the `/stats` query.
pub fn build_query(args: &StatsArgs) -> Result<StatsQuery> {
    let mut query = StatsQuery::default()
        .with_page(args.page)
        .with_per_page(validation::validate_per_page(args.per_page)?)
        .with_player_ids(&args.player_ids);

    for season in &args.seasons {
        query = query.with_season(validation::validate_season(season)?);
    }

    let start = args
        .start_date
        .as_deref()
        .map(validation::validate_date)
        .transpose()?;
    let end = args
        .end_date
        .as_deref()
        .map(validation::validate_date)
        .transpose()?;
    validation::validate_date_range(start, end)?;

    if let Some(start) = start {
        query = query.with_start_date_naive(start);
    }
    if let Some(end) = end {
        query = query.with_end_date_naive(end);
    }

    Ok(query)
}

/// Fetches one page of stats lines, sorted by player first name.
pub async fn fetch_stats(
    client: &Client,
    query: &StatsQuery,
    cache_policy: CachePolicy,
) -> Result<PlayerStatsList> {
    let mut resp = client.fetch_player_stats(query, cache_policy).await?;
    resp.data.sort();
    Ok(resp)
}

pub async fn run(
    args: &StatsArgs,
    client: &Client,
    cache_policy: CachePolicy,
    format: &OutputFormat,
) -> Result<()> {
    let chart = args
        .chart
        .as_deref()
        .map(validation::validate_stat_kind)
        .transpose()?;
    let query = build_query(args)?;
    if args.player_ids.is_empty() {
        tracing::info!("No --player-id given, listing stats for all players");
    }

    let resp = fetch_stats(client, &query, cache_policy).await?;
    eprintln!("{}", format_page_summary(&resp.meta, "stat lines"));

    print_stats(&resp.data, format)?;

    if let Some(kind) = chart {
        println!();
        println!("{}", render_chart(&resp.data, kind, CHART_WIDTH));
    }

    Ok(())
}
