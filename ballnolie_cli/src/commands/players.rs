use anyhow::Result;
use balldontlie_api::types::PlayerList;
use balldontlie_api::{CachePolicy, Client, Paginated, PlayerQuery};
use clap::Args;

use crate::output::{format_page_summary, print_players, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct PlayersArgs {
    /// Search by first or last name
    #[arg(long)]
    pub search: Option<String>,

    /// Page number
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Results per page (1-100)
    #[arg(long, default_value = "40")]
    pub per_page: u32,
}

/// Validates the arguments and builds the `/players` query.
pub fn build_query(args: &PlayersArgs) -> Result<PlayerQuery> {
    let mut query = PlayerQuery::default()
        .with_page(args.page)
        .with_per_page(validation::validate_per_page(args.per_page)?);

    if let Some(search) = &args.search {
        query = query.with_search(&validation::validate_search(search)?);
    }

    Ok(query)
}

/// Fetches one page of players, sorted by first name.
pub async fn fetch_players(
    client: &Client,
    query: &PlayerQuery,
    cache_policy: CachePolicy,
) -> Result<PlayerList> {
    let mut resp = client.fetch_all_players(query, cache_policy).await?;
    resp.data.sort();
    Ok(resp)
}

pub async fn run(
    args: &PlayersArgs,
    client: &Client,
    cache_policy: CachePolicy,
    format: &OutputFormat,
) -> Result<()> {
    let query = build_query(args)?;
    let resp = fetch_players(client, &query, cache_policy).await?;

    eprintln!("{}", format_page_summary(&resp.meta, "players"));
    if !resp.meta.is_exhausted() {
        tracing::debug!("More players available on page {:?}", resp.meta.next_page);
    }

    print_players(&resp.data, format)
}

#[cfg(test)]
mod tests {
    use balldontlie_api::Query;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const PLAYERS_JSON: &str =
        include_str!("../../../balldontlie_api/tests/fixtures/players.json");

    fn args(search: Option<&str>, page: u32, per_page: u32) -> PlayersArgs {
        PlayersArgs {
            search: search.map(str::to_string),
            page,
            per_page,
        }
    }

    #[test]
    fn test_build_query_sanitizes_search() {
        let query = build_query(&args(Some("  le\tbron "), 2, 40)).unwrap();
        assert_eq!(
            query.to_request().to_string(),
            "players?page=2&per_page=40&search=lebron"
        );
    }

    #[test]
    fn test_build_query_blank_search_is_dropped() {
        let query = build_query(&args(Some("   "), 0, 25)).unwrap();
        assert_eq!(query.to_request().to_string(), "players?page=0&per_page=25");
    }

    #[test]
    fn test_build_query_rejects_per_page() {
        assert!(build_query(&args(None, 0, 0)).is_err());
        assert!(build_query(&args(None, 0, 101)).is_err());
    }

    #[test]
    fn test_build_query_rejects_long_search() {
        let long = "x".repeat(101);
        let err = build_query(&args(Some(&long), 0, 25)).unwrap_err();
        assert!(err.to_string().starts_with("Invalid input"));
    }

    #[tokio::test]
    async fn test_fetch_players_sorted_by_first_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players"))
            .and(query_param("search", "james"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PLAYERS_JSON))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri());
        let query = build_query(&args(Some("james"), 0, 40)).unwrap();
        let resp = fetch_players(&client, &query, CachePolicy::default())
            .await
            .unwrap();

        let names: Vec<_> = resp.data.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["Bronny", "LeBron"]);
        assert_eq!(resp.meta.total_count, Some(97));
    }
}
