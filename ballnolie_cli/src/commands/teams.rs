use anyhow::Result;
use balldontlie_api::types::{Team, TeamID};
use balldontlie_api::{CachePolicy, Client};
use clap::Args;

use crate::output::{print_teams, OutputFormat};

#[derive(Args)]
pub struct TeamsArgs {
    /// Only show teams from this conference: east or west
    #[arg(long)]
    pub conference: Option<String>,
}

#[derive(Args)]
pub struct TeamArgs {
    /// Team ID
    pub id: TeamID,
}

/// Fetches every team, sorted by full name and optionally narrowed to one
/// conference.
pub async fn fetch_teams(
    client: &Client,
    conference: Option<&str>,
    cache_policy: CachePolicy,
) -> Result<Vec<Team>> {
    let mut teams = client.fetch_all_teams(cache_policy).await?.data;
    if let Some(conference) = conference {
        let wanted = conference.trim();
        teams.retain(|t| t.conference.eq_ignore_ascii_case(wanted));
    }
    teams.sort();
    Ok(teams)
}

pub async fn run(
    args: &TeamsArgs,
    client: &Client,
    cache_policy: CachePolicy,
    format: &OutputFormat,
) -> Result<()> {
    let teams = fetch_teams(client, args.conference.as_deref(), cache_policy).await?;
    eprintln!("{} teams", teams.len());
    print_teams(&teams, format)
}

pub async fn run_one(
    args: &TeamArgs,
    client: &Client,
    cache_policy: CachePolicy,
    format: &OutputFormat,
) -> Result<()> {
    let team = client.fetch_team(args.id, cache_policy).await?;
    print_teams(&[team], format)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const TEAMS_JSON: &str = include_str!("../../../balldontlie_api/tests/fixtures/teams.json");

    async fn mock_teams() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TEAMS_JSON))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_fetch_teams_sorted_by_full_name() {
        let server = mock_teams().await;
        let client = Client::with_base_url(&server.uri());
        let teams = fetch_teams(&client, None, CachePolicy::default())
            .await
            .unwrap();
        let abbrs: Vec<_> = teams.iter().map(|t| t.abbreviation.as_str()).collect();
        assert_eq!(abbrs, vec!["ATL", "BOS", "LAL"]);
    }

    #[tokio::test]
    async fn test_fetch_teams_by_conference() {
        let server = mock_teams().await;
        let client = Client::with_base_url(&server.uri());
        let teams = fetch_teams(&client, Some("west"), CachePolicy::default())
            .await
            .unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].abbreviation, "LAL");
    }

    #[tokio::test]
    async fn test_fetch_teams_propagates_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;
        let client = Client::with_base_url(&server.uri());
        let err = fetch_teams(&client, None, CachePolicy::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Too Many Requests");
        assert_eq!(
            err.downcast_ref::<balldontlie_api::Error>(),
            Some(&balldontlie_api::Error::TooManyRequests)
        );
    }
}
