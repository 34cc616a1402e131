//! HTTP client for the balldontlie API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{
        PlayerQuery, Query, RequestDescriptor, SeasonAveragesQuery, StatsQuery, TeamQuery,
        TeamsQuery,
    },
    types::{ListResponse, PlayerList, PlayerStatsList, SeasonAverage, Team, TeamID, TeamList},
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.balldontlie.io/api/v1/";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the HTTP layer may reuse cached responses for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Let the HTTP stack follow the origin's caching headers.
    #[default]
    UseProtocolCachePolicy,
    /// Ignore local copies and revalidate with the origin.
    ReloadRevalidatingCacheData,
    /// Never use or store a cached copy.
    ReloadIgnoringLocalCacheData,
}

impl CachePolicy {
    fn apply(self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            CachePolicy::UseProtocolCachePolicy => request,
            CachePolicy::ReloadRevalidatingCacheData => request.header(CACHE_CONTROL, "no-cache"),
            CachePolicy::ReloadIgnoringLocalCacheData => request
                .header(CACHE_CONTROL, "no-store")
                .header(PRAGMA, "no-cache"),
        }
    }
}

/// Settings used to build a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root. A trailing `/` is added when missing.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Sent as the `User-Agent` header on every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("ballnolie/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Callback invoked with the status and URL of every response received.
pub type ResponseObserver = Arc<dyn Fn(StatusCode, &Url) + Send + Sync>;

/// HTTP client for the balldontlie API.
///
/// Each fetch issues exactly one GET request and maps the outcome onto
/// [`Error`]. Nothing is retried or cached here beyond what the
/// [`CachePolicy`] asks of the HTTP layer. The client is cheap to clone and
/// safe to share between tasks.
#[derive(Clone)]
pub struct Client {
    /// A build failure is kept and reported by the first fetch.
    http: Result<reqwest::Client, Error>,
    base_api_url: String,
    observer: Option<ResponseObserver>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_config(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Custom(format!("failed to build HTTP client: {}", e))
            });
        let mut base_api_url = config.base_url;
        if !base_api_url.ends_with('/') {
            base_api_url.push('/');
        }
        Self {
            http,
            base_api_url,
            observer: None,
        }
    }

    /// Installs a callback that sees every response before it is classified.
    pub fn with_response_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(StatusCode, &Url) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Resolves a request descriptor to the absolute URL that would be fetched.
    pub fn get_url(&self, request: &RequestDescriptor) -> Result<Url, Error> {
        let base = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::Custom(format!("invalid base URL: {}", e))
        })?;
        request.to_url(&base).map_err(|e| {
            tracing::error!("Invalid URL constructed for {}: {}", request, e);
            Error::Custom(format!("invalid request URL: {}", e))
        })
    }

    async fn get<T, Q>(&self, query: &Q, cache_policy: CachePolicy) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let http = self.http.as_ref().map_err(Clone::clone)?;
        let url = self.get_url(&query.to_request())?;
        tracing::debug!("GET {}", url);

        let resp = cache_policy
            .apply(http.get(url.clone()))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to reach {}: {}", url, e);
                Error::from_transport(e)
            })?;

        let status = resp.status();
        if let Some(observer) = &self.observer {
            observer(status, &url);
        }
        if let Some(err) = Error::from_status(status.as_u16()) {
            tracing::warn!("Request to {} failed with status {}", url, status);
            return Err(err);
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            if e.is_timeout() {
                Error::ServiceOffline
            } else {
                Error::Custom(e.to_string())
            }
        })?;

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse response from {} (status {}): {} | body: {}",
                url,
                status,
                e,
                truncate_body(&body)
            );
            Error::JsonConversion
        })
    }

    /// Fetches every team.
    pub async fn fetch_all_teams(&self, cache_policy: CachePolicy) -> Result<TeamList, Error> {
        self.get::<TeamList, TeamsQuery>(&TeamsQuery, cache_policy)
            .await
    }

    /// Fetches a single team by id.
    pub async fn fetch_team(&self, id: TeamID, cache_policy: CachePolicy) -> Result<Team, Error> {
        self.get::<Team, TeamQuery>(&TeamQuery::new(id), cache_policy)
            .await
    }

    /// Fetches one page of players matching the given query.
    pub async fn fetch_all_players(
        &self,
        query: &PlayerQuery,
        cache_policy: CachePolicy,
    ) -> Result<PlayerList, Error> {
        self.get::<PlayerList, PlayerQuery>(query, cache_policy)
            .await
    }

    /// Fetches one page of box scores matching the given query.
    pub async fn fetch_player_stats(
        &self,
        query: &StatsQuery,
        cache_policy: CachePolicy,
    ) -> Result<PlayerStatsList, Error> {
        self.get::<PlayerStatsList, StatsQuery>(query, cache_policy)
            .await
    }

    /// Fetches season averages for the players in the query.
    pub async fn fetch_season_averages(
        &self,
        query: &SeasonAveragesQuery,
        cache_policy: CachePolicy,
    ) -> Result<ListResponse<SeasonAverage>, Error> {
        self.get::<ListResponse<SeasonAverage>, SeasonAveragesQuery>(query, cache_policy)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
