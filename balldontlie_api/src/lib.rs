//! Typed client for the balldontlie NBA REST API: query builders, response
//! records and a single-request HTTP client with a closed error taxonomy.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{CachePolicy, Client, ClientConfig, ResponseObserver, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    Paginated, PlayerQuery, Query, QueryCommon, RequestDescriptor, SeasonAveragesQuery,
    StatsQuery, TeamQuery, TeamsQuery,
};
