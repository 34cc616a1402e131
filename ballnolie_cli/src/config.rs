//! Client settings sourced from the environment (and `.env`, when present).

use std::time::Duration;

use balldontlie_api::ClientConfig;

pub const BASE_URL_ENV: &str = "BALLNOLIE_BASE_URL";
pub const TIMEOUT_ENV: &str = "BALLNOLIE_TIMEOUT_SECS";

/// Loads `.env` if one exists, then builds a [`ClientConfig`] from the process
/// environment.
pub fn client_config_from_env() -> ClientConfig {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    client_config_from(|key| std::env::var(key).ok())
}

/// Builds a [`ClientConfig`], reading overrides through `lookup`. Unset or
/// unparsable values fall back to the defaults.
pub fn client_config_from<F>(lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ClientConfig::default();
    if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.base_url = base_url.trim().to_string();
    }
    let timeout_secs = env_u64(&lookup, TIMEOUT_ENV, config.timeout.as_secs());
    config.timeout = Duration::from_secs(timeout_secs);
    config
}

fn env_u64<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val.trim().parse::<u64>().unwrap_or_else(|_| {
            tracing::warn!("Ignoring {}={:?}: not a whole number", key, val);
            default
        }),
        None => default,
    }
}
