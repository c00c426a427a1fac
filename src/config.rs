use std::env;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "EUW1";
pub const DEFAULT_DDRAGON_VERSION: &str = "14.19.1";
pub const DEFAULT_DDRAGON_LOCALE: &str = "en_US";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Process configuration, read once at startup.
///
/// Nothing is validated here: [`crate::RiotClient::new`] rejects a missing key
/// or an unknown default region.
#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: Option<String>,
    pub default_region: String,
    pub ddragon_version: String,
    pub ddragon_locale: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Configuration with the default region, Data Dragon pair and timeout.
    pub fn new(riot_api_key: impl Into<String>) -> Self {
        Self {
            riot_api_key: Some(riot_api_key.into()),
            default_region: DEFAULT_REGION.into(),
            ddragon_version: DEFAULT_DDRAGON_VERSION.into(),
            ddragon_locale: DEFAULT_DDRAGON_LOCALE.into(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let riot_api_key = env::var("RIOT_API_KEY").ok().filter(|key| !key.is_empty());

        let default_region = env::var("RIOT_REGION")
            .unwrap_or_else(|_| DEFAULT_REGION.into())
            .to_uppercase();

        let ddragon_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.into());

        let ddragon_locale =
            env::var("DDRAGON_LOCALE").unwrap_or_else(|_| DEFAULT_DDRAGON_LOCALE.into());

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            riot_api_key,
            default_region,
            ddragon_version,
            ddragon_locale,
            request_timeout: Duration::from_secs(request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let config = Config::new("RGAPI-TEST");

        assert_eq!(config.riot_api_key.as_deref(), Some("RGAPI-TEST"));
        assert_eq!(config.default_region, "EUW1");
        assert_eq!(config.ddragon_version, "14.19.1");
        assert_eq!(config.ddragon_locale, "en_US");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}
