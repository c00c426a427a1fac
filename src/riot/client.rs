use reqwest::{Request, RequestBuilder, header::HeaderValue};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::Config;
use crate::error::{RiftError, RiftResult};

use super::metrics::RequestMetrics;
use super::normalize::{TransportFailure, normalize};
use super::region::{RegionEntry, RegionTable};

const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

/// Authenticated Riot API client bound to a default region.
///
/// The endpoint groups live in [`super::endpoints`] as traits implemented on
/// this type. A client holds no per-call state and can be shared freely.
#[derive(Debug)]
pub struct RiotClient {
    client: reqwest::Client,
    /// Riot API Key
    key: HeaderValue,
    default_region: String,
    regions: RegionTable,
    metrics: RequestMetrics,
}

impl RiotClient {
    /// Create a client routing through the default region table.
    pub fn new(config: &Config) -> RiftResult<Self> {
        Self::with_regions(config, RegionTable::default())
    }

    /// Create a client routing through `regions` instead of the official hosts.
    pub fn with_regions(config: &Config, regions: RegionTable) -> RiftResult<Self> {
        let key = config
            .riot_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| RiftError::Config("RIOT_API_KEY must be set".into()))?;

        let mut key = HeaderValue::from_str(key)
            .map_err(|e| RiftError::Config(format!("invalid Riot API key: {}", e)))?;
        key.set_sensitive(true);

        let default_region = regions.resolve(&config.default_region)?.code.clone();

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RiftError::Config(format!("cannot build HTTP client: {}", e)))?;

        tracing::debug!(
            "[RIOT::CLIENT] ready, default region {} ({} regions known)",
            default_region,
            regions.len()
        );

        Ok(Self {
            client,
            key,
            default_region,
            regions,
            metrics: RequestMetrics::default(),
        })
    }

    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Number of requests this client has sent so far.
    pub fn requests_sent(&self) -> u64 {
        self.metrics.total()
    }

    /// Entry for `region`, or for the default region when none is given.
    pub fn resolve(&self, region: Option<&str>) -> RiftResult<&RegionEntry> {
        self.regions.resolve(region.unwrap_or(&self.default_region))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: String) -> RiftResult<T> {
        self.execute(self.client.get(url)).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, url: String, query: &Q) -> RiftResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.client.get(url).query(query)).await
    }

    /// Attach the key header and build the request.
    fn authenticate(&self, request: RequestBuilder) -> RiftResult<Request> {
        request
            .header(RIOT_TOKEN_HEADER, self.key.clone())
            .build()
            .map_err(|e| normalize(TransportFailure::from(e)))
    }

    /// Shared request logic: authenticate, send, normalize failures and decode.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> RiftResult<T> {
        let total = self.metrics.inc();
        let request = self.authenticate(request)?;
        tracing::debug!("[RIOT::CLIENT] request #{} GET {}", total, request.url());

        let res = self
            .client
            .execute(request)
            .await
            .map_err(|e| normalize(TransportFailure::from(e)))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let err = normalize(TransportFailure::Status { status, body });
            tracing::warn!("[RIOT::CLIENT] {}", err);
            return Err(err);
        }

        let bytes = res
            .bytes()
            .await
            .map_err(|e| normalize(TransportFailure::from(e)))?;

        serde_json::from_slice(&bytes).map_err(|e| RiftError::Decode(e.to_string()))
    }
}
