//! Data Dragon static data client.
//!
//! Champion and item datasets are public, versioned reference data. Unlike the
//! Riot API client there is no key and no region, and every failure collapses
//! into [`RiftError::StaticData`].

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::{Config, DEFAULT_DDRAGON_LOCALE, DEFAULT_DDRAGON_VERSION};
use crate::error::{RiftError, RiftResult};
use crate::riot::types::StaticDataSet;

const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

#[derive(Debug, Clone)]
pub struct DataDragon {
    client: reqwest::Client,
    base_url: String,
    version: String,
    locale: String,
}

impl DataDragon {
    pub fn new(version: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DDRAGON_CDN.to_string(),
            version: version.into(),
            locale: locale.into(),
        }
    }

    /// Client for the configured pair, giving up after `config.request_timeout`.
    pub fn from_config(config: &Config) -> RiftResult<Self> {
        Self::new(&config.ddragon_version, &config.ddragon_locale)
            .with_timeout(config.request_timeout)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> RiftResult<Self> {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RiftError::Config(format!("cannot build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Serve the same layout from another CDN root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn dataset_url(&self, file: &str) -> String {
        format!(
            "{}/{}/data/{}/{}",
            self.base_url,
            urlencoding::encode(&self.version),
            urlencoding::encode(&self.locale),
            file
        )
    }

    pub async fn get_champions(&self) -> RiftResult<StaticDataSet> {
        self.fetch("champion.json").await
    }

    pub async fn get_items(&self) -> RiftResult<StaticDataSet> {
        self.fetch("item.json").await
    }

    async fn fetch<T: DeserializeOwned>(&self, file: &str) -> RiftResult<T> {
        let url = self.dataset_url(file);
        tracing::trace!("[DDRAGON] fetching {}", url);

        let res = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| RiftError::StaticData(e.to_string()))?;

        res.json()
            .await
            .map_err(|e| RiftError::StaticData(e.to_string()))
    }
}

impl Default for DataDragon {
    fn default() -> Self {
        Self::new(DEFAULT_DDRAGON_VERSION, DEFAULT_DDRAGON_LOCALE)
    }
}
