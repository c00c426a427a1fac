use async_trait::async_trait;

use crate::error::{RiftError, RiftResult};
use crate::riot::client::RiotClient;
use crate::riot::types::SummonerProfile;

/// Summoner-v4: per-platform profiles, served by the platform host.
#[async_trait]
pub trait SummonerApi: Send + Sync {
    async fn get_summoner_by_puuid(
        &self,
        puuid: &str,
        region: Option<&str>,
    ) -> RiftResult<SummonerProfile>;
}

pub fn by_puuid_url(platform_host: &str, puuid: &str) -> String {
    format!(
        "{}/lol/summoner/v4/summoners/by-puuid/{}",
        platform_host,
        urlencoding::encode(puuid)
    )
}

#[async_trait]
impl SummonerApi for RiotClient {
    async fn get_summoner_by_puuid(
        &self,
        puuid: &str,
        region: Option<&str>,
    ) -> RiftResult<SummonerProfile> {
        if puuid.is_empty() {
            return Err(RiftError::Config("puuid required".into()));
        }
        let entry = self.resolve(region)?;

        tracing::trace!(
            "[RIOT::CLIENT] get_summoner_by_puuid {} in {}",
            puuid,
            entry.code
        );

        self.get(by_puuid_url(&entry.platform_host, puuid)).await
    }
}
