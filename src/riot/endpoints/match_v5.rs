use async_trait::async_trait;

use crate::error::{RiftError, RiftResult};
use crate::riot::client::RiotClient;
use crate::riot::types::{MatchDetail, MatchId, MatchListOptions};

/// Match-v5: match history and details, served by the shard host.
#[async_trait]
pub trait MatchApi: Send + Sync {
    async fn list_match_ids(
        &self,
        puuid: &str,
        options: &MatchListOptions,
        region: Option<&str>,
    ) -> RiftResult<Vec<MatchId>>;

    async fn get_match_detail(
        &self,
        match_id: &str,
        region: Option<&str>,
    ) -> RiftResult<MatchDetail>;
}

pub fn ids_by_puuid_url(shard_host: &str, puuid: &str) -> String {
    format!(
        "{}/lol/match/v5/matches/by-puuid/{}/ids",
        shard_host,
        urlencoding::encode(puuid)
    )
}

/// Match ids are already valid path segments (`EUW1_7349112729`) and are kept as is.
pub fn match_url(shard_host: &str, match_id: &str) -> String {
    format!("{}/lol/match/v5/matches/{}", shard_host, match_id)
}

#[async_trait]
impl MatchApi for RiotClient {
    async fn list_match_ids(
        &self,
        puuid: &str,
        options: &MatchListOptions,
        region: Option<&str>,
    ) -> RiftResult<Vec<MatchId>> {
        if puuid.is_empty() {
            return Err(RiftError::Config("puuid required".into()));
        }
        let entry = self.resolve(region)?;

        tracing::trace!(
            "[RIOT::CLIENT] list_match_ids {} in {} with {:?}",
            puuid,
            entry.code,
            options
        );

        self.get_with_query(ids_by_puuid_url(&entry.shard_host, puuid), options)
            .await
    }

    async fn get_match_detail(
        &self,
        match_id: &str,
        region: Option<&str>,
    ) -> RiftResult<MatchDetail> {
        if match_id.is_empty() {
            return Err(RiftError::Config("match id required".into()));
        }
        let entry = self.resolve(region)?;

        tracing::trace!("[RIOT::CLIENT] get_match_detail {} in {}", match_id, entry.code);

        self.get(match_url(&entry.shard_host, match_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn urls_target_shard_host() {
        let shard = "https://americas.api.riotgames.com";

        assert_eq!(
            ids_by_puuid_url(shard, "p/1"),
            "https://americas.api.riotgames.com/lol/match/v5/matches/by-puuid/p%2F1/ids"
        );
        assert_eq!(
            match_url(shard, "NA1_4242"),
            "https://americas.api.riotgames.com/lol/match/v5/matches/NA1_4242"
        );
    }

    #[tokio::test]
    async fn empty_identifiers_are_config_errors() {
        let client = RiotClient::new(&Config::new("RGAPI-TEST")).unwrap();

        let ids = client
            .list_match_ids("", &MatchListOptions::default(), None)
            .await;
        let detail = client.get_match_detail("", None).await;

        assert!(matches!(ids, Err(RiftError::Config(_))));
        assert!(matches!(detail, Err(RiftError::Config(_))));
        assert_eq!(client.requests_sent(), 0);
    }

    #[tokio::test]
    #[ignore = "API Key required"]
    async fn get_last_match_works() {
        let client = RiotClient::new(&Config::from_env()).unwrap();
        let puuid =
            "jG0VKFsMuF2aWaQoiDxJ1brhlXyMY7kj4HfIAucciWH_9YVdWVpbQDIRhJWQQGhP89qCrp5EwLxl3Q";

        let options = MatchListOptions {
            start: Some(0),
            count: Some(1),
            ..Default::default()
        };
        let ids = client
            .list_match_ids(puuid, &options, Some("EUW1"))
            .await
            .unwrap();
        let detail = client
            .get_match_detail(&ids[0], Some("EUW1"))
            .await
            .unwrap();

        assert_eq!(detail["metadata"]["matchId"], ids[0].as_str());
    }
}
