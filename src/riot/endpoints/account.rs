use async_trait::async_trait;

use crate::error::{RiftError, RiftResult};
use crate::riot::client::RiotClient;
use crate::riot::types::AccountDto;

const RIOT_ID_SEPARATOR: char = '#';

/// Account-v1: Riot ID to account lookups, served by the shard host.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Look an account up by Riot ID.
    ///
    /// `identifier` is either a full Riot ID (`Name#TAG`), in which case
    /// `tag_line` is ignored, or a bare game name completed by `tag_line`.
    async fn get_account_by_riot_id(
        &self,
        identifier: &str,
        tag_line: Option<&str>,
        region: Option<&str>,
    ) -> RiftResult<AccountDto>;
}

/// Split a Riot ID into its game name and tag line.
pub fn split_riot_id<'a>(
    identifier: &'a str,
    tag_line: Option<&'a str>,
) -> RiftResult<(&'a str, &'a str)> {
    let (game_name, tag_line) = match identifier.split_once(RIOT_ID_SEPARATOR) {
        Some((game_name, tag_line)) => (game_name, tag_line),
        None => (identifier, tag_line.unwrap_or_default()),
    };

    if tag_line.is_empty() {
        return Err(RiftError::Config("tag line required".into()));
    }
    if game_name.is_empty() {
        return Err(RiftError::Config("game name required".into()));
    }

    Ok((game_name, tag_line))
}

pub fn by_riot_id_url(shard_host: &str, game_name: &str, tag_line: &str) -> String {
    format!(
        "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
        shard_host,
        urlencoding::encode(game_name),
        urlencoding::encode(tag_line)
    )
}

#[async_trait]
impl AccountApi for RiotClient {
    async fn get_account_by_riot_id(
        &self,
        identifier: &str,
        tag_line: Option<&str>,
        region: Option<&str>,
    ) -> RiftResult<AccountDto> {
        let (game_name, tag_line) = split_riot_id(identifier, tag_line)?;
        let entry = self.resolve(region)?;

        tracing::trace!(
            "[RIOT::CLIENT] get_account_by_riot_id {}#{} in {}",
            game_name,
            tag_line,
            entry.code
        );

        self.get(by_riot_id_url(&entry.shard_host, game_name, tag_line))
            .await
    }
}
