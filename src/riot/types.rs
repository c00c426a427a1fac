use serde::{Deserialize, Serialize};

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

// ============================================================================
// Summoner-v4
// ============================================================================

/// Summoner profile, returned exactly as the platform host sent it.
pub type SummonerProfile = serde_json::Value;

// ============================================================================
// Match-v5
// ============================================================================

/// Region-prefixed match identifier, e.g. `EUW1_7349112729`.
pub type MatchId = String;

/// Full match payload, returned exactly as the shard host sent it.
pub type MatchDetail = serde_json::Value;

/// Query parameters of the match list endpoint. Unset fields are left out of
/// the query string; the API validates the ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<u32>,
    /// Match type filter: `ranked`, `normal`, `tourney` or `tutorial`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    /// Epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
}

// ============================================================================
// Data Dragon
// ============================================================================

/// Champion or item dataset for one `{version, locale}` pair.
pub type StaticDataSet = serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_decodes_without_name_fields() {
        let account: AccountDto = serde_json::from_str(r#"{"puuid":"abc"}"#).unwrap();

        assert_eq!(account.puuid, "abc");
        assert_eq!(account.game_name, None);
    }

    #[test]
    fn match_list_options_skip_unset_fields() {
        let options = MatchListOptions {
            count: Some(5),
            match_type: Some("ranked".into()),
            start_time: Some(1_700_000_000),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({"count": 5, "type": "ranked", "startTime": 1_700_000_000})
        );
    }
}
