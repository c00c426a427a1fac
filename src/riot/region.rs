use std::collections::HashMap;
use std::fmt;

use crate::error::{RiftError, RiftResult};

/// Regional routing values for Riot API (Account-v1, Match-v5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shard {
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Shard {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
        }
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Platform routing values for Riot API (Summoner-v4), with the shard each one
/// routes to. New regions are added here.
const PLATFORMS: &[(&str, Shard)] = &[
    ("BR1", Shard::Americas),
    ("LA1", Shard::Americas),
    ("LA2", Shard::Americas),
    ("NA1", Shard::Americas),
    ("EUN1", Shard::Europe),
    ("EUW1", Shard::Europe),
    ("ME1", Shard::Europe),
    ("TR1", Shard::Europe),
    ("RU", Shard::Europe),
    ("JP1", Shard::Asia),
    ("KR", Shard::Asia),
    ("OC1", Shard::Sea),
    ("PH2", Shard::Sea),
    ("SG2", Shard::Sea),
    ("TH2", Shard::Sea),
    ("TW2", Shard::Sea),
    ("VN2", Shard::Sea),
];

/// Hosts serving a single platform code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEntry {
    pub code: String,
    /// Base URL of the platform host, e.g. `https://na1.api.riotgames.com`.
    pub platform_host: String,
    /// Base URL of the continental routing host, e.g. `https://americas.api.riotgames.com`.
    pub shard_host: String,
}

impl RegionEntry {
    pub fn new(
        code: impl Into<String>,
        platform_host: impl Into<String>,
        shard_host: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into().to_uppercase(),
            platform_host: platform_host.into(),
            shard_host: shard_host.into(),
        }
    }
}

/// Lookup table from a short platform code to its hosts.
#[derive(Debug, Clone)]
pub struct RegionTable {
    entries: HashMap<String, RegionEntry>,
}

impl RegionTable {
    /// Build a table from arbitrary entries, e.g. to point every code at a proxy.
    pub fn from_entries(entries: impl IntoIterator<Item = RegionEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.code.clone(), entry))
                .collect(),
        }
    }

    /// Find the entry for `code`. Codes are upper-cased before the lookup.
    pub fn resolve(&self, code: &str) -> RiftResult<&RegionEntry> {
        self.entries
            .get(&code.to_uppercase())
            .ok_or_else(|| RiftError::Config(format!("unknown region: {}", code)))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::from_entries(PLATFORMS.iter().map(|(code, shard)| {
            RegionEntry::new(
                *code,
                format!("https://{}.api.riotgames.com", code.to_lowercase()),
                shard.base_url(),
            )
        }))
    }
}
