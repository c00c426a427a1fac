//! Client for the Riot Games API and the Data Dragon static data service.
//!
//! [`RiotClient`] routes each call to the platform or shard host of a region
//! and turns every transport failure into a [`RiftError`]. [`DataDragon`]
//! fetches champion and item datasets for a fixed version and locale.

pub mod config;
pub mod ddragon;
pub mod error;
pub mod logging;
pub mod riot;

pub use config::Config;
pub use ddragon::DataDragon;
pub use error::{RiftError, RiftResult};
pub use riot::types::{
    AccountDto, MatchDetail, MatchId, MatchListOptions, StaticDataSet, SummonerProfile,
};
pub use riot::{
    AccountApi, MatchApi, RegionEntry, RegionTable, RiotApiFull, RiotClient, SummonerApi,
};
