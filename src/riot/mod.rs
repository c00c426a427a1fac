pub mod client;
pub mod endpoints;
pub mod metrics;
pub mod normalize;
pub mod region;
pub mod types;

pub use client::RiotClient;
pub use endpoints::{AccountApi, MatchApi, RiotApiFull, SummonerApi};
pub use normalize::{TransportFailure, normalize};
pub use region::{RegionEntry, RegionTable, Shard};
