pub mod account;
pub mod match_v5;
pub mod summoner;

pub use account::AccountApi;
pub use match_v5::MatchApi;
pub use summoner::SummonerApi;

/// Every endpoint group of the Riot API covered by this crate.
pub trait RiotApiFull: AccountApi + SummonerApi + MatchApi {}

impl<T: AccountApi + SummonerApi + MatchApi> RiotApiFull for T {}
