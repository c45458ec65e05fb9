pub mod riot;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RelayResult;
use crate::models::MatchRecord;

pub use riot::RiotClient;

/// Source of account and match data
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Resolve a Riot ID (`gameName#tagLine`) to its account payload
    async fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> RelayResult<Value>;

    /// Most recent match IDs for a player, newest first
    async fn match_ids_by_puuid(&self, puuid: &str, count: u32) -> RelayResult<Vec<String>>;

    /// Full match document
    async fn match_by_id(&self, match_id: &str) -> RelayResult<MatchRecord>;
}
