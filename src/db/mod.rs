pub mod matches;

use async_trait::async_trait;

use crate::error::RelayResult;
use crate::models::MatchRecord;

pub use matches::MatchStore;

/// Key-value cache of raw match documents, keyed by match ID
#[async_trait]
pub trait MatchCache: Send + Sync {
    /// Cached record for `match_id`; `Ok(None)` on a miss
    async fn get(&self, match_id: &str) -> RelayResult<Option<MatchRecord>>;

    /// Store `record` under `match_id`, replacing any previous entry
    async fn put(&self, match_id: &str, record: &MatchRecord) -> RelayResult<()>;
}
