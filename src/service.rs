use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::MatchSource;
use crate::db::MatchCache;
use crate::error::{RelayError, RelayResult};
use crate::models::{MatchRecord, MatchSummary};
use crate::normalize::normalize;

/// Parameters for a match listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    /// Number of match IDs to request
    pub count: u32,

    /// Keep only matches whose `info.gameMode` equals this exactly
    pub mode: Option<String>,
}

/// Result of a match listing fan-out
#[derive(Debug, Default)]
pub struct MatchBatch {
    /// Fetched matches, in the order the IDs were listed
    pub matches: Vec<MatchRecord>,

    /// Matches whose detail fetch failed
    pub failures: Vec<MatchFailure>,
}

#[derive(Debug)]
pub struct MatchFailure {
    pub match_id: String,
    pub error: RelayError,
}

/// Coordinates the upstream client and the match cache
pub struct MatchService {
    source: Arc<dyn MatchSource>,
    cache: Arc<dyn MatchCache>,
    batch_timeout: Duration,
}

impl MatchService {
    pub fn new(
        source: Arc<dyn MatchSource>,
        cache: Arc<dyn MatchCache>,
        batch_timeout: Duration,
    ) -> Self {
        Self {
            source,
            cache,
            batch_timeout,
        }
    }

    /// Resolve a Riot ID to its account payload, unchanged
    pub async fn lookup_account(&self, game_name: &str, tag_line: &str) -> RelayResult<Value> {
        info!("Looking up account {}#{}", game_name, tag_line);
        self.source.account_by_riot_id(game_name, tag_line).await
    }

    /// List a player's recent matches with full details.
    ///
    /// Details are fetched concurrently and returned in listing order. A
    /// failed detail fetch is reported in `failures` instead of failing the
    /// batch, unless every fetch failed.
    pub async fn list_matches(&self, puuid: &str, query: &MatchQuery) -> RelayResult<MatchBatch> {
        let ids = self.source.match_ids_by_puuid(puuid, query.count).await?;

        debug!("Fetching details for {} matches of {}", ids.len(), puuid);

        let fetches = ids.iter().map(|id| self.source.match_by_id(id));

        // Dropping the joined future on expiry cancels every in-flight fetch
        let outcomes = tokio::time::timeout(self.batch_timeout, join_all(fetches))
            .await
            .map_err(|_| {
                RelayError::UpstreamUnavailable(format!(
                    "match batch timed out after {:?}",
                    self.batch_timeout
                ))
            })?;

        let mut batch = MatchBatch::default();

        for (match_id, outcome) in ids.into_iter().zip(outcomes) {
            match outcome {
                Ok(record) => batch.matches.push(record),
                Err(error) => {
                    warn!("Failed to fetch match {}: {}", match_id, error);
                    batch.failures.push(MatchFailure { match_id, error });
                }
            }
        }

        if batch.matches.is_empty() && !batch.failures.is_empty() {
            return Err(batch.failures.remove(0).error);
        }

        if let Some(mode) = &query.mode {
            batch
                .matches
                .retain(|m| m.game_mode() == Some(mode.as_str()));
        }

        info!(
            "Listed {} matches for {} ({} failed)",
            batch.matches.len(),
            puuid,
            batch.failures.len()
        );

        Ok(batch)
    }

    /// Fetch one match, serving from the cache when possible.
    ///
    /// A failed cache write is logged and does not affect the response.
    pub async fn fetch_match(&self, match_id: &str) -> RelayResult<MatchRecord> {
        if let Some(record) = self.cache.get(match_id).await? {
            debug!("Returning cached match {}", match_id);
            return Ok(record);
        }

        let record = self.source.match_by_id(match_id).await?;

        if let Err(e) = self.cache.put(match_id, &record).await {
            warn!("Failed to cache match {}: {}", match_id, e);
        }

        Ok(record)
    }
}

/// Read a match document from disk and summarise it for `participant`
pub async fn summarize_file(path: &Path, participant: &str) -> RelayResult<MatchSummary> {
    let content = tokio::fs::read_to_string(path).await?;
    let record: MatchRecord = serde_json::from_str(&content)?;

    normalize(&record, participant)
}
