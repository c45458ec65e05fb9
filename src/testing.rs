//! Fixtures and in-process fakes shared by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::MatchSource;
use crate::db::MatchCache;
use crate::error::{RelayError, RelayResult};
use crate::models::MatchRecord;

/// Participant JSON with fixed stats, as found in `info.participants`
pub fn participant(name: &str, win: bool) -> Value {
    json!({
        "summonerName": name,
        "riotIdGameName": name,
        "win": win,
        "kills": 7,
        "deaths": 2,
        "assists": 11,
        "totalMinionsKilled": 212,
        "champLevel": 16,
        "championId": 222,
        "item0": 3031,
        "item1": 3006,
        "item2": 3094,
        "item3": 0,
        "item4": 1055,
        "item5": 3046,
        "item6": 3340,
        "summoner1Id": 4,
        "summoner2Id": 7,
        "visionScore": 18,
        "perks": {
            "statPerks": { "defense": 5002, "flex": 5008, "offense": 5005 },
            "styles": [
                {
                    "description": "primaryStyle",
                    "style": 8000,
                    "selections": [{ "perk": 8008 }, { "perk": 9111 }]
                },
                {
                    "description": "subStyle",
                    "style": 8300,
                    "selections": [{ "perk": 8345 }, { "perk": 8347 }]
                }
            ]
        }
    })
}

/// Two-player match where "lolarmon1" wins against "someone_else"
pub fn sample_match(match_id: &str, game_mode: &str, duration_secs: u64) -> MatchRecord {
    let mut loser = participant("someone_else", false);
    loser["kills"] = json!(2);
    loser["deaths"] = json!(7);
    loser["assists"] = json!(4);

    MatchRecord::new(json!({
        "metadata": { "matchId": match_id },
        "info": {
            "gameMode": game_mode,
            "gameDuration": duration_secs,
            "participants": [participant("lolarmon1", true), loser]
        }
    }))
}

/// Scripted stand-in for the Riot API
#[derive(Default)]
pub struct FakeSource {
    listed: Vec<String>,
    matches: HashMap<String, MatchRecord>,
    missing: HashSet<String>,
    delays: HashMap<String, Duration>,
    fail_ids: bool,
    pub match_fetches: AtomicUsize,
    pub requested_count: Mutex<Option<u32>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// List and serve `record` under its `metadata.matchId`
    pub fn with_match(mut self, record: MatchRecord) -> Self {
        let id = record.match_id().unwrap_or_default().to_string();
        self.listed.push(id.clone());
        self.matches.insert(id, record);
        self
    }

    /// List `match_id` but answer 404 for its details
    pub fn with_missing(mut self, match_id: &str) -> Self {
        self.listed.push(match_id.to_string());
        self.missing.insert(match_id.to_string());
        self
    }

    pub fn with_delay(mut self, match_id: &str, delay: Duration) -> Self {
        self.delays.insert(match_id.to_string(), delay);
        self
    }

    /// Make the match-ID listing fail as if the network were down
    pub fn failing_ids(mut self) -> Self {
        self.fail_ids = true;
        self
    }
}

fn not_found(what: &str) -> RelayError {
    RelayError::UpstreamRejected {
        status: 404,
        body: format!("{} not found", what),
    }
}

#[async_trait]
impl MatchSource for FakeSource {
    async fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> RelayResult<Value> {
        if game_name == "unknown" {
            return Err(not_found("account"));
        }

        Ok(json!({ "puuid": "p-1", "gameName": game_name, "tagLine": tag_line }))
    }

    async fn match_ids_by_puuid(&self, _puuid: &str, count: u32) -> RelayResult<Vec<String>> {
        if self.fail_ids {
            return Err(RelayError::UpstreamUnavailable(
                "connection refused".to_string(),
            ));
        }

        *self.requested_count.lock().unwrap() = Some(count);
        Ok(self.listed.iter().take(count as usize).cloned().collect())
    }

    async fn match_by_id(&self, match_id: &str) -> RelayResult<MatchRecord> {
        self.match_fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(match_id) {
            tokio::time::sleep(*delay).await;
        }

        if self.missing.contains(match_id) {
            return Err(not_found("match"));
        }

        self.matches
            .get(match_id)
            .cloned()
            .ok_or_else(|| not_found("match"))
    }
}

/// Map-backed match cache that counts successful writes
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, MatchRecord>>,
    fail_reads: bool,
    fail_writes: bool,
    pub puts: AtomicUsize,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

#[async_trait]
impl MatchCache for MemoryCache {
    async fn get(&self, match_id: &str) -> RelayResult<Option<MatchRecord>> {
        if self.fail_reads {
            return Err(RelayError::StorageFailure(sqlx::Error::PoolTimedOut));
        }

        Ok(self.entries.lock().unwrap().get(match_id).cloned())
    }

    async fn put(&self, match_id: &str, record: &MatchRecord) -> RelayResult<()> {
        if self.fail_writes {
            return Err(RelayError::StorageFailure(sqlx::Error::PoolTimedOut));
        }

        self.entries
            .lock()
            .unwrap()
            .insert(match_id.to_string(), record.clone());
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
