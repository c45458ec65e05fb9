use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::MatchSource;
use crate::error::{RelayError, RelayResult};
use crate::models::MatchRecord;

const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

/// Client for the Riot Games REST API (account-v1 and match-v5)
pub struct RiotClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RiotClient {
    /// Create a new Riot client for a regional base URL
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build Riot HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// GET a Riot endpoint and decode its JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> RelayResult<T> {
        let url = format!("{}{}", self.base_url, path);

        debug!("Requesting Riot API: {}", url);

        let response = self
            .client
            .get(&url)
            .header(RIOT_TOKEN_HEADER, &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        debug!("Riot API status: {}", status);

        if !status.is_success() {
            warn!("Riot API error: {} - {}", status, text);
            return Err(RelayError::UpstreamRejected {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| RelayError::MalformedInput(format!("Failed to parse Riot response: {}", e)))
    }
}

#[async_trait]
impl MatchSource for RiotClient {
    async fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> RelayResult<Value> {
        self.get_json(&account_path(game_name, tag_line)).await
    }

    async fn match_ids_by_puuid(&self, puuid: &str, count: u32) -> RelayResult<Vec<String>> {
        self.get_json(&match_ids_path(puuid, count)).await
    }

    async fn match_by_id(&self, match_id: &str) -> RelayResult<MatchRecord> {
        self.get_json(&match_path(match_id)).await
    }
}

fn account_path(game_name: &str, tag_line: &str) -> String {
    format!(
        "/riot/account/v1/accounts/by-riot-id/{}/{}",
        urlencoding::encode(game_name),
        urlencoding::encode(tag_line)
    )
}

fn match_ids_path(puuid: &str, count: u32) -> String {
    format!(
        "/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
        urlencoding::encode(puuid),
        count
    )
}

fn match_path(match_id: &str) -> String {
    format!("/lol/match/v5/matches/{}", urlencoding::encode(match_id))
}
