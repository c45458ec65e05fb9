use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Riot API key, forwarded as `X-Riot-Token`
    pub riot_api_key: String,

    /// Regional Riot API base URL
    pub riot_api_url: String,

    /// SQLite database path for the match cache
    pub database_url: String,

    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// Directory served for non-API paths (frontend assets)
    pub static_dir: PathBuf,

    /// Local match document behind `/api/match-history`
    pub match_fixture_path: PathBuf,

    /// Participant summarised from the fixture
    pub fixture_participant: String,

    /// Number of match IDs requested when the query omits `count`
    pub default_match_count: u32,

    /// Timeout for a single upstream request
    pub upstream_timeout: Duration,

    /// Timeout for a whole match-detail fan-out
    pub batch_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            riot_api_key: env::var("RIOT_API_KEY").context("RIOT_API_KEY must be set")?,

            riot_api_url: env::var("RIOT_API_URL")
                .unwrap_or_else(|_| "https://americas.api.riotgames.com".to_string()),

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:data/matches.db".to_string()),

            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
                .parse()
                .context("BIND_ADDR must be a valid socket address")?,

            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "public".to_string())
                .into(),

            match_fixture_path: env::var("MATCH_FIXTURE_PATH")
                .unwrap_or_else(|_| "data/match.json".to_string())
                .into(),

            fixture_participant: env::var("FIXTURE_PARTICIPANT")
                .unwrap_or_else(|_| "lolarmon1".to_string()),

            default_match_count: env::var("DEFAULT_MATCH_COUNT")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .context("DEFAULT_MATCH_COUNT must be a valid number")?,

            upstream_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("UPSTREAM_TIMEOUT_SECS must be a valid number")?,
            ),

            batch_timeout: Duration::from_secs(
                env::var("BATCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("BATCH_TIMEOUT_SECS must be a valid number")?,
            ),
        })
    }
}
