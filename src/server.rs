//! HTTP routes for the frontend.

use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, warn};

use crate::error::RelayError;
use crate::models::{MatchRecord, MatchSummary};
use crate::service::{summarize_file, MatchQuery, MatchService};

/// Header listing match IDs whose details could not be fetched
pub const FAILED_MATCHES_HEADER: &str = "x-failed-match-ids";

/// Shared state for the route handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MatchService>,
    pub fixture_path: PathBuf,
    pub fixture_participant: String,
    pub default_match_count: u32,
}

/// Build the application router: API routes, then static files for everything else
pub fn create_router(state: AppState, static_dir: &FsPath) -> Router {
    Router::new()
        .route("/api/match-history", get(match_history))
        .route("/api/summoner/{game_name}/{tag_line}", get(summoner))
        .route("/api/matches/{puuid}", get(list_matches))
        .route("/api/match/{match_id}", get(match_detail))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Error returned by a handler, rendered as `{"error": ...}`
#[derive(Debug)]
pub struct ApiError(RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RelayError::UpstreamRejected { status, .. } => {
                warn!("Forwarding upstream rejection: {}", self.0);
                (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                    "Failed to fetch data from Riot API".to_string(),
                )
            }
            RelayError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => {
                error!("Server error: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct MatchesParams {
    count: Option<String>,
    mode: Option<String>,
}

impl MatchesParams {
    fn into_query(self, default_count: u32) -> Result<MatchQuery, RelayError> {
        // An empty parameter (`?count=`) counts as absent
        let count = match self.count.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse().map_err(|_| {
                RelayError::InvalidRequest(format!("count must be a non-negative number, got {:?}", raw))
            })?,
            _ => default_count,
        };

        Ok(MatchQuery {
            count,
            mode: self.mode.filter(|m| !m.is_empty()),
        })
    }
}

/// GET /api/match-history
async fn match_history(State(state): State<AppState>) -> Result<Json<MatchSummary>, ApiError> {
    let summary = summarize_file(&state.fixture_path, &state.fixture_participant).await?;
    Ok(Json(summary))
}

/// GET /api/summoner/{gameName}/{tagLine}
async fn summoner(
    State(state): State<AppState>,
    Path((game_name, tag_line)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let account = state.service.lookup_account(&game_name, &tag_line).await?;
    Ok(Json(account))
}

/// GET /api/matches/{puuid}?count=&mode=
async fn list_matches(
    State(state): State<AppState>,
    Path(puuid): Path<String>,
    Query(params): Query<MatchesParams>,
) -> Result<Response, ApiError> {
    let query = params.into_query(state.default_match_count)?;
    let batch = state.service.list_matches(&puuid, &query).await?;

    let mut response = Json(batch.matches).into_response();

    if !batch.failures.is_empty() {
        let failed: Vec<&str> = batch.failures.iter().map(|f| f.match_id.as_str()).collect();
        if let Ok(value) = HeaderValue::from_str(&failed.join(",")) {
            response.headers_mut().insert(FAILED_MATCHES_HEADER, value);
        }
    }

    Ok(response)
}

/// GET /api/match/{matchId}
async fn match_detail(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchRecord>, ApiError> {
    let record = state.service.fetch_match(&match_id).await?;
    Ok(Json(record))
}
