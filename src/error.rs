use thiserror::Error;

/// Errors raised while retrieving, caching or summarising matches
#[derive(Debug, Error)]
pub enum RelayError {
    /// The upstream call could not complete (connect failure, timeout, broken body)
    #[error("Riot API unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream answered with a non-success status
    #[error("Riot API error: {status} - {body}")]
    UpstreamRejected { status: u16, body: String },

    /// The match cache could not be read or written
    #[error("Match cache error: {0}")]
    StorageFailure(#[from] sqlx::Error),

    /// No participant in the match carries the requested name
    #[error("Participant {0} not found in match")]
    ParticipantNotFound(String),

    /// A payload did not have the expected shape
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A local match file could not be read
    #[error("Failed to read match file: {0}")]
    Io(#[from] std::io::Error),

    /// The client sent parameters we cannot use
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RelayError {
    /// Upstream status code, when the error came from a rejected upstream call
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            RelayError::UpstreamRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::UpstreamUnavailable(format!("request timed out: {}", err))
        } else {
            RelayError::UpstreamUnavailable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::MalformedInput(err.to_string())
    }
}

pub type RelayResult<T> = std::result::Result<T, RelayError>;
