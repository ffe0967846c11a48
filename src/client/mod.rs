//! Client layer for the shortener backend
//!
//! The TUI never talks HTTP directly: it goes through [`ShortenerApi`], which
//! [`HttpApi`] implements over a blocking `ureq` agent and tests replace with
//! an in-memory double.
//!
//! Errors here are raw. Mapping a failure to the degraded value the user
//! sees happens one level up, in `form::dispatcher`.

mod http;
pub mod models;

pub use http::HttpApi;
pub use models::{GeoPoint, HistoryEntry, PreviewResult, StatsResult};

use std::fmt;

use async_trait::async_trait;

use crate::errors::LinkpaneError;

// ============ ClientError ============

/// Errors from the HTTP seam
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connection refused, DNS, TLS, timeout
    Transport(String),
    /// Server answered with a non-2xx status
    Status(u16),
    /// Body was not the JSON we expected
    Decode(String),
    /// Well-formed answer that still cannot be used (e.g. preview status != success)
    Unexpected(String),
    /// The blocking worker panicked or was cancelled
    Join(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::Status(code) => write!(f, "HTTP status {}", code),
            ClientError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
            ClientError::Unexpected(msg) => write!(f, "Unexpected response: {}", msg),
            ClientError::Join(msg) => write!(f, "Background task failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ClientError> for LinkpaneError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status(code) => {
                LinkpaneError::http_status(format!("Server returned HTTP {}", code))
            }
            ClientError::Decode(msg) => LinkpaneError::decode(msg),
            other => LinkpaneError::network(other.to_string()),
        }
    }
}

// ============ ShortenerApi ============

/// Everything the interface asks of the outside world
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Title/description/image for an arbitrary URL
    async fn preview(&self, url: &str) -> Result<PreviewResult, ClientError>;

    /// Stats keyed by the short code (`abc123`, not the full short URL)
    async fn stats_by_short(&self, code: &str) -> Result<StatsResult, ClientError>;

    /// Stats keyed by the long URL that was shortened
    async fn stats_by_original(&self, url: &str) -> Result<StatsResult, ClientError>;

    /// Returns the new short URL
    async fn shorten(&self, url: &str) -> Result<String, ClientError>;

    async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError>;
}
