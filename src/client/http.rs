//! `ShortenerApi` over HTTP
//!
//! `ureq` is blocking, so every call runs on tokio's blocking pool and the
//! UI task only awaits the join handle.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use ureq::Agent;

use super::models::{PreviewEnvelope, ShortenRequest, ShortenResponse};
use super::{ClientError, HistoryEntry, PreviewResult, ShortenerApi, StatsResult};
use crate::config::AppConfig;

/// HTTP implementation of [`ShortenerApi`]
///
/// `Agent` is a cheap handle around a shared connection pool, so cloning it
/// into each blocking closure reuses connections.
#[derive(Clone)]
pub struct HttpApi {
    agent: Agent,
    base_url: String,
    preview_endpoint: String,
}

impl HttpApi {
    pub fn new(base_url: &str, preview_endpoint: &str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            preview_endpoint: preview_endpoint.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.api_base(),
            &config.preview.endpoint,
            config.http_timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T>(
        &self,
        url: String,
        query: Option<(&'static str, String)>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let agent = self.agent.clone();
        run_blocking(move || {
            trace!("GET {} {:?}", url, query);
            let mut request = agent.get(&url);
            if let Some((key, value)) = &query {
                request = request.query(*key, value);
            }
            let resp = request.call().map_err(map_ureq_error)?;
            resp.into_body()
                .read_json::<T>()
                .map_err(map_ureq_error)
        })
        .await
    }
}

#[async_trait]
impl ShortenerApi for HttpApi {
    async fn preview(&self, url: &str) -> Result<PreviewResult, ClientError> {
        let envelope: PreviewEnvelope = self
            .get_json(self.preview_endpoint.clone(), Some(("url", url.to_string())))
            .await?;
        envelope.into_preview().ok_or_else(|| {
            ClientError::Unexpected("preview service did not report success".to_string())
        })
    }

    async fn stats_by_short(&self, code: &str) -> Result<StatsResult, ClientError> {
        self.get_json(
            self.endpoint("location-stats"),
            Some(("shortCode", code.to_string())),
        )
        .await
    }

    async fn stats_by_original(&self, url: &str) -> Result<StatsResult, ClientError> {
        self.get_json(
            self.endpoint("location-stats"),
            Some(("originalUrl", url.to_string())),
        )
        .await
    }

    async fn shorten(&self, url: &str) -> Result<String, ClientError> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint("shorten");
        let original = url.to_string();

        let response: ShortenResponse = run_blocking(move || {
            trace!("POST {}", endpoint);
            let resp = agent
                .post(&endpoint)
                .send_json(&ShortenRequest {
                    original_url: &original,
                })
                .map_err(map_ureq_error)?;
            resp.into_body()
                .read_json::<ShortenResponse>()
                .map_err(map_ureq_error)
        })
        .await?;

        if response.short_url.trim().is_empty() {
            return Err(ClientError::Unexpected("empty shortUrl".to_string()));
        }
        debug!("Shortened {} -> {}", url, response.short_url);
        Ok(response.short_url)
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        self.get_json(self.endpoint("history"), None).await
    }
}

/// 在阻塞线程池中执行同步 HTTP 请求
async fn run_blocking<T, F>(f: F) -> Result<T, ClientError>
where
    F: FnOnce() -> Result<T, ClientError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ClientError::Join(e.to_string()))?
}

fn map_ureq_error(err: ureq::Error) -> ClientError {
    match err {
        ureq::Error::StatusCode(code) => ClientError::Status(code),
        ureq::Error::Json(e) => ClientError::Decode(e.to_string()),
        other => ClientError::Transport(other.to_string()),
    }
}
