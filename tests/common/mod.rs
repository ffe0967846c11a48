//! Shared test helpers: an in-memory shortener backend that records calls

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use linkpane::client::{
    ClientError, GeoPoint, HistoryEntry, PreviewResult, ShortenerApi, StatsResult,
};
use linkpane::interfaces::tui::app::{App, AppSettings};
use linkpane::interfaces::tui::clipboard::ClipboardSink;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Preview(String),
    StatsByShort(String),
    StatsByOriginal(String),
    Shorten(String),
    History,
}

/// Backend double; `up == false` makes every call fail with a transport error
pub struct MockApi {
    pub up: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn online() -> Arc<Self> {
        Arc::new(Self {
            up: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn offline() -> Arc<Self> {
        Arc::new(Self {
            up: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if self.up {
            Ok(())
        } else {
            Err(ClientError::Transport("connection refused".into()))
        }
    }
}

pub const SHORT_URL: &str = "https://s.example/abc123";

#[async_trait]
impl ShortenerApi for MockApi {
    async fn preview(&self, url: &str) -> Result<PreviewResult, ClientError> {
        self.record(Call::Preview(url.to_string()))?;
        Ok(PreviewResult {
            title: format!("Title of {}", url),
            description: "A page".into(),
            image: None,
        })
    }

    async fn stats_by_short(&self, code: &str) -> Result<StatsResult, ClientError> {
        self.record(Call::StatsByShort(code.to_string()))?;
        Ok(StatsResult {
            total_clicks: 5,
            latest_geo_location: Some(GeoPoint {
                country: "Germany".into(),
                city: "Berlin".into(),
                latitude: 52.5,
                longitude: 13.4,
                count: 5,
            }),
            locations: vec![GeoPoint {
                country: "Germany".into(),
                city: "Berlin".into(),
                latitude: 52.5,
                longitude: 13.4,
                count: 5,
            }],
        })
    }

    async fn stats_by_original(&self, url: &str) -> Result<StatsResult, ClientError> {
        self.record(Call::StatsByOriginal(url.to_string()))?;
        Ok(StatsResult {
            total_clicks: 2,
            ..StatsResult::zeroed()
        })
    }

    async fn shorten(&self, url: &str) -> Result<String, ClientError> {
        self.record(Call::Shorten(url.to_string()))?;
        Ok(SHORT_URL.to_string())
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        self.record(Call::History)?;
        Ok(vec![HistoryEntry {
            id: 1,
            original_url: "https://example.com".into(),
            short_code: "abc123".into(),
            created_at: "2024-03-01T10:00:00Z".into(),
            click_count: 5,
        }])
    }
}

/// App wired to the mock backend and an in-memory clipboard
pub fn test_app(api: Arc<MockApi>) -> App {
    App::new(api, AppSettings::default(), ClipboardSink::memory())
}
