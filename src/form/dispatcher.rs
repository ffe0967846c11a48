//! Fetch dispatcher
//!
//! Turns effects from the view state into tokio tasks against a
//! [`ShortenerApi`] and reports back over an unbounded channel. Read
//! failures are degraded to fallback values here, so everything arriving on
//! the channel is directly renderable; only a failed shorten stays a failure.

use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, warn};

use super::mode::LookupRequest;
use crate::client::{HistoryEntry, PreviewResult, ShortenerApi, StatsResult};

pub const SHORTEN_FAILED_MESSAGE: &str = "Something went wrong, please try again";

/// Identity of one dispatched lookup; later tickets are larger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Preview(PreviewResult),
    Stats(StatsResult),
}

/// What a finished task reports to the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Lookup {
        ticket: LookupTicket,
        outcome: LookupOutcome,
    },
    Shortened {
        ticket: LookupTicket,
        short_url: String,
    },
    ShortenFailed {
        ticket: LookupTicket,
        message: String,
    },
    History(Vec<HistoryEntry>),
}

/// Run a read lookup, substituting the fallback on any failure
pub async fn resolve_lookup(api: &dyn ShortenerApi, request: &LookupRequest) -> LookupOutcome {
    match request {
        LookupRequest::Preview(url) => match api.preview(url).await {
            Ok(preview) => LookupOutcome::Preview(preview),
            Err(e) => {
                warn!("Preview for {} failed: {}", url, e);
                LookupOutcome::Preview(PreviewResult::unavailable())
            }
        },
        LookupRequest::StatsByShort(code) => match api.stats_by_short(code).await {
            Ok(stats) => LookupOutcome::Stats(stats),
            Err(e) => {
                warn!("Stats for short code {} failed: {}", code, e);
                LookupOutcome::Stats(StatsResult::zeroed())
            }
        },
        LookupRequest::StatsByOriginal(url) => match api.stats_by_original(url).await {
            Ok(stats) => LookupOutcome::Stats(stats),
            Err(e) => {
                warn!("Stats for original URL {} failed: {}", url, e);
                LookupOutcome::Stats(StatsResult::zeroed())
            }
        },
    }
}

pub async fn resolve_history(api: &dyn ShortenerApi) -> Vec<HistoryEntry> {
    match api.history().await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Loading history failed: {}", e);
            Vec::new()
        }
    }
}

pub async fn resolve_shorten(api: &dyn ShortenerApi, ticket: LookupTicket, url: &str) -> Completion {
    match api.shorten(url).await {
        Ok(short_url) => Completion::Shortened { ticket, short_url },
        Err(e) => {
            warn!("Shorten {} failed: {}", url, e);
            Completion::ShortenFailed {
                ticket,
                message: SHORTEN_FAILED_MESSAGE.to_string(),
            }
        }
    }
}

/// Spawns request tasks; results come back through [`Dispatcher::channel`]
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn ShortenerApi>,
    tx: UnboundedSender<Completion>,
}

impl Dispatcher {
    pub fn channel(api: Arc<dyn ShortenerApi>) -> (Self, UnboundedReceiver<Completion>) {
        let (tx, rx) = unbounded_channel();
        (Self { api, tx }, rx)
    }

    pub fn lookup(&self, ticket: LookupTicket, request: LookupRequest) {
        debug!(
            "Dispatching {:?} lookup #{} for {}",
            request.kind(),
            ticket.0,
            request.value()
        );
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = resolve_lookup(api.as_ref(), &request).await;
            // Receiver gone means the UI is shutting down
            let _ = tx.send(Completion::Lookup { ticket, outcome });
        });
    }

    pub fn shorten(&self, ticket: LookupTicket, url: String) {
        debug!("Dispatching shorten #{} {}", ticket.0, url);
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let completion = resolve_shorten(api.as_ref(), ticket, &url).await;
            let _ = tx.send(completion);
        });
    }

    pub fn history(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let entries = resolve_history(api.as_ref()).await;
            let _ = tx.send(Completion::History(entries));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientError, GeoPoint};
    use async_trait::async_trait;

    /// Backend that is either fully up or fully down
    struct FixedApi {
        up: bool,
    }

    #[async_trait]
    impl ShortenerApi for FixedApi {
        async fn preview(&self, url: &str) -> Result<PreviewResult, ClientError> {
            if self.up {
                Ok(PreviewResult {
                    title: format!("Title of {}", url),
                    description: "desc".into(),
                    image: None,
                })
            } else {
                Err(ClientError::Transport("down".into()))
            }
        }

        async fn stats_by_short(&self, _code: &str) -> Result<StatsResult, ClientError> {
            if self.up {
                Ok(StatsResult {
                    total_clicks: 5,
                    latest_geo_location: None,
                    locations: vec![GeoPoint {
                        country: "Germany".into(),
                        city: "Berlin".into(),
                        latitude: 52.5,
                        longitude: 13.4,
                        count: 5,
                    }],
                })
            } else {
                Err(ClientError::Status(500))
            }
        }

        async fn stats_by_original(&self, url: &str) -> Result<StatsResult, ClientError> {
            self.stats_by_short(url).await
        }

        async fn shorten(&self, _url: &str) -> Result<String, ClientError> {
            if self.up {
                Ok("https://s.example/xY".into())
            } else {
                Err(ClientError::Status(500))
            }
        }

        async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
            if self.up {
                Ok(vec![HistoryEntry {
                    id: 1,
                    original_url: "https://example.com".into(),
                    short_code: "xY".into(),
                    created_at: "2024-01-01T00:00:00Z".into(),
                    click_count: 2,
                }])
            } else {
                Err(ClientError::Transport("down".into()))
            }
        }
    }

    #[tokio::test]
    async fn test_preview_failure_yields_exact_fallback() {
        let api = FixedApi { up: false };
        let outcome =
            resolve_lookup(&api, &LookupRequest::Preview("https://example.com".into())).await;
        assert_eq!(
            outcome,
            LookupOutcome::Preview(PreviewResult {
                title: "Unable to load preview".into(),
                description: "Could not fetch metadata for this URL.".into(),
                image: None,
            })
        );
    }

    #[tokio::test]
    async fn test_stats_failure_yields_zeroed_stats() {
        let api = FixedApi { up: false };
        for request in [
            LookupRequest::StatsByShort("abc123".into()),
            LookupRequest::StatsByOriginal("https://example.com".into()),
        ] {
            let outcome = resolve_lookup(&api, &request).await;
            assert_eq!(outcome, LookupOutcome::Stats(StatsResult::zeroed()));
        }
    }

    #[tokio::test]
    async fn test_history_failure_yields_empty_list() {
        let api = FixedApi { up: false };
        assert!(resolve_history(&api).await.is_empty());
        let api = FixedApi { up: true };
        assert_eq!(resolve_history(&api).await.len(), 1);
    }

    #[tokio::test]
    async fn test_shorten_failure_keeps_ticket() {
        let api = FixedApi { up: false };
        let completion = resolve_shorten(&api, LookupTicket(7), "https://example.com").await;
        assert_eq!(
            completion,
            Completion::ShortenFailed {
                ticket: LookupTicket(7),
                message: SHORTEN_FAILED_MESSAGE.into(),
            }
        );
    }

    #[tokio::test]
    async fn test_dispatcher_reports_over_channel() {
        let (dispatcher, mut rx) = Dispatcher::channel(Arc::new(FixedApi { up: true }));
        dispatcher.lookup(LookupTicket(3), LookupRequest::StatsByShort("abc123".into()));

        match rx.recv().await {
            Some(Completion::Lookup {
                ticket,
                outcome: LookupOutcome::Stats(stats),
            }) => {
                assert_eq!(ticket, LookupTicket(3));
                assert_eq!(stats.total_clicks, 5);
            }
            other => panic!("unexpected completion: {:?}", other),
        }

        dispatcher.shorten(LookupTicket(4), "https://example.com".into());
        assert_eq!(
            rx.recv().await,
            Some(Completion::Shortened {
                ticket: LookupTicket(4),
                short_url: "https://s.example/xY".into(),
            })
        );
    }
}
