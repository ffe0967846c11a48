//! View state
//!
//! Everything the form screen shows lives here, and [`ViewState::update`] is
//! the only way to change it. Each message states which fields it resets;
//! side effects come back as [`Effect`] values for the caller to execute.
//!
//! Lookups are tagged with a [`LookupTicket`]. Only the newest ticket may
//! write a result, so a slow response for an old value or an old mode is
//! dropped instead of overwriting what the user is looking at now.

use tracing::debug;

use super::dispatcher::{Completion, LookupOutcome, LookupTicket};
use super::mode::{LookupKind, LookupRequest, Mode, TrackingKind};
use crate::client::{HistoryEntry, PreviewResult, StatsResult};

pub const COPIED_LABEL: &str = "Copied!";
pub const SHORTENED_NOTICE: &str = "URL shortened, copied to clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient status-bar message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// First frame; kicks off the history fetch
    Start,
    /// Field now holds this value
    InputChanged(String),
    Backspace,
    ClearInput,
    SetMode(Mode),
    /// Shorten <-> tracking, keeping the last tracking kind
    ToggleTracking,
    /// Track by short code <-> by original URL
    CycleTrackingKind,
    /// The watcher saw this value settle
    DebounceFired(String),
    LookupCompleted {
        ticket: LookupTicket,
        outcome: LookupOutcome,
    },
    Submit,
    ShortenCompleted {
        ticket: LookupTicket,
        short_url: String,
    },
    ShortenFailed {
        ticket: LookupTicket,
        message: String,
    },
    HistoryLoaded(Vec<HistoryEntry>),
    Reset,
    /// Copy the current short URL again
    CopyShortened,
    Copied,
    CopyFailed(String),
    /// Status-bar message from outside the form (exports, map links)
    Notify(Notice),
    DismissNotice,
}

impl From<Completion> for Msg {
    fn from(completion: Completion) -> Self {
        match completion {
            Completion::Lookup { ticket, outcome } => Msg::LookupCompleted { ticket, outcome },
            Completion::Shortened { ticket, short_url } => {
                Msg::ShortenCompleted { ticket, short_url }
            }
            Completion::ShortenFailed { ticket, message } => {
                Msg::ShortenFailed { ticket, message }
            }
            Completion::History(entries) => Msg::HistoryLoaded(entries),
        }
    }
}

/// Work the caller must perform after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Feed this value to the input watcher
    Debounce(String),
    CancelDebounce,
    Lookup {
        ticket: LookupTicket,
        request: LookupRequest,
    },
    Shorten {
        ticket: LookupTicket,
        url: String,
    },
    CopyToClipboard(String),
    LoadHistory,
}

/// What occupies the result area under the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Panel<'a> {
    Loading,
    Preview(&'a PreviewResult),
    Stats(&'a StatsResult),
    Empty,
}

#[derive(Debug, Default)]
pub struct ViewState {
    mode: Mode,
    /// Restored when re-entering tracking mode
    tracking_kind: TrackingKind,
    input: String,
    /// No inline error until the user has edited or submitted
    touched: bool,
    validation_error: Option<String>,
    preview: Option<PreviewResult>,
    stats: Option<StatsResult>,
    shortened: Option<String>,
    copied: bool,
    notice: Option<Notice>,
    history: Vec<HistoryEntry>,
    history_loaded: bool,
    last_ticket: u64,
    active_lookup: Option<LookupTicket>,
    active_shorten: Option<LookupTicket>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Start => vec![Effect::LoadHistory],
            Msg::InputChanged(value) => self.edit(value),
            Msg::Backspace => {
                let mut value = self.input.clone();
                if value.pop().is_none() {
                    return Vec::new();
                }
                self.edit(value)
            }
            Msg::ClearInput => {
                if self.input.is_empty() {
                    return Vec::new();
                }
                self.edit(String::new())
            }
            Msg::SetMode(mode) => self.set_mode(mode),
            Msg::ToggleTracking => self.set_mode(self.mode.toggle_tracking(self.tracking_kind)),
            Msg::CycleTrackingKind => self.set_mode(self.mode.cycle_kind()),
            Msg::DebounceFired(value) => self.on_settled(value),
            Msg::LookupCompleted { ticket, outcome } => {
                self.apply_lookup(ticket, outcome);
                Vec::new()
            }
            Msg::Submit => self.submit(),
            Msg::ShortenCompleted { ticket, short_url } => self.on_shortened(ticket, short_url),
            Msg::ShortenFailed { ticket, message } => {
                if self.active_shorten == Some(ticket) {
                    self.active_shorten = None;
                    self.notice = Some(Notice::error(message));
                } else {
                    debug!("Dropping failure of abandoned shorten #{}", ticket.0);
                }
                Vec::new()
            }
            Msg::HistoryLoaded(entries) => {
                self.history = entries;
                self.history_loaded = true;
                Vec::new()
            }
            Msg::Reset => {
                self.clear_form();
                vec![Effect::CancelDebounce]
            }
            Msg::CopyShortened => match &self.shortened {
                Some(url) => vec![Effect::CopyToClipboard(url.clone())],
                None => Vec::new(),
            },
            Msg::Copied => {
                if self.shortened.is_some() {
                    self.copied = true;
                }
                Vec::new()
            }
            Msg::CopyFailed(reason) => {
                self.copied = false;
                self.notice = Some(Notice::error(reason));
                Vec::new()
            }
            Msg::Notify(notice) => {
                self.notice = Some(notice);
                Vec::new()
            }
            Msg::DismissNotice => {
                self.notice = None;
                Vec::new()
            }
        }
    }

    fn next_ticket(&mut self) -> LookupTicket {
        self.last_ticket += 1;
        LookupTicket(self.last_ticket)
    }

    /// Forget the in-flight lookup; its answer will be dropped on arrival
    fn invalidate_lookup(&mut self) {
        self.active_lookup = None;
    }

    fn edit(&mut self, value: String) -> Vec<Effect> {
        if value == self.input {
            return Vec::new();
        }
        self.input = value;
        self.touched = true;
        self.copied = false;
        self.validation_error = self.mode.validate(&self.input).err();
        self.invalidate_lookup();
        vec![Effect::Debounce(self.input.clone())]
    }

    fn set_mode(&mut self, mode: Mode) -> Vec<Effect> {
        if mode == self.mode {
            return Vec::new();
        }
        debug!("Mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        if let Some(kind) = mode.tracking_kind() {
            self.tracking_kind = kind;
        }
        self.clear_form();
        vec![Effect::CancelDebounce]
    }

    /// Field, results and pending work go; mode, history and notice stay
    fn clear_form(&mut self) {
        self.input.clear();
        self.touched = false;
        self.validation_error = None;
        self.preview = None;
        self.stats = None;
        self.shortened = None;
        self.copied = false;
        self.invalidate_lookup();
        self.active_shorten = None;
    }

    fn on_settled(&mut self, value: String) -> Vec<Effect> {
        if value != self.input {
            debug!("Ignoring settled value that no longer matches the field");
            return Vec::new();
        }
        match self.mode.validate(&value) {
            Ok(()) => self.start_lookup(),
            Err(_) => {
                self.preview = None;
                self.stats = None;
                self.invalidate_lookup();
                Vec::new()
            }
        }
    }

    fn start_lookup(&mut self) -> Vec<Effect> {
        let ticket = self.next_ticket();
        self.active_lookup = Some(ticket);
        vec![Effect::Lookup {
            ticket,
            request: self.mode.lookup(&self.input),
        }]
    }

    fn apply_lookup(&mut self, ticket: LookupTicket, outcome: LookupOutcome) {
        if self.active_lookup != Some(ticket) {
            debug!("Dropping stale lookup #{}", ticket.0);
            return;
        }
        let kind = match &outcome {
            LookupOutcome::Preview(_) => LookupKind::Preview,
            LookupOutcome::Stats(_) => LookupKind::Stats,
        };
        if kind != LookupKind::for_mode(self.mode) {
            debug!("Dropping lookup #{} for another mode", ticket.0);
            return;
        }

        self.active_lookup = None;
        match outcome {
            LookupOutcome::Preview(preview) => {
                self.preview = Some(preview);
                self.stats = None;
            }
            LookupOutcome::Stats(stats) => {
                self.stats = Some(stats);
                self.preview = None;
            }
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.active_shorten.is_some() {
            return Vec::new();
        }
        self.touched = true;
        if let Err(message) = self.mode.validate(&self.input) {
            self.validation_error = Some(message);
            return Vec::new();
        }
        self.validation_error = None;

        let mut effects = vec![Effect::CancelDebounce];
        if self.mode.is_tracking() {
            effects.extend(self.start_lookup());
        } else {
            let ticket = self.next_ticket();
            self.active_shorten = Some(ticket);
            effects.push(Effect::Shorten {
                ticket,
                url: self.input.trim().to_string(),
            });
        }
        effects
    }

    fn on_shortened(&mut self, ticket: LookupTicket, short_url: String) -> Vec<Effect> {
        if self.active_shorten != Some(ticket) {
            debug!("Dropping result of abandoned shorten #{}", ticket.0);
            return Vec::new();
        }
        self.active_shorten = None;
        self.input = short_url.clone();
        self.validation_error = None;
        self.shortened = Some(short_url.clone());
        self.copied = true;
        self.notice = Some(Notice::success(SHORTENED_NOTICE));
        vec![Effect::CancelDebounce, Effect::CopyToClipboard(short_url)]
    }

    // ========== accessors ==========

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tracking_kind(&self) -> TrackingKind {
        self.tracking_kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn validation_error(&self) -> Option<&str> {
        if self.touched {
            self.validation_error.as_deref()
        } else {
            None
        }
    }

    pub fn preview(&self) -> Option<&PreviewResult> {
        self.preview.as_ref()
    }

    pub fn stats(&self) -> Option<&StatsResult> {
        self.stats.as_ref()
    }

    pub fn shortened(&self) -> Option<&str> {
        self.shortened.as_deref()
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_loaded(&self) -> bool {
        self.history_loaded
    }

    pub fn is_loading(&self) -> bool {
        self.active_lookup.is_some() || self.active_shorten.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.active_shorten.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.copied {
            COPIED_LABEL
        } else {
            self.mode.submit_label()
        }
    }

    pub fn panel(&self) -> Panel<'_> {
        if self.is_loading() {
            return Panel::Loading;
        }
        match (self.mode.is_tracking(), &self.preview, &self.stats) {
            (false, Some(preview), _) => Panel::Preview(preview),
            (true, _, Some(stats)) => Panel::Stats(stats),
            _ => Panel::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(state: &mut ViewState, value: &str) -> Vec<Effect> {
        state.update(Msg::InputChanged(value.to_string()))
    }

    fn settle(state: &mut ViewState) -> Vec<Effect> {
        let value = state.input().to_string();
        state.update(Msg::DebounceFired(value))
    }

    fn lookup_ticket(effects: &[Effect]) -> LookupTicket {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::Lookup { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .expect("no lookup effect")
    }

    fn sample_stats(clicks: u64) -> StatsResult {
        StatsResult {
            total_clicks: clicks,
            ..StatsResult::zeroed()
        }
    }

    #[test]
    fn test_start_loads_history() {
        let mut state = ViewState::new();
        assert_eq!(state.update(Msg::Start), vec![Effect::LoadHistory]);
    }

    #[test]
    fn test_edit_requests_debounce() {
        let mut state = ViewState::new();
        assert_eq!(
            typed(&mut state, "h"),
            vec![Effect::Debounce("h".to_string())]
        );
        assert_eq!(
            state.validation_error(),
            Some("URL must start with http:// or https://")
        );
        assert!(typed(&mut state, "h").is_empty());
    }

    #[test]
    fn test_invalid_settled_input_issues_nothing() {
        for (mode, value) in [
            (Mode::Shorten, "not a url"),
            (Mode::Shorten, ""),
            (Mode::TrackShort, "   "),
            (Mode::TrackOriginal, "abc123"),
        ] {
            let mut state = ViewState::new();
            state.update(Msg::SetMode(mode));
            typed(&mut state, value);
            let effects = settle(&mut state);
            assert!(effects.is_empty(), "{:?} {:?}", mode, value);
            assert!(state.preview().is_none());
            assert!(state.stats().is_none());
            assert_eq!(state.panel(), Panel::Empty);
        }
    }

    #[test]
    fn test_valid_settled_input_issues_one_lookup() {
        let mut state = ViewState::new();
        typed(&mut state, "https://example.com");
        let effects = settle(&mut state);
        assert_eq!(effects.len(), 1);
        assert!(matches!(
            &effects[0],
            Effect::Lookup { request: LookupRequest::Preview(url), .. } if url == "https://example.com"
        ));
        assert_eq!(state.panel(), Panel::Loading);
    }

    #[test]
    fn test_preview_result_is_rendered() {
        let mut state = ViewState::new();
        typed(&mut state, "https://example.com");
        let ticket = lookup_ticket(&settle(&mut state));
        state.update(Msg::LookupCompleted {
            ticket,
            outcome: LookupOutcome::Preview(PreviewResult::unavailable()),
        });
        assert_eq!(state.preview(), Some(&PreviewResult::unavailable()));
        assert!(matches!(state.panel(), Panel::Preview(_)));
    }

    #[test]
    fn test_mode_switch_clears_everything() {
        let mut state = ViewState::new();
        typed(&mut state, "https://example.com");
        let ticket = lookup_ticket(&settle(&mut state));
        state.update(Msg::LookupCompleted {
            ticket,
            outcome: LookupOutcome::Preview(PreviewResult::unavailable()),
        });
        let submit = state.update(Msg::Submit);
        let shorten_ticket = match submit.last() {
            Some(Effect::Shorten { ticket, .. }) => *ticket,
            other => panic!("expected shorten, got {:?}", other),
        };
        state.update(Msg::ShortenCompleted {
            ticket: shorten_ticket,
            short_url: "https://s.example/xY".into(),
        });
        assert!(state.shortened().is_some());

        let effects = state.update(Msg::SetMode(Mode::TrackShort));
        assert_eq!(effects, vec![Effect::CancelDebounce]);
        assert_eq!(state.input(), "");
        assert!(state.preview().is_none());
        assert!(state.stats().is_none());
        assert!(state.shortened().is_none());
        assert!(!state.is_copied());
        assert_eq!(state.validation_error(), None);
    }

    #[test]
    fn test_same_mode_is_a_no_op() {
        let mut state = ViewState::new();
        typed(&mut state, "https://example.com");
        assert!(state.update(Msg::SetMode(Mode::Shorten)).is_empty());
        assert_eq!(state.input(), "https://example.com");
    }

    #[test]
    fn test_stale_lookup_is_dropped() {
        let mut state = ViewState::new();
        state.update(Msg::SetMode(Mode::TrackShort));

        typed(&mut state, "old");
        let old = lookup_ticket(&settle(&mut state));
        typed(&mut state, "new");
        let new = lookup_ticket(&settle(&mut state));
        assert!(new > old);

        state.update(Msg::LookupCompleted {
            ticket: new,
            outcome: LookupOutcome::Stats(sample_stats(2)),
        });
        state.update(Msg::LookupCompleted {
            ticket: old,
            outcome: LookupOutcome::Stats(sample_stats(99)),
        });
        assert_eq!(state.stats().map(|s| s.total_clicks), Some(2));
    }

    #[test]
    fn test_lookup_from_previous_mode_is_dropped() {
        let mut state = ViewState::new();
        typed(&mut state, "https://example.com");
        let ticket = lookup_ticket(&settle(&mut state));

        state.update(Msg::SetMode(Mode::TrackOriginal));
        state.update(Msg::LookupCompleted {
            ticket,
            outcome: LookupOutcome::Preview(PreviewResult::unavailable()),
        });
        assert!(state.preview().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_editing_invalidates_in_flight_lookup() {
        let mut state = ViewState::new();
        state.update(Msg::SetMode(Mode::TrackShort));
        typed(&mut state, "abc");
        let ticket = lookup_ticket(&settle(&mut state));
        typed(&mut state, "abcd");
        assert!(!state.is_loading());

        state.update(Msg::LookupCompleted {
            ticket,
            outcome: LookupOutcome::Stats(sample_stats(1)),
        });
        assert!(state.stats().is_none());
    }

    #[test]
    fn test_settled_value_must_match_field() {
        let mut state = ViewState::new();
        typed(&mut state, "https://example.com");
        assert!(
            state
                .update(Msg::DebounceFired("https://other.example".into()))
                .is_empty()
        );
    }

    #[test]
    fn test_tracking_submit_reissues_lookup() {
        let mut state = ViewState::new();
        state.update(Msg::SetMode(Mode::TrackShort));
        typed(&mut state, "abc123");
        let effects = state.update(Msg::Submit);
        assert_eq!(effects[0], Effect::CancelDebounce);
        assert!(matches!(
            &effects[1],
            Effect::Lookup { request: LookupRequest::StatsByShort(code), .. } if code == "abc123"
        ));
    }

    #[test]
    fn test_invalid_submit_shows_error() {
        let mut state = ViewState::new();
        assert!(state.update(Msg::Submit).is_empty());
        assert_eq!(state.validation_error(), Some("Please enter a URL"));

        state.update(Msg::SetMode(Mode::TrackOriginal));
        assert!(state.update(Msg::Submit).is_empty());
        assert_eq!(state.validation_error(), Some("Please enter an original URL"));
    }

    #[test]
    fn test_shorten_success_flow() {
        let mut state = ViewState::new();
        typed(&mut state, "https://example.com/very/long");
        let effects = state.update(Msg::Submit);
        let ticket = match effects.as_slice() {
            [Effect::CancelDebounce, Effect::Shorten { ticket, url }] => {
                assert_eq!(url, "https://example.com/very/long");
                *ticket
            }
            other => panic!("unexpected effects {:?}", other),
        };
        assert!(state.is_submitting());
        assert!(state.update(Msg::Submit).is_empty());

        let effects = state.update(Msg::ShortenCompleted {
            ticket,
            short_url: "https://s.example/xY".into(),
        });
        assert_eq!(
            effects,
            vec![
                Effect::CancelDebounce,
                Effect::CopyToClipboard("https://s.example/xY".into())
            ]
        );
        assert_eq!(state.input(), "https://s.example/xY");
        assert_eq!(state.shortened(), Some("https://s.example/xY"));
        assert_eq!(state.submit_label(), COPIED_LABEL);
        assert_eq!(
            state.notice().map(|n| n.kind),
            Some(NoticeKind::Success)
        );

        typed(&mut state, "https://s.example/xYz");
        assert_eq!(state.submit_label(), "Shorten");
    }

    #[test]
    fn test_shorten_failure_keeps_form() {
        let mut state = ViewState::new();
        typed(&mut state, "https://example.com");
        let ticket = lookup_ticket(&settle(&mut state));
        state.update(Msg::LookupCompleted {
            ticket,
            outcome: LookupOutcome::Preview(PreviewResult::unavailable()),
        });

        let shorten = match state.update(Msg::Submit).last() {
            Some(Effect::Shorten { ticket, .. }) => *ticket,
            other => panic!("expected shorten, got {:?}", other),
        };
        state.update(Msg::ShortenFailed {
            ticket: shorten,
            message: "Something went wrong, please try again".into(),
        });

        assert_eq!(state.input(), "https://example.com");
        assert!(state.preview().is_some());
        assert!(state.shortened().is_none());
        assert_eq!(
            state.notice(),
            Some(&Notice::error("Something went wrong, please try again"))
        );
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_copy_failure_reverts_label() {
        let mut state = ViewState::new();
        typed(&mut state, "https://example.com");
        let ticket = match state.update(Msg::Submit).last() {
            Some(Effect::Shorten { ticket, .. }) => *ticket,
            _ => unreachable!(),
        };
        state.update(Msg::ShortenCompleted {
            ticket,
            short_url: "https://s.example/xY".into(),
        });
        state.update(Msg::CopyFailed("Clipboard unavailable".into()));
        assert_eq!(state.submit_label(), "Shorten");
        assert_eq!(
            state.update(Msg::CopyShortened),
            vec![Effect::CopyToClipboard("https://s.example/xY".into())]
        );
        state.update(Msg::Copied);
        assert_eq!(state.submit_label(), COPIED_LABEL);
    }

    #[test]
    fn test_reset_keeps_mode_and_history() {
        let mut state = ViewState::new();
        state.update(Msg::SetMode(Mode::TrackOriginal));
        state.update(Msg::HistoryLoaded(vec![HistoryEntry {
            id: 1,
            original_url: "https://example.com".into(),
            short_code: "abc".into(),
            created_at: "2024-01-01".into(),
            click_count: 0,
        }]));
        typed(&mut state, "https://example.com");
        settle(&mut state);

        assert_eq!(state.update(Msg::Reset), vec![Effect::CancelDebounce]);
        assert_eq!(state.mode(), Mode::TrackOriginal);
        assert_eq!(state.input(), "");
        assert!(!state.is_loading());
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_toggle_remembers_tracking_kind() {
        let mut state = ViewState::new();
        state.update(Msg::ToggleTracking);
        assert_eq!(state.mode(), Mode::TrackShort);
        state.update(Msg::CycleTrackingKind);
        assert_eq!(state.mode(), Mode::TrackOriginal);
        state.update(Msg::ToggleTracking);
        assert_eq!(state.mode(), Mode::Shorten);
        state.update(Msg::ToggleTracking);
        assert_eq!(state.mode(), Mode::TrackOriginal);
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut state = ViewState::new();
        assert!(state.update(Msg::Backspace).is_empty());
        typed(&mut state, "ab");
        state.update(Msg::Backspace);
        assert_eq!(state.input(), "a");
        state.update(Msg::ClearInput);
        assert_eq!(state.input(), "");
        assert_eq!(state.validation_error(), Some("Please enter a URL"));
        assert!(state.update(Msg::ClearInput).is_empty());
    }
}
