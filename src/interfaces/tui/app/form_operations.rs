//! Form message loop
//!
//! Actions and completions become `Msg`s for the view state; the effects it
//! returns are executed here, and may feed further messages back in.

use std::collections::VecDeque;

use tokio::time::Instant;
use tracing::{debug, warn};

use super::state::{App, QrView};
use crate::form::{Completion, Effect, Msg};
use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::constants::{CLIPBOARD_FAILED_MESSAGE, NOTICE_TTL};
use crate::interfaces::tui::qr;

impl App {
    /// First frame
    pub fn start(&mut self) {
        self.dispatch(Msg::Start);
    }

    pub fn apply(&mut self, action: Action) {
        if !action.is_noop() {
            debug!("Action: {:?}", action);
        }
        match action {
            Action::InputChar(c) => {
                let mut value = self.state.input().to_string();
                value.push(c);
                self.dispatch(Msg::InputChanged(value));
            }
            Action::Paste(text) => {
                let mut value = self.state.input().to_string();
                value.extend(text.chars().filter(|c| !c.is_control()));
                self.dispatch(Msg::InputChanged(value));
            }
            Action::DeleteChar => self.dispatch(Msg::Backspace),
            Action::ClearInput => self.dispatch(Msg::ClearInput),
            Action::Submit => self.dispatch(Msg::Submit),
            Action::Reset => self.dispatch(Msg::Reset),
            Action::ToggleTracking => self.dispatch(Msg::ToggleTracking),
            Action::CycleTrackingKind => self.dispatch(Msg::CycleTrackingKind),
            Action::CopyShortUrl => self.dispatch(Msg::CopyShortened),
            Action::SaveQrCode => self.save_qr_code(),
            Action::CopyMapLink => self.copy_map_link(),
            Action::HistorySearchChar(c) => self.history_view.push_search_char(c),
            Action::HistorySearchBackspace => self.history_view.pop_search_char(),
            Action::HistoryNextPage => self.history_view.next_page(self.state.history()),
            Action::HistoryPrevPage => self.history_view.prev_page(),
            Action::SwitchScreen(screen) => self.switch_screen(screen),
            Action::GoBack => self.go_back(),
            Action::DismissNotice => self.dispatch(Msg::DismissNotice),
            Action::Quit => self.should_quit = true,
            Action::Noop => {}
        }
    }

    /// Run a message and everything it triggers
    pub fn dispatch(&mut self, msg: Msg) {
        let notice_before = self.state.notice().cloned();
        let mut notice_raised = false;

        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            notice_raised |= raises_notice(&msg);
            for effect in self.state.update(msg) {
                if let Some(follow_up) = self.run_effect(effect) {
                    queue.push_back(follow_up);
                }
            }
        }

        // 同样的提示再次出现也要重新计时
        if notice_raised || self.state.notice() != notice_before.as_ref() {
            self.notice_since = self.state.notice().map(|_| Instant::now());
        }
        self.refresh_qr();
    }

    fn run_effect(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::Debounce(value) => {
                self.watcher.observe(value, Instant::now());
                None
            }
            Effect::CancelDebounce => {
                self.watcher.cancel();
                None
            }
            Effect::Lookup { ticket, request } => {
                self.dispatcher.lookup(ticket, request);
                None
            }
            Effect::Shorten { ticket, url } => {
                self.dispatcher.shorten(ticket, url);
                None
            }
            Effect::CopyToClipboard(text) => Some(match self.clipboard.copy(&text) {
                Ok(()) => Msg::Copied,
                Err(e) => {
                    warn!("Copy to clipboard failed: {}", e);
                    Msg::CopyFailed(CLIPBOARD_FAILED_MESSAGE.to_string())
                }
            }),
            Effect::LoadHistory => {
                self.dispatcher.history();
                None
            }
        }
    }

    /// Keep the QR rendering in step with the shortened URL
    fn refresh_qr(&mut self) {
        let Some(short_url) = self.state.shortened() else {
            self.qr = None;
            return;
        };
        if self.qr.as_ref().is_some_and(|q| q.data == short_url) {
            return;
        }
        self.qr = match qr::render_lines(short_url) {
            Ok(lines) => Some(QrView {
                data: short_url.to_string(),
                lines,
            }),
            Err(e) => {
                warn!("QR rendering failed: {}", e);
                None
            }
        };
    }

    /// Timer work: settled input and notice expiry
    pub fn tick(&mut self, now: Instant) {
        self.spinner = self.spinner.wrapping_add(1);

        if let Some(value) = self.watcher.poll(now) {
            self.dispatch(Msg::DebounceFired(value));
        }

        if let Some(since) = self.notice_since
            && now.saturating_duration_since(since) >= NOTICE_TTL
        {
            self.dispatch(Msg::DismissNotice);
        }
    }

    /// Apply every completion already waiting, without blocking
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions.try_recv() {
            self.apply_completion(completion);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion and apply it
    pub async fn next_completion(&mut self) -> bool {
        match self.completions.recv().await {
            Some(completion) => {
                self.apply_completion(completion);
                true
            }
            None => false,
        }
    }

    fn apply_completion(&mut self, completion: Completion) {
        self.dispatch(Msg::from(completion));
    }
}

fn raises_notice(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::Notify(_)
            | Msg::ShortenCompleted { .. }
            | Msg::ShortenFailed { .. }
            | Msg::CopyFailed(_)
    )
}
