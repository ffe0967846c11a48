//! Event handling for TUI
//!
//! 按键 → Action 的映射，按屏幕拆分：
//! - form_screen: 主表单
//! - history_screen: 历史记录
//!
//! 这里只读 App，真正的状态变更由 `App::apply` 完成

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::{App, CurrentScreen};

mod form_screen;
mod history_screen;

use form_screen::handle_form_screen;
use history_screen::handle_history_screen;

/// Translate a key press into an action for the current screen
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.current_screen {
        CurrentScreen::Form => handle_form_screen(app, key),
        CurrentScreen::History => handle_history_screen(key),
        CurrentScreen::Help => Action::GoBack,
    }
}

/// Bracketed paste only lands in the form field
pub fn handle_paste(app: &App, text: String) -> Action {
    match app.current_screen {
        CurrentScreen::Form => Action::Paste(text),
        _ => Action::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::client::{ClientError, HistoryEntry, PreviewResult, ShortenerApi, StatsResult};
    use crate::interfaces::tui::app::AppSettings;
    use crate::interfaces::tui::clipboard::ClipboardSink;

    struct OfflineApi;

    #[async_trait]
    impl ShortenerApi for OfflineApi {
        async fn preview(&self, _url: &str) -> Result<PreviewResult, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
        async fn stats_by_short(&self, _code: &str) -> Result<StatsResult, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
        async fn stats_by_original(&self, _url: &str) -> Result<StatsResult, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
        async fn shorten(&self, _url: &str) -> Result<String, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
        async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
    }

    fn app() -> App {
        App::new(
            Arc::new(OfflineApi),
            AppSettings::default(),
            ClipboardSink::memory(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_form_keys() {
        let app = app();
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('h'))),
            Action::InputChar('h')
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), Action::Submit);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Backspace)),
            Action::DeleteChar
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Tab)),
            Action::ToggleTracking
        );
        assert_eq!(handle_key_event(&app, ctrl('r')), Action::Reset);
        assert_eq!(handle_key_event(&app, ctrl('c')), Action::Quit);
        assert_eq!(handle_key_event(&app, ctrl('s')), Action::SaveQrCode);
        assert_eq!(handle_key_event(&app, ctrl('l')), Action::CopyMapLink);
    }

    #[test]
    fn test_question_mark_opens_help_only_on_empty_field() {
        let mut app = app();
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('?'))),
            Action::SwitchScreen(CurrentScreen::Help)
        );
        app.apply(Action::InputChar('a'));
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('?'))),
            Action::InputChar('?')
        );
    }

    #[test]
    fn test_history_keys() {
        let mut app = app();
        app.apply(Action::SwitchScreen(CurrentScreen::History));
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('x'))),
            Action::HistorySearchChar('x')
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Right)),
            Action::HistoryNextPage
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::GoBack);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app();
        app.apply(Action::SwitchScreen(CurrentScreen::Help));
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('q'))),
            Action::GoBack
        );
        app.apply(Action::GoBack);
        assert_eq!(app.current_screen, CurrentScreen::Form);
    }

    #[test]
    fn test_paste_only_on_form() {
        let mut app = app();
        assert_eq!(
            handle_paste(&app, "https://example.com".into()),
            Action::Paste("https://example.com".into())
        );
        app.apply(Action::SwitchScreen(CurrentScreen::History));
        assert_eq!(handle_paste(&app, "x".into()), Action::Noop);
    }
}
