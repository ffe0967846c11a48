//! Form screen keys

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::{App, CurrentScreen};

pub fn handle_form_screen(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') => Action::Reset,
            KeyCode::Char('u') => Action::ClearInput,
            KeyCode::Char('y') => Action::CopyShortUrl,
            KeyCode::Char('s') => Action::SaveQrCode,
            KeyCode::Char('l') => Action::CopyMapLink,
            _ => Action::Noop,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return Action::Noop;
    }

    match key.code {
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::DeleteChar,
        KeyCode::Tab => Action::ToggleTracking,
        KeyCode::BackTab | KeyCode::F(2) => Action::CycleTrackingKind,
        KeyCode::F(1) => Action::SwitchScreen(CurrentScreen::Help),
        KeyCode::F(3) => Action::SwitchScreen(CurrentScreen::History),
        KeyCode::Esc => {
            if app.state.notice().is_some() {
                Action::DismissNotice
            } else {
                Action::Quit
            }
        }
        // 输入框为空时 `?` 打开帮助，否则当作普通字符（URL 里常见）
        KeyCode::Char('?') if app.state.input().is_empty() => {
            Action::SwitchScreen(CurrentScreen::Help)
        }
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::Noop,
    }
}
