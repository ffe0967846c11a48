//! History screen keys: typing filters, arrows page

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::CurrentScreen;

pub fn handle_history_screen(key: KeyEvent) -> Action {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Action::Noop;
    }

    match key.code {
        KeyCode::Esc | KeyCode::F(3) => Action::GoBack,
        KeyCode::F(1) => Action::SwitchScreen(CurrentScreen::Help),
        KeyCode::Left | KeyCode::PageUp => Action::HistoryPrevPage,
        KeyCode::Right | KeyCode::PageDown => Action::HistoryNextPage,
        KeyCode::Backspace => Action::HistorySearchBackspace,
        KeyCode::Char(c) => Action::HistorySearchChar(c),
        _ => Action::Noop,
    }
}
