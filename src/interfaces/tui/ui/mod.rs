// UI submodules
mod common;
mod form_screen;
pub(crate) mod geo_map;
mod help;
mod history;
mod preview_card;
mod qr_panel;
mod stats_card;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use form_screen::draw_form_screen;
pub use help::draw_help_screen;
pub use history::draw_history_screen;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Main UI rendering function
pub fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);

    match app.underlying_screen() {
        CurrentScreen::History => draw_history_screen(frame, app, chunks[1]),
        _ => draw_form_screen(frame, app, chunks[1]),
    }

    draw_status_bar(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);

    // Help 作为弹窗叠在当前屏幕上
    if app.current_screen == CurrentScreen::Help {
        draw_help_screen(frame, frame.area());
    }
}
