use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::form::NoticeKind;
use crate::interfaces::tui::app::{App, CurrentScreen};

/// Draw title bar with version, mode title and history size
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode = app.state.mode();
    let title_text = vec![Line::from(vec![
        Span::styled("linkpane", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} ", mode.title()),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("History: {} ", app.state.history().len()),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = match app.state.notice() {
        Some(notice) if notice.kind == NoticeKind::Error => (
            format!("[ERROR] {}", notice.text),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        ),
        Some(notice) => (
            format!("[SUCCESS] {}", notice.text),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        ),
        None if app.state.is_submitting() => (
            format!("{} Shortening...", app.spinner_frame()),
            Style::default().fg(Color::Yellow),
        ),
        None => (
            app.state.mode().subtitle().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Form => {
            let mut keys = vec![
                ("Enter", app.state.mode().submit_label(), Color::Green),
                ("Tab", "Mode", Color::Cyan),
            ];
            if app.state.mode().is_tracking() {
                keys.push(("F2", "Short/Original", Color::Cyan));
            }
            if app.state.shortened().is_some() {
                keys.push(("Ctrl+Y", "Copy", Color::Green));
                keys.push(("Ctrl+S", "Save QR", Color::Green));
            }
            if app.state.stats().is_some() && app.settings().map_access_token.is_some() {
                keys.push(("Ctrl+L", "Map link", Color::Green));
            }
            keys.extend([
                ("Ctrl+R", "Reset", Color::Yellow),
                ("F3", "History", Color::Blue),
                ("F1", "Help", Color::Blue),
                ("Esc", "Quit", Color::Magenta),
            ]);
            keys
        }
        CurrentScreen::History => vec![
            ("type", "Search", Color::Cyan),
            ("Left/Right", "Page", Color::Cyan),
            ("Esc", "Back", Color::Red),
        ],
        CurrentScreen::Help => vec![("any key", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
