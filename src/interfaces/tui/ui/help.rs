use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn entry(keys: &'static str, desc: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<17}", keys), Style::default().fg(color)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .theme_color(Color::Cyan)
        .render(frame, area);

    let help_text = vec![
        Line::from(""),
        section("FORM"),
        entry("Enter", "Shorten / Check stats", Color::Green),
        entry("Backspace", "Delete last character", Color::Cyan),
        entry("Ctrl+U", "Clear the field", Color::Cyan),
        entry("Ctrl+R", "Reset form and results", Color::Yellow),
        Line::from(""),
        section("MODES"),
        entry("Tab", "Shorten Mode / Track Mode", Color::Cyan),
        entry("Shift+Tab, F2", "Track by Short / Original URL", Color::Cyan),
        Line::from(""),
        section("SHARING"),
        entry("Ctrl+Y", "Copy short URL again", Color::Green),
        entry("Ctrl+S", "Save QR code as qrcode.svg", Color::Green),
        entry("Ctrl+L", "Copy static map link", Color::Green),
        Line::from(""),
        section("HISTORY (F3)"),
        entry("type", "Filter by URL or code", Color::Cyan),
        entry("Left/Right", "Previous / next page", Color::Cyan),
        entry("Esc", "Back to the form", Color::Red),
        Line::from(""),
        section("SYSTEM"),
        entry("F1, ?", "Show this help (? on empty field)", Color::Cyan),
        entry("Esc", "Dismiss message / quit", Color::Magenta),
        entry("Ctrl+C", "Quit", Color::Magenta),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let help_para = Paragraph::new(help_text).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(help_para, inner_area);
}
