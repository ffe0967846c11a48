//! 二维码面板

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::QrView;
use crate::interfaces::tui::constants::colors;

pub fn draw_qr_panel(frame: &mut Frame, qr: &QrView, area: Rect) {
    let block = Block::default()
        .title(" QR Code ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::SUCCESS));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let qr_width = qr.lines.first().map(|l| l.chars().count()).unwrap_or(0) as u16;
    let needed_height = qr.lines.len() as u16 + 2;

    let mut lines: Vec<Line> = Vec::new();
    if inner.height >= needed_height && inner.width >= qr_width {
        let qr_style = Style::default().fg(Color::White).bg(Color::Black);
        lines.extend(
            qr.lines
                .iter()
                .map(|row| Line::from(Span::styled(row.as_str(), qr_style))),
        );
    } else {
        lines.push(Line::from(Span::styled(
            "Enlarge the terminal to show the QR code",
            Style::default().fg(colors::WARNING),
        )));
    }
    lines.push(Line::from(Span::styled(
        qr.data.as_str(),
        Style::default().fg(colors::PRIMARY).bold(),
    )));
    lines.push(Line::from(Span::styled(
        "Ctrl+S save as SVG",
        Style::default().fg(colors::MUTED),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
