//! 链接预览卡片

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::client::PreviewResult;
use crate::interfaces::tui::constants::colors;

pub fn draw_preview_card(frame: &mut Frame, preview: &PreviewResult, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            preview.title.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            preview.description.as_str(),
            Style::default().fg(colors::MUTED),
        )),
    ];
    if let Some(image) = &preview.image {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Image: ", Style::default().fg(colors::PRIMARY)),
            Span::raw(image.as_str()),
        ]));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(card, area);
}
