//! 点击统计卡片

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::client::StatsResult;
use crate::interfaces::tui::constants::colors;
use crate::utils::or_unknown;

/// "City, Country" of the latest click, or "N/A"
pub fn last_clicked_text(stats: &StatsResult) -> String {
    match &stats.latest_geo_location {
        Some(geo) => format!("{}, {}", or_unknown(&geo.city), or_unknown(&geo.country)),
        None => "N/A".to_string(),
    }
}

pub fn draw_stats_card(frame: &mut Frame, stats: &StatsResult, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Clicks: {}", stats.total_clicks),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(vec![
            Span::styled("Last clicked from: ", Style::default().fg(colors::MUTED)),
            Span::raw(last_clicked_text(stats)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Where your clicks are coming from ({} total clicks)",
                stats.total_clicks
            ),
            Style::default().fg(colors::MUTED),
        )),
    ];

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(card, area);
}
