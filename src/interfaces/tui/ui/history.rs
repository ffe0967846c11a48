//! 历史记录：完整屏幕（搜索 + 分页表格）与表单右侧的最近记录

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use super::widgets::InputField;
use crate::form::HistoryRow;
use crate::form::history::HISTORY_EMPTY_TEXT;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{RECENT_HISTORY_ROWS, colors};

fn empty_history(frame: &mut Frame, block: Block, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            HISTORY_EMPTY_TEXT,
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Start shortening URLs to see them here",
            Style::default().fg(colors::MUTED),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        area,
    );
}

pub fn draw_history_screen(frame: &mut Frame, app: &App, area: Rect) {
    let entries = app.state.history();
    let total_pages = app.history_view.total_pages(entries);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Pagination
        ])
        .split(area);

    InputField::new("Search", app.history_view.search())
        .active(true)
        .placeholder("Search URLs or codes...")
        .render(frame, chunks[0]);

    let block = Block::default()
        .title(" URL History ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::PRIMARY));

    let page_items = app.history_view.page_items(entries);
    if page_items.is_empty() {
        empty_history(frame, block, chunks[1]);
    } else {
        let base = app.settings().api_base.as_str();
        let rows: Vec<Row> = page_items
            .into_iter()
            .map(|entry| {
                let row = HistoryRow::from_entry(entry, base);
                Row::new(vec![
                    Cell::from(row.original_url),
                    Cell::from(Span::styled(
                        row.short_link,
                        Style::default().fg(colors::PRIMARY),
                    )),
                    Cell::from(row.created),
                    Cell::from(row.clicks.to_string()),
                ])
            })
            .collect();

        let header = Row::new(vec!["Original URL", "Short URL", "Created", "Clicks"])
            .style(Style::default().fg(colors::WARNING).bold());

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(35),
                Constraint::Length(12),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(block);
        frame.render_widget(table, chunks[1]);
    }

    if total_pages > 1 {
        let pager = Paragraph::new(format!(
            "< Page {} of {} >",
            app.history_view.page(),
            total_pages
        ))
        .style(Style::default().fg(colors::MUTED))
        .alignment(Alignment::Center);
        frame.render_widget(pager, chunks[2]);
    }
}

/// 表单右侧的最近几条记录
pub fn draw_recent_history(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Recent (F3 for all) ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if !app.state.history_loaded() {
        frame.render_widget(
            Paragraph::new("Loading history...")
                .style(Style::default().fg(colors::MUTED))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let entries = app.state.history();
    if entries.is_empty() {
        empty_history(frame, block, area);
        return;
    }

    let base = app.settings().api_base.as_str();
    let lines: Vec<Line> = entries
        .iter()
        .take(RECENT_HISTORY_ROWS)
        .flat_map(|entry| {
            let row = HistoryRow::from_entry(entry, base);
            [
                Line::from(Span::raw(row.original_url)),
                Line::from(vec![
                    Span::styled(row.short_link, Style::default().fg(colors::PRIMARY)),
                    Span::styled(
                        format!("  {}  {} clicks", row.created, row.clicks),
                        Style::default().fg(colors::MUTED),
                    ),
                ]),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
