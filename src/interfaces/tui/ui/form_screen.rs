//! 表单主屏幕
//!
//! 左侧：模式标签、输入框、提交按钮、预览 / 统计结果
//! 右侧：地图（追踪模式）、二维码（缩短成功后）或最近历史

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};

use super::geo_map::draw_geo_map;
use super::history::draw_recent_history;
use super::preview_card::draw_preview_card;
use super::qr_panel::draw_qr_panel;
use super::stats_card::draw_stats_card;
use super::widgets::InputField;
use crate::form::{Mode, Panel, TrackingKind};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;

pub fn draw_form_screen(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_form_column(frame, app, columns[0]);
    draw_side_panel(frame, app, columns[1]);
}

fn draw_form_column(frame: &mut Frame, app: &App, area: Rect) {
    let mode = app.state.mode();
    let field = InputField::new(mode.field_label(), app.state.input())
        .active(true)
        .error(app.state.validation_error())
        .placeholder(mode.placeholder())
        .char_count(true);

    let kind_tabs_height = if mode.is_tracking() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // Mode tabs
            Constraint::Length(kind_tabs_height), // Short / Original tabs
            Constraint::Length(field.height()),   // Input
            Constraint::Length(1),                // Submit
            Constraint::Min(4),                   // Result
        ])
        .split(area);

    let mode_tabs = Tabs::new(vec!["Shorten Mode", "Track Mode"])
        .select(usize::from(mode.is_tracking()))
        .style(Style::default().fg(colors::MUTED))
        .highlight_style(Style::default().fg(colors::PRIMARY).bold());
    frame.render_widget(mode_tabs, chunks[0]);

    if let Some(kind) = mode.tracking_kind() {
        let selected = match kind {
            TrackingKind::Short => 0,
            TrackingKind::Original => 1,
        };
        let kind_tabs = Tabs::new(vec!["Track by Short URL", "Track by Original URL"])
            .select(selected)
            .style(Style::default().fg(colors::MUTED))
            .highlight_style(Style::default().fg(colors::WARNING).bold());
        frame.render_widget(kind_tabs, chunks[1]);
    }

    field.render(frame, chunks[2]);
    draw_submit_button(frame, app, chunks[3]);
    draw_result(frame, app, chunks[4]);
}

fn draw_submit_button(frame: &mut Frame, app: &App, area: Rect) {
    let label = if app.state.is_submitting() {
        format!("[ {} {} ]", app.spinner_frame(), app.state.submit_label())
    } else {
        format!("[ {} ]", app.state.submit_label())
    };
    let style = if app.state.is_copied() {
        Style::default().fg(Color::Black).bg(colors::SUCCESS).bold()
    } else if app.state.validation_error().is_some() {
        Style::default().fg(colors::MUTED)
    } else {
        Style::default().fg(Color::Black).bg(colors::PRIMARY).bold()
    };

    let button = Paragraph::new(Line::from(vec![
        Span::styled(label, style),
        Span::styled("  Enter", Style::default().fg(colors::MUTED)),
    ]));
    frame.render_widget(button, area);
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect) {
    match app.state.panel() {
        Panel::Loading => {
            let loading = Paragraph::new(format!("{} Loading...", app.spinner_frame()))
                .style(Style::default().fg(colors::WARNING))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                );
            frame.render_widget(loading, area);
        }
        Panel::Preview(preview) => draw_preview_card(frame, preview, area),
        Panel::Stats(stats) => draw_stats_card(frame, stats, area),
        Panel::Empty => {
            let hint = match app.state.mode() {
                Mode::Shorten => "Type a URL to see its preview",
                Mode::TrackShort | Mode::TrackOriginal => "Type a link to see its clicks",
            };
            let empty = Paragraph::new(hint)
                .style(Style::default().fg(colors::MUTED))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                );
            frame.render_widget(empty, area);
        }
    }
}

fn draw_side_panel(frame: &mut Frame, app: &App, area: Rect) {
    if app.state.mode().is_tracking()
        && let Some(stats) = app.state.stats()
    {
        draw_geo_map(frame, stats, area);
    } else if let Some(qr) = app.qr() {
        draw_qr_panel(frame, qr, area);
    } else {
        draw_recent_history(frame, app, area);
    }
}
