//! 点击来源地图
//!
//! 世界地图画布 + 按点击数分级的标记，视野自动收缩到所有标记周围。
//! 配置了 Mapbox token 时还能生成同样标记的静态地图链接。

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, Paragraph,
        canvas::{Canvas, Map, MapResolution},
    },
};
use url::Url;

use crate::client::{GeoPoint, StatsResult};
use crate::interfaces::tui::constants::colors;
use crate::utils::or_unknown;

pub const NO_LOCATION_TEXT: &str = "No location data available yet.";

const STATIC_MAP_BASE: &str = "https://api.mapbox.com/styles/v1/mapbox/streets-v12/static";
const STATIC_MAP_SIZE: &str = "600x400";

/// 标记四周最少留出的经纬度
const MIN_PADDING_DEG: f64 = 10.0;
/// 按跨度比例留白
const PADDING_RATIO: f64 = 0.2;

/// 标记分级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTier {
    /// >= 10 次点击
    High,
    /// >= 5 次点击
    Medium,
    Low,
}

impl MarkerTier {
    pub fn for_count(count: u64) -> Self {
        if count >= 10 {
            MarkerTier::High
        } else if count >= 5 {
            MarkerTier::Medium
        } else {
            MarkerTier::Low
        }
    }

    pub fn color(self) -> Color {
        match self {
            MarkerTier::High => colors::MARKER_HIGH,
            MarkerTier::Medium => colors::MARKER_MEDIUM,
            MarkerTier::Low => colors::MARKER_LOW,
        }
    }

    /// 越大的标记越醒目
    pub fn glyph(self) -> &'static str {
        match self {
            MarkerTier::High => "◉",
            MarkerTier::Medium => "●",
            MarkerTier::Low => "•",
        }
    }

    fn pin_size(self) -> &'static str {
        match self {
            MarkerTier::High => "l",
            MarkerTier::Medium => "m",
            MarkerTier::Low => "s",
        }
    }

    fn hex(self) -> &'static str {
        match self {
            MarkerTier::High => "ef4444",
            MarkerTier::Medium => "f97316",
            MarkerTier::Low => "3b82f6",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub longitude: f64,
    pub latitude: f64,
    pub count: u64,
    pub tier: MarkerTier,
}

/// 每个位置一个标记
pub fn map_markers(locations: &[GeoPoint]) -> Vec<MapMarker> {
    locations
        .iter()
        .map(|loc| MapMarker {
            longitude: loc.longitude,
            latitude: loc.latitude,
            count: loc.count,
            tier: MarkerTier::for_count(loc.count),
        })
        .collect()
}

/// 画布视野（经度区间，纬度区间）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

pub const WORLD_BOUNDS: MapBounds = MapBounds {
    x: [-180.0, 180.0],
    y: [-90.0, 90.0],
};

/// 包住所有位置并留白；没有可用坐标时显示整个世界
pub fn fit_bounds(locations: &[GeoPoint]) -> MapBounds {
    let mut points = locations
        .iter()
        .filter(|l| l.longitude.is_finite() && l.latitude.is_finite());

    let Some(first) = points.next() else {
        return WORLD_BOUNDS;
    };
    let init = (first.longitude, first.longitude, first.latitude, first.latitude);
    let (min_lon, max_lon, min_lat, max_lat) =
        points.fold(init, |(min_x, max_x, min_y, max_y), l| {
            (
                min_x.min(l.longitude),
                max_x.max(l.longitude),
                min_y.min(l.latitude),
                max_y.max(l.latitude),
            )
        });

    let pad_x = ((max_lon - min_lon) * PADDING_RATIO).max(MIN_PADDING_DEG);
    let pad_y = ((max_lat - min_lat) * PADDING_RATIO).max(MIN_PADDING_DEG);

    MapBounds {
        x: [(min_lon - pad_x).max(-180.0), (max_lon + pad_x).min(180.0)],
        y: [(min_lat - pad_y).max(-90.0), (max_lat + pad_y).min(90.0)],
    }
}

/// Mapbox 静态地图链接，每个位置一个按等级着色的 pin
pub fn static_map_url(locations: &[GeoPoint], access_token: &str) -> Option<String> {
    if locations.is_empty() || access_token.trim().is_empty() {
        return None;
    }

    let overlays = map_markers(locations)
        .iter()
        .map(|m| {
            format!(
                "pin-{}+{}({:.4},{:.4})",
                m.tier.pin_size(),
                m.tier.hex(),
                m.longitude,
                m.latitude
            )
        })
        .collect::<Vec<_>>()
        .join(",");

    let mut url = Url::parse(&format!(
        "{}/{}/auto/{}",
        STATIC_MAP_BASE, overlays, STATIC_MAP_SIZE
    ))
    .ok()?;
    url.query_pairs_mut()
        .append_pair("access_token", access_token.trim());
    Some(url.to_string())
}

/// Top Locations 最多显示 6 行（加上边框）
fn top_list_height(locations: usize) -> u16 {
    locations.min(6) as u16 + 2
}

/// 地图 + Top Locations 列表
pub fn draw_geo_map(frame: &mut Frame, stats: &StatsResult, area: Rect) {
    let block = Block::default()
        .title(" Geographic Distribution ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::PRIMARY));

    if stats.locations.is_empty() {
        let empty = Paragraph::new(NO_LOCATION_TEXT)
            .style(Style::default().fg(colors::MUTED))
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list_height = top_list_height(stats.locations.len());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(list_height)])
        .split(area);

    let bounds = fit_bounds(&stats.locations);
    let markers = map_markers(&stats.locations);
    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds(bounds.x)
        .y_bounds(bounds.y)
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: colors::MAP_OUTLINE,
                resolution: MapResolution::High,
            });
            ctx.layer();
            for marker in &markers {
                ctx.print(
                    marker.longitude,
                    marker.latitude,
                    Span::styled(
                        format!("{}{}", marker.tier.glyph(), marker.count),
                        Style::default().fg(marker.tier.color()).bold(),
                    ),
                );
            }
        });
    frame.render_widget(canvas, chunks[0]);

    let mut ranked: Vec<&GeoPoint> = stats.locations.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    let items: Vec<ListItem> = ranked
        .into_iter()
        .map(|loc| {
            let tier = MarkerTier::for_count(loc.count);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", tier.glyph()),
                    Style::default().fg(tier.color()),
                ),
                Span::raw(format!(
                    "{}, {}",
                    or_unknown(&loc.city),
                    or_unknown(&loc.country)
                )),
                Span::styled(
                    format!("  {} clicks", loc.count),
                    Style::default().fg(colors::MUTED),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Top Locations ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(list, chunks[1]);
}
