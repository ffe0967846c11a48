//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

use std::time::Duration;

/// 状态栏提示自动消失时间
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// 二维码导出文件名
pub const QR_SVG_FILENAME: &str = "qrcode.svg";

/// 右侧面板最近历史条数
pub const RECENT_HISTORY_ROWS: usize = 5;

pub const CLIPBOARD_FAILED_MESSAGE: &str = "Could not access the clipboard";

/// 加载动画帧
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 80);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;

    /// 地图标记：点击数 >= 10
    pub const MARKER_HIGH: Color = Color::Rgb(239, 68, 68);
    /// 地图标记：点击数 >= 5
    pub const MARKER_MEDIUM: Color = Color::Rgb(249, 115, 22);
    /// 地图标记：其余
    pub const MARKER_LOW: Color = Color::Rgb(59, 130, 246);
    /// 海岸线
    pub const MAP_OUTLINE: Color = Color::DarkGray;
}
