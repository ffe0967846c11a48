//! TUI application state and operations
//!
//! - state: App 结构与屏幕定义
//! - form_operations: Action / Msg / Effect 循环
//! - navigation: 屏幕切换
//! - share_operations: 二维码导出与地图链接

mod form_operations;
mod navigation;
mod share_operations;
mod state;

pub use state::{App, AppSettings, CurrentScreen, QrView};
