//! Action 系统
//!
//! 按键先被翻译成 Action，再由 App 统一执行，便于测试

use super::app::CurrentScreen;

/// TUI 动作枚举
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Action {
    // ========== 表单输入 ==========
    /// 输入字符
    InputChar(char),
    /// 粘贴文本（bracketed paste）
    Paste(String),
    /// 删除字符（Backspace）
    DeleteChar,
    /// 清空输入
    ClearInput,
    /// 提交表单（Enter）
    Submit,
    /// 重置表单，保留当前模式
    Reset,

    // ========== 模式 ==========
    /// Shorten <-> Track
    ToggleTracking,
    /// Track by Short URL <-> Track by Original URL
    CycleTrackingKind,

    // ========== 分享 ==========
    /// 再次复制短链接
    CopyShortUrl,
    /// 导出二维码 SVG
    SaveQrCode,
    /// 复制静态地图链接
    CopyMapLink,

    // ========== 历史 ==========
    HistorySearchChar(char),
    HistorySearchBackspace,
    HistoryNextPage,
    HistoryPrevPage,

    // ========== 屏幕切换 ==========
    /// 切换到指定屏幕
    SwitchScreen(CurrentScreen),
    /// 返回上一个屏幕
    GoBack,

    // ========== 系统 ==========
    /// 清除状态栏提示
    DismissNotice,
    /// 退出程序
    Quit,
    /// 无操作
    #[default]
    Noop,
}

impl Action {
    /// 判断是否是无操作
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }

    /// 判断是否应该导致程序退出
    pub fn should_quit(&self) -> bool {
        matches!(self, Action::Quit)
    }
}
