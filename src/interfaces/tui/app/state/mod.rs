//! App state definition and basic state management
//!
//! App 本身只持有胶水状态：当前屏幕、去抖器、请求分发器和剪贴板。
//! 表单语义全部在 `form::ViewState` 里

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

use crate::client::ShortenerApi;
use crate::config::AppConfig;
use crate::form::{Completion, Dispatcher, HistoryView, InputWatcher, ViewState};
use crate::interfaces::tui::clipboard::ClipboardSink;
use crate::interfaces::tui::constants::{QR_SVG_FILENAME, SPINNER_FRAMES};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrentScreen {
    #[default]
    Form,
    History,
    Help,
}

/// App 运行参数（从 AppConfig 提取）
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// 短链接服务根地址，用于拼接历史记录中的短链接
    pub api_base: String,
    pub debounce: Duration,
    pub tick: Duration,
    pub map_access_token: Option<String>,
    pub qr_output: PathBuf,
}

impl AppSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_base: config.api_base().to_string(),
            debounce: config.debounce(),
            tick: config.tick(),
            map_access_token: config.map.access_token.clone(),
            qr_output: PathBuf::from(QR_SVG_FILENAME),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// 已渲染的二维码（按内容缓存）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrView {
    pub data: String,
    pub lines: Vec<String>,
}

pub struct App {
    pub current_screen: CurrentScreen,
    pub(super) previous_screen: CurrentScreen,

    pub state: ViewState,
    pub history_view: HistoryView,
    pub(super) qr: Option<QrView>,

    pub(super) watcher: InputWatcher,
    pub(super) dispatcher: Dispatcher,
    pub(super) completions: UnboundedReceiver<Completion>,
    pub(super) clipboard: ClipboardSink,
    pub(super) settings: AppSettings,

    /// 当前提示出现的时间
    pub(super) notice_since: Option<Instant>,
    pub(super) spinner: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(api: Arc<dyn ShortenerApi>, settings: AppSettings, clipboard: ClipboardSink) -> Self {
        let (dispatcher, completions) = Dispatcher::channel(api);

        App {
            current_screen: CurrentScreen::Form,
            previous_screen: CurrentScreen::Form,
            state: ViewState::new(),
            history_view: HistoryView::new(),
            qr: None,
            watcher: InputWatcher::new(settings.debounce),
            dispatcher,
            completions,
            clipboard,
            settings,
            notice_since: None,
            spinner: 0,
            should_quit: false,
        }
    }

    /// 帮助弹窗下方要绘制的屏幕
    pub fn underlying_screen(&self) -> CurrentScreen {
        match self.current_screen {
            CurrentScreen::Help => self.previous_screen,
            screen => screen,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn qr(&self) -> Option<&QrView> {
        self.qr.as_ref()
    }

    pub fn clipboard(&self) -> &ClipboardSink {
        &self.clipboard
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner % SPINNER_FRAMES.len()]
    }

    /// 是否正在等待去抖
    pub fn is_debouncing(&self) -> bool {
        self.watcher.is_pending()
    }

    /// 事件循环的 poll 超时：不超过下一个去抖截止时间
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.watcher.time_until_due(now, self.settings.tick)
    }
}
