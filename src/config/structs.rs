use serde::{Deserialize, Serialize};

/// 应用配置
///
/// 来源优先级（后者覆盖前者）：默认值 → TOML 文件 → 环境变量（含 `.env`）→ 命令行参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 短链后端
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// 请求超时（秒）
    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,
}

/// 链接预览元数据服务
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_preview_endpoint")]
    pub endpoint: String,
}

/// 地图相关
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapConfig {
    /// 静态地图服务的访问令牌；为空时不提供地图链接
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// 输入防抖窗口（毫秒）
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// 事件循环 tick（毫秒）
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// TUI 占用终端，日志只能写文件；为空表示丢弃日志
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default)]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_api_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_http_timeout() -> u64 {
    10
}

fn default_preview_endpoint() -> String {
    "https://api.microlink.io".to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_tick_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    Some("linkpane.log".to_string())
}

fn default_max_backups() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_http_timeout(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            endpoint: default_preview_endpoint(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: false,
        }
    }
}
