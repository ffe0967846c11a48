use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkpaneError {
    Config(String),
    Network(String),
    HttpStatus(String),
    Decode(String),
    Validation(String),
    Clipboard(String),
    Terminal(String),
    QrEncode(String),
    FileOperation(String),
}

impl LinkpaneError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkpaneError::Config(_) => "E001",
            LinkpaneError::Network(_) => "E002",
            LinkpaneError::HttpStatus(_) => "E003",
            LinkpaneError::Decode(_) => "E004",
            LinkpaneError::Validation(_) => "E005",
            LinkpaneError::Clipboard(_) => "E006",
            LinkpaneError::Terminal(_) => "E007",
            LinkpaneError::QrEncode(_) => "E008",
            LinkpaneError::FileOperation(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkpaneError::Config(_) => "Configuration Error",
            LinkpaneError::Network(_) => "Network Error",
            LinkpaneError::HttpStatus(_) => "Unexpected HTTP Status",
            LinkpaneError::Decode(_) => "Response Decode Error",
            LinkpaneError::Validation(_) => "Validation Error",
            LinkpaneError::Clipboard(_) => "Clipboard Error",
            LinkpaneError::Terminal(_) => "Terminal Error",
            LinkpaneError::QrEncode(_) => "QR Code Error",
            LinkpaneError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkpaneError::Config(msg)
            | LinkpaneError::Network(msg)
            | LinkpaneError::HttpStatus(msg)
            | LinkpaneError::Decode(msg)
            | LinkpaneError::Validation(msg)
            | LinkpaneError::Clipboard(msg)
            | LinkpaneError::Terminal(msg)
            | LinkpaneError::QrEncode(msg)
            | LinkpaneError::FileOperation(msg) => msg,
        }
    }

    /// 格式化为简洁输出（用于状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkpaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkpaneError {}

// 便捷的构造函数
impl LinkpaneError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkpaneError::Config(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        LinkpaneError::Network(msg.into())
    }

    pub fn http_status<T: Into<String>>(msg: T) -> Self {
        LinkpaneError::HttpStatus(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        LinkpaneError::Decode(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkpaneError::Validation(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        LinkpaneError::Clipboard(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        LinkpaneError::Terminal(msg.into())
    }

    pub fn qr_encode<T: Into<String>>(msg: T) -> Self {
        LinkpaneError::QrEncode(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkpaneError::FileOperation(msg.into())
    }
}

impl From<std::io::Error> for LinkpaneError {
    fn from(err: std::io::Error) -> Self {
        LinkpaneError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkpaneError {
    fn from(err: serde_json::Error) -> Self {
        LinkpaneError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for LinkpaneError {
    fn from(err: toml::de::Error) -> Self {
        LinkpaneError::Config(err.to_string())
    }
}

impl From<::config::ConfigError> for LinkpaneError {
    fn from(err: ::config::ConfigError) -> Self {
        LinkpaneError::Config(err.to_string())
    }
}

impl From<qrcode::types::QrError> for LinkpaneError {
    fn from(err: qrcode::types::QrError) -> Self {
        LinkpaneError::QrEncode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkpaneError>;
