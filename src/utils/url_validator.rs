//! URL 验证模块
//!
//! 表单输入的 URL 格式检查：必须是绝对 http(s) URL，阻止危险协议

use url::Url;

/// URL 验证错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    DangerousProtocol(String),
    MissingHost,
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::MissingHost => write!(f, "URL has no host"),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// 验证并解析绝对 URL
///
/// 检查项目：
/// 1. URL 不为空（两端空白会被忽略）
/// 2. 不是危险协议
/// 3. 必须是 http:// 或 https://
/// 4. 可以被解析且带有主机名
pub fn parse_absolute_url(input: &str) -> Result<Url, UrlValidationError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let lower = input.to_lowercase();

    for proto in DANGEROUS_PROTOCOLS {
        if lower.starts_with(proto) {
            return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
        }
    }

    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        let proto = match lower.split_once(':') {
            Some((scheme, _)) => format!("{}:", scheme),
            None => String::new(),
        };
        return Err(UrlValidationError::InvalidProtocol(proto));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}

/// 只关心是否合法时使用
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    parse_absolute_url(input).map(|_| ())
}

/// 获取 URL 验证错误的用户友好消息
pub fn validation_error_message(error: &UrlValidationError) -> &'static str {
    match error {
        UrlValidationError::EmptyUrl => "URL cannot be empty",
        UrlValidationError::InvalidProtocol(_) => "URL must start with http:// or https://",
        UrlValidationError::DangerousProtocol(_) => "This URL protocol is not allowed",
        UrlValidationError::MissingHost | UrlValidationError::InvalidFormat(_) => "Invalid URL",
    }
}
