//! 文本显示辅助

/// 按字符数截断，超出部分用 `...` 表示
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// 空字符串显示为 "Unknown"
pub fn or_unknown(text: &str) -> &str {
    if text.trim().is_empty() { "Unknown" } else { text }
}
