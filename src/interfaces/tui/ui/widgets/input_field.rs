//! 通用输入框组件
//!
//! 用于表单中的文本输入，支持：
//! - 激活状态高亮
//! - 验证错误显示
//! - 空值时显示占位符
//! - 字符计数

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// 使用 Builder 模式配置各种选项
///
/// # 示例
///
/// ```rust,ignore
/// InputField::new("URL", app.state.input())
///     .active(true)
///     .error(app.state.validation_error())
///     .placeholder("Paste your URL here")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    /// 字段标题
    title: &'a str,
    /// 输入值
    value: &'a str,
    /// 是否处于激活状态
    is_active: bool,
    /// 验证错误信息
    error: Option<&'a str>,
    /// 占位符文本
    placeholder: Option<&'a str>,
    /// 是否显示字符计数
    show_char_count: bool,
}

impl<'a> InputField<'a> {
    /// 创建新的输入框
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
            show_char_count: false,
        }
    }

    /// 设置激活状态
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置验证错误
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// 设置占位符
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 设置是否显示字符计数
    pub fn char_count(mut self, show: bool) -> Self {
        self.show_char_count = show;
        self
    }

    /// 计算所需的高度（输入框 + 错误行）
    pub fn height(&self) -> u16 {
        if self.error.is_some() {
            4 // 3 for input + 1 for error
        } else {
            3 // just input
        }
    }

    /// 获取显示的标题
    fn display_title(&self) -> String {
        if self.show_char_count && !self.value.is_empty() {
            format!(" {} ({} chars) ", self.title, self.value.chars().count())
        } else {
            format!(" {} ", self.title)
        }
    }

    /// 获取边框样式
    fn border_style(&self) -> Style {
        if self.error.is_some() {
            Style::default().fg(colors::ERROR)
        } else if self.is_active {
            Style::default().fg(colors::PRIMARY).bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 获取显示内容：空值时显示灰色占位符
    fn display_value(&self) -> Span<'a> {
        match (self.value.is_empty(), self.placeholder) {
            (true, Some(placeholder)) => Span::styled(placeholder, Style::default().fg(colors::MUTED)),
            _ => Span::raw(self.value),
        }
    }

    /// 渲染输入框
    ///
    /// 激活时把终端光标放在文本末尾
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // 分割区域：输入框 + 错误信息
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        // 超出宽度时只显示末尾部分
        let inner_width = chunks[0].width.saturating_sub(2) as usize;
        let char_len = self.value.chars().count();
        let scroll = char_len.saturating_sub(inner_width.saturating_sub(1));

        let input = Paragraph::new(self.display_value())
            .scroll((0, scroll as u16))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.display_title())
                    .border_style(self.border_style()),
            );
        frame.render_widget(input, chunks[0]);

        if self.is_active {
            let x = chunks[0].x + 1 + (char_len - scroll) as u16;
            frame.set_cursor_position(Position::new(
                x.min(chunks[0].right().saturating_sub(2)),
                chunks[0].y + 1,
            ));
        }

        // 渲染错误信息
        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_title() {
        let field = InputField::new("URL", "https://a.b").char_count(true);
        assert!(field.display_title().contains("URL"));
        assert!(field.display_title().contains("11 chars"));

        let field = InputField::new("URL", "");
        assert_eq!(field.display_title(), " URL ");
    }

    #[test]
    fn test_input_field_placeholder() {
        let field = InputField::new("URL", "").placeholder("Paste your URL here");
        assert_eq!(field.display_value().content, "Paste your URL here");

        let field = InputField::new("URL", "x").placeholder("Paste your URL here");
        assert_eq!(field.display_value().content, "x");
    }

    #[test]
    fn test_input_field_height() {
        let field = InputField::new("URL", "test");
        assert_eq!(field.height(), 3);

        let field = InputField::new("URL", "test").error(Some("Invalid URL"));
        assert_eq!(field.height(), 4);
    }
}
