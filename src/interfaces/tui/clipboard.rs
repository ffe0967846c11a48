//! 剪贴板
//!
//! 正常运行时写系统剪贴板（arboard），测试时写内存，避免碰到真实桌面环境

use crate::errors::{LinkpaneError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardSink {
    /// 系统剪贴板
    System,
    /// 内存槽位，记录最后一次复制的内容
    Memory(Option<String>),
}

impl ClipboardSink {
    pub fn memory() -> Self {
        ClipboardSink::Memory(None)
    }

    pub fn copy(&mut self, text: &str) -> Result<()> {
        match self {
            ClipboardSink::System => copy_to_system(text),
            ClipboardSink::Memory(slot) => {
                *slot = Some(text.to_string());
                Ok(())
            }
        }
    }

    /// 仅内存模式有值
    pub fn last_copied(&self) -> Option<&str> {
        match self {
            ClipboardSink::System => None,
            ClipboardSink::Memory(slot) => slot.as_deref(),
        }
    }
}

#[cfg(feature = "clipboard")]
fn copy_to_system(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LinkpaneError::clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| LinkpaneError::clipboard(e.to_string()))
}

#[cfg(not(feature = "clipboard"))]
fn copy_to_system(_text: &str) -> Result<()> {
    Err(LinkpaneError::clipboard(
        "linkpane was built without clipboard support",
    ))
}
