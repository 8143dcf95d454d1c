//! 打印/导出交接：把渲染好的纯文本简历交给外部设施
//!
//! 交接没有返回值，失败只记录日志，不影响文档模型。

use crate::utils::clipboard::copy_to_clipboard;

/// 外部打印设施
pub trait PrintFacility {
    fn print(&mut self, text: &str);
}

/// 通过系统剪贴板交接，便于粘贴到任意排版/打印程序
#[derive(Debug, Default)]
pub struct ClipboardPrinter;

impl PrintFacility for ClipboardPrinter {
    fn print(&mut self, text: &str) {
        match copy_to_clipboard(text) {
            Ok(()) => tracing::info!("简历文本已交给剪贴板 ({} 字节)", text.len()),
            Err(e) => tracing::error!("打印交接失败: {}", e),
        }
    }
}

/// 写入日志（无图形会话时使用）
#[derive(Debug, Default)]
pub struct LogPrinter;

impl PrintFacility for LogPrinter {
    fn print(&mut self, text: &str) {
        tracing::info!("打印预览:\n{}", text);
    }
}

/// 记录每次交接的内容（测试用）
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPrinter {
    pub jobs: Vec<String>,
}

#[cfg(test)]
impl PrintFacility for RecordingPrinter {
    fn print(&mut self, text: &str) {
        self.jobs.push(text.to_string());
    }
}
