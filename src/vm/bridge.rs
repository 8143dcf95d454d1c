//! VM桥接层：连接Slint UI与Document数据模型
//!
//! 注意：Slint适配器的具体实现在main.rs中，因为依赖于Slint生成的类型
//! 这里提供公共常量与预览区域定义

use std::fmt;

use crate::model::sections::SectionKind;

// === 常量定义（消除魔法值） ===
pub const STATUS_READY: &str = "Ready";
pub const STATUS_PREVIEW_REFRESHED: &str = "Preview refreshed";
pub const STATUS_RESET: &str = "Form cleared";
pub const STATUS_SENT_TO_PRINT: &str = "Resume sent to print";
pub const STATUS_JSON_COPIED: &str = "Resume JSON copied to clipboard";
pub const STATUS_ERROR_PREFIX: &str = "Error: ";

/// 预览区域；完整渲染按 `Region::ALL` 的顺序进行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Header,
    Summary,
    Skills,
    Section(SectionKind),
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Header,
        Region::Summary,
        Region::Skills,
        Region::Section(SectionKind::Experience),
        Region::Section(SectionKind::Projects),
        Region::Section(SectionKind::Education),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Summary => "summary",
            Region::Skills => "skills",
            Region::Section(kind) => kind.name(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
