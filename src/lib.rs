//! 简历编辑器库
//!
//! 提供文档模型、区块注册表、动态条目管理、预览渲染和格式化工具
//! 遵循MVVM架构模式，视图通过 `ResumeView` trait 接入（Slint 实现见 main.rs）

pub mod config;
pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::document::{Document, DynamicRecord, PersonalField, RecordId};
pub use model::sections::{SectionConfig, SectionKind};
pub use model::ModelError;
pub use vm::binding::ResumeBinder;
pub use vm::view::ResumeView;
