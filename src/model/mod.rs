//! 数据模型层：简历文档与区块注册表

pub mod document;
pub mod sections;

use thiserror::Error;

/// 按名称查找失败时的错误（绑定层记录后按空操作处理）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("未知区块: {0}")]
    UnknownSection(String),
    #[error("未知个人信息字段: {0}")]
    UnknownPersonalField(String),
    #[error("无效的记录ID: {0}")]
    InvalidRecordId(String),
}
