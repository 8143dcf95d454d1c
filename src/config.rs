//! 运行配置：从环境变量读取日志级别与打印交接方式

use std::str::FromStr;

use tracing::Level;

pub const LOG_LEVEL_VAR: &str = "RESUME_BUILDER_LOG";
pub const PRINT_TARGET_VAR: &str = "RESUME_BUILDER_PRINT";

/// 打印/导出交接的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintTarget {
    #[default]
    Clipboard,
    Log,
}

impl FromStr for PrintTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clipboard" => Ok(PrintTarget::Clipboard),
            "log" => Ok(PrintTarget::Log),
            other => Err(format!("未知打印目标: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: Level,
    pub print_target: PrintTarget,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            print_target: PrintTarget::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 无法解析的值回退到默认值（此时日志尚未初始化，由调用方记录最终配置）
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup(LOG_LEVEL_VAR)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            print_target: lookup(PRINT_TARGET_VAR)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.print_target),
        }
    }
}
