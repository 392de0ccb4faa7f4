//! taskpad 统一错误类型定义
//!
//! 只覆盖外围关注点（终端 I/O、配置、日志）。任务校验失败留在输入表单内部，
//! 不经过这里。

use std::io;
use thiserror::Error;

/// taskpad 错误类型
#[derive(Debug, Error)]
pub enum TaskpadError {
    /// I/O 错误（终端、配置文件、日志文件）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 日志初始化错误
    #[error("Logging error: {0}")]
    Logging(String),
}

/// taskpad Result 类型别名
pub type Result<T> = std::result::Result<T, TaskpadError>;

impl TaskpadError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 Logging 错误
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
