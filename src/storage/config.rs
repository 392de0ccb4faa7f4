//! 应用配置持久化
//!
//! 只保存外观和启动选项，任务本身从不落盘。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::taskpad_dir;
use crate::error::{Result, TaskpadError};

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 启动时的任务列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// 是否载入示例任务
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// 获取配置文件路径
pub fn config_path() -> Option<PathBuf> {
    taskpad_dir().map(|dir| dir.join("config.toml"))
}

/// 加载配置（不存在或解析失败则返回默认值）
pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

/// 从指定路径加载配置
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match read_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            Config::default()
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 保存配置到指定路径
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| TaskpadError::config(format!("no parent dir: {}", path.display())))?;
    fs::create_dir_all(dir)?;

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
