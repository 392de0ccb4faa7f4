pub mod config;

use std::path::PathBuf;

/// 获取 ~/.taskpad/ 目录路径（找不到 home 目录时返回 None）
pub fn taskpad_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".taskpad"))
}
