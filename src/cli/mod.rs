//! CLI 模块

use std::path::PathBuf;

use clap::Parser;

use crate::app::AppOptions;
use crate::storage::config::{self, Config};
use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(version)]
#[command(about = "A single-screen task list editor for the terminal")]
pub struct Cli {
    /// Color theme (Auto, Dark, Light, Dracula, Nord, Gruvbox)
    #[arg(long)]
    pub theme: Option<String>,

    /// Start with an empty list instead of the sample tasks
    #[arg(long)]
    pub empty: bool,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// 合并配置文件与命令行参数，命令行优先
    pub fn app_options(&self, config: &Config) -> AppOptions {
        let theme_name = self.theme.as_deref().unwrap_or(&config.theme.name);
        AppOptions {
            seed: config.tasks.seed && !self.empty,
            theme: Theme::from_name(theme_name),
            config_path: config::config_path(),
        }
    }
}
