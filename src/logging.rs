//! 文件日志
//!
//! stdout 被 TUI 占用，日志只写入 `--log-file` 指定的文件。未指定时不安装
//! subscriber，`tracing` 宏全部为空操作。

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, TaskpadError};

/// 默认过滤规则，可被 RUST_LOG 覆盖
const DEFAULT_FILTER: &str = "taskpad=debug,warn";

/// 初始化文件日志（追加写入）
pub fn init(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| TaskpadError::logging(e.to_string()))
}
