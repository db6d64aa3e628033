//! 日志初始化
//!
//! 交互模式下终端属于界面，日志写入 `<config_dir>/s3-browser/s3-browser.log`；
//! `--print` 模式写到 stderr。库 crate 通过 `log` 门面输出，经 tracing-log 桥接。

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::app_dir;

/// 日志级别环境变量，语法同 `RUST_LOG`
pub const LOG_ENV: &str = "S3_BROWSER_LOG";
const LOG_FILE: &str = "s3-browser.log";

/// 初始化全局日志
pub fn init(to_stderr: bool) -> Result<()> {
    // stdout 留给页面内容，stderr 上默认只显示警告
    let default_level = if to_stderr { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_stderr {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .without_time()
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        let dir = app_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(LOG_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        registry
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .try_init()?;
    }

    Ok(())
}
