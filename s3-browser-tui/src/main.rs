//! S3 Browser TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与浏览服务 (`backend/`)
//!
//!
//! main.rs
//! S3 Browser 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Args::parse()               // 命令行参数
//!     logging::init()             // 交互模式写日志文件，--print 写 stderr
//!     load_config()               // 读取配置文件，首次运行时写入默认值
//!     BrowserService::connect()   // 创建 runtime 和 S3 客户端
//!
//!     --print:
//!         browser.open(address)   // 打开起始地址
//!         print::render_page()    // 输出到 stdout，硬错误时返回非零退出码
//!
//!     交互模式：
//!         init_terminal()         // 初始化终端
//!         app::run()              // 运行 app.rs 主循环
//!         restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod cli;
mod event;
pub mod i18n;
mod logging;
mod message;
mod model;
mod print;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use s3_browser_core::Navigator;

use backend::{AppConfig, BrowserService, ConfigService, JsonConfigService};
use cli::{Args, Parser};
use util::{init_terminal, restore_terminal};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.print) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("{}: {e:#}", i18n::t().common.error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = load_config(args)?;
    i18n::set_language(config.language());
    view::theme::set_theme(config.theme);
    tracing::info!(
        "Starting S3 Browser (language={}, print={})",
        i18n::current_language().code(),
        args.print
    );

    let browser = BrowserService::connect(args.provider_config(&config))?;

    if args.print {
        return print_page(&browser, &args.address);
    }

    // 起始地址打不开时停在首页，错误弹窗显示
    let mut startup_error = None;
    let navigator = match browser.open(&args.address) {
        Ok(navigator) => navigator,
        Err(e) => {
            tracing::warn!("Cannot open start address {:?}: {e}", args.address);
            startup_error = Some(e);
            Navigator::new()
        }
    };

    let mut app = model::App::new(browser, navigator);
    if let Some(e) = startup_error {
        app.modal
            .show_error(i18n::t().modal.error_title, &e.to_string());
    }

    // 1. 初始化终端
    let mut terminal = init_terminal()?;

    // 2. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 3. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result.map(|()| ExitCode::SUCCESS)
}

/// 读取配置文件；不存在时写入默认配置，写入失败不影响启动
fn load_config(args: &Args) -> Result<AppConfig> {
    let service = match &args.config {
        Some(path) => JsonConfigService::with_path(path.clone()),
        None => JsonConfigService::new(),
    };

    tracing::debug!("Config file: {}", service.path().display());
    let config = service.load()?;
    if !service.exists() {
        if let Err(e) = service.save(&config) {
            tracing::warn!("Could not write default config: {e}");
        }
    }
    Ok(config)
}

/// `--print`：渲染一次页面后退出
fn print_page(browser: &BrowserService, address: &[String]) -> Result<ExitCode> {
    let page = match browser.open(address).and_then(|nav| print::render_page(nav.current())) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{}: {e}", i18n::t().common.error);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(page.as_bytes())?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
