//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有和 S3 打交道、和磁盘打交道的事情。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod browser_service;    // 浏览服务（runtime + BrowseContext）
//!         mod config_service;     // 配置服务（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、浏览服务（BrowserService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/browser_service.rs 中定义：
//!
//!         BrowserService 持有 tokio runtime 和 s3-browser-core 的 BrowseContext。
//!         core 的页面构造是 async 的，而主循环是同步的，
//!         所以每一步导航都在这里 block_on：
//!
//!             用户按 Enter
//!                 ↓
//!             update/navigation.rs 调用 app.browser.descend(...)
//!                 ↓
//!             runtime.block_on(navigator.descend(ctx, row))
//!                 ↓
//!             新页面构造完成（或返回错误）后才回到主循环
//!
//!         同一时刻只有一个导航步骤在执行，没有后台加载。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（JsonConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：<config_dir>/s3-browser/config.json
//!
//!         文件不存在时使用默认配置；命令行参数覆盖文件中的值
//!         （合并逻辑见 src/cli.rs）。
//!

mod browser_service;
mod config_service;

pub use browser_service::BrowserService;
pub use config_service::{app_dir, AppConfig, ConfigService, JsonConfigService};
