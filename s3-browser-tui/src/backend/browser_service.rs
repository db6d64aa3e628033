//! 浏览服务
//!
//! 封装 s3-browser-core 的导航操作，在同步的主循环里逐步执行。

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use s3_browser_core::{BrowseContext, CoreResult, Navigator, Row, S3Uri};
use s3_browser_provider::{create_provider, ProviderConfig, StorageProvider};
use tokio::runtime::{Builder, Runtime};

/// TUI 浏览服务
///
/// 持有 runtime 和 `BrowseContext`，生命周期与整个程序相同。
pub struct BrowserService {
    runtime: Runtime,
    ctx: BrowseContext,
}

impl BrowserService {
    /// 根据配置创建 S3 Provider
    pub fn connect(config: ProviderConfig) -> Result<Self> {
        let runtime = Builder::new_multi_thread().enable_all().build()?;
        log::info!(
            "Connecting: region={:?}, endpoint={:?}, profile={:?}, path_style={}",
            config.region,
            config.endpoint_url,
            config.profile,
            config.force_path_style
        );
        let provider = runtime.block_on(create_provider(config))?;
        Ok(Self::with_runtime(runtime, provider))
    }

    /// 使用已有的 Provider
    #[cfg(test)]
    pub fn with_provider(provider: Arc<dyn StorageProvider>) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self::with_runtime(runtime, provider))
    }

    fn with_runtime(runtime: Runtime, provider: Arc<dyn StorageProvider>) -> Self {
        Self {
            runtime,
            ctx: BrowseContext::new(provider),
        }
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    // ========== 导航操作 ==========

    /// 从首页依次打开每一段地址
    pub fn open(&self, address: &[String]) -> CoreResult<Navigator> {
        self.block_on(Navigator::open(&self.ctx, address))
    }

    pub fn descend(&self, navigator: &mut Navigator, row: &Row) -> CoreResult<()> {
        self.block_on(navigator.descend(&self.ctx, row))
    }

    /// 跳转：`s3://` 地址从任意页面直达，其他输入按当前页面的条目名称查找
    pub fn goto(&self, navigator: &mut Navigator, input: &str) -> CoreResult<()> {
        let input = input.trim();
        if S3Uri::parse(input).is_some() {
            self.block_on(navigator.jump(&self.ctx, input))
        } else {
            self.block_on(navigator.dig(&self.ctx, input))
        }
    }

    pub fn refresh(&self, navigator: &mut Navigator) -> CoreResult<()> {
        self.block_on(navigator.refresh(&self.ctx))
    }
}
