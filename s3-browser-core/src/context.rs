//! 浏览上下文 - 持有页面构造所需的依赖

use std::sync::Arc;

use s3_browser_provider::StorageProvider;

/// 浏览上下文
///
/// 由导航驱动方创建并持有，页面构造时以引用方式传入；页面本身不保存
/// client 句柄，也不存在全局 client。
#[derive(Clone)]
pub struct BrowseContext {
    /// 对象存储 Provider
    pub provider: Arc<dyn StorageProvider>,
}

impl BrowseContext {
    /// 创建浏览上下文
    #[must_use]
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    /// 获取 Provider 实例
    pub fn provider(&self) -> &dyn StorageProvider {
        self.provider.as_ref()
    }
}
