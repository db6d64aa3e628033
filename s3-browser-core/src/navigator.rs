//! 导航模型
//!
//! 持有当前页面与历史栈。每一步导航都先构造出完整的新页面，成功后才切换；
//! 失败时停留在原页面，错误交给调用方展示。

use crate::address::AddressPath;
use crate::context::BrowseContext;
use crate::error::{CoreError, CoreResult};
use crate::page::Page;
use crate::resolver::S3Uri;
use crate::row::Row;

/// 两阶段解析：先尝试直接解析（URI 快捷方式），再按名称查找子页面
pub async fn dig(ctx: &BrowseContext, page: &Page, raw: &str) -> CoreResult<Page> {
    if let Some(direct) = page.try_resolve_direct(ctx, raw).await? {
        log::debug!("'{raw}' resolved directly to '{}'", direct.address());
        return Ok(direct);
    }
    page.child_by_name(ctx, raw).await
}

/// 导航器
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Page,
    history: Vec<Page>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// 从首页开始
    #[must_use]
    pub fn new() -> Self {
        Self::with_page(Page::Home)
    }

    #[must_use]
    pub fn with_page(page: Page) -> Self {
        Self {
            current: page,
            history: Vec::new(),
        }
    }

    /// 从首页依次解析每个参数，构造导航器
    ///
    /// 中间页面保留在历史栈中，返回键可以逐级回退。
    pub async fn open<S: AsRef<str>>(ctx: &BrowseContext, segments: &[S]) -> CoreResult<Self> {
        let mut navigator = Self::new();
        for segment in segments {
            navigator.dig(ctx, segment.as_ref()).await?;
        }
        Ok(navigator)
    }

    pub fn current(&self) -> &Page {
        &self.current
    }

    pub fn history(&self) -> &[Page] {
        &self.history
    }

    /// 面包屑：当前页面的规范地址
    pub fn breadcrumb(&self) -> AddressPath {
        self.current.address()
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// 进入选中行对应的子页面
    pub async fn descend(&mut self, ctx: &BrowseContext, row: &Row) -> CoreResult<()> {
        let next = self.current.resolve_child(ctx, row).await?;
        self.push(next);
        Ok(())
    }

    /// 按原始字符串进入（`s3://` URI 或子页面名称）
    pub async fn dig(&mut self, ctx: &BrowseContext, raw: &str) -> CoreResult<()> {
        let next = dig(ctx, &self.current, raw).await?;
        self.push(next);
        Ok(())
    }

    /// 从任意页面跳转到 `s3://` 地址
    ///
    /// 与 `dig` 相同走快捷路径：无权限的地址视为不存在。
    pub async fn jump(&mut self, ctx: &BrowseContext, uri: &str) -> CoreResult<()> {
        if S3Uri::parse(uri).is_none() {
            return Err(CoreError::InvalidAddress(uri.to_string()));
        }
        let next = Page::S3Root
            .try_resolve_direct(ctx, uri)
            .await?
            .ok_or_else(|| CoreError::ChildNotFound {
                address: Page::S3Root.address().to_string(),
                name: uri.to_string(),
            })?;
        self.push(next);
        Ok(())
    }

    /// 切换到当前页面的备用视图，没有备用视图时返回 `false`
    pub fn open_alternate(&mut self) -> bool {
        match self.current.alternate_view() {
            Some(page) => {
                self.push(page);
                true
            }
            None => false,
        }
    }

    /// 返回上一页，已在起点时返回 `false`
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// 重新获取当前页面数据
    pub async fn refresh(&mut self, ctx: &BrowseContext) -> CoreResult<()> {
        self.current = self.current.reload(ctx).await?;
        Ok(())
    }

    fn push(&mut self, next: Page) {
        log::debug!("Navigate: '{}' -> '{}'", self.current.address(), next.address());
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageKind;
    use crate::test_utils::{create_sample_context, throttled, LIST_OBJECTS};

    fn segments(navigator: &Navigator) -> Vec<String> {
        navigator.breadcrumb().segments().to_vec()
    }

    #[tokio::test]
    async fn starts_at_home() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current(), &Page::Home);
        assert!(navigator.breadcrumb().is_empty());
        assert!(!navigator.can_go_back());
    }

    #[tokio::test]
    async fn open_walks_names_from_home() {
        let (ctx, _) = create_sample_context().await;
        let navigator = Navigator::open(&ctx, &["s3", "buckets", "logs", "2024", "01"])
            .await
            .unwrap();

        assert_eq!(
            segments(&navigator),
            ["s3", "buckets", "logs", "2024", "01"]
        );
        assert_eq!(navigator.history().len(), 5);
        assert_eq!(navigator.history()[0], Page::Home);
    }

    #[tokio::test]
    async fn uri_shortcut_matches_stepwise_descent() {
        let (ctx, _) = create_sample_context().await;

        let stepwise = Navigator::open(&ctx, &["s3", "buckets", "logs", "2024", "01", "app.log"])
            .await
            .unwrap();
        let direct = Navigator::open(&ctx, &["s3://logs/2024/01/app.log"])
            .await
            .unwrap();
        let via_service = Navigator::open(&ctx, &["s3", "s3://logs/2024/01/app.log"])
            .await
            .unwrap();

        assert_eq!(direct.current(), stepwise.current());
        assert_eq!(via_service.current(), stepwise.current());
        assert_eq!(direct.history(), [Page::Home]);
    }

    #[tokio::test]
    async fn bucket_uri_matches_bucket_row() {
        let (ctx, _) = create_sample_context().await;

        let stepwise = Navigator::open(&ctx, &["s3", "buckets", "media"]).await.unwrap();
        let direct = Navigator::open(&ctx, &["s3://media"]).await.unwrap();

        assert_eq!(direct.current(), stepwise.current());
    }

    #[tokio::test]
    async fn denied_keyed_uri_falls_back_to_name_lookup() {
        let (ctx, _) = create_sample_context().await;

        let err = Navigator::open(&ctx, &["s3://private/secret.txt"])
            .await
            .unwrap_err();
        assert!(
            matches!(err, CoreError::ChildNotFound { ref name, .. } if name == "s3://private/secret.txt")
        );
    }

    #[tokio::test]
    async fn denied_bucket_uri_is_access_denied() {
        let (ctx, _) = create_sample_context().await;

        let err = Navigator::open(&ctx, &["s3://private"]).await.unwrap_err();
        assert!(matches!(err, CoreError::Provider(ref e) if e.is_access_denied()));
    }

    #[tokio::test]
    async fn denied_bucket_by_name_is_access_denied() {
        let (ctx, _) = create_sample_context().await;

        let err = Navigator::open(&ctx, &["s3", "buckets", "private"])
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Provider(ref e) if e.is_access_denied()));
    }

    #[tokio::test]
    async fn failed_step_keeps_current_page() {
        let (ctx, provider) = create_sample_context().await;
        let mut navigator = Navigator::open(&ctx, &["s3", "buckets"]).await.unwrap();
        let before = navigator.clone();

        assert!(navigator.dig(&ctx, "nope").await.is_err());
        assert_eq!(navigator.current(), before.current());

        provider.fail(LIST_OBJECTS, throttled()).await;
        let row = navigator.current().rows()[0].clone();
        assert!(navigator.descend(&ctx, &row).await.is_err());
        assert_eq!(navigator.current(), before.current());
        assert_eq!(navigator.history(), before.history());
    }

    #[tokio::test]
    async fn descend_and_back() {
        let (ctx, _) = create_sample_context().await;
        let mut navigator = Navigator::open(&ctx, &["s3", "buckets", "logs"]).await.unwrap();
        let root = navigator.current().clone();

        let row = root.rows().iter().find(|r| r.name == "readme.txt").cloned().unwrap();
        navigator.descend(&ctx, &row).await.unwrap();
        assert_eq!(navigator.current().kind(), PageKind::Object);

        assert!(navigator.back());
        assert_eq!(navigator.current(), &root);

        while navigator.back() {}
        assert_eq!(navigator.current(), &Page::Home);
        assert!(!navigator.back());
    }

    #[tokio::test]
    async fn alternate_view_pushes_history() {
        let (ctx, _) = create_sample_context().await;
        let mut navigator = Navigator::open(&ctx, &["s3://logs"]).await.unwrap();

        assert!(navigator.open_alternate());
        assert_eq!(
            segments(&navigator),
            ["s3", "buckets", "logs", ":settings"]
        );
        navigator.dig(&ctx, "versioning").await.unwrap();
        assert!(navigator.back());
        assert!(navigator.back());
        assert_eq!(segments(&navigator), ["s3", "buckets", "logs"]);

        let mut leaf = Navigator::open(&ctx, &["s3://logs/readme.txt"]).await.unwrap();
        assert!(!leaf.open_alternate());
        assert_eq!(leaf.history().len(), 1);
    }

    #[tokio::test]
    async fn jump_from_any_page() {
        let (ctx, _) = create_sample_context().await;
        let mut navigator = Navigator::open(&ctx, &["s3", "buckets"]).await.unwrap();

        navigator.jump(&ctx, "s3://logs/2024/").await.unwrap();
        assert_eq!(segments(&navigator), ["s3", "buckets", "logs", "2024"]);

        let err = navigator.jump(&ctx, "logs/2024").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidAddress(_)));

        let err = navigator.jump(&ctx, "s3://private/x").await.unwrap_err();
        assert!(matches!(err, CoreError::ChildNotFound { .. }));
        assert_eq!(segments(&navigator), ["s3", "buckets", "logs", "2024"]);

        let err = navigator.jump(&ctx, "s3://private").await.unwrap_err();
        assert!(matches!(err, CoreError::Provider(ref e) if e.is_access_denied()));
        assert_eq!(segments(&navigator), ["s3", "buckets", "logs", "2024"]);
    }

    #[tokio::test]
    async fn refresh_replaces_current_in_place() {
        let (ctx, provider) = create_sample_context().await;
        let mut navigator = Navigator::open(&ctx, &["s3://media"]).await.unwrap();
        let depth = navigator.history().len();

        provider.put_object("media", "dog.png", 7).await;
        navigator.refresh(&ctx).await.unwrap();

        let names: Vec<_> = navigator
            .current()
            .rows()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, ["cat.png", "dog.png"]);
        assert_eq!(navigator.history().len(), depth);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_stale_page() {
        let (ctx, provider) = create_sample_context().await;
        let mut navigator = Navigator::open(&ctx, &["s3://media"]).await.unwrap();
        let before = navigator.current().clone();

        provider.fail(LIST_OBJECTS, throttled()).await;
        assert!(navigator.refresh(&ctx).await.is_err());
        assert_eq!(navigator.current(), &before);
    }
}
