//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use s3_browser_provider::{ProviderConfig, StorageProvider, create_provider};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文
pub struct TestContext {
    pub provider: Arc<dyn StorageProvider>,
    pub bucket: String,
}

impl TestContext {
    /// 从环境变量创建（`S3_TEST_BUCKET` 必填，`S3_TEST_ENDPOINT` / `AWS_REGION` 可选）
    pub async fn s3() -> Option<Self> {
        let bucket = env::var("S3_TEST_BUCKET").ok()?;
        let endpoint_url = env::var("S3_TEST_ENDPOINT").ok();
        let config = ProviderConfig {
            region: env::var("AWS_REGION").ok(),
            force_path_style: endpoint_url.is_some(),
            endpoint_url,
            profile: None,
        };
        let provider = create_provider(config).await.ok()?;
        Some(Self { provider, bucket })
    }
}
