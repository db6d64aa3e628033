//! 测试辅助模块
//!
//! 固定数据的内存 Provider：
//!
//! ```text
//! logs/    a.txt, dir/b.txt, dir/c.txt
//! media/   cat.png
//! vault/   (AccessDenied)
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use s3_browser_core::Navigator;
use s3_browser_provider::{
    BucketSummary, BucketVersioning, ListedObject, ObjectListing, ObjectMetadata, ProviderError,
    StorageProvider,
};

use crate::backend::BrowserService;
use crate::model::App;

const PROVIDER: &str = "fake";
const DENIED: &str = "vault";

pub struct FakeProvider {
    buckets: BTreeMap<&'static str, Vec<(&'static str, u64)>>,
}

impl FakeProvider {
    pub fn sample() -> Self {
        let mut buckets = BTreeMap::new();
        buckets.insert("logs", vec![("a.txt", 5), ("dir/b.txt", 7), ("dir/c.txt", 9)]);
        buckets.insert("media", vec![("cat.png", 2048)]);
        buckets.insert(DENIED, vec![("secret", 1)]);
        Self { buckets }
    }

    fn objects(&self, bucket: &str) -> Result<&[(&'static str, u64)], ProviderError> {
        if bucket == DENIED {
            return Err(ProviderError::AccessDenied {
                provider: PROVIDER.to_string(),
                resource: Some(bucket.to_string()),
                raw_message: None,
            });
        }
        self.buckets
            .get(bucket)
            .map(Vec::as_slice)
            .ok_or_else(|| ProviderError::BucketNotFound {
                provider: PROVIDER.to_string(),
                bucket: bucket.to_string(),
                raw_message: None,
            })
    }
}

#[async_trait]
impl StorageProvider for FakeProvider {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    async fn list_buckets(&self) -> Result<Vec<BucketSummary>, ProviderError> {
        Ok(self
            .buckets
            .keys()
            .map(|name| BucketSummary {
                name: (*name).to_string(),
                created_at: None,
            })
            .collect())
    }

    async fn list_objects_by_prefix(
        &self,
        bucket: &str,
        prefix: &str,
        delimiter: &str,
    ) -> Result<ObjectListing, ProviderError> {
        let mut listing = ObjectListing::default();
        for (key, size) in self.objects(bucket)? {
            let Some(rest) = key.strip_prefix(prefix) else {
                continue;
            };
            match rest.find(delimiter) {
                Some(idx) => {
                    let common = format!("{prefix}{}", &rest[..idx + delimiter.len()]);
                    if listing.common_prefixes.last() != Some(&common) {
                        listing.common_prefixes.push(common);
                    }
                }
                None => listing.entries.push(ListedObject {
                    key: (*key).to_string(),
                    last_modified: DateTime::from_timestamp(1_700_000_000, 0),
                    size: *size,
                    storage_class: Some("STANDARD".to_string()),
                }),
            }
        }
        Ok(listing)
    }

    async fn get_object_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<ObjectMetadata, ProviderError> {
        let Some((_, size)) = self.objects(bucket)?.iter().find(|(k, _)| *k == key) else {
            return Err(ProviderError::ObjectNotFound {
                provider: PROVIDER.to_string(),
                bucket: bucket.to_string(),
                key: key.to_string(),
                raw_message: None,
            });
        };
        Ok(ObjectMetadata {
            content_length: Some(*size),
            ..Default::default()
        })
    }

    async fn get_bucket_versioning(&self, bucket: &str) -> Result<BucketVersioning, ProviderError> {
        self.objects(bucket)?;
        Ok(BucketVersioning::default())
    }

    async fn get_bucket_policy(&self, bucket: &str) -> Result<String, ProviderError> {
        self.objects(bucket)?;
        Err(ProviderError::BucketPolicyNotFound {
            provider: PROVIDER.to_string(),
            bucket: bucket.to_string(),
            raw_message: None,
        })
    }
}

/// 创建连接到 `FakeProvider` 的浏览服务
pub fn create_test_browser() -> BrowserService {
    BrowserService::with_provider(Arc::new(FakeProvider::sample()))
        .expect("failed to build test runtime")
}

/// 创建停在首页的测试应用
pub fn create_test_app() -> App {
    App::new(create_test_browser(), Navigator::new())
}
