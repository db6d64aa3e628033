//! 测试辅助模块
//!
//! 提供内存版 `StorageProvider` 和便捷的测试工厂方法。

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use s3_browser_provider::{
    BucketSummary, BucketVersioning, ListedObject, ObjectListing, ObjectMetadata, ProviderError,
    StorageProvider,
};
use tokio::sync::RwLock;

use crate::context::BrowseContext;

const PROVIDER: &str = "mock";

/// Provider 方法名（用于故障注入和调用记录）
pub const LIST_BUCKETS: &str = "list_buckets";
pub const LIST_OBJECTS: &str = "list_objects_by_prefix";
pub const GET_OBJECT_METADATA: &str = "get_object_metadata";
pub const GET_BUCKET_VERSIONING: &str = "get_bucket_versioning";
pub const GET_BUCKET_POLICY: &str = "get_bucket_policy";

#[derive(Debug, Clone)]
struct MockObject {
    size: u64,
    last_modified: Option<DateTime<Utc>>,
    storage_class: String,
}

// ===== MockStorageProvider =====

/// 内存版对象存储
///
/// 列表按 key 字典序生成，与 S3 行为一致；`set_listing` 可覆盖某个前缀的列表结果。
pub struct MockStorageProvider {
    buckets: RwLock<BTreeMap<String, BTreeMap<String, MockObject>>>,
    policies: RwLock<HashMap<String, String>>,
    versioning: RwLock<HashMap<String, BucketVersioning>>,
    /// 这些 bucket 的所有请求返回 AccessDenied
    denied: RwLock<HashSet<String>>,
    /// 方法名 -> 注入的错误
    faults: RwLock<HashMap<&'static str, ProviderError>>,
    /// (bucket, prefix) -> 固定列表结果
    listings: RwLock<HashMap<(String, String), ObjectListing>>,
    calls: RwLock<Vec<String>>,
}

impl MockStorageProvider {
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(BTreeMap::new()),
            policies: RwLock::new(HashMap::new()),
            versioning: RwLock::new(HashMap::new()),
            denied: RwLock::new(HashSet::new()),
            faults: RwLock::new(HashMap::new()),
            listings: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn add_bucket(&self, bucket: &str) {
        self.buckets
            .write()
            .await
            .entry(bucket.to_string())
            .or_default();
    }

    /// 添加对象（bucket 不存在时自动创建）
    pub async fn put_object(&self, bucket: &str, key: &str, size: u64) {
        self.buckets
            .write()
            .await
            .entry(bucket.to_string())
            .or_default()
            .insert(
                key.to_string(),
                MockObject {
                    size,
                    last_modified: DateTime::from_timestamp(1_700_000_000, 0),
                    storage_class: "STANDARD".to_string(),
                },
            );
    }

    pub async fn remove_object(&self, bucket: &str, key: &str) {
        if let Some(objects) = self.buckets.write().await.get_mut(bucket) {
            objects.remove(key);
        }
    }

    pub async fn set_policy(&self, bucket: &str, policy: &str) {
        self.policies
            .write()
            .await
            .insert(bucket.to_string(), policy.to_string());
    }

    pub async fn set_versioning(&self, bucket: &str, versioning: BucketVersioning) {
        self.versioning
            .write()
            .await
            .insert(bucket.to_string(), versioning);
    }

    pub async fn deny_bucket(&self, bucket: &str) {
        self.denied.write().await.insert(bucket.to_string());
    }

    /// 让某个方法持续返回指定错误
    pub async fn fail(&self, method: &'static str, err: ProviderError) {
        self.faults.write().await.insert(method, err);
    }

    pub async fn clear_faults(&self) {
        self.faults.write().await.clear();
    }

    pub async fn set_listing(&self, bucket: &str, prefix: &str, listing: ObjectListing) {
        self.listings
            .write()
            .await
            .insert((bucket.to_string(), prefix.to_string()), listing);
    }

    /// 已发生的调用，格式为 `method(args)`
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    pub async fn reset_calls(&self) {
        self.calls.write().await.clear();
    }

    async fn enter(&self, method: &'static str, args: &str, bucket: Option<&str>) -> Result<(), ProviderError> {
        self.calls.write().await.push(format!("{method}({args})"));

        if let Some(err) = self.faults.read().await.get(method) {
            return Err(err.clone());
        }
        if let Some(bucket) = bucket {
            if self.denied.read().await.contains(bucket) {
                return Err(ProviderError::AccessDenied {
                    provider: PROVIDER.to_string(),
                    resource: Some(bucket.to_string()),
                    raw_message: Some("Access Denied".to_string()),
                });
            }
        }
        Ok(())
    }

    async fn require_bucket(&self, bucket: &str) -> Result<(), ProviderError> {
        if self.buckets.read().await.contains_key(bucket) {
            Ok(())
        } else {
            Err(ProviderError::BucketNotFound {
                provider: PROVIDER.to_string(),
                bucket: bucket.to_string(),
                raw_message: None,
            })
        }
    }
}

#[async_trait]
impl StorageProvider for MockStorageProvider {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    async fn list_buckets(&self) -> Result<Vec<BucketSummary>, ProviderError> {
        self.enter(LIST_BUCKETS, "", None).await?;
        Ok(self
            .buckets
            .read()
            .await
            .keys()
            .map(|name| BucketSummary {
                name: name.clone(),
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
        self.enter(LIST_OBJECTS, &format!("{bucket},{prefix}"), Some(bucket))
            .await?;

        if let Some(listing) = self
            .listings
            .read()
            .await
            .get(&(bucket.to_string(), prefix.to_string()))
        {
            return Ok(listing.clone());
        }

        self.require_bucket(bucket).await?;
        let buckets = self.buckets.read().await;
        let mut listing = ObjectListing::default();

        for (key, object) in buckets.get(bucket).into_iter().flatten() {
            let Some(rest) = key.strip_prefix(prefix) else {
                continue;
            };
            match rest.find(delimiter).filter(|_| !delimiter.is_empty()) {
                Some(idx) => {
                    let common = format!("{prefix}{}", &rest[..idx + delimiter.len()]);
                    if listing.common_prefixes.last() != Some(&common) {
                        listing.common_prefixes.push(common);
                    }
                }
                None => listing.entries.push(ListedObject {
                    key: key.clone(),
                    last_modified: object.last_modified,
                    size: object.size,
                    storage_class: Some(object.storage_class.clone()),
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
        self.enter(GET_OBJECT_METADATA, &format!("{bucket},{key}"), Some(bucket))
            .await?;

        let buckets = self.buckets.read().await;
        let Some(object) = buckets.get(bucket).and_then(|objects| objects.get(key)) else {
            return Err(ProviderError::ObjectNotFound {
                provider: PROVIDER.to_string(),
                bucket: bucket.to_string(),
                key: key.to_string(),
                raw_message: None,
            });
        };
        Ok(ObjectMetadata {
            content_type: Some("application/octet-stream".to_string()),
            content_length: Some(object.size),
            e_tag: Some(format!("\"etag-{key}\"")),
            last_modified: object.last_modified,
            storage_class: Some(object.storage_class.clone()),
            ..Default::default()
        })
    }

    async fn get_bucket_versioning(&self, bucket: &str) -> Result<BucketVersioning, ProviderError> {
        self.enter(GET_BUCKET_VERSIONING, bucket, Some(bucket)).await?;
        self.require_bucket(bucket).await?;
        Ok(self
            .versioning
            .read()
            .await
            .get(bucket)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_bucket_policy(&self, bucket: &str) -> Result<String, ProviderError> {
        self.enter(GET_BUCKET_POLICY, bucket, Some(bucket)).await?;
        self.require_bucket(bucket).await?;
        self.policies
            .read()
            .await
            .get(bucket)
            .cloned()
            .ok_or_else(|| ProviderError::BucketPolicyNotFound {
                provider: PROVIDER.to_string(),
                bucket: bucket.to_string(),
                raw_message: None,
            })
    }
}

// ===== 工厂方法 =====

/// 创建空的测试上下文
pub fn create_test_context() -> (BrowseContext, Arc<MockStorageProvider>) {
    let provider = Arc::new(MockStorageProvider::new());
    let ctx = BrowseContext::new(provider.clone());
    (ctx, provider)
}

/// 创建带样例数据的测试上下文
///
/// ```text
/// logs/                       (versioning Enabled, 有 policy)
///   2024/01/app.log
///   2024/01/db.log
///   2024/02/app.log
///   2024                      (同名对象，与 2024/ 前缀并存)
///   readme.txt
/// media/                      (无 policy)
///   cat.png
/// private/                    (AccessDenied)
///   secret.txt
/// ```
pub async fn create_sample_context() -> (BrowseContext, Arc<MockStorageProvider>) {
    let (ctx, provider) = create_test_context();

    provider.put_object("logs", "2024/01/app.log", 120).await;
    provider.put_object("logs", "2024/01/db.log", 80).await;
    provider.put_object("logs", "2024/02/app.log", 64).await;
    provider.put_object("logs", "2024", 3).await;
    provider.put_object("logs", "readme.txt", 10).await;
    provider
        .set_versioning(
            "logs",
            BucketVersioning {
                status: Some("Enabled".to_string()),
                mfa_delete: None,
            },
        )
        .await;
    provider
        .set_policy(
            "logs",
            r#"{"Version":"2012-10-17","Statement":[{"Effect":"Allow","Principal":"*","Action":"s3:GetObject","Resource":"arn:aws:s3:::logs/*"}]}"#,
        )
        .await;

    provider.put_object("media", "cat.png", 2048).await;

    provider.put_object("private", "secret.txt", 1).await;
    provider.deny_bucket("private").await;

    provider.reset_calls().await;
    (ctx, provider)
}

/// 限流错误（用于硬错误路径）
pub fn throttled() -> ProviderError {
    ProviderError::RateLimited {
        provider: PROVIDER.to_string(),
        retry_after: None,
        raw_message: Some("Please reduce your request rate.".to_string()),
    }
}
