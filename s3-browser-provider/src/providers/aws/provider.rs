//! AWS S3 StorageProvider trait 实现

use async_trait::async_trait;
use aws_sdk_s3::primitives::DateTime as SmithyDateTime;

use crate::error::Result;
use crate::traits::{ErrorContext, ProviderErrorMapper, StorageProvider};
use crate::types::{BucketSummary, BucketVersioning, ListedObject, ObjectListing, ObjectMetadata};
use crate::utils::datetime::from_epoch_parts;

use super::AwsS3Provider;

/// SDK 时间戳 -> chrono
fn to_chrono(dt: &SmithyDateTime) -> Option<chrono::DateTime<chrono::Utc>> {
    from_epoch_parts(dt.secs(), dt.subsec_nanos())
}

/// 服务端返回的长度字段为 i64，负值按 0 处理
fn to_size(value: Option<i64>) -> u64 {
    value.and_then(|v| u64::try_from(v).ok()).unwrap_or(0)
}

#[async_trait]
impl StorageProvider for AwsS3Provider {
    fn id(&self) -> &'static str {
        "s3"
    }

    async fn list_buckets(&self) -> Result<Vec<BucketSummary>> {
        log::debug!("ListBuckets");

        let response = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| self.map_sdk_error(&e, ErrorContext::default()))?;

        let buckets = response
            .buckets()
            .iter()
            .filter_map(|bucket| {
                bucket.name().map(|name| BucketSummary {
                    name: name.to_string(),
                    created_at: bucket.creation_date().and_then(to_chrono),
                })
            })
            .collect::<Vec<_>>();

        log::debug!("ListBuckets returned {} buckets", buckets.len());
        Ok(buckets)
    }

    async fn list_objects_by_prefix(
        &self,
        bucket: &str,
        prefix: &str,
        delimiter: &str,
    ) -> Result<ObjectListing> {
        log::debug!("ListObjectsV2 bucket={bucket} prefix={prefix:?} delimiter={delimiter:?}");

        let mut request = self.client.list_objects_v2().bucket(bucket);
        if !prefix.is_empty() {
            request = request.prefix(prefix);
        }
        if !delimiter.is_empty() {
            request = request.delimiter(delimiter);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_sdk_error(&e, ErrorContext::bucket(bucket)))?;

        let common_prefixes = response
            .common_prefixes()
            .iter()
            .filter_map(|cp| cp.prefix().map(str::to_string))
            .collect();

        let entries = response
            .contents()
            .iter()
            .filter_map(|obj| {
                obj.key().map(|key| ListedObject {
                    key: key.to_string(),
                    last_modified: obj.last_modified().and_then(to_chrono),
                    size: to_size(obj.size()),
                    storage_class: obj.storage_class().map(|c| c.as_str().to_string()),
                })
            })
            .collect();

        let is_truncated = response.is_truncated().unwrap_or(false);
        if is_truncated {
            log::warn!("Listing of s3://{bucket}/{prefix} is truncated; only the first page is shown");
        }

        Ok(ObjectListing {
            common_prefixes,
            entries,
            is_truncated,
            next_continuation_token: response.next_continuation_token().map(str::to_string),
        })
    }

    async fn get_object_metadata(&self, bucket: &str, key: &str) -> Result<ObjectMetadata> {
        log::debug!("HeadObject bucket={bucket} key={key}");

        let response = self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| self.map_sdk_error(&e, ErrorContext::object(bucket, key)))?;

        Ok(ObjectMetadata {
            content_type: response.content_type().map(str::to_string),
            content_length: response.content_length().map(|len| to_size(Some(len))),
            e_tag: response.e_tag().map(str::to_string),
            last_modified: response.last_modified().and_then(to_chrono),
            storage_class: response.storage_class().map(|c| c.as_str().to_string()),
            version_id: response.version_id().map(str::to_string),
            cache_control: response.cache_control().map(str::to_string),
            content_encoding: response.content_encoding().map(str::to_string),
            content_disposition: response.content_disposition().map(str::to_string),
            server_side_encryption: response
                .server_side_encryption()
                .map(|s| s.as_str().to_string()),
            metadata: response
                .metadata()
                .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
                .unwrap_or_default(),
        })
    }

    async fn get_bucket_versioning(&self, bucket: &str) -> Result<BucketVersioning> {
        log::debug!("GetBucketVersioning bucket={bucket}");

        let response = self
            .client
            .get_bucket_versioning()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| self.map_sdk_error(&e, ErrorContext::bucket(bucket)))?;

        Ok(BucketVersioning {
            status: response.status().map(|s| s.as_str().to_string()),
            mfa_delete: response.mfa_delete().map(|s| s.as_str().to_string()),
        })
    }

    async fn get_bucket_policy(&self, bucket: &str) -> Result<String> {
        log::debug!("GetBucketPolicy bucket={bucket}");

        let response = self
            .client
            .get_bucket_policy()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| self.map_sdk_error(&e, ErrorContext::bucket(bucket)))?;

        response
            .policy()
            .map(str::to_string)
            .ok_or_else(|| self.parse_error("GetBucketPolicy response has no Policy field"))
    }
}
