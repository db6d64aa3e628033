//! Bucket listing and bucket-level settings pages.

use s3_browser_provider::{BucketVersioning, ProviderError};

use crate::address::AddressPath;
use crate::context::BrowseContext;
use crate::error::{CoreError, CoreResult};
use crate::row::Row;

use super::{buckets_address, SETTINGS_SEGMENT};

pub const VERSIONING: &str = "versioning";
pub const POLICY: &str = "policy";

/// All buckets visible to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketsPage {
    pub rows: Vec<Row>,
}

impl BucketsPage {
    pub async fn load(ctx: &BrowseContext) -> CoreResult<Self> {
        let buckets = ctx.provider().list_buckets().await?;
        log::debug!("Loaded {} buckets", buckets.len());
        Ok(Self {
            rows: buckets.into_iter().map(|b| Row::group(b.name)).collect(),
        })
    }
}

fn settings_address(bucket: &str) -> AddressPath {
    buckets_address().join(bucket).join(SETTINGS_SEGMENT)
}

/// Static menu of one bucket's settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSettingsPage {
    pub bucket: String,
}

impl BucketSettingsPage {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }

    pub fn rows() -> Vec<Row> {
        vec![Row::group(VERSIONING), Row::group(POLICY)]
    }

    pub fn address(&self) -> AddressPath {
        settings_address(&self.bucket)
    }
}

/// Versioning configuration of one bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersioningPage {
    pub bucket: String,
    pub versioning: BucketVersioning,
}

impl VersioningPage {
    pub async fn load(ctx: &BrowseContext, bucket: &str) -> CoreResult<Self> {
        let versioning = ctx.provider().get_bucket_versioning(bucket).await?;
        Ok(Self {
            bucket: bucket.to_string(),
            versioning,
        })
    }

    pub fn address(&self) -> AddressPath {
        settings_address(&self.bucket).join(VERSIONING)
    }

    pub fn value(&self) -> CoreResult<serde_json::Value> {
        serde_json::to_value(&self.versioning)
            .map_err(|e| CoreError::SerializationError(e.to_string()))
    }
}

/// Policy document of one bucket; `None` when the bucket has no policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyPage {
    pub bucket: String,
    pub document: Option<serde_json::Value>,
}

impl PolicyPage {
    pub async fn load(ctx: &BrowseContext, bucket: &str) -> CoreResult<Self> {
        let document = match ctx.provider().get_bucket_policy(bucket).await {
            Ok(raw) => Some(serde_json::from_str(&raw).map_err(|e| {
                CoreError::SerializationError(format!("policy of bucket '{bucket}': {e}"))
            })?),
            Err(ProviderError::BucketPolicyNotFound { .. }) => {
                log::debug!("Bucket '{bucket}' has no policy");
                None
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            bucket: bucket.to_string(),
            document,
        })
    }

    pub fn address(&self) -> AddressPath {
        settings_address(&self.bucket).join(POLICY)
    }
}
