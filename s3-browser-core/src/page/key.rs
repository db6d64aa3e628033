//! Key pages: one `(bucket, key)` position in the emulated directory tree.

use s3_browser_provider::{ObjectListing, ObjectMetadata, ProviderError};

use crate::address::{AddressPath, KEY_SEPARATOR};
use crate::context::BrowseContext;
use crate::error::CoreResult;
use crate::row::Row;

use super::{buckets_address, INFO_SEGMENT};

/// Delimiter used for every listing; keys are browsed as `/`-separated paths.
pub const LISTING_DELIMITER: &str = "/";

/// Strips at most one trailing `/`; `a/b/` and `a/b` name the same position.
pub fn normalize_key(key: &str) -> &str {
    key.strip_suffix(KEY_SEPARATOR).unwrap_or(key)
}

/// Listing prefix for a key: empty at the bucket root, `key/` below it.
pub fn key_prefix(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        format!("{key}{KEY_SEPARATOR}")
    }
}

/// Turns one delimited listing into rows relative to `prefix`.
///
/// Grouped prefixes come first, then direct entries, each in the order the
/// service returned them.
pub fn merge_listing(prefix: &str, listing: &ObjectListing) -> Vec<Row> {
    let groups = listing.common_prefixes.iter().map(|common| {
        let name = common.strip_suffix(KEY_SEPARATOR).unwrap_or(common);
        let name = name.strip_prefix(prefix).unwrap_or(name);
        Row::group(name)
    });

    let objects = listing.entries.iter().map(|entry| {
        let name = entry.key.strip_prefix(prefix).unwrap_or(&entry.key);
        Row::object(
            name,
            entry.last_modified,
            entry.size,
            entry.storage_class.clone(),
        )
    });

    groups.chain(objects).collect()
}

/// Fetches object metadata for `key`, treating a missing object as no info.
///
/// The bucket root (`""`) is never an object and is not fetched.
pub(crate) async fn fetch_info(
    ctx: &BrowseContext,
    bucket: &str,
    key: &str,
) -> CoreResult<Option<ObjectMetadata>> {
    if key.is_empty() {
        return Ok(None);
    }
    match ctx.provider().get_object_metadata(bucket, key).await {
        Ok(info) => Ok(Some(info)),
        Err(ProviderError::ObjectNotFound { .. }) => {
            log::debug!("s3://{bucket}/{key} has no object; showing listing only");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn s3_path(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}

/// A position in a bucket's key namespace.
///
/// The same key can be an object and a prefix at once, so both `info` and `rows`
/// are kept. Rendering prefers rows when there are any.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPage {
    pub bucket: String,
    pub key: String,
    /// Metadata of the object stored exactly at `key`, if any.
    pub info: Option<ObjectMetadata>,
    pub rows: Vec<Row>,
    /// The listing stopped early; only the first page of entries is shown.
    pub truncated: bool,
}

impl KeyPage {
    /// Fetches info and listing for `(bucket, key)`.
    ///
    /// Makes at most two service calls. A missing object yields `info: None`;
    /// every other service error, access denied included, is returned.
    pub async fn load(ctx: &BrowseContext, bucket: &str, key: &str) -> CoreResult<Self> {
        let key = normalize_key(key);
        let info = fetch_info(ctx, bucket, key).await?;

        let prefix = key_prefix(key);
        let listing = ctx
            .provider()
            .list_objects_by_prefix(bucket, &prefix, LISTING_DELIMITER)
            .await?;
        let rows = merge_listing(&prefix, &listing);

        log::debug!(
            "Loaded s3://{bucket}/{key}: info={}, rows={}, truncated={}",
            info.is_some(),
            rows.len(),
            listing.is_truncated
        );

        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
            info,
            rows,
            truncated: listing.is_truncated,
        })
    }

    pub fn prefix(&self) -> String {
        key_prefix(&self.key)
    }

    /// Key of the child a row denotes.
    pub fn child_key(&self, row: &Row) -> String {
        format!("{}{}", self.prefix(), row.name)
    }

    pub fn address(&self) -> AddressPath {
        buckets_address().join(self.bucket.as_str()).join_key(&self.key)
    }

    pub fn s3_path(&self) -> String {
        s3_path(&self.bucket, &self.key)
    }

    /// Shell command that shows the same thing.
    pub fn see_also(&self) -> Vec<String> {
        if self.rows.is_empty() {
            vec![
                "aws".to_string(),
                "s3".to_string(),
                "cp".to_string(),
                self.s3_path(),
                "-".to_string(),
            ]
        } else {
            vec![
                "aws".to_string(),
                "s3".to_string(),
                "ls".to_string(),
                s3_path(&self.bucket, &self.prefix()),
            ]
        }
    }

    /// Object view of the same key, available when rows hide the object's metadata.
    pub fn info_view(&self) -> Option<ObjectInfoPage> {
        if self.rows.is_empty() {
            return None;
        }
        self.info.as_ref().map(|info| ObjectInfoPage {
            bucket: self.bucket.clone(),
            key: self.key.clone(),
            info: Some(info.clone()),
        })
    }
}

/// Metadata of the object at one key, as a standalone object view.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInfoPage {
    pub bucket: String,
    pub key: String,
    pub info: Option<ObjectMetadata>,
}

impl ObjectInfoPage {
    pub async fn load(ctx: &BrowseContext, bucket: &str, key: &str) -> CoreResult<Self> {
        let key = normalize_key(key);
        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
            info: fetch_info(ctx, bucket, key).await?,
        })
    }

    pub fn address(&self) -> AddressPath {
        buckets_address()
            .join(self.bucket.as_str())
            .join_key(&self.key)
            .join(INFO_SEGMENT)
    }

    pub fn see_also(&self) -> Vec<String> {
        vec![
            "aws".to_string(),
            "s3api".to_string(),
            "head-object".to_string(),
            "--bucket".to_string(),
            self.bucket.clone(),
            "--key".to_string(),
            self.key.clone(),
        ]
    }
}
