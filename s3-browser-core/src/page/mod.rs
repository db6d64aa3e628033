//! Navigable pages
//!
//! ```text
//! Home ([])
//! └── s3                      S3Root        menu, accepts s3:// URIs
//!     └── buckets             Buckets       table
//!         └── <bucket>        Key(key="")   table | object   ──alt──▶ BucketSettings
//!             └── <k1>        Key("k1")     table | object   ──alt──▶ ObjectInfo
//!                 └── <k2>    Key("k1/k2")
//!
//! BucketSettings ([s3 buckets <bucket> :settings])   menu
//! ├── versioning                                     object
//! └── policy                                         object (null without a policy)
//! ```
//!
//! Pages are fully fetched when constructed and never change afterwards; moving
//! to another page builds a fresh one.

mod bucket;
mod key;

use std::borrow::Cow;

use serde_json::Value;

pub use bucket::{BucketSettingsPage, BucketsPage, PolicyPage, VersioningPage, POLICY, VERSIONING};
pub use key::{
    key_prefix, merge_listing, normalize_key, KeyPage, ObjectInfoPage, LISTING_DELIMITER,
};

use crate::address::AddressPath;
use crate::context::BrowseContext;
use crate::error::{CoreError, CoreResult};
use crate::resolver::resolve_uri;
use crate::row::Row;

/// Name of the service menu entry on the home page.
pub const S3: &str = "s3";
/// Name of the bucket listing entry on the service page.
pub const BUCKETS: &str = "buckets";
/// Marker segment of a bucket's settings view.
pub const SETTINGS_SEGMENT: &str = ":settings";
/// Marker segment of an object's metadata view.
pub const INFO_SEGMENT: &str = ":info";

/// Self invocation used in see-also hints.
const PROGRAM: &str = "s3-browser";

pub(crate) fn buckets_address() -> AddressPath {
    AddressPath::from_segments([S3, BUCKETS])
}

/// How a page presents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Fixed named entries.
    Menu,
    /// Rows fetched from the service.
    Table,
    /// A single structured value without children.
    Object,
}

/// One node of the browsing tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    S3Root,
    Buckets(BucketsPage),
    Key(KeyPage),
    BucketSettings(BucketSettingsPage),
    Versioning(VersioningPage),
    Policy(PolicyPage),
    ObjectInfo(ObjectInfoPage),
}

impl Page {
    /// Stable identity of the page, independent of how it was reached.
    pub fn address(&self) -> AddressPath {
        match self {
            Self::Home => AddressPath::root(),
            Self::S3Root => AddressPath::root().join(S3),
            Self::Buckets(_) => buckets_address(),
            Self::Key(page) => page.address(),
            Self::BucketSettings(page) => page.address(),
            Self::Versioning(page) => page.address(),
            Self::Policy(page) => page.address(),
            Self::ObjectInfo(page) => page.address(),
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Self::Home | Self::S3Root | Self::BucketSettings(_) => PageKind::Menu,
            Self::Buckets(_) => PageKind::Table,
            Self::Key(page) if !page.rows.is_empty() => PageKind::Table,
            Self::Key(_) | Self::Versioning(_) | Self::Policy(_) | Self::ObjectInfo(_) => {
                PageKind::Object
            }
        }
    }

    /// Short label for headers: the last address segment.
    pub fn title(&self) -> String {
        match self {
            Self::Home => PROGRAM.to_string(),
            Self::ObjectInfo(page) => format!("{} {INFO_SEGMENT}", page.key),
            _ => self.address().last().unwrap_or(PROGRAM).to_string(),
        }
    }

    /// Entries of menu and table pages; empty for object pages.
    pub fn rows(&self) -> Cow<'_, [Row]> {
        match self {
            Self::Home => Cow::Owned(vec![Row::group(S3)]),
            Self::S3Root => Cow::Owned(vec![Row::group(BUCKETS)]),
            Self::Buckets(page) => Cow::Borrowed(&page.rows),
            Self::Key(page) => Cow::Borrowed(&page.rows),
            Self::BucketSettings(_) => Cow::Owned(BucketSettingsPage::rows()),
            Self::Versioning(_) | Self::Policy(_) | Self::ObjectInfo(_) => Cow::Owned(Vec::new()),
        }
    }

    /// Structured value of object pages; `None` for menus and tables.
    ///
    /// A resource that does not exist (no object, no policy) is `Some(Value::Null)`.
    pub fn value(&self) -> CoreResult<Option<Value>> {
        let to_value = |v: &s3_browser_provider::ObjectMetadata| {
            serde_json::to_value(v).map_err(|e| CoreError::SerializationError(e.to_string()))
        };

        match self {
            Self::Key(page) if page.rows.is_empty() => {
                Ok(Some(page.info.as_ref().map(to_value).transpose()?.unwrap_or(Value::Null)))
            }
            Self::ObjectInfo(page) => {
                Ok(Some(page.info.as_ref().map(to_value).transpose()?.unwrap_or(Value::Null)))
            }
            Self::Versioning(page) => page.value().map(Some),
            Self::Policy(page) => Ok(Some(page.document.clone().unwrap_or(Value::Null))),
            _ => Ok(None),
        }
    }

    /// Builds the page a row of this page denotes.
    pub async fn resolve_child(&self, ctx: &BrowseContext, row: &Row) -> CoreResult<Self> {
        match self {
            Self::Home if row.name == S3 => Ok(Self::S3Root),
            Self::S3Root if row.name == BUCKETS => {
                Ok(Self::Buckets(BucketsPage::load(ctx).await?))
            }
            Self::Buckets(_) => Ok(Self::Key(KeyPage::load(ctx, &row.name, "").await?)),
            Self::Key(page) => Ok(Self::Key(
                KeyPage::load(ctx, &page.bucket, &page.child_key(row)).await?,
            )),
            Self::BucketSettings(page) if row.name == VERSIONING => Ok(Self::Versioning(
                VersioningPage::load(ctx, &page.bucket).await?,
            )),
            Self::BucketSettings(page) if row.name == POLICY => {
                Ok(Self::Policy(PolicyPage::load(ctx, &page.bucket).await?))
            }
            _ => Err(self.child_not_found(&row.name)),
        }
    }

    /// Direct resolution of a raw address, bypassing step-by-step descent.
    ///
    /// Only the home and service pages understand `s3://bucket[/key]`. `Ok(None)`
    /// means the string is not a URI for this page, or the guessed target was
    /// refused by access control.
    pub async fn try_resolve_direct(
        &self,
        ctx: &BrowseContext,
        raw: &str,
    ) -> CoreResult<Option<Self>> {
        match self {
            Self::Home | Self::S3Root => resolve_uri(ctx, raw, true).await,
            _ => Ok(None),
        }
    }

    /// Name-based child lookup against the current rows.
    pub async fn child_by_name(&self, ctx: &BrowseContext, name: &str) -> CoreResult<Self> {
        if let Some(row) = self.rows().iter().find(|row| row.name == name) {
            return self.resolve_child(ctx, row).await;
        }

        // 截断的列表里找不到的名字可能在后续分页中
        if let Self::Key(page) = self {
            if page.truncated && !name.is_empty() {
                return self.resolve_child(ctx, &Row::group(name)).await;
            }
        }

        Err(self.child_not_found(name))
    }

    /// Sibling view of the same resource, if the page has one.
    pub fn alternate_view(&self) -> Option<Self> {
        match self {
            Self::Key(page) if page.key.is_empty() => {
                Some(Self::BucketSettings(BucketSettingsPage::new(page.bucket.clone())))
            }
            Self::Key(page) => page.info_view().map(Self::ObjectInfo),
            _ => None,
        }
    }

    /// Advisory shell command showing the same resource.
    pub fn see_also(&self) -> Option<Vec<String>> {
        let words = |words: &[&str]| words.iter().map(ToString::to_string).collect::<Vec<_>>();

        Some(match self {
            Self::Home => words(&[PROGRAM]),
            Self::S3Root => words(&[PROGRAM, S3, "s3://.../..."]),
            Self::Buckets(_) => words(&["aws", "s3", "ls"]),
            Self::Key(page) => page.see_also(),
            Self::BucketSettings(page) => {
                words(&["aws", "s3api", "get-bucket-location", "--bucket", page.bucket.as_str()])
            }
            Self::Versioning(page) => {
                words(&["aws", "s3api", "get-bucket-versioning", "--bucket", page.bucket.as_str()])
            }
            Self::Policy(page) => {
                words(&["aws", "s3api", "get-bucket-policy", "--bucket", page.bucket.as_str()])
            }
            Self::ObjectInfo(page) => page.see_also(),
        })
    }

    /// Rebuilds the page from its identity with fresh data.
    pub async fn reload(&self, ctx: &BrowseContext) -> CoreResult<Self> {
        Ok(match self {
            Self::Home => Self::Home,
            Self::S3Root => Self::S3Root,
            Self::Buckets(_) => Self::Buckets(BucketsPage::load(ctx).await?),
            Self::Key(page) => Self::Key(KeyPage::load(ctx, &page.bucket, &page.key).await?),
            Self::BucketSettings(page) => Self::BucketSettings(page.clone()),
            Self::Versioning(page) => {
                Self::Versioning(VersioningPage::load(ctx, &page.bucket).await?)
            }
            Self::Policy(page) => Self::Policy(PolicyPage::load(ctx, &page.bucket).await?),
            Self::ObjectInfo(page) => {
                Self::ObjectInfo(ObjectInfoPage::load(ctx, &page.bucket, &page.key).await?)
            }
        })
    }

    /// Whether the listing behind this page was cut short by the service.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Key(page) if page.truncated)
    }

    fn child_not_found(&self, name: &str) -> CoreError {
        CoreError::ChildNotFound {
            address: self.address().to_string(),
            name: name.to_string(),
        }
    }
}
