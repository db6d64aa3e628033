//! `s3://bucket[/key]` URI resolution

use std::fmt;

use crate::context::BrowseContext;
use crate::error::{CoreError, CoreResult};
use crate::page::{normalize_key, KeyPage, Page};

pub const S3_SCHEME: &str = "s3://";

/// A parsed `s3://` URI.
///
/// `s3://bucket`, `s3://bucket/` and `s3://bucket//` all address the bucket root;
/// one trailing `/` on a key is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Uri {
    pub bucket: String,
    pub key: String,
    /// A `/` followed the bucket name, even if the key after it is empty.
    pub has_key_part: bool,
}

impl S3Uri {
    /// Returns `None` unless `raw` is `s3://` followed by a non-empty bucket name.
    pub fn parse(raw: &str) -> Option<Self> {
        let rest = raw.strip_prefix(S3_SCHEME)?;
        let (bucket, key, has_key_part) = match rest.split_once('/') {
            Some((bucket, key)) => (bucket, normalize_key(key), true),
            None => (rest, "", false),
        };
        if bucket.is_empty() {
            return None;
        }
        Some(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
            has_key_part,
        })
    }
}

impl fmt::Display for S3Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "{S3_SCHEME}{}", self.bucket)
        } else {
            write!(f, "{S3_SCHEME}{}/{}", self.bucket, self.key)
        }
    }
}

/// Resolves `raw` straight to the key page it names.
///
/// - `Ok(None)` when `raw` is not an `s3://` URI, so the caller can fall back to
///   name lookup.
/// - With `suppress_access_denied`, an access-denied failure while building the
///   page of an `s3://bucket/...` URI is also `Ok(None)`; the key was a guess and is
///   treated as unknown.
/// - A bare `s3://bucket` names the bucket outright, so access denied is returned
///   like every other failure.
pub async fn resolve_uri(
    ctx: &BrowseContext,
    raw: &str,
    suppress_access_denied: bool,
) -> CoreResult<Option<Page>> {
    let Some(uri) = S3Uri::parse(raw) else {
        return Ok(None);
    };

    match KeyPage::load(ctx, &uri.bucket, &uri.key).await {
        Ok(page) => Ok(Some(Page::Key(page))),
        Err(CoreError::Provider(e))
            if suppress_access_denied && uri.has_key_part && e.is_access_denied() =>
        {
            log::warn!("Access denied while resolving {uri}; treating as no match: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_sample_context, throttled, LIST_OBJECTS};
    use s3_browser_provider::ProviderError;

    fn uri(bucket: &str, key: &str) -> S3Uri {
        S3Uri {
            bucket: bucket.to_string(),
            key: key.to_string(),
            has_key_part: true,
        }
    }

    #[test]
    fn parse_bucket_only() {
        let bare = S3Uri::parse("s3://logs").unwrap();
        assert_eq!(bare.bucket, "logs");
        assert_eq!(bare.key, "");
        assert!(!bare.has_key_part);

        assert_eq!(S3Uri::parse("s3://logs/"), Some(uri("logs", "")));
        assert_eq!(S3Uri::parse("s3://logs//"), Some(uri("logs", "")));
    }

    #[test]
    fn parse_key_strips_one_trailing_slash() {
        assert_eq!(S3Uri::parse("s3://logs/a/b"), Some(uri("logs", "a/b")));
        assert_eq!(S3Uri::parse("s3://logs/a/b/"), Some(uri("logs", "a/b")));
        assert_eq!(S3Uri::parse("s3://logs/a/b//"), Some(uri("logs", "a/b/")));
    }

    #[test]
    fn parse_rejects_other_input() {
        assert_eq!(S3Uri::parse("buckets"), None);
        assert_eq!(S3Uri::parse("s3:/logs"), None);
        assert_eq!(S3Uri::parse("S3://logs"), None);
        assert_eq!(S3Uri::parse("s3://"), None);
        assert_eq!(S3Uri::parse("s3:///key"), None);
        assert_eq!(S3Uri::parse("https://logs.s3.amazonaws.com/a"), None);
    }

    #[test]
    fn display_round_trip() {
        assert_eq!(S3Uri::parse("s3://logs").unwrap().to_string(), "s3://logs");
        assert_eq!(uri("logs", "a/b").to_string(), "s3://logs/a/b");
        assert_eq!(S3Uri::parse(&uri("logs", "a/b").to_string()), Some(uri("logs", "a/b")));
    }

    #[tokio::test]
    async fn resolve_non_uri_is_none() {
        let (ctx, provider) = create_sample_context().await;
        assert!(resolve_uri(&ctx, "buckets", true).await.unwrap().is_none());
        assert!(provider.calls().await.is_empty());
    }

    #[tokio::test]
    async fn resolve_bucket_and_key() {
        let (ctx, _) = create_sample_context().await;

        let root = resolve_uri(&ctx, "s3://logs/", true).await.unwrap().unwrap();
        assert_eq!(root.address().segments(), ["s3", "buckets", "logs"]);

        let key = resolve_uri(&ctx, "s3://logs/2024/01/", true)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            key.address().segments(),
            ["s3", "buckets", "logs", "2024", "01"]
        );
    }

    #[tokio::test]
    async fn trailing_slash_names_same_page() {
        let (ctx, _) = create_sample_context().await;
        let with = resolve_uri(&ctx, "s3://logs/2024/", true).await.unwrap();
        let without = resolve_uri(&ctx, "s3://logs/2024", true).await.unwrap();
        assert_eq!(with, without);
    }

    #[tokio::test]
    async fn access_denied_is_suppressed_for_keyed_uris() {
        let (ctx, _) = create_sample_context().await;

        for raw in ["s3://private/", "s3://private//", "s3://private/x", "s3://private/secret.txt"] {
            assert!(
                resolve_uri(&ctx, raw, true).await.unwrap().is_none(),
                "{raw} should fall through"
            );
        }

        let err = resolve_uri(&ctx, "s3://private/x", false).await.unwrap_err();
        assert!(matches!(err, CoreError::Provider(ref e) if e.is_access_denied()));
    }

    #[tokio::test]
    async fn bare_bucket_uri_reports_access_denied() {
        let (ctx, _) = create_sample_context().await;

        let err = resolve_uri(&ctx, "s3://private", true).await.unwrap_err();
        assert!(matches!(err, CoreError::Provider(ref e) if e.is_access_denied()));
    }

    #[tokio::test]
    async fn other_errors_are_never_suppressed() {
        let (ctx, provider) = create_sample_context().await;

        let err = resolve_uri(&ctx, "s3://ghost", true).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Provider(ProviderError::BucketNotFound { .. })
        ));

        provider.fail(LIST_OBJECTS, throttled()).await;
        let err = resolve_uri(&ctx, "s3://logs", true).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Provider(ProviderError::RateLimited { .. })
        ));
    }
}
