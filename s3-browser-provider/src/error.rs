use serde::{Deserialize, Serialize};

/// Unified error type for all storage provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Soft Conditions
///
/// The page layer recovers some variants locally instead of failing:
/// - [`ObjectNotFound`](Self::ObjectNotFound): a key has no object behind it
/// - [`BucketPolicyNotFound`](Self::BucketPolicyNotFound): a bucket carries no policy
/// - [`AccessDenied`](Self::AccessDenied): only while resolving a guessed `s3://` address
///
/// Nothing in this crate retries. Transient variants (`NetworkError`, `Timeout`,
/// `RateLimited`) are reported as-is and the caller decides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The request timed out before a response arrived.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The credentials are invalid, expired or could not be resolved.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The caller is not allowed to read the resource.
    AccessDenied {
        /// Provider that produced the error.
        provider: String,
        /// Bucket or `bucket/key` the request targeted, if known.
        resource: Option<String>,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The bucket does not exist.
    BucketNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Bucket name.
        bucket: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// No object is stored at the exact key.
    ObjectNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Bucket name.
        bucket: String,
        /// Object key.
        key: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The bucket exists but has no policy attached.
    BucketPolicyNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Bucket name.
        bucket: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The service is throttling requests (`SlowDown`, HTTP 503 or equivalent).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if the service provided one.
        retry_after: Option<u64>,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected (bad bucket name, key too long, etc.).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the service response (including embedded documents such as policies).
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the service.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the service, if available.
        raw_code: Option<String>,
        /// Raw error message from the service.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（资源不存在、无权限、凭证问题等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::AccessDenied { .. }
                | Self::BucketNotFound { .. }
                | Self::ObjectNotFound { .. }
                | Self::BucketPolicyNotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Whether the error is a permission refusal.
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::AccessDenied {
                provider,
                resource,
                raw_message,
            } => {
                match resource {
                    Some(resource) => write!(f, "[{provider}] Access denied to '{resource}'")?,
                    None => write!(f, "[{provider}] Access denied")?,
                }
                if let Some(msg) = raw_message {
                    write!(f, ": {msg}")?;
                }
                Ok(())
            }
            Self::BucketNotFound {
                provider, bucket, ..
            } => {
                write!(f, "[{provider}] Bucket '{bucket}' not found")
            }
            Self::ObjectNotFound {
                provider,
                bucket,
                key,
                ..
            } => {
                write!(f, "[{provider}] Object 's3://{bucket}/{key}' not found")
            }
            Self::BucketPolicyNotFound {
                provider, bucket, ..
            } => {
                write!(f, "[{provider}] Bucket '{bucket}' has no policy")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{provider}] {code}: {raw_message}")
                } else {
                    write!(f, "[{provider}] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
