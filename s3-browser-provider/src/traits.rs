use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{BucketSummary, BucketVersioning, ObjectListing, ObjectMetadata};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 服务端错误码（如 `NoSuchKey`），HEAD 请求没有响应体时为空
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
    /// HTTP 状态码（错误码缺失时用于兜底映射）
    pub status: Option<u16>,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            status: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时补全资源信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 请求针对的 bucket
    pub bucket: Option<String>,
    /// 请求针对的 object key（`HeadObject` 等）
    pub key: Option<String>,
}

impl ErrorContext {
    pub fn bucket(bucket: &str) -> Self {
        Self {
            bucket: Some(bucket.to_string()),
            key: None,
        }
    }

    pub fn object(bucket: &str, key: &str) -> Self {
        Self {
            bucket: Some(bucket.to_string()),
            key: Some(key.to_string()),
        }
    }

    /// `bucket` 或 `bucket/key`，用于错误展示
    pub fn resource(&self) -> Option<String> {
        match (&self.bucket, &self.key) {
            (Some(bucket), Some(key)) => Some(format!("{bucket}/{key}")),
            (Some(bucket), None) => Some(bucket.clone()),
            _ => None,
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：网络错误
    fn network_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::NetworkError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// 对象存储 Provider Trait
///
/// 只读：每个方法对应一次服务调用，不做重试、缓存或分页续取。
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 列出调用方可见的全部 bucket
    async fn list_buckets(&self) -> Result<Vec<BucketSummary>>;

    /// 按前缀列出对象
    ///
    /// `delimiter` 非空时，前缀之后、第一个分隔符之前相同的 key 会被归并到
    /// `common_prefixes`，其余对象进入 `entries`。只发出一次请求；结果被截断时
    /// 通过 `is_truncated` 报告。
    async fn list_objects_by_prefix(
        &self,
        bucket: &str,
        prefix: &str,
        delimiter: &str,
    ) -> Result<ObjectListing>;

    /// 获取对象元数据
    ///
    /// key 上没有对象时返回 [`ProviderError::ObjectNotFound`]。
    async fn get_object_metadata(&self, bucket: &str, key: &str) -> Result<ObjectMetadata>;

    /// 获取 bucket 版本控制配置
    async fn get_bucket_versioning(&self, bucket: &str) -> Result<BucketVersioning>;

    /// 获取 bucket 策略（JSON 文档原文）
    ///
    /// 未设置策略时返回 [`ProviderError::BucketPolicyNotFound`]。
    async fn get_bucket_policy(&self, bucket: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_context_resource() {
        assert_eq!(ErrorContext::default().resource(), None);
        assert_eq!(
            ErrorContext::bucket("logs").resource().as_deref(),
            Some("logs")
        );
        assert_eq!(
            ErrorContext::object("logs", "a/b.txt").resource().as_deref(),
            Some("logs/a/b.txt")
        );
    }

    #[test]
    fn raw_api_error_builders() {
        let raw = RawApiError::new("boom").with_status(503);
        assert_eq!(raw.code, None);
        assert_eq!(raw.status, Some(503));

        let raw = RawApiError::with_code("NoSuchKey", "gone");
        assert_eq!(raw.code.as_deref(), Some("NoSuchKey"));
        assert_eq!(raw.message, "gone");
        assert_eq!(raw.status, None);
    }
}
