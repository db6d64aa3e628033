//! AWS S3 error mapping

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::AwsS3Provider;

/// HEAD 请求没有响应体，只能从状态码推断错误码
fn code_from_status(status: u16) -> Option<&'static str> {
    match status {
        403 => Some("AccessDenied"),
        404 => Some("NotFound"),
        503 => Some("SlowDown"),
        _ => None,
    }
}

/// S3 error code mapping
/// Reference: <https://docs.aws.amazon.com/AmazonS3/latest/API/ErrorResponses.html#ErrorCodeList>
impl ProviderErrorMapper for AwsS3Provider {
    fn provider_name(&self) -> &'static str {
        "s3"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let code = raw
            .code
            .clone()
            .or_else(|| raw.status.and_then(code_from_status).map(str::to_string));

        match code.as_deref() {
            Some("AccessDenied" | "AllAccessDisabled" | "AccountProblem") => {
                ProviderError::AccessDenied {
                    provider: self.provider_name().to_string(),
                    resource: context.resource(),
                    raw_message: Some(raw.message),
                }
            }

            // NotFound 是 HEAD 请求的 404，有 key 时视为对象不存在
            Some("NoSuchKey" | "NotFound") if context.key.is_some() => {
                ProviderError::ObjectNotFound {
                    provider: self.provider_name().to_string(),
                    bucket: context.bucket.unwrap_or_else(|| "<unknown>".to_string()),
                    key: context.key.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }

            Some("NoSuchBucket" | "NotFound") => ProviderError::BucketNotFound {
                provider: self.provider_name().to_string(),
                bucket: context.bucket.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            Some("NoSuchBucketPolicy") => ProviderError::BucketPolicyNotFound {
                provider: self.provider_name().to_string(),
                bucket: context.bucket.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            Some(
                "SlowDown"
                | "Throttling"
                | "ThrottlingException"
                | "RequestLimitExceeded"
                | "TooManyRequests"
                | "ServiceUnavailable",
            ) => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            Some(
                "InvalidAccessKeyId"
                | "SignatureDoesNotMatch"
                | "ExpiredToken"
                | "InvalidToken"
                | "TokenRefreshRequired",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some(code @ ("InvalidBucketName" | "InvalidArgument" | "KeyTooLongError")) => {
                let param = match code {
                    "InvalidBucketName" => "bucket",
                    "KeyTooLongError" => "key",
                    _ => "general",
                };
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: param.to_string(),
                    detail: raw.message,
                }
            }

            Some("RequestTimeout") => ProviderError::Timeout {
                provider: self.provider_name().to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}

impl AwsS3Provider {
    /// 将 SDK 错误转换为统一错误类型
    pub(crate) fn map_sdk_error<E>(&self, err: &SdkError<E>, context: ErrorContext) -> ProviderError
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
    {
        match err {
            SdkError::TimeoutError(_) => ProviderError::Timeout {
                provider: self.provider_name().to_string(),
                detail: DisplayErrorContext(err).to_string(),
            },
            SdkError::DispatchFailure(failure) if failure.is_timeout() => ProviderError::Timeout {
                provider: self.provider_name().to_string(),
                detail: DisplayErrorContext(err).to_string(),
            },
            SdkError::DispatchFailure(_) => self.network_error(DisplayErrorContext(err)),
            SdkError::ResponseError(_) => self.parse_error(DisplayErrorContext(err)),
            SdkError::ConstructionFailure(_) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "request".to_string(),
                detail: DisplayErrorContext(err).to_string(),
            },
            SdkError::ServiceError(service) => {
                let status = service.raw().status().as_u16();
                let meta = service.err();
                let message = meta
                    .message()
                    .map_or_else(|| format!("HTTP {status}"), str::to_string);
                let raw = match meta.code() {
                    Some(code) => RawApiError::with_code(code, message),
                    None => RawApiError::new(message),
                }
                .with_status(status);

                log::debug!(
                    "S3 service error: status={status}, code={:?}, resource={:?}",
                    raw.code,
                    context.resource()
                );
                self.map_error(raw, context)
            }
            _ => self.unknown_error(RawApiError::new(DisplayErrorContext(err).to_string())),
        }
    }
}
