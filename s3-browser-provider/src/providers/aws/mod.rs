//! AWS S3 (and S3-compatible) Provider

mod error;
mod provider;

use aws_sdk_s3::Client;

use crate::types::ProviderConfig;

/// AWS S3 Provider
///
/// 持有一个 SDK client；client 内部自带连接池，可被多个任务共享。
pub struct AwsS3Provider {
    pub(crate) client: Client,
}

impl AwsS3Provider {
    /// 使用已构建的 client 创建
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// 从共享 AWS 配置加载（环境变量、`~/.aws`、实例角色等），再叠加 `config` 中的覆盖项
    pub async fn from_config(config: &ProviderConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        log::debug!(
            "S3 client configured: region={:?}, endpoint={:?}, path_style={}",
            sdk_config.region(),
            config.endpoint_url,
            config.force_path_style
        );

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.force_path_style)
            .build();

        Self::new(Client::from_conf(s3_config))
    }
}
