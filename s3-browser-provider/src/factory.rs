//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::StorageProvider;
use crate::types::ProviderConfig;

#[cfg(feature = "aws")]
use crate::providers::AwsS3Provider;

/// Creates a [`StorageProvider`] from the given configuration.
///
/// Credentials are resolved through the standard AWS chain (environment variables,
/// shared config/credentials files, SSO, instance/container roles). The returned
/// provider is wrapped in `Arc<dyn StorageProvider>` so it can be shared by the
/// pages that need it.
///
/// # Examples
///
/// ```rust,no_run
/// use s3_browser_provider::{create_provider, ProviderConfig, StorageProvider};
///
/// # async fn example() -> s3_browser_provider::Result<()> {
/// let provider = create_provider(ProviderConfig {
///     region: Some("eu-west-1".to_string()),
///     ..Default::default()
/// })
/// .await?;
/// let buckets = provider.list_buckets().await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "aws")]
pub async fn create_provider(config: ProviderConfig) -> Result<Arc<dyn StorageProvider>> {
    let provider = AwsS3Provider::from_config(&config).await;
    log::info!("Storage provider '{}' created", provider.id());
    Ok(Arc::new(provider))
}
