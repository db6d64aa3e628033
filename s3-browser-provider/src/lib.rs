//! # s3-browser-provider
//!
//! A read-only abstraction over an object storage service, shaped for
//! interactive browsing: bucket enumeration, delimited prefix listings,
//! object metadata and bucket-level settings.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Amazon S3](https://aws.amazon.com/s3/) and S3-compatible services | `aws` | AWS credential chain (SigV4) |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use s3_browser_provider::{create_provider, ProviderConfig, StorageProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderConfig::default()).await?;
//!
//!     for bucket in provider.list_buckets().await? {
//!         println!("{}", bucket.name);
//!     }
//!
//!     let listing = provider
//!         .list_objects_by_prefix("my-bucket", "logs/", "/")
//!         .await?;
//!     for prefix in &listing.common_prefixes {
//!         println!("{prefix}");
//!     }
//!     for entry in &listing.entries {
//!         println!("{} {}", entry.key, entry.size);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Service error codes are mapped onto structured variants:
//!
//! - [`ProviderError::ObjectNotFound`]: no object at the exact key
//! - [`ProviderError::BucketPolicyNotFound`]: the bucket has no policy
//! - [`ProviderError::AccessDenied`]: the caller may not read the resource
//! - [`ProviderError::RateLimited`]: the service asked the client to slow down
//!
//! Nothing is retried; see [`ProviderError`] for the full list.

mod error;
#[cfg(feature = "aws")]
mod factory;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
#[cfg(feature = "aws")]
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::StorageProvider;

// Re-export types
pub use types::{
    BucketSummary, BucketVersioning, ListedObject, ObjectListing, ObjectMetadata, ProviderConfig,
};

// Re-export utils module
pub use utils::datetime;

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "aws")]
pub use providers::AwsS3Provider;
