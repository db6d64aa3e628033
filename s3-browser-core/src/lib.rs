//! S3 Browser Core Library
//!
//! Turns an object storage hierarchy into a tree of navigable pages:
//! - Canonical addresses (`AddressPath`) independent of how a page was reached
//! - Uniform listing rows (`Row`) for prefixes and objects alike
//! - Page variants (`Page`) for menus, tables and single-object views
//! - Direct `s3://bucket/key` resolution (`resolver`)
//! - A history-keeping `Navigator` for interactive drivers
//!
//! The storage service is reached only through the `StorageProvider` handle held
//! by `BrowseContext`, which the driver creates and passes into every step.

pub mod address;
pub mod context;
pub mod error;
pub mod navigator;
pub mod page;
pub mod resolver;
pub mod row;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use address::AddressPath;
pub use context::BrowseContext;
pub use error::{CoreError, CoreResult};
pub use navigator::Navigator;
pub use page::{Page, PageKind};
pub use resolver::{resolve_uri, S3Uri};
pub use row::Row;
