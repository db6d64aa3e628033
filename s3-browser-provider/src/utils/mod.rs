//! Utility modules.

/// Timestamp serialization and conversion helpers.
pub mod datetime;
