//! Uniform listing rows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use s3_browser_provider::datetime;

/// One entry of a menu or table page.
///
/// `name` is always relative to the page that produced the row. A row with only a
/// name is a grouping (menu entry, bucket, common prefix); object rows carry the
/// listing columns as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub name: String,
    #[serde(default, with = "datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
}

impl Row {
    /// A name-only row.
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modified_at: None,
            size: None,
            storage_class: None,
        }
    }

    /// A concrete object row.
    pub fn object(
        name: impl Into<String>,
        modified_at: Option<DateTime<Utc>>,
        size: u64,
        storage_class: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            modified_at,
            size: Some(size),
            storage_class,
        }
    }

    pub fn is_group(&self) -> bool {
        self.modified_at.is_none() && self.size.is_none() && self.storage_class.is_none()
    }

    /// Display columns: name, modified, size, class. Missing values render empty.
    pub fn columns(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.modified_at
                .as_ref()
                .map(datetime::to_rfc3339)
                .unwrap_or_default(),
            self.size.map(|s| s.to_string()).unwrap_or_default(),
            self.storage_class.clone().unwrap_or_default(),
        ]
    }
}
