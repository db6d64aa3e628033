//! Canonical page addresses

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used when an object key is spread over address segments.
pub const KEY_SEPARATOR: char = '/';

/// Ordered path segments identifying one page.
///
/// Two pages with the same address show the same resource, however the user got
/// there (menu descent, name lookup or a direct `s3://` URI). Empty segments are
/// dropped on insertion; segment contents are stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressPath(Vec<String>);

impl AddressPath {
    /// The empty address (home page).
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = Self::root();
        for segment in segments {
            path.push(segment);
        }
        path
    }

    /// Appends one segment, ignoring empty strings.
    pub fn push(&mut self, segment: impl Into<String>) {
        let segment = segment.into();
        if !segment.is_empty() {
            self.0.push(segment);
        }
    }

    /// Returns a copy with `segment` appended.
    #[must_use]
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    /// Returns a copy with every `/`-separated component of `key` appended.
    #[must_use]
    pub fn join_key(&self, key: &str) -> Self {
        let mut path = self.clone();
        for part in key.split(KEY_SEPARATOR) {
            path.push(part);
        }
        path
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

/// Segments joined by single spaces, the form accepted on the command line.
impl fmt::Display for AddressPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for AddressPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}
