//! Row key normalization.
//!
//! Row identifiers arrive as strings, integers or anything else with a textual
//! form. They are looked up by their lowercase string representation.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A normalized row key.
///
/// Always lowercase, always a string even when the source identifier was numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowKey(String);

impl RowKey {
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Normalizes any displayable row identifier into a [`RowKey`].
///
/// # Example
///
/// ```
/// use rowfilter_rs::normalize_key;
///
/// assert_eq!(normalize_key("1111-2222-aaaa-BBBB"), "1111-2222-aaaa-bbbb");
/// assert_eq!(normalize_key(1234), "1234");
/// ```
pub fn normalize_key<T: fmt::Display>(identifier: T) -> RowKey {
    RowKey(identifier.to_string().to_lowercase())
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for RowKey {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RowKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RowKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        normalize_key(value)
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        normalize_key(value)
    }
}

impl From<RowKey> for String {
    fn from(key: RowKey) -> Self {
        key.0
    }
}

impl PartialEq<str> for RowKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RowKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for RowKey {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}
