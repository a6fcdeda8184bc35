//! Directory entries and per-file metadata as returned by the storage backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::FetchError;

// =============================================================================
// Directory Entry
// =============================================================================

/// One row of a directory listing.
///
/// Entries are immutable snapshots; a listing is always replaced as a whole.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// File or directory name (last path segment).
    pub name: String,
    /// Virtual path relative to the space root, slash separated.
    pub path: String,
    #[serde(default)]
    pub is_dir: bool,
    /// Backend classification; only image entries can be previewed.
    #[serde(default)]
    pub is_image: bool,
    /// Any further fields the backend sends (size, dates, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DirectoryEntry {
    /// Create a plain file entry.
    #[cfg(test)]
    pub fn file(path: &str) -> Self {
        Self::with_kind(path, false, false)
    }

    /// Create an image file entry.
    #[cfg(test)]
    pub fn image(path: &str) -> Self {
        Self::with_kind(path, false, true)
    }

    /// Create a directory entry.
    #[cfg(test)]
    pub fn dir(path: &str) -> Self {
        Self::with_kind(path, true, false)
    }

    #[cfg(test)]
    fn with_kind(path: &str, is_dir: bool, is_image: bool) -> Self {
        Self {
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            path: path.to_string(),
            is_dir,
            is_image,
            extra: Map::new(),
        }
    }
}

// =============================================================================
// Metadata Record
// =============================================================================

/// Opaque key/value metadata fetched for a single file.
///
/// Values are flattened to display strings; `null` values are kept as `None`
/// so the sidebar can still show the key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataRecord {
    fields: BTreeMap<String, Option<String>>,
}

impl MetadataRecord {
    /// Parse a metadata response body. The body must be a JSON object.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(FetchError::Malformed(
                "metadata response is not an object".to_string(),
            ));
        };

        let fields = map
            .into_iter()
            .map(|(key, value)| (key, display_value(value)))
            .collect();
        Ok(Self { fields })
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

fn display_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_deserialize_keeps_extra_fields() {
        let json = r#"{"name":"a.png","path":"pics/a.png","is_dir":false,"is_image":true,"size":42}"#;
        let entry: DirectoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.name, "a.png");
        assert_eq!(entry.path, "pics/a.png");
        assert!(entry.is_image);
        assert!(!entry.is_dir);
        assert_eq!(entry.extra.get("size"), Some(&Value::from(42)));
    }

    #[test]
    fn test_entry_flags_default_to_false() {
        let entry: DirectoryEntry = serde_json::from_str(r#"{"name":"x","path":"x"}"#).unwrap();
        assert!(!entry.is_dir);
        assert!(!entry.is_image);
    }

    #[test]
    fn test_metadata_from_object() {
        let record = MetadataRecord::from_json(
            r#"{"filename":"a.jpg","filesize":2048,"ISO":null,"Camera":"X100V"}"#,
        )
        .unwrap();

        assert!(!record.is_empty());
        assert_eq!(record.get("filename"), Some("a.jpg"));
        assert_eq!(record.get("filesize"), Some("2048"));
        assert_eq!(record.get("ISO"), None);
        assert_eq!(record.get("Camera"), Some("X100V"));

        let keys: Vec<_> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Camera", "ISO", "filename", "filesize"]);

        assert!(MetadataRecord::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_metadata_rejects_non_object() {
        assert!(matches!(
            MetadataRecord::from_json("[1,2]"),
            Err(FetchError::Malformed(_))
        ));
        assert!(matches!(
            MetadataRecord::from_json("<html>"),
            Err(FetchError::Malformed(_))
        ));
    }
}
