//! Committed listing state: current path, entries, and breadcrumb trail.

use crate::core::path::breadcrumbs_of;

use super::DirectoryEntry;

/// One clickable segment of the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The displayed directory.
///
/// Always constructed whole: `breadcrumbs` is derived from `current_path`
/// at construction time and the fields are never patched individually.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    current_path: String,
    items: Vec<DirectoryEntry>,
    breadcrumbs: Vec<Breadcrumb>,
}

impl ViewState {
    /// Build a view for `path` holding `items` in backend order.
    pub fn new(path: impl Into<String>, items: Vec<DirectoryEntry>) -> Self {
        let current_path = path.into();
        let breadcrumbs = breadcrumbs_of(&current_path);
        Self {
            current_path,
            items,
            breadcrumbs,
        }
    }

    /// Empty view at the space root, used before the first listing commits.
    pub fn root() -> Self {
        Self::new(String::new(), Vec::new())
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn items(&self) -> &[DirectoryEntry] {
        &self.items
    }

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    /// Check whether an entry with this path is part of the listing.
    pub fn contains(&self, path: &str) -> bool {
        self.items.iter().any(|e| e.path == path)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::root()
    }
}
