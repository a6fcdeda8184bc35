//! Overlay state machine for the context menu, preview modal, and metadata sidebar.
//!
//! The context menu is the weakest overlay: document clicks and scrolling
//! dismiss it, and it is always closed before the modal or sidebar opens.
//! The modal and sidebar only close through their explicit close actions,
//! or when their target entry disappears from the listing.

use crate::models::{ContextMenu, DirectoryEntry, MetadataRecord, Position, Sidebar, ViewState};

use super::error::FetchError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayState {
    context_menu: Option<ContextMenu>,
    preview: Option<DirectoryEntry>,
    sidebar: Option<Sidebar>,
    /// Path of the entry whose metadata request is in flight.
    pending_metadata: Option<String>,
}

impl OverlayState {
    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    /// The entry targeted by the open context menu (the selection context).
    pub fn active_entry(&self) -> Option<&DirectoryEntry> {
        self.context_menu.as_ref().map(|m| &m.entry)
    }

    pub fn preview(&self) -> Option<&DirectoryEntry> {
        self.preview.as_ref()
    }

    pub fn sidebar(&self) -> Option<&Sidebar> {
        self.sidebar.as_ref()
    }

    pub fn is_context_menu_open(&self) -> bool {
        self.context_menu.is_some()
    }

    #[cfg(test)]
    pub fn is_preview_open(&self) -> bool {
        self.preview.is_some()
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar.is_some()
    }

    pub fn is_loading_metadata(&self) -> bool {
        self.pending_metadata.is_some()
    }

    // =========================================================================
    // Context menu
    // =========================================================================

    /// Show the menu for `entry` at `position`, replacing any open menu.
    pub fn open_context_menu(&mut self, entry: DirectoryEntry, position: Position) {
        self.context_menu = Some(ContextMenu { entry, position });
    }

    /// Close the menu and hand back the entry it targeted. Idempotent.
    pub fn close_context_menu(&mut self) -> Option<DirectoryEntry> {
        self.context_menu.take().map(|m| m.entry)
    }

    // =========================================================================
    // Preview modal
    // =========================================================================

    /// Open the preview modal. Non-image entries are ignored.
    ///
    /// Returns whether the modal opened.
    pub fn open_preview(&mut self, entry: DirectoryEntry) -> bool {
        if !entry.is_image {
            return false;
        }
        self.context_menu = None;
        self.preview = Some(entry);
        true
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    // =========================================================================
    // Metadata sidebar
    // =========================================================================

    /// Record that metadata for `entry` was requested.
    ///
    /// Returns the path to fetch. A later call supersedes an earlier one.
    pub fn begin_metadata(&mut self, entry: &DirectoryEntry) -> String {
        self.context_menu = None;
        self.pending_metadata = Some(entry.path.clone());
        entry.path.clone()
    }

    /// Apply the metadata response for `entry`.
    ///
    /// A response for anything but the latest request is dropped and yields
    /// `Ok(false)`. Errors close the sidebar instead of showing a partial one.
    pub fn finish_metadata(
        &mut self,
        entry: DirectoryEntry,
        result: Result<MetadataRecord, FetchError>,
    ) -> Result<bool, FetchError> {
        if self.pending_metadata.as_deref() != Some(entry.path.as_str()) {
            return Ok(false);
        }
        self.pending_metadata = None;

        match result {
            Ok(metadata) => {
                self.sidebar = Some(Sidebar { entry, metadata });
                Ok(true)
            }
            Err(e) => {
                self.sidebar = None;
                Err(e)
            }
        }
    }

    /// Hide the sidebar and discard its record.
    pub fn close_sidebar(&mut self) {
        self.sidebar = None;
        self.pending_metadata = None;
    }

    // =========================================================================
    // Stale-reference avoidance
    // =========================================================================

    /// Close every overlay that targets `path`.
    pub fn forget(&mut self, path: &str) {
        self.retain(|p| p != path);
    }

    /// Close every overlay whose entry is not part of `view`.
    pub fn retain_listed(&mut self, view: &ViewState) {
        self.retain(|p| view.contains(p));
    }

    fn retain(&mut self, keep: impl Fn(&str) -> bool) {
        if self.context_menu.as_ref().is_some_and(|m| !keep(&m.entry.path)) {
            self.context_menu = None;
        }
        if self.preview.as_ref().is_some_and(|e| !keep(&e.path)) {
            self.preview = None;
        }
        if self.sidebar.as_ref().is_some_and(|s| !keep(&s.entry.path)) {
            self.sidebar = None;
        }
        if self.pending_metadata.as_deref().is_some_and(|p| !keep(p)) {
            self.pending_metadata = None;
        }
    }
}
