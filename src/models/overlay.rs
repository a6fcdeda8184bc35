//! Payloads carried by the explorer overlays.

use super::{DirectoryEntry, MetadataRecord};

/// Pointer coordinates (client pixels) where a menu is anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An open context menu: the targeted entry and its anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextMenu {
    pub entry: DirectoryEntry,
    pub position: Position,
}

/// An open metadata sidebar with the record fetched for its entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Sidebar {
    pub entry: DirectoryEntry,
    pub metadata: MetadataRecord,
}
