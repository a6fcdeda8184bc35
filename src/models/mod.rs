//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DirectoryEntry`], [`MetadataRecord`] - Backend listing and metadata payloads
//! - [`ViewState`], [`Breadcrumb`] - The committed directory view
//! - [`ContextMenu`], [`Sidebar`], [`Position`] - Overlay payloads
//! - [`Notice`] - User-visible notifications

mod entry;
mod notice;
mod overlay;
mod view;

pub use entry::{DirectoryEntry, MetadataRecord};
pub use notice::{Notice, NoticeLevel};
pub use overlay::{ContextMenu, Position, Sidebar};
pub use view::{Breadcrumb, ViewState};
