//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`FileList`] - List of the current directory's entries
//! - [`ContextMenu`] - Per-entry actions anchored at the pointer
//! - [`PreviewModal`] - Full image preview
//! - [`Sidebar`] - File metadata panel
//! - [`NoticeToast`] - Transient success/error messages

mod context_menu;
#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod notice;
mod pathbar;
mod preview;
mod sidebar;

pub use context_menu::ContextMenu;
pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Header;
pub use notice::NoticeToast;
pub use pathbar::PathBar;
pub use preview::PreviewModal;
pub use sidebar::Sidebar;
