//! Root controller.
//!
//! [`Explorer`] pairs a state store with a storage backend and routes user
//! intents to the listing fetcher, the overlay state machine, and the
//! mutation coordinator. Failures are turned into notices here, at the call
//! site that issued the request.

use super::api::{Endpoints, StorageApi};
use super::error::{ErrorKind, FetchError, MutationError};
use super::listing::{self, LoadOutcome};
use super::mutation::{self, DeleteOutcome};
use super::state::StateStore;
use crate::models::{DirectoryEntry, MetadataRecord, NoticeLevel, Position};

/// What activating an entry should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Open the directory at this path.
    Navigate(String),
    /// Open this download URL.
    Download(String),
}

/// Notice text for a failed request. Connectivity failures get a retry hint.
fn failure_message(action: &str, e: &FetchError) -> String {
    match e.kind() {
        ErrorKind::Network => format!("{action}: {e}. Check your connection and try again."),
        ErrorKind::Server | ErrorKind::MalformedResponse => format!("{action}: {e}"),
    }
}

#[derive(Clone)]
pub struct Explorer<S, A> {
    store: S,
    api: A,
}

impl<S, A> Explorer<S, A>
where
    S: StateStore,
    A: StorageApi,
{
    pub fn new(store: S, api: A) -> Self {
        Self { store, api }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn endpoints(&self) -> &Endpoints {
        self.api.endpoints()
    }

    fn notify(&self, level: NoticeLevel, message: String) {
        self.store.update_state(|s| s.notify(level, message));
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Load the space root.
    pub async fn mount(&self) {
        self.navigate("").await;
    }

    /// Show the directory at `path`.
    ///
    /// A failed load keeps the previous listing and posts an error notice.
    pub async fn navigate(&self, path: &str) {
        match listing::load(&self.store, &self.api, path).await {
            Ok(LoadOutcome::Committed | LoadOutcome::Superseded) => {}
            Err(e) => {
                log::warn!("listing {path:?} failed: {e}");
                self.notify(NoticeLevel::Error, failure_message("Could not open folder", &e));
            }
        }
    }

    /// Directories navigate; everything else downloads.
    pub fn activate(&self, entry: &DirectoryEntry) -> Activation {
        if entry.is_dir {
            Activation::Navigate(entry.path.clone())
        } else {
            Activation::Download(self.endpoints().download(&entry.path))
        }
    }

    // =========================================================================
    // Overlays
    // =========================================================================

    pub fn open_context_menu(&self, entry: DirectoryEntry, position: Position) {
        self.store
            .update_state(|s| s.overlay.open_context_menu(entry, position));
    }

    /// Close the menu, returning the entry it targeted.
    pub fn close_context_menu(&self) -> Option<DirectoryEntry> {
        self.store
            .update_state(|s| s.overlay.close_context_menu())
            .flatten()
    }

    /// Close the menu only if open, so idle clicks and scrolls do not
    /// notify subscribers.
    pub fn dismiss_context_menu(&self) {
        let open = self
            .store
            .with_state(|s| s.overlay.is_context_menu_open())
            .unwrap_or(false);
        if open {
            self.close_context_menu();
        }
    }

    pub fn open_preview(&self, entry: DirectoryEntry) -> bool {
        self.store
            .update_state(|s| s.overlay.open_preview(entry))
            .unwrap_or(false)
    }

    pub fn close_preview(&self) {
        self.store.update_state(|s| s.overlay.close_preview());
    }

    /// Fetch metadata for `entry` and show it in the sidebar.
    ///
    /// On failure the sidebar stays closed and an error notice is posted.
    pub async fn show_details(&self, entry: DirectoryEntry) {
        let Some(path) = self.store.update_state(|s| s.overlay.begin_metadata(&entry)) else {
            return;
        };

        let result = match self.api.metadata(&path).await {
            Ok(body) => MetadataRecord::from_json(&body),
            Err(e) => Err(e),
        };

        let applied = self
            .store
            .update_state(|s| s.overlay.finish_metadata(entry, result));
        if let Some(Err(e)) = applied {
            log::warn!("metadata for {path:?} failed: {e}");
            self.notify(
                NoticeLevel::Error,
                failure_message("Could not load file details", &e),
            );
        }
    }

    pub fn close_sidebar(&self) {
        self.store.update_state(|s| s.overlay.close_sidebar());
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.store.update_state(|s| s.dismiss_notice(id));
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Upload `file` into the current directory.
    pub async fn upload(&self, file: A::Upload) {
        match mutation::upload(&self.store, &self.api, file).await {
            Ok(target) => {
                log::info!("upload into {target:?} finished");
                self.notify(NoticeLevel::Info, "Upload complete".to_string());
            }
            Err(MutationError::Busy) => {
                log::debug!("upload ignored: another upload is in flight");
            }
            Err(MutationError::Refresh(e)) => {
                log::warn!("upload finished but reload failed: {e}");
                self.notify(
                    NoticeLevel::Error,
                    failure_message("Uploaded, but the folder could not be refreshed", &e),
                );
            }
            Err(MutationError::Fetch(e)) => {
                log::warn!("upload failed: {e}");
                self.notify(NoticeLevel::Error, failure_message("Upload failed", &e));
            }
            Err(e) => {
                log::warn!("upload failed: {e}");
                self.notify(NoticeLevel::Error, format!("Upload failed: {e}"));
            }
        }
    }

    /// Delete `entry` once `confirm` approves it.
    pub async fn delete(
        &self,
        entry: DirectoryEntry,
        confirm: impl FnOnce(&DirectoryEntry) -> bool,
    ) {
        match mutation::delete_entry(&self.store, &self.api, &entry, confirm).await {
            Ok(DeleteOutcome::Deleted) => {
                log::info!("deleted {:?}", entry.path);
                self.notify(NoticeLevel::Info, format!("Deleted {}", entry.name));
            }
            Ok(DeleteOutcome::Cancelled) => {}
            Err(MutationError::Refresh(e)) => {
                log::warn!("deleted {:?} but reload failed: {e}", entry.path);
                let action = format!(
                    "Deleted {}, but the folder could not be refreshed",
                    entry.name
                );
                self.notify(NoticeLevel::Error, failure_message(&action, &e));
            }
            Err(MutationError::Fetch(e)) => {
                log::warn!("delete of {:?} failed: {e}", entry.path);
                self.notify(NoticeLevel::Error, failure_message("Delete failed", &e));
            }
            Err(e) => {
                log::warn!("delete of {:?} failed: {e}", entry.path);
                self.notify(NoticeLevel::Error, format!("Delete failed: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::listing::tests::{MockApi, store_with};
    use crate::core::mutation::Capabilities;

    const BOTH: Capabilities = Capabilities {
        allow_upload: true,
        allow_delete: true,
    };

    #[test]
    fn test_activate_routes_by_kind() {
        let explorer = Explorer::new(store_with(BOTH), MockApi::new());

        assert_eq!(
            explorer.activate(&DirectoryEntry::dir("trips/2024")),
            Activation::Navigate("trips/2024".into())
        );
        assert_eq!(
            explorer.activate(&DirectoryEntry::file("trips/a b.nef")),
            Activation::Download("/test/api/download?path=trips%2Fa%20b.nef".into())
        );
    }

    #[tokio::test]
    async fn test_mount_loads_root() {
        let api = MockApi::new().with_listing("", &[DirectoryEntry::dir("pics")]);
        let explorer = Explorer::new(store_with(BOTH), api);

        explorer.mount().await;

        let state = explorer.store().borrow();
        assert_eq!(state.view().current_path(), "");
        assert_eq!(state.view().items().len(), 1);
        assert!(state.notice().is_none());
    }

    #[tokio::test]
    async fn test_navigation_failure_posts_notice() {
        let api = MockApi::new().with_listing("", &[DirectoryEntry::dir("pics")]);
        let explorer = Explorer::new(store_with(BOTH), api);
        explorer.mount().await;

        explorer.navigate("pics").await;

        let state = explorer.store().borrow();
        assert_eq!(state.view().current_path(), "");
        assert!(state.notice().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_navigation_clears_overlays() {
        let image = DirectoryEntry::image("a.jpg");
        let api = MockApi::new()
            .with_listing("", &[image.clone(), DirectoryEntry::dir("sub")])
            .with_listing("sub", &[]);
        api.metadata
            .borrow_mut()
            .insert("a.jpg".into(), Ok(r#"{"filename":"a.jpg"}"#.into()));
        let explorer = Explorer::new(store_with(BOTH), api);
        explorer.mount().await;
        explorer.open_preview(image.clone());
        explorer.show_details(image).await;

        explorer.navigate("sub").await;

        let state = explorer.store().borrow();
        assert!(!state.overlay.is_preview_open());
        assert!(!state.overlay.is_sidebar_open());
    }

    #[tokio::test]
    async fn test_show_details_success_and_failure() {
        let image = DirectoryEntry::image("a.jpg");
        let api = MockApi::new().with_listing("", &[image.clone()]);
        api.metadata
            .borrow_mut()
            .insert("a.jpg".into(), Ok(r#"{"filename":"a.jpg","filesize":10}"#.into()));
        api.metadata
            .borrow_mut()
            .insert("b.jpg".into(), Err(FetchError::Server(500)));
        let explorer = Explorer::new(store_with(BOTH), api);
        explorer.mount().await;

        explorer.open_context_menu(image.clone(), Position::new(1, 2));
        explorer.show_details(image).await;
        {
            let state = explorer.store().borrow();
            assert!(!state.overlay.is_context_menu_open());
            let sidebar = state.overlay.sidebar().unwrap();
            assert_eq!(sidebar.metadata.get("filesize"), Some("10"));
        }

        explorer.close_sidebar();
        explorer.show_details(DirectoryEntry::image("b.jpg")).await;
        let state = explorer.store().borrow();
        assert!(!state.overlay.is_sidebar_open());
        assert!(state.notice().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_malformed_metadata_leaves_sidebar_closed() {
        let image = DirectoryEntry::image("a.jpg");
        let api = MockApi::new();
        api.metadata
            .borrow_mut()
            .insert("a.jpg".into(), Ok("[]".into()));
        let explorer = Explorer::new(store_with(BOTH), api);

        explorer.show_details(image).await;

        let state = explorer.store().borrow();
        assert!(!state.overlay.is_sidebar_open());
        assert!(state.notice().unwrap().message.contains("malformed"));
    }

    #[tokio::test]
    async fn test_dismissal_keeps_modal_and_sidebar() {
        let image = DirectoryEntry::image("a.jpg");
        let api = MockApi::new().with_listing("", &[image.clone()]);
        api.metadata
            .borrow_mut()
            .insert("a.jpg".into(), Ok("{}".into()));
        let explorer = Explorer::new(store_with(BOTH), api);
        explorer.mount().await;
        explorer.open_preview(image.clone());
        explorer.show_details(image.clone()).await;
        explorer.open_context_menu(image, Position::new(9, 9));

        // Document click or window scroll
        explorer.dismiss_context_menu();
        explorer.dismiss_context_menu();

        let state = explorer.store().borrow();
        assert!(!state.overlay.is_context_menu_open());
        assert!(state.overlay.is_preview_open());
        assert!(state.overlay.is_sidebar_open());
    }

    #[tokio::test]
    async fn test_failed_upload_posts_error_notice() {
        let api = MockApi::new().with_listing("", &[]);
        *api.upload_reply.borrow_mut() = Err(FetchError::Network("offline".into()));
        let explorer = Explorer::new(store_with(BOTH), api);
        explorer.mount().await;

        explorer.upload("a.jpg".to_string()).await;

        let state = explorer.store().borrow();
        assert!(!state.mutation.is_uploading());
        assert_eq!(
            state.notice().unwrap().message,
            "Upload failed: network error: offline. Check your connection and try again."
        );
    }

    #[tokio::test]
    async fn test_upload_with_failed_reload_reports_success() {
        let api = MockApi::new().with_listing("", &[]);
        let explorer = Explorer::new(store_with(BOTH), api);
        explorer.mount().await;
        explorer
            .api
            .listings
            .borrow_mut()
            .insert("".into(), Err(FetchError::Server(503)));

        explorer.upload("a.jpg".to_string()).await;

        let state = explorer.store().borrow();
        assert!(!state.mutation.is_uploading());
        assert_eq!(
            state.notice().unwrap().message,
            "Uploaded, but the folder could not be refreshed: server responded with HTTP 503"
        );
    }

    #[tokio::test]
    async fn test_delete_with_failed_reload_reports_success() {
        let entry = DirectoryEntry::file("a.txt");
        let api = MockApi::new().with_listing("", &[entry.clone()]);
        let explorer = Explorer::new(store_with(BOTH), api);
        explorer.mount().await;
        explorer
            .api
            .listings
            .borrow_mut()
            .insert("".into(), Err(FetchError::Timeout));

        explorer.delete(entry, |_| true).await;

        let state = explorer.store().borrow();
        let message = &state.notice().unwrap().message;
        assert!(message.starts_with("Deleted a.txt, but the folder could not be refreshed"));
        assert!(message.contains("Check your connection"));
    }

    #[test]
    fn test_failure_message_hints_only_on_network_errors() {
        assert_eq!(
            failure_message("Delete failed", &FetchError::Server(403)),
            "Delete failed: server responded with HTTP 403"
        );
        assert_eq!(
            failure_message("Delete failed", &FetchError::Timeout),
            "Delete failed: request timed out. Check your connection and try again."
        );
    }

    #[tokio::test]
    async fn test_successful_delete_posts_info_notice() {
        let entry = DirectoryEntry::file("a.txt");
        let api = MockApi::new().with_listing("", &[entry.clone()]);
        let explorer = Explorer::new(store_with(BOTH), api);
        explorer.mount().await;

        explorer.delete(entry, |_| true).await;

        let state = explorer.store().borrow();
        let notice = state.notice().unwrap();
        assert!(!notice.is_error());
        assert_eq!(notice.message, "Deleted a.txt");
    }
}
