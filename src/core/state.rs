//! Explorer state and the store abstraction it lives in.
//!
//! [`ExplorerState`] is the single source of truth for the committed view,
//! the overlays, the mutation flags, and the current notice. Async flows only
//! touch it through a [`StateStore`], so the same orchestration code runs
//! against a Leptos signal in the browser and a `RefCell` in tests.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::listing::ListingFetcher;
use super::mutation::{Capabilities, MutationState};
use super::overlay::OverlayState;
use crate::models::{Notice, NoticeLevel, ViewState};

#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerState {
    view: ViewState,
    pub overlay: OverlayState,
    pub mutation: MutationState,
    pub(crate) fetcher: ListingFetcher,
    notice: Option<Notice>,
    next_notice_id: u64,
}

impl ExplorerState {
    /// Fresh state at the root path with the given capabilities.
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            view: ViewState::root(),
            overlay: OverlayState::default(),
            mutation: MutationState::new(capabilities),
            fetcher: ListingFetcher::default(),
            notice: None,
            next_notice_id: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Replace the view wholesale and close overlays pointing at entries
    /// that are no longer listed.
    pub fn commit(&mut self, view: ViewState) {
        self.view = view;
        self.overlay.retain_listed(&self.view);
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Show a notice, replacing the current one. Returns its id.
    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.notice = Some(Notice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Dismiss the notice with `id`; a newer notice stays visible.
    pub fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }
}

/// Shared, interior-mutable home of an [`ExplorerState`].
///
/// Both methods return `None` once the store has been disposed (for a
/// signal: its owner was cleaned up), letting in-flight work finish quietly.
pub trait StateStore {
    fn with_state<R>(&self, f: impl FnOnce(&ExplorerState) -> R) -> Option<R>;
    fn update_state<R>(&self, f: impl FnOnce(&mut ExplorerState) -> R) -> Option<R>;
}

impl StateStore for RwSignal<ExplorerState> {
    fn with_state<R>(&self, f: impl FnOnce(&ExplorerState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut ExplorerState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Single-threaded store for headless use.
impl StateStore for Rc<RefCell<ExplorerState>> {
    fn with_state<R>(&self, f: impl FnOnce(&ExplorerState) -> R) -> Option<R> {
        Some(f(&RefCell::borrow(self)))
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut ExplorerState) -> R) -> Option<R> {
        Some(f(&mut RefCell::borrow_mut(self)))
    }
}
