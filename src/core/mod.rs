//! Core business logic for the explorer.
//!
//! This module provides:
//! - [`Explorer`] root controller and its [`ExplorerState`]
//! - [`listing`] fetcher with last-navigation-wins commits
//! - [`overlay`] state machine for menu, preview, and sidebar
//! - [`mutation`] coordinator for upload and delete
//! - [`lazy`] deferred image loading
//! - [`path`] breadcrumb decomposition

pub mod api;
pub mod error;
mod explorer;
pub mod lazy;
pub mod listing;
pub mod mutation;
pub mod overlay;
pub mod path;
mod state;

pub use api::{Endpoints, StorageApi};
pub use explorer::{Activation, Explorer};
pub use mutation::{Capabilities, delete_prompt};
pub use state::ExplorerState;
