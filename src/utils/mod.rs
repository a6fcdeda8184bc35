//! Browser plumbing and small helpers.
//!
//! Provides:
//! - [`fetch`] - [`HttpApi`] over the Fetch API with timeouts
//! - [`dom`] - window globals, navigation, confirmation prompts
//! - [`lazy`] - the page-wide lazy image observer
//! - [`logging`] - `log` backend writing to the console
//! - [`url`] - `encodeURIComponent`-compatible encoding

pub mod dom;
pub mod fetch;
pub mod format;
pub mod lazy;
pub mod logging;
pub mod url;

pub use fetch::HttpApi;
