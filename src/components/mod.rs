//! UI components built with Leptos.
//!
//! - [`explorer`] - File browser for one storage space
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
