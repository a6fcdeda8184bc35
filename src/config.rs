//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application,
//! plus the per-page [`MountConfig`] the backend injects into the page.

use log::LevelFilter;

use crate::core::Capabilities;
use crate::core::error::ConfigError;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "shelf";

/// Label of the synthetic root breadcrumb.
pub const HOME_LABEL: &str = "Home";

/// Console log level.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

// =============================================================================
// Network Configuration
// =============================================================================

/// Timeout for listing, metadata, and delete requests in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10_000;

/// Timeout for uploads in milliseconds (large RAW files).
pub const UPLOAD_TIMEOUT_MS: i32 = 120_000;

// =============================================================================
// Lazy Image Loading
// =============================================================================

pub mod lazy {
    /// Images start loading this far outside the viewport.
    pub const ROOT_MARGIN: &str = "200px 0px";
    /// Minimum visible fraction before a placeholder counts as visible.
    pub const THRESHOLD: f64 = 0.1;
    /// Placeholders eligible for deferred loading.
    pub const SELECTOR: &str = "img.lazy-image";
    /// Attribute holding the deferred source.
    pub const DEFERRED_ATTR: &str = "data-src";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// How long a notice stays on screen in milliseconds.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Mount Configuration
// =============================================================================

/// Names of the globals the backend template defines before mounting.
pub mod globals {
    pub const SPACE: &str = "SPACE";
    pub const ALLOW_UPLOAD: &str = "ALLOW_UPLOAD";
    pub const ALLOW_DELETE: &str = "ALLOW_DELETE";
}

/// Per-page configuration, fixed for the lifetime of the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountConfig {
    /// Storage space all requests are scoped to.
    pub space: String,
    pub capabilities: Capabilities,
}

impl MountConfig {
    /// Validate raw values; missing capability flags mean "not allowed".
    pub fn from_globals(
        space: Option<String>,
        allow_upload: Option<bool>,
        allow_delete: Option<bool>,
    ) -> Result<Self, ConfigError> {
        let space = space.map(|s| s.trim().to_string()).unwrap_or_default();
        if space.is_empty() {
            return Err(ConfigError::MissingSpace);
        }
        if space.contains('/') {
            return Err(ConfigError::InvalidSpace(space));
        }

        Ok(Self {
            space,
            capabilities: Capabilities {
                allow_upload: allow_upload.unwrap_or(false),
                allow_delete: allow_delete.unwrap_or(false),
            },
        })
    }

    /// Read the configuration from the page globals.
    pub fn from_window() -> Result<Self, ConfigError> {
        use crate::utils::dom::{global_bool, global_string};

        Self::from_globals(
            global_string(globals::SPACE),
            global_bool(globals::ALLOW_UPLOAD),
            global_bool(globals::ALLOW_DELETE),
        )
    }
}
