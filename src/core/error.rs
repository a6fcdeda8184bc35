//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for backend requests
//! - [`MutationError`] - Upload and delete failures, including local gates
//! - [`ConfigError`] - Invalid mount-time configuration

use thiserror::Error;

/// Coarse classification of a failed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never completed.
    Network,
    /// The server answered with a non-success status.
    Server,
    /// The body did not have the expected shape.
    MalformedResponse,
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("browser window not available")]
    NoWindow,
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Network request failed (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    /// Non-2xx response
    #[error("server responded with HTTP {0}")]
    Server(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoWindow | Self::RequestCreationFailed | Self::Network(_) | Self::Timeout => {
                ErrorKind::Network
            }
            Self::Server(_) => ErrorKind::Server,
            Self::Malformed(_) => ErrorKind::MalformedResponse,
        }
    }
}

/// Failures of upload and delete operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MutationError {
    #[error("uploads are disabled for this space")]
    UploadDisabled,
    #[error("deleting is disabled for this space")]
    DeleteDisabled,
    /// Another upload is still in flight.
    #[error("an upload is already in progress")]
    Busy,
    /// The server answered but reported `success: false`.
    #[error("the server rejected the request")]
    Rejected,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The mutation went through but the listing could not be reloaded.
    #[error("listing refresh failed: {0}")]
    Refresh(FetchError),
}

/// Invalid page configuration injected by the backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no storage space configured for this page")]
    MissingSpace,
    #[error("invalid storage space identifier: {0:?}")]
    InvalidSpace(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_kinds() {
        assert_eq!(FetchError::Timeout.kind(), ErrorKind::Network);
        assert_eq!(FetchError::Network("offline".into()).kind(), ErrorKind::Network);
        assert_eq!(FetchError::Server(500).kind(), ErrorKind::Server);
        assert_eq!(
            FetchError::Malformed("eof".into()).kind(),
            ErrorKind::MalformedResponse
        );
    }

    #[test]
    fn test_mutation_error_display() {
        let err = MutationError::from(FetchError::Server(403));
        assert_eq!(err.to_string(), "server responded with HTTP 403");
        assert_eq!(
            MutationError::Refresh(FetchError::Timeout).to_string(),
            "listing refresh failed: request timed out"
        );
    }
}
