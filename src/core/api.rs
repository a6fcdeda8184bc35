//! Storage backend contract.
//!
//! [`StorageApi`] abstracts the HTTP endpoints of one storage space so the
//! explorer state machine can be driven by the browser client or by an
//! in-memory backend.

use std::{future::Future, pin::Pin};

use super::error::FetchError;
use crate::utils::url::encode_component;

/// Object-safe boxed future used by [`StorageApi`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, FetchError>> + 'a>>;

/// Requests the explorer issues against a storage space.
///
/// Every method resolves to the raw response body; decoding belongs to the
/// caller so malformed bodies are reported where they are interpreted.
pub trait StorageApi {
    /// File payload accepted by [`StorageApi::upload`].
    type Upload;

    /// URL builder for this space.
    fn endpoints(&self) -> &Endpoints;

    /// `GET list?path=`: JSON array of directory entries.
    fn list<'a>(&'a self, path: &'a str) -> ApiFuture<'a, String>;

    /// `GET metadata?path=`: JSON object.
    fn metadata<'a>(&'a self, path: &'a str) -> ApiFuture<'a, String>;

    /// `POST upload`: multipart `file` + `path`.
    fn upload<'a>(&'a self, target_dir: &'a str, file: Self::Upload) -> ApiFuture<'a, String>;

    /// `POST delete`: JSON `{path}`.
    fn delete<'a>(&'a self, path: &'a str) -> ApiFuture<'a, String>;
}

/// Builds backend URLs scoped to one storage space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    space: String,
}

impl Endpoints {
    pub fn new(space: impl Into<String>) -> Self {
        Self {
            space: space.into(),
        }
    }

    pub fn space(&self) -> &str {
        &self.space
    }

    fn base(&self, endpoint: &str) -> String {
        format!("/{}/api/{}", encode_component(&self.space), endpoint)
    }

    fn with_path(&self, endpoint: &str, path: &str) -> String {
        format!("{}?path={}", self.base(endpoint), encode_component(path))
    }

    pub fn list(&self, path: &str) -> String {
        self.with_path("list", path)
    }

    pub fn download(&self, path: &str) -> String {
        self.with_path("download", path)
    }

    pub fn metadata(&self, path: &str) -> String {
        self.with_path("metadata", path)
    }

    /// Small PNG rendition used by lazy list thumbnails.
    pub fn thumbnail(&self, path: &str) -> String {
        self.with_path("thumbnail", path)
    }

    /// Full image served inline, used by the preview modal.
    pub fn raw(&self, path: &str) -> String {
        self.with_path("raw", path)
    }

    pub fn upload(&self) -> String {
        self.base("upload")
    }

    pub fn delete(&self) -> String {
        self.base("delete")
    }
}
