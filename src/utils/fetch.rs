//! Network fetching utilities with timeout support.
//!
//! Provides the browser implementation of [`StorageApi`] on top of the Fetch
//! API, with every request raced against a timeout.

use js_sys::{Array, Promise};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Headers, Request, RequestInit, RequestMode, Response};

use crate::config::{FETCH_TIMEOUT_MS, UPLOAD_TIMEOUT_MS};
use crate::core::api::{ApiFuture, Endpoints, StorageApi};
use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Request Helpers
// =============================================================================

/// Body of an outgoing request.
enum Body<'a> {
    Empty,
    Json(String),
    Form(&'a FormData),
}

/// Send a same-origin request and return the response text.
///
/// Non-2xx statuses become [`FetchError::Server`].
async fn send(
    method: &str,
    url: &str,
    body: Body<'_>,
    timeout_ms: i32,
) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);

    match body {
        Body::Empty => {}
        Body::Json(json) => {
            let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
            headers
                .set("Content-Type", "application/json")
                .map_err(|_| FetchError::RequestCreationFailed)?;
            opts.set_headers(&headers);
            opts.set_body(&JsValue::from_str(&json));
        }
        // The browser sets the multipart boundary header itself
        Body::Form(form) => opts.set_body(form),
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, timeout_ms).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::Network(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result
                .dyn_into()
                .map_err(|_| FetchError::Malformed("not a response".to_string()))?;

            if !resp.ok() {
                return Err(FetchError::Server(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| read_failed())?)
                .await
                .map_err(|_| read_failed())?;

            text.as_string()
                .ok_or_else(|| FetchError::Malformed("response body is not text".to_string()))
        }
    }
}

fn read_failed() -> FetchError {
    FetchError::Network("failed to read response body".to_string())
}

/// GET `url` as text.
async fn get_text(url: &str) -> Result<String, FetchError> {
    send("GET", url, Body::Empty, FETCH_TIMEOUT_MS).await
}

/// POST `payload` as JSON.
async fn post_json<T: Serialize>(url: &str, payload: &T) -> Result<String, FetchError> {
    let json = serde_json::to_string(payload).map_err(|_| FetchError::RequestCreationFailed)?;
    send("POST", url, Body::Json(json), FETCH_TIMEOUT_MS).await
}

// =============================================================================
// Storage API Client
// =============================================================================

#[derive(Serialize)]
struct DeleteRequest<'a> {
    path: &'a str,
}

/// [`StorageApi`] backed by the space's HTTP endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    endpoints: Endpoints,
}

impl HttpApi {
    pub fn new(space: impl Into<String>) -> Self {
        Self {
            endpoints: Endpoints::new(space),
        }
    }
}

impl StorageApi for HttpApi {
    type Upload = File;

    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn list<'a>(&'a self, path: &'a str) -> ApiFuture<'a, String> {
        Box::pin(async move { get_text(&self.endpoints.list(path)).await })
    }

    fn metadata<'a>(&'a self, path: &'a str) -> ApiFuture<'a, String> {
        Box::pin(async move { get_text(&self.endpoints.metadata(path)).await })
    }

    fn upload<'a>(&'a self, target_dir: &'a str, file: File) -> ApiFuture<'a, String> {
        Box::pin(async move {
            let form = FormData::new().map_err(|_| FetchError::RequestCreationFailed)?;
            form.append_with_blob_and_filename("file", &file, &file.name())
                .map_err(|_| FetchError::RequestCreationFailed)?;
            form.append_with_str("path", target_dir)
                .map_err(|_| FetchError::RequestCreationFailed)?;

            send(
                "POST",
                &self.endpoints.upload(),
                Body::Form(&form),
                UPLOAD_TIMEOUT_MS,
            )
            .await
        })
    }

    fn delete<'a>(&'a self, path: &'a str) -> ApiFuture<'a, String> {
        Box::pin(async move { post_json(&self.endpoints.delete(), &DeleteRequest { path }).await })
    }
}
