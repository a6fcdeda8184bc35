//! Directory listing fetcher.
//!
//! Every load is tagged with a monotonically increasing [`RequestToken`].
//! When a response arrives, it is committed only if no newer load was
//! issued in the meantime (last navigation wins); superseded responses,
//! failures included, are dropped without touching the view.

use super::api::StorageApi;
use super::error::FetchError;
use super::path::normalize;
use super::state::StateStore;
use crate::models::{DirectoryEntry, ViewState};

/// Identifies one issued listing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Issues request tokens and remembers the latest one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingFetcher {
    latest: u64,
}

impl ListingFetcher {
    /// Issue a fresh token, invalidating all earlier ones.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// Result of a listing load that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response became the new view.
    Committed,
    /// A newer load was issued before this one finished.
    Superseded,
}

/// Decode a listing body into entries, keeping the backend's order.
pub fn normalize_listing(body: &str) -> Result<Vec<DirectoryEntry>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

/// Fetch the listing for `path` and commit it if it is still the latest request.
///
/// On failure the current view is left untouched; notifying the user is the
/// caller's job.
pub async fn load<S, A>(store: &S, api: &A, path: &str) -> Result<LoadOutcome, FetchError>
where
    S: StateStore,
    A: StorageApi,
{
    let path = normalize(path);
    let Some(token) = store.update_state(|s| s.fetcher.issue()) else {
        return Ok(LoadOutcome::Superseded);
    };

    let response = api.list(&path).await;

    store
        .update_state(|s| {
            if !s.fetcher.is_latest(token) {
                log::debug!("dropping superseded listing for {path:?}");
                return Ok(LoadOutcome::Superseded);
            }
            let items = normalize_listing(&response?)?;
            log::debug!("committing listing for {path:?} ({} entries)", items.len());
            s.commit(ViewState::new(path.clone(), items));
            Ok(LoadOutcome::Committed)
        })
        .unwrap_or(Ok(LoadOutcome::Superseded))
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use tokio::sync::oneshot;

    use super::*;
    use crate::core::api::{ApiFuture, Endpoints};
    use crate::core::mutation::Capabilities;
    use crate::core::state::ExplorerState;

    /// In-memory backend whose responses are scripted per path.
    ///
    /// A path can be answered immediately or held on a oneshot channel so
    /// tests control the order in which responses arrive.
    pub struct MockApi {
        endpoints: Endpoints,
        pub listings: RefCell<HashMap<String, Result<String, FetchError>>>,
        pub held: RefCell<HashMap<String, oneshot::Receiver<Result<String, FetchError>>>>,
        pub metadata: RefCell<HashMap<String, Result<String, FetchError>>>,
        pub upload_reply: RefCell<Result<String, FetchError>>,
        pub held_upload: RefCell<Option<oneshot::Receiver<Result<String, FetchError>>>>,
        pub delete_reply: RefCell<Result<String, FetchError>>,
        pub requests: RefCell<Vec<String>>,
    }

    impl MockApi {
        pub fn new() -> Self {
            Self {
                endpoints: Endpoints::new("test"),
                listings: RefCell::new(HashMap::new()),
                held: RefCell::new(HashMap::new()),
                metadata: RefCell::new(HashMap::new()),
                upload_reply: RefCell::new(Ok(r#"{"success":true}"#.to_string())),
                held_upload: RefCell::new(None),
                delete_reply: RefCell::new(Ok(r#"{"success":true}"#.to_string())),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn with_listing(self, path: &str, entries: &[DirectoryEntry]) -> Self {
            let body = serde_json::to_string(entries).unwrap();
            self.listings.borrow_mut().insert(path.to_string(), Ok(body));
            self
        }

        pub fn hold(&self, path: &str) -> oneshot::Sender<Result<String, FetchError>> {
            let (tx, rx) = oneshot::channel();
            self.held.borrow_mut().insert(path.to_string(), rx);
            tx
        }

        pub fn hold_upload(&self) -> oneshot::Sender<Result<String, FetchError>> {
            let (tx, rx) = oneshot::channel();
            *self.held_upload.borrow_mut() = Some(rx);
            tx
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl StorageApi for MockApi {
        type Upload = String;

        fn endpoints(&self) -> &Endpoints {
            &self.endpoints
        }

        fn list<'a>(&'a self, path: &'a str) -> ApiFuture<'a, String> {
            self.requests.borrow_mut().push(format!("list {path}"));
            let held = self.held.borrow_mut().remove(path);
            let ready = self.listings.borrow().get(path).cloned();
            Box::pin(async move {
                match held {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(FetchError::Network("dropped".into()))),
                    None => ready.unwrap_or(Err(FetchError::Server(404))),
                }
            })
        }

        fn metadata<'a>(&'a self, path: &'a str) -> ApiFuture<'a, String> {
            self.requests.borrow_mut().push(format!("metadata {path}"));
            let reply = self
                .metadata
                .borrow()
                .get(path)
                .cloned()
                .unwrap_or(Err(FetchError::Server(404)));
            Box::pin(async move { reply })
        }

        fn upload<'a>(&'a self, target_dir: &'a str, file: String) -> ApiFuture<'a, String> {
            self.requests
                .borrow_mut()
                .push(format!("upload {file} -> {target_dir}"));
            let held = self.held_upload.borrow_mut().take();
            let reply = self.upload_reply.borrow().clone();
            Box::pin(async move {
                match held {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(FetchError::Network("dropped".into()))),
                    None => reply,
                }
            })
        }

        fn delete<'a>(&'a self, path: &'a str) -> ApiFuture<'a, String> {
            self.requests.borrow_mut().push(format!("delete {path}"));
            let reply = self.delete_reply.borrow().clone();
            Box::pin(async move { reply })
        }
    }

    pub fn store_with(capabilities: Capabilities) -> Rc<RefCell<ExplorerState>> {
        Rc::new(RefCell::new(ExplorerState::new(capabilities)))
    }

    fn current_path(store: &Rc<RefCell<ExplorerState>>) -> String {
        store.borrow().view().current_path().to_string()
    }

    #[test]
    fn test_tokens_supersede() {
        let mut fetcher = ListingFetcher::default();
        let first = fetcher.issue();
        assert!(fetcher.is_latest(first));

        let second = fetcher.issue();
        assert!(second > first);
        assert!(!fetcher.is_latest(first));
        assert!(fetcher.is_latest(second));
    }

    #[test]
    fn test_normalize_listing_keeps_order() {
        let body = r#"[{"name":"z","path":"z","is_dir":true,"is_image":false},
                       {"name":"a.jpg","path":"a.jpg","is_dir":false,"is_image":true}]"#;
        let items = normalize_listing(body).unwrap();
        let names: Vec<_> = items.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a.jpg"]);
    }

    #[test]
    fn test_normalize_listing_rejects_bad_shapes() {
        assert!(matches!(normalize_listing("{}"), Err(FetchError::Malformed(_))));
        assert!(matches!(normalize_listing("not json"), Err(FetchError::Malformed(_))));
        assert!(matches!(
            normalize_listing(r#"[{"path":"no-name"}]"#),
            Err(FetchError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_load_commits_view() {
        let entries = vec![DirectoryEntry::dir("pics/2024"), DirectoryEntry::image("pics/a.jpg")];
        let api = MockApi::new().with_listing("pics", &entries);
        let store = store_with(Capabilities::default());

        let outcome = load(&store, &api, "/pics/").await;

        assert_eq!(outcome, Ok(LoadOutcome::Committed));
        let state = store.borrow();
        assert_eq!(state.view().current_path(), "pics");
        assert_eq!(state.view().items(), entries.as_slice());
        assert_eq!(state.view().breadcrumbs().len(), 2);
        assert_eq!(api.requests(), vec!["list pics"]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_last_view() {
        let entries = vec![DirectoryEntry::file("a.txt")];
        let api = MockApi::new().with_listing("", &entries);
        api.listings
            .borrow_mut()
            .insert("broken".into(), Ok("<html>oops</html>".into()));
        let store = store_with(Capabilities::default());

        load(&store, &api, "").await.unwrap();
        let before = store.borrow().view().clone();

        let missing = load(&store, &api, "missing").await;
        assert_eq!(missing, Err(FetchError::Server(404)));
        let malformed = load(&store, &api, "broken").await;
        assert!(matches!(malformed, Err(FetchError::Malformed(_))));

        assert_eq!(store.borrow().view(), &before);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let api = MockApi::new();
        let x_tx = api.hold("x");
        let y_tx = api.hold("y");
        let store = store_with(Capabilities::default());

        let x_body = serde_json::to_string(&[DirectoryEntry::file("x/old.txt")]).unwrap();
        let y_body = serde_json::to_string(&[DirectoryEntry::file("y/new.txt")]).unwrap();

        // Navigate to X, then Y; Y answers first, X's slow answer arrives last.
        let driver = async {
            tokio::task::yield_now().await;
            y_tx.send(Ok(y_body)).unwrap();
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            x_tx.send(Ok(x_body)).unwrap();
        };
        let (x, y, ()) = tokio::join!(load(&store, &api, "x"), load(&store, &api, "y"), driver);

        assert_eq!(x, Ok(LoadOutcome::Superseded));
        assert_eq!(y, Ok(LoadOutcome::Committed));
        assert_eq!(current_path(&store), "y");
        assert_eq!(store.borrow().view().items()[0].path, "y/new.txt");
    }

    #[tokio::test]
    async fn test_stale_response_discarded_when_it_arrives_first() {
        let api = MockApi::new();
        let x_tx = api.hold("x");
        let y_tx = api.hold("y");
        let store = store_with(Capabilities::default());

        let driver = async {
            tokio::task::yield_now().await;
            x_tx.send(Ok("[]".into())).unwrap();
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            y_tx.send(Ok("[]".into())).unwrap();
        };
        let (x, y, ()) = tokio::join!(load(&store, &api, "x"), load(&store, &api, "y"), driver);

        assert_eq!(x, Ok(LoadOutcome::Superseded));
        assert_eq!(y, Ok(LoadOutcome::Committed));
        assert_eq!(current_path(&store), "y");
    }

    #[tokio::test]
    async fn test_stale_failure_is_ignored() {
        let api = MockApi::new();
        let x_tx = api.hold("x");
        let store = store_with(Capabilities::default());
        api.listings.borrow_mut().insert("y".into(), Ok("[]".into()));

        let driver = async {
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            x_tx.send(Err(FetchError::Timeout)).unwrap();
        };
        let (x, y, ()) = tokio::join!(load(&store, &api, "x"), load(&store, &api, "y"), driver);

        assert_eq!(x, Ok(LoadOutcome::Superseded));
        assert_eq!(y, Ok(LoadOutcome::Committed));
        assert_eq!(current_path(&store), "y");
    }
}
