//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! page-level listeners that dismiss the context menu.

use std::future::Future;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::{use_document, use_event_listener, use_window};
use web_sys::File;

use crate::components::explorer::Explorer as ExplorerView;
use crate::config::MountConfig;
use crate::core::{
    Activation, Capabilities, Endpoints, Explorer, ExplorerState, StorageApi, delete_prompt,
};
use crate::models::DirectoryEntry;
use crate::utils::{HttpApi, dom, lazy};

/// Controller type driving the browser app.
pub type AppExplorer = Explorer<RwSignal<ExplorerState>, HttpApi>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by every view with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles or plain
/// values, so closures can capture it freely.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Explorer state (view, overlays, mutation flags, notice).
    pub state: RwSignal<ExplorerState>,

    /// HTTP client for the mounted space.
    api: StoredValue<HttpApi>,

    /// Capability flags, fixed at mount.
    pub capabilities: Capabilities,
}

impl AppContext {
    pub fn new(config: &MountConfig) -> Self {
        Self {
            state: RwSignal::new(ExplorerState::new(config.capabilities)),
            api: StoredValue::new(HttpApi::new(config.space.clone())),
            capabilities: config.capabilities,
        }
    }

    /// Controller bound to this context.
    pub fn explorer(&self) -> AppExplorer {
        Explorer::new(self.state, self.api.get_value())
    }

    /// URL builder for the mounted space.
    pub fn endpoints(&self) -> Endpoints {
        self.api.with_value(|api| api.endpoints().clone())
    }

    /// Run an async controller operation on the local executor.
    pub fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(AppExplorer) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let explorer = self.explorer();
        spawn_local(async move { task(explorer).await });
    }

    pub fn navigate(&self, path: String) {
        self.spawn(move |explorer| async move { explorer.navigate(&path).await });
    }

    pub fn show_details(&self, entry: DirectoryEntry) {
        self.spawn(move |explorer| async move { explorer.show_details(entry).await });
    }

    pub fn upload(&self, file: File) {
        self.spawn(move |explorer| async move { explorer.upload(file).await });
    }

    /// Delete `entry` after the user confirms the browser prompt.
    pub fn delete(&self, entry: DirectoryEntry) {
        self.spawn(move |explorer| async move {
            explorer
                .delete(entry, |entry| dom::confirm(&delete_prompt(entry)))
                .await
        });
    }

    /// Activate a list row: open directories, download files.
    pub fn activate(&self, entry: &DirectoryEntry) {
        match self.explorer().activate(entry) {
            Activation::Navigate(path) => self.navigate(path),
            Activation::Download(url) => dom::open_in_new_tab(&url),
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Loads the space root
/// - Closes the context menu on any document click or window scroll
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App(config: MountConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx);

    log::info!("mounting space {}", config.space);
    ctx.spawn(|explorer| async move { explorer.mount().await });

    let _ = use_event_listener(use_document(), ev::click, move |_| {
        ctx.explorer().dismiss_context_menu();
    });
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        ctx.explorer().dismiss_context_menu();
    });

    on_cleanup(lazy::shutdown);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #d9534f; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #777; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.5rem 1.5rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <ExplorerView />
        </ErrorBoundary>
    }
}
