//! Main explorer component.
//!
//! The file explorer view with header, breadcrumb bar, file list, and the
//! overlays (context menu, preview modal, metadata sidebar, notice toast).
//!
//! ## Layout
//!
//! - **Desktop (> 768px)**: file list on the left, sidebar docked on the right
//! - **Mobile (< 768px)**: single column, sidebar covers the list

use leptos::prelude::*;

use super::{ContextMenu, FileList, Header, NoticeToast, PathBar, PreviewModal, Sidebar};
use crate::app::AppContext;
use crate::utils::lazy;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let view_state = Memo::new(move |_| ctx.state.with(|s| s.view().clone()));
    let has_sidebar = Memo::new(move |_| ctx.state.with(|s| s.overlay.is_sidebar_open()));

    // New rows are in the DOM by the next frame; hand their placeholders to
    // the lazy loader then.
    Effect::new(move |_| {
        view_state.track();
        request_animation_frame(lazy::scan_document);
    });

    view! {
        <div class=css::explorer>
            <Header />
            <PathBar />

            <div class=css::body>
                <div class=move || {
                    if has_sidebar.get() {
                        format!("{} {}", css::fileListPane, css::fileListPaneWithSidebar)
                    } else {
                        css::fileListPane.to_string()
                    }
                }>
                    <FileList />
                </div>

                <Show when=move || has_sidebar.get()>
                    <Sidebar />
                </Show>
            </div>

            <ContextMenu />
            <PreviewModal />
            <NoticeToast />
        </div>
    }
}
