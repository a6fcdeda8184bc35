//! Explorer header component.
//!
//! Shows the space and current folder, plus the upload action when the
//! space allows it.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with location title and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let space = ctx.endpoints().space().to_string();

    // Last breadcrumb is the current folder ("Home" at the root)
    let current_name = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.view()
                .breadcrumbs()
                .last()
                .map(|crumb| crumb.name.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <header class=css::header>
            <div class=css::title>
                <span class=css::titleIcon><Icon icon=ic::SPACE /></span>
                <span class=css::spaceName>{space}</span>
                <span class=css::titleSeparator>"/"</span>
                <span class=css::titleLabel>{move || current_name.get()}</span>
            </div>

            <div class=css::actionButtons>
                {ctx.capabilities.allow_upload.then(|| view! { <UploadButton /> })}
            </div>
        </header>
    }
}

/// File picker that uploads into the folder shown when the file is chosen.
#[component]
fn UploadButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let input_ref = NodeRef::<html::Input>::new();
    let uploading = Memo::new(move |_| ctx.state.with(|s| s.mutation.is_uploading()));

    let on_pick = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_: ev::Event| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        // Reset so picking the same file again fires `change`
        input.set_value("");
        if let Some(file) = file {
            ctx.upload(file);
        }
    };

    view! {
        <input
            type="file"
            class=css::hiddenInput
            node_ref=input_ref
            on:change=on_change
        />
        <button
            class=move || {
                if uploading.get() {
                    format!("{} {}", css::actionButton, css::actionButtonBusy)
                } else {
                    css::actionButton.to_string()
                }
            }
            on:click=on_pick
            title="Upload a file to this folder"
            aria-busy=move || uploading.get().to_string()
        >
            <Icon icon=ic::UPLOAD />
            <span class=css::actionLabel>
                {move || if uploading.get() { "Uploading…" } else { "Upload" }}
            </span>
        </button>
    }
}
