//! Full-size image preview modal.
//!
//! Loads the inline `raw` rendering of the entry, which also covers camera
//! RAW formats the browser cannot decode itself.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/preview.module.css");

#[component]
pub fn PreviewModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let target = Memo::new(move |_| ctx.state.with(|s| s.overlay.preview().cloned()));

    let close = move |_: ev::MouseEvent| ctx.explorer().close_preview();
    let swallow = |event: ev::MouseEvent| event.stop_propagation();

    move || {
        target.get().map(|entry| {
            let src = ctx.endpoints().raw(&entry.path);
            view! {
                <div class=css::backdrop on:click=close role="dialog" aria-modal="true">
                    <div class=css::modal on:click=swallow>
                        <header class=css::modalHeader>
                            <span class=css::modalTitle>{entry.name.clone()}</span>
                            <button class=css::closeButton on:click=close title="Close">
                                <Icon icon=ic::CLOSE />
                            </button>
                        </header>
                        <img class=css::image src=src alt=entry.name />
                    </div>
                </div>
            }
        })
    }
}
