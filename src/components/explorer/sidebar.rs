//! Metadata sidebar.
//!
//! Lists every field the backend returned for the entry, in key order.
//! While a Details request for another entry is in flight the current
//! record stays visible under a loading line.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::format_metadata_value;

stylance::import_crate_style!(css, "src/components/explorer/sidebar.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let sidebar = Memo::new(move |_| ctx.state.with(|s| s.overlay.sidebar().cloned()));
    let loading = Memo::new(move |_| ctx.state.with(|s| s.overlay.is_loading_metadata()));
    let is_empty = Memo::new(move |_| {
        sidebar.with(|s| s.as_ref().is_some_and(|s| s.metadata.is_empty()))
    });

    view! {
        <aside class=css::sidebar aria-label="File details">
            <header class=css::sidebarHeader>
                <span class=css::sidebarIcon><Icon icon=ic::INFO /></span>
                <span class=css::sidebarTitle>
                    {move || sidebar.with(|s| s.as_ref().map(|s| s.entry.name.clone()))}
                </span>
                <button
                    class=css::closeButton
                    on:click=move |_| ctx.explorer().close_sidebar()
                    title="Close"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </header>

            <Show when=move || loading.get()>
                <p class=css::status>"Loading details..."</p>
            </Show>
            <Show when=move || is_empty.get()>
                <p class=css::status>"No details available"</p>
            </Show>

            <dl class=css::fields>
                {move || {
                    sidebar.with(|s| {
                        s.iter()
                            .flat_map(|s| s.metadata.iter())
                            .map(|(key, value)| {
                                let value = format_metadata_value(key, value);
                                view! {
                                    <dt class=css::fieldKey>{key.to_string()}</dt>
                                    <dd class=css::fieldValue>{value}</dd>
                                }
                            })
                            .collect_view()
                    })
                }}
            </dl>
        </aside>
    }
}
