//! Context menu for a single entry, anchored at the pointer.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::ContextMenu as MenuState;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/explorer/context_menu.module.css");

#[component]
pub fn ContextMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let menu = Memo::new(move |_| ctx.state.with(|s| s.overlay.context_menu().cloned()));

    move || menu.get().map(|menu| view! { <MenuPanel menu=menu /> })
}

#[component]
fn MenuPanel(menu: MenuState) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let style = format!("left: {}px; top: {}px;", menu.position.x, menu.position.y);
    let entry = menu.entry;
    let can_preview = entry.is_image;
    let can_delete = ctx.capabilities.allow_delete;

    let on_download = move |_: ev::MouseEvent| {
        if let Some(entry) = ctx.explorer().close_context_menu() {
            dom::navigate_to(&ctx.endpoints().download(&entry.path));
        }
    };

    let entry_for_preview = entry.clone();
    let on_preview = move |_: ev::MouseEvent| {
        ctx.explorer().open_preview(entry_for_preview.clone());
    };

    let entry_for_details = entry.clone();
    let on_details = move |_: ev::MouseEvent| {
        ctx.show_details(entry_for_details.clone());
    };

    let entry_for_delete = entry.clone();
    let on_delete = move |_: ev::MouseEvent| {
        ctx.delete(entry_for_delete.clone());
    };

    // Clicks inside the menu are not "outside" clicks
    let swallow = |event: ev::MouseEvent| event.stop_propagation();

    view! {
        <div class=css::menu style=style role="menu" on:click=swallow>
            <div class=css::menuTitle>{entry.name.clone()}</div>
            <button class=css::menuItem role="menuitem" on:click=on_download>
                <span class=css::menuIcon><Icon icon=ic::DOWNLOAD /></span>
                "Download"
            </button>
            {can_preview.then(|| view! {
                <button class=css::menuItem role="menuitem" on:click=on_preview>
                    <span class=css::menuIcon><Icon icon=ic::EYE /></span>
                    "Preview"
                </button>
            })}
            <button class=css::menuItem role="menuitem" on:click=on_details>
                <span class=css::menuIcon><Icon icon=ic::INFO /></span>
                "Details"
            </button>
            {can_delete.then(|| view! {
                <div class=css::menuDivider></div>
                <button
                    class=format!("{} {}", css::menuItem, css::menuItemDanger)
                    role="menuitem"
                    on:click=on_delete
                >
                    <span class=css::menuIcon><Icon icon=ic::TRASH /></span>
                    "Delete"
                </button>
            })}
        </div>
    }
}
