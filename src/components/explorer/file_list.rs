//! File list component for explorer view.
//!
//! Displays the current directory's entries. Image rows carry a lazily
//! loaded thumbnail; every row opens the context menu from its `⋮` button
//! or on right-click.

use icondata::Icon as IconData;
use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{DirectoryEntry, Position};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// Global class the lazy loader selects placeholders by.
const LAZY_IMAGE_CLASS: &str = "lazy-image";

/// Get icon for file/directory based on type
fn get_icon(entry: &DirectoryEntry) -> IconData {
    if entry.is_dir {
        ic::FOLDER
    } else if entry.is_image {
        ic::FILE_IMAGE
    } else {
        ic::FILE
    }
}

/// Rows are rebuilt when an entry changes kind, not only when its path does.
fn row_key(entry: &DirectoryEntry) -> (String, bool, bool) {
    (entry.path.clone(), entry.is_dir, entry.is_image)
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entries = Memo::new(move |_| ctx.state.with(|s| s.view().items().to_vec()));

    view! {
        <div class=css::list role="grid" aria-label="File list">
            <For
                each=move || entries.get()
                key=row_key
                children=move |entry| {
                    view! { <FileListItem entry=entry /> }
                }
            />
            <Show when=move || entries.with(|e| e.is_empty())>
                <div class=css::empty>"This folder is empty"</div>
            </Show>
        </div>
    }
}

#[component]
fn FileListItem(entry: DirectoryEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dir = entry.is_dir;
    let icon = get_icon(&entry);
    let thumbnail = entry
        .is_image
        .then(|| ctx.endpoints().thumbnail(&entry.path));

    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        format!("{} {}", css::name, css::nameFile)
    };

    let aria_label = if is_dir {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    let entry_for_activate = entry.clone();
    let handle_activate = move |_: ev::MouseEvent| {
        ctx.activate(&entry_for_activate);
    };

    let entry_for_preview = entry.clone();
    let handle_preview = move |event: ev::MouseEvent| {
        event.stop_propagation();
        ctx.explorer().open_preview(entry_for_preview.clone());
    };

    // The document click listener would close the menu straight away
    let entry_for_button = entry.clone();
    let handle_menu_button = move |event: ev::MouseEvent| {
        event.stop_propagation();
        ctx.explorer().open_context_menu(
            entry_for_button.clone(),
            Position::new(event.client_x(), event.client_y()),
        );
    };

    let entry_for_context = entry.clone();
    let handle_contextmenu = move |event: ev::MouseEvent| {
        event.prevent_default();
        ctx.explorer().open_context_menu(
            entry_for_context.clone(),
            Position::new(event.client_x(), event.client_y()),
        );
    };

    let is_active = Memo::new({
        let path = entry.path.clone();
        move |_| {
            ctx.state.with(|s| {
                s.overlay
                    .active_entry()
                    .is_some_and(|active| active.path == path)
            })
        }
    });

    view! {
        <div
            class=move || {
                if is_active.get() {
                    format!("{} {}", css::listItem, css::selected)
                } else {
                    css::listItem.to_string()
                }
            }
            on:contextmenu=handle_contextmenu
            role="row"
            aria-label=aria_label
        >
            {match thumbnail {
                Some(url) => view! {
                    <img
                        class=format!("{} {}", LAZY_IMAGE_CLASS, css::thumbnail)
                        attr:data-src=url
                        alt=entry.name.clone()
                        on:click=handle_preview
                    />
                }
                .into_any(),
                None => view! {
                    <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                }
                .into_any(),
            }}

            <button class=name_class on:click=handle_activate>
                {entry.name.clone()}
            </button>

            <button
                class=css::menuButton
                on:click=handle_menu_button
                title="More actions"
                aria-haspopup="menu"
            >
                <Icon icon=ic::MORE />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_class_matches_loader_selector() {
        assert_eq!(
            crate::config::lazy::SELECTOR,
            format!("img.{LAZY_IMAGE_CLASS}")
        );
        assert_eq!(crate::config::lazy::DEFERRED_ATTR, "data-src");
    }

    #[test]
    fn test_row_key_changes_with_entry_kind() {
        let file = DirectoryEntry::file("shots/a.nef");
        let mut image = file.clone();
        image.is_image = true;

        assert_ne!(row_key(&file), row_key(&image));
        assert_eq!(row_key(&file), row_key(&file.clone()));
    }
}
