//! Breadcrumb bar.
//!
//! Every ancestor segment navigates back to that folder; the last segment is
//! the current folder and is not clickable.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let crumbs = Memo::new(move |_| ctx.state.with(|s| s.view().breadcrumbs().to_vec()));

    view! {
        <nav class=css::pathbar aria-label="Breadcrumbs">
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len().saturating_sub(1);

                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let icon = if idx == 0 { ic::HOME } else { ic::FOLDER };
                        let segment = if idx == last {
                            view! { <SegmentCurrent icon=icon label=crumb.name /> }.into_any()
                        } else {
                            let path = crumb.path;
                            view! {
                                <SegmentLink
                                    icon=icon
                                    label=crumb.name
                                    on_click=move || ctx.navigate(path.clone())
                                />
                            }
                            .into_any()
                        };

                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {segment}
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Clickable path segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button class=css::segment on:click=move |_| on_click()>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) path segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button class=format!("{} {}", css::segment, css::segmentCurrent) disabled=true>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
