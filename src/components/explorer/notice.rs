//! Toast for the current notice.
//!
//! Each notice dismisses itself after `NOTICE_TIMEOUT_MS`. Dismissal is by
//! id, so a timer started for an older notice leaves a newer one alone.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NOTICE_TIMEOUT_MS;

stylance::import_crate_style!(css, "src/components/explorer/notice.module.css");

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let notice = Memo::new(move |_| ctx.state.with(|s| s.notice().cloned()));

    Effect::new(move |_| {
        if let Some(id) = notice.with(|n| n.as_ref().map(|n| n.id)) {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                ctx.explorer().dismiss_notice(id);
            });
        }
    });

    move || {
        notice.get().map(|notice| {
            let id = notice.id;
            let class = if notice.is_error() {
                format!("{} {}", css::toast, css::toastError)
            } else {
                format!("{} {}", css::toast, css::toastInfo)
            };
            view! {
                <div class=class role="status" aria-live="polite">
                    <span class=css::message>{notice.message}</span>
                    <button
                        class=css::closeButton
                        on:click=move |_| ctx.explorer().dismiss_notice(id)
                        title="Dismiss"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            }
        })
    }
}
